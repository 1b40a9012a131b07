use std::time::Duration;

/// Outcome of one step of a lane run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StepStatus {
    Executed,
    /// The step returned an error and aborted the lane.
    Failed,
    /// An earlier step failed before this one was reached.
    NotRun,
}

impl StepStatus {
    fn marker(self) -> &'static str {
        match self {
            Self::Executed => "✓",
            Self::Failed => "✗",
            Self::NotRun => "-",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub name: &'static str,
    pub status: StepStatus,
    /// Wall time spent in the step, `None` when it never ran.
    pub elapsed: Option<Duration>,
}

/// Per-step outcome of a lane run, in execution order.
#[derive(Debug, Default)]
pub struct LaneAuditLog {
    records: Vec<StepRecord>,
}

impl LaneAuditLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(
        &mut self,
        name: &'static str,
        status: StepStatus,
        elapsed: Option<Duration>,
    ) {
        self.records.push(StepRecord {
            name,
            status,
            elapsed,
        });
    }

    #[must_use]
    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    #[must_use]
    pub fn failed_step(&self) -> Option<&'static str> {
        self.records
            .iter()
            .find(|record| record.status == StepStatus::Failed)
            .map(|record| record.name)
    }

    /// Total time spent in steps that ran.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.records.iter().filter_map(|record| record.elapsed).sum()
    }

    /// One line per step, e.g. `✓ ready`, `✗ build`, `- upload`.
    #[must_use]
    pub fn summary(&self) -> String {
        self.records
            .iter()
            .map(|record| format!("{} {}", record.status.marker(), record.name))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
