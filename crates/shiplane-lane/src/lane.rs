use std::fmt::Debug;
use std::marker::PhantomData;
use std::time::Instant;

use tracing::{debug, info};

use crate::audit::{LaneAuditLog, StepStatus};
use crate::erased::{ErasedStep, ErasedValue};
use crate::error::LaneError;

/// A built lane ready for execution.
///
/// Steps run strictly in order on the calling thread. The first failure
/// aborts the lane; later steps are not run.
pub struct Lane<Input, Output, Ctx, Err> {
    steps: Vec<Box<dyn ErasedStep<Ctx, Err>>>,
    _phantom: PhantomData<(Input, Output)>,
}

impl<Input, Output, Ctx, Err> Lane<Input, Output, Ctx, Err>
where
    Input: Send + 'static,
    Output: Send + 'static,
    Err: Debug,
{
    pub(crate) fn from_steps(steps: Vec<Box<dyn ErasedStep<Ctx, Err>>>) -> Self {
        Self {
            steps,
            _phantom: PhantomData,
        }
    }

    /// Step names in execution order.
    #[must_use]
    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|step| step.info().name).collect()
    }

    /// Run the lane, returning the last step's output.
    ///
    /// # Errors
    ///
    /// Returns [`LaneError::StepFailed`] with the first failing step.
    pub fn execute(&self, ctx: &Ctx, input: Input) -> Result<Output, LaneError<Err>> {
        let (result, _audit_log) = self.execute_internal(ctx, input);
        result
    }

    /// Run the lane and also return the audit log.
    pub fn execute_with_audit(
        &self,
        ctx: &Ctx,
        input: Input,
    ) -> (Result<Output, LaneError<Err>>, LaneAuditLog) {
        self.execute_internal(ctx, input)
    }

    fn execute_internal(
        &self,
        ctx: &Ctx,
        input: Input,
    ) -> (Result<Output, LaneError<Err>>, LaneAuditLog) {
        let mut audit_log = LaneAuditLog::new();
        let mut current: ErasedValue = Box::new(input);

        for (index, step) in self.steps.iter().enumerate() {
            let info = step.info();
            info!(lane = info.name, "# {}", info.description);
            let started = Instant::now();

            match step.run(ctx, current) {
                Ok(output) => {
                    audit_log.push(info.name, StepStatus::Executed, Some(started.elapsed()));
                    debug!(lane = info.name, "lane finished");
                    current = output;
                }
                Err(error) => {
                    audit_log.push(info.name, StepStatus::Failed, Some(started.elapsed()));
                    for skipped in &self.steps[index + 1..] {
                        audit_log.push(skipped.info().name, StepStatus::NotRun, None);
                    }
                    let lane_error = LaneError::StepFailed {
                        step: info.name.to_string(),
                        source: error,
                    };
                    return (Err(lane_error), audit_log);
                }
            }
        }

        let Ok(output) = current.downcast::<Output>() else {
            unreachable!("last lane step produced a value of the wrong type");
        };
        (Ok(*output), audit_log)
    }
}
