/// One named step of a lane.
///
/// # Type Parameters
///
/// - `Input`: Data received from the previous step (or the lane entry point)
/// - `Output`: Data produced for the next step
/// - `Context`: Run-scoped dependencies shared by every step
/// - `Error`: The error type for step failures
pub trait LaneStep: Send + Sync {
    /// Data received from the previous step or lane entry point.
    type Input: Send + 'static;

    /// Data produced for the next step.
    type Output: Send + 'static;

    /// Shared context providing dependencies.
    type Context;

    /// Error type for step failures.
    type Error;

    /// Lane name used in logs, audit records and failure reports.
    fn name(&self) -> &'static str;

    /// One-line description of what the step does.
    fn description(&self) -> &'static str {
        self.name()
    }

    /// Run the step.
    ///
    /// # Errors
    ///
    /// Returns an error if the step cannot complete. The error is fatal for
    /// the whole lane.
    fn execute(&self, ctx: &Self::Context, input: Self::Input)
    -> Result<Self::Output, Self::Error>;
}
