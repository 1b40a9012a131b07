use std::any::Any;

use crate::step::LaneStep;

pub(crate) type ErasedValue = Box<dyn Any + Send>;

/// Name and description of a step, captured once when the lane is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StepInfo {
    pub(crate) name: &'static str,
    pub(crate) description: &'static str,
}

/// A lane step with its data types hidden behind `Any`.
pub(crate) trait ErasedStep<Ctx, Err>: Send + Sync {
    fn info(&self) -> StepInfo;

    fn run(&self, ctx: &Ctx, input: ErasedValue) -> Result<ErasedValue, Err>;
}

impl<S> ErasedStep<S::Context, S::Error> for S
where
    S: LaneStep,
{
    fn info(&self) -> StepInfo {
        StepInfo {
            name: self.name(),
            description: self.description(),
        }
    }

    fn run(&self, ctx: &S::Context, input: ErasedValue) -> Result<ErasedValue, S::Error> {
        let Ok(input) = input.downcast::<S::Input>() else {
            unreachable!("lane step '{}' received input of the wrong type", self.name());
        };
        let output = self.execute(ctx, *input)?;
        Ok(Box::new(output))
    }
}
