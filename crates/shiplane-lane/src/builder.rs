use std::fmt::Debug;
use std::marker::PhantomData;

use crate::erased::ErasedStep;
use crate::lane::Lane;
use crate::step::LaneStep;

/// Marker type for a builder with no steps.
pub struct Empty;

/// Marker type for a builder with at least one step.
pub struct HasSteps<LastOutput>(PhantomData<LastOutput>);

/// Type-state builder for lanes.
///
/// Each step's input type must match the previous step's output type, and a
/// lane cannot be built without at least one step:
///
/// ```compile_fail
/// use shiplane_lane::{LaneBuilder, LaneStep};
///
/// struct Version;
/// impl LaneStep for Version {
///     type Input = ();
///     type Output = String;
///     type Context = ();
///     type Error = ();
///     fn name(&self) -> &'static str { "version" }
///     fn execute(&self, _: &(), _: ()) -> Result<String, ()> {
///         Ok("1.0.1".to_string())
///     }
/// }
///
/// struct Build;
/// impl LaneStep for Build {
///     type Input = u32;
///     type Output = u32;
///     type Context = ();
///     type Error = ();
///     fn name(&self) -> &'static str { "build" }
///     fn execute(&self, _: &(), input: u32) -> Result<u32, ()> {
///         Ok(input)
///     }
/// }
///
/// // Build expects u32 but Version outputs String
/// let lane = LaneBuilder::new()
///     .first_step(Version)
///     .then(Build)
///     .build();
/// ```
///
/// ```compile_fail
/// use shiplane_lane::LaneBuilder;
///
/// let lane = LaneBuilder::<(), (), (), ()>::new().build();
/// ```
pub struct LaneBuilder<Input, Output, Ctx, Err, State> {
    steps: Vec<Box<dyn ErasedStep<Ctx, Err>>>,
    _phantom: PhantomData<(Input, Output, State)>,
}

impl<Ctx, Err> LaneBuilder<(), (), Ctx, Err, Empty> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            _phantom: PhantomData,
        }
    }

    /// Add the first step, fixing the lane's input type.
    #[must_use]
    pub fn first_step<S>(
        self,
        step: S,
    ) -> LaneBuilder<S::Input, S::Output, Ctx, Err, HasSteps<S::Output>>
    where
        S: LaneStep<Context = Ctx, Error = Err> + 'static,
    {
        self.push(step)
    }
}

impl<Input, Output, Ctx, Err, State> LaneBuilder<Input, Output, Ctx, Err, State> {
    fn push<S, NewInput, Next>(
        mut self,
        step: S,
    ) -> LaneBuilder<NewInput, S::Output, Ctx, Err, Next>
    where
        S: LaneStep<Context = Ctx, Error = Err> + 'static,
    {
        self.steps.push(Box::new(step));
        LaneBuilder {
            steps: self.steps,
            _phantom: PhantomData,
        }
    }
}

impl<Ctx, Err> Default for LaneBuilder<(), (), Ctx, Err, Empty> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Input, CurrentOutput, Ctx, Err>
    LaneBuilder<Input, CurrentOutput, Ctx, Err, HasSteps<CurrentOutput>>
{
    /// Append a step whose input is the current output.
    #[must_use]
    pub fn then<S>(self, step: S) -> LaneBuilder<Input, S::Output, Ctx, Err, HasSteps<S::Output>>
    where
        S: LaneStep<Input = CurrentOutput, Context = Ctx, Error = Err> + 'static,
    {
        self.push(step)
    }

    #[must_use]
    pub fn build(self) -> Lane<Input, CurrentOutput, Ctx, Err>
    where
        Input: Send + 'static,
        CurrentOutput: Send + 'static,
        Err: Debug,
    {
        Lane::from_steps(self.steps)
    }
}
