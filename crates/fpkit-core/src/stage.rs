use crate::config::StageConfig;

/// A synchronous, composable unit of computation.
///
/// Stages are infallible: every input maps to exactly one output. Stages can
/// be composed using `.pipe()`.
pub trait Stage: Send + Sync {
    type Input;
    type Output;

    /// Process a single input.
    fn invoke(&self, input: Self::Input, config: &StageConfig) -> Self::Output;

    /// Process multiple inputs, in order.
    fn batch(&self, inputs: Vec<Self::Input>, config: &StageConfig) -> Vec<Self::Output> {
        let mut results = Vec::with_capacity(inputs.len());
        for input in inputs {
            results.push(self.invoke(input, config));
        }
        results
    }
}

/// Extension trait providing `.pipe()` for composing stages.
pub trait StageExt: Stage + Sized {
    /// Compose this stage with another, creating a sequence where the output
    /// of `self` feeds into the input of `next`.
    fn pipe<S>(self, next: S) -> StageSequence<Self, S>
    where
        S: Stage<Input = Self::Output>,
    {
        StageSequence {
            first: self,
            second: next,
        }
    }
}

impl<T: Stage + Sized> StageExt for T {}

/// A stage composed of two sequential stages.
pub struct StageSequence<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
}

impl<A, B> Stage for StageSequence<A, B>
where
    A: Stage,
    B: Stage<Input = A::Output>,
{
    type Input = A::Input;
    type Output = B::Output;

    fn invoke(&self, input: Self::Input, config: &StageConfig) -> Self::Output {
        tracing::trace!(run_id = %config.run_id, "stage sequence invoked");
        let intermediate = self.first.invoke(input, config);
        self.second.invoke(intermediate, config)
    }
}

/// A stage that passes its input through unchanged.
pub struct IdentityStage<T>(std::marker::PhantomData<fn(T) -> T>);

impl<T> IdentityStage<T> {
    pub fn new() -> Self {
        Self(std::marker::PhantomData)
    }
}

impl<T> Default for IdentityStage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stage for IdentityStage<T> {
    type Input = T;
    type Output = T;

    fn invoke(&self, input: Self::Input, _config: &StageConfig) -> Self::Output {
        crate::seq::identity(input)
    }
}
