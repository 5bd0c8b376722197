use std::sync::Arc;

use fpkit_core::config::StageConfig;
use fpkit_core::stage::Stage;

type StageFn<I, O> = dyn Fn(I, &StageConfig) -> O + Send + Sync;

/// A stage that wraps a closure.
pub struct StageLambda<I, O> {
    func: Arc<StageFn<I, O>>,
}

impl<I, O> StageLambda<I, O> {
    /// Create a new `StageLambda` from a function.
    ///
    /// The function receives the input and a reference to the `StageConfig`.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(I, &StageConfig) -> O + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
        }
    }
}

impl<I, O> Clone for StageLambda<I, O> {
    fn clone(&self) -> Self {
        Self {
            func: Arc::clone(&self.func),
        }
    }
}

impl<I, O> Stage for StageLambda<I, O> {
    type Input = I;
    type Output = O;

    fn invoke(&self, input: Self::Input, config: &StageConfig) -> Self::Output {
        (self.func)(input, config)
    }
}
