use fpkit_core::config::StageConfig;
use fpkit_core::stage::Stage;

/// A stage that feeds one input to two branches and returns both results.
///
/// Both branches receive a clone of the same input. `branch_a` runs first.
pub struct FanOut<A, B> {
    pub branch_a: A,
    pub branch_b: B,
}

impl<A, B> FanOut<A, B> {
    pub fn new(branch_a: A, branch_b: B) -> Self {
        Self { branch_a, branch_b }
    }
}

impl<A, B, I> Stage for FanOut<A, B>
where
    I: Clone,
    A: Stage<Input = I>,
    B: Stage<Input = I>,
{
    type Input = I;
    type Output = (A::Output, B::Output);

    fn invoke(&self, input: Self::Input, config: &StageConfig) -> Self::Output {
        let input_a = input.clone();
        let input_b = input;

        let result_a = self.branch_a.invoke(input_a, config);
        let result_b = self.branch_b.invoke(input_b, config);
        (result_a, result_b)
    }
}
