use std::marker::PhantomData;

use fpkit_core::config::StageConfig;
use fpkit_core::optional::chain_optional;
use fpkit_core::stage::Stage;

/// Combines a pair of optional values, yielding `None` if either is absent.
///
/// Pairs naturally with [`crate::fanout::FanOut`] over two optional-valued
/// lookups.
pub struct ChainOptionalStage<X, Y, Z, F> {
    combine: F,
    _marker: PhantomData<fn(X, Y) -> Z>,
}

impl<X, Y, Z, F> ChainOptionalStage<X, Y, Z, F>
where
    F: Fn(X, Y) -> Z,
{
    pub fn new(combine: F) -> Self {
        Self {
            combine,
            _marker: PhantomData,
        }
    }
}

impl<X, Y, Z, F> Stage for ChainOptionalStage<X, Y, Z, F>
where
    F: Fn(X, Y) -> Z + Send + Sync,
{
    type Input = (Option<X>, Option<Y>);
    type Output = Option<Z>;

    fn invoke(&self, (a, b): Self::Input, config: &StageConfig) -> Self::Output {
        let result = chain_optional(a, b, &self.combine);
        if result.is_none() {
            tracing::trace!(run_id = %config.run_id, "optional input absent");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fanout::FanOut;
    use crate::lambda::StageLambda;
    use fpkit_core::stage::StageExt;

    #[test]
    fn both_present() {
        let add = ChainOptionalStage::new(|x: i32, y: i32| x + y);
        let config = StageConfig::default();
        assert_eq!(add.invoke((Some(3), Some(4)), &config), Some(7));
    }

    #[test]
    fn either_absent() {
        let add = ChainOptionalStage::new(|x: i32, y: i32| x + y);
        let config = StageConfig::default();
        assert_eq!(add.invoke((None, Some(2)), &config), None);
        assert_eq!(add.invoke((Some(2), None), &config), None);
        assert_eq!(add.invoke((None, None), &config), None);
    }

    #[test]
    fn fanout_lookups_then_combine() {
        let parse = StageLambda::new(|s: String, _: &StageConfig| s.parse::<i32>().ok());
        let length = StageLambda::new(|s: String, _: &StageConfig| {
            (!s.is_empty()).then(|| s.len() as i32)
        });
        let chain = FanOut::new(parse, length)
            .pipe(ChainOptionalStage::new(|n: i32, len: i32| n * len));

        let config = StageConfig::default();
        assert_eq!(chain.invoke("12".into(), &config), Some(24));
        assert_eq!(chain.invoke("abc".into(), &config), None);
    }
}
