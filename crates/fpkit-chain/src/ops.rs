//! Stages applying the sequence operations to a whole [`Sequence`].

use std::marker::PhantomData;

use fpkit_core::config::StageConfig;
use fpkit_core::seq::{self, Sequence};
use fpkit_core::stage::Stage;

/// Keeps the elements of the input sequence that satisfy a predicate.
pub struct FilterStage<T, P> {
    pred: P,
    _marker: PhantomData<fn(T) -> T>,
}

impl<T, P> FilterStage<T, P>
where
    P: Fn(&T) -> bool,
{
    pub fn new(pred: P) -> Self {
        Self {
            pred,
            _marker: PhantomData,
        }
    }
}

impl<T, P> Stage for FilterStage<T, P>
where
    P: Fn(&T) -> bool + Send + Sync,
{
    type Input = Sequence<T>;
    type Output = Sequence<T>;

    fn invoke(&self, input: Self::Input, config: &StageConfig) -> Self::Output {
        let before = input.len();
        let kept: Sequence<T> = input.into_iter().filter(|item| (self.pred)(item)).collect();
        tracing::debug!(run_id = %config.run_id, before, after = kept.len(), "filter stage");
        kept
    }
}

/// Transforms every element of the input sequence.
pub struct MapStage<T, U, F> {
    f: F,
    _marker: PhantomData<fn(T) -> U>,
}

impl<T, U, F> MapStage<T, U, F>
where
    F: Fn(&T) -> U,
{
    pub fn new(f: F) -> Self {
        Self {
            f,
            _marker: PhantomData,
        }
    }
}

impl<T, U, F> Stage for MapStage<T, U, F>
where
    F: Fn(&T) -> U + Send + Sync,
{
    type Input = Sequence<T>;
    type Output = Sequence<U>;

    fn invoke(&self, input: Self::Input, config: &StageConfig) -> Self::Output {
        tracing::debug!(run_id = %config.run_id, len = input.len(), "map stage");
        seq::map(input.as_slice(), &self.f)
    }
}

/// Folds the input sequence into a single value.
///
/// Each invocation starts from a fresh clone of `initial`.
pub struct ReduceStage<T, A, F> {
    initial: A,
    combine: F,
    _marker: PhantomData<fn(T)>,
}

impl<T, A, F> ReduceStage<T, A, F>
where
    A: Clone,
    F: Fn(A, &T) -> A,
{
    pub fn new(initial: A, combine: F) -> Self {
        Self {
            initial,
            combine,
            _marker: PhantomData,
        }
    }
}

impl<T, A, F> Stage for ReduceStage<T, A, F>
where
    A: Clone + Send + Sync,
    F: Fn(A, &T) -> A + Send + Sync,
{
    type Input = Sequence<T>;
    type Output = A;

    fn invoke(&self, input: Self::Input, config: &StageConfig) -> Self::Output {
        tracing::debug!(run_id = %config.run_id, len = input.len(), "reduce stage");
        seq::reduce(input.as_slice(), self.initial.clone(), &self.combine)
    }
}
