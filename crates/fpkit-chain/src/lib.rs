pub mod fanout;
pub mod lambda;
pub mod ops;
pub mod optional;

pub mod prelude {
    pub use crate::fanout::FanOut;
    pub use crate::lambda::StageLambda;
    pub use crate::ops::{FilterStage, MapStage, ReduceStage};
    pub use crate::optional::ChainOptionalStage;
}
