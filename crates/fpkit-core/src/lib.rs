pub mod config;
pub mod error;
pub mod optional;
pub mod predicate;
pub mod seq;
pub mod stage;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::StageConfig;
    pub use crate::error::{FpError, Result};
    pub use crate::optional::{add_optionals, chain_optional};
    pub use crate::seq::{filter, identity, identity_any, map, reduce, Sequence};
    pub use crate::stage::{IdentityStage, Stage, StageExt};
}
