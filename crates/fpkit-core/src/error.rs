use thiserror::Error;

/// Top-level error type for fpkit.
///
/// The sequence operations themselves never fail; these variants cover
/// pattern predicates and configuration handling only.
#[derive(Debug, Error)]
pub enum FpError {
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FpError>;
