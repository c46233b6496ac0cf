use thiserror::Error;

/// Errors emitted at the I/O edges of the generation crate.
///
/// Synthesis itself never fails: missing bounds and unresolvable lookups
/// degrade to documented defaults.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
