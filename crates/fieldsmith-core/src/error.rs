use thiserror::Error;

/// Core error type shared across fieldsmith crates.
#[derive(Debug, Error)]
pub enum Error {
    /// No field with the given id exists in the working set.
    #[error("unknown field id: {0}")]
    UnknownField(String),
    /// A field-config document is structurally invalid.
    #[error("invalid fields document: {0}")]
    InvalidDocument(String),
    /// The JSON Schema for field-config documents could not be compiled.
    #[error("schema error: {0}")]
    Schema(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results returned by fieldsmith crates.
pub type Result<T> = std::result::Result<T, Error>;
