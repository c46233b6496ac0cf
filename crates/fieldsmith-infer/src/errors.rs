use thiserror::Error;

#[derive(Debug, Error)]
pub enum InferError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid recording: {0}")]
    InvalidRecording(String),
    #[error("invalid schema: {0}")]
    InvalidSchema(String),
}
