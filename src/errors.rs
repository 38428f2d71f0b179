use thiserror::Error;

/// Error type that captures tracker, storage, and collaborator failures.
#[derive(Debug, Error)]
pub enum ArtfinError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Invalid reference: {0}")]
    InvalidRef(String),
    #[error("Insights error: {0}")]
    Insights(String),
}
