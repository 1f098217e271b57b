//! Error types for the nodewind data model.

use thiserror::Error;

/// Result type alias for document operations.
pub type Result<T> = std::result::Result<T, DocumentError>;

/// Errors raised while loading a host snapshot.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The snapshot is not valid JSON or does not match the node schema.
    #[error("Invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The snapshot parsed but is structurally unusable.
    #[error("Invalid document structure: {0}")]
    InvalidDocument(String),
}
