//! Error types for code generation.

use nodewind_core::DocumentError;
use thiserror::Error;

/// Result type alias for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur during code generation.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// Node type has no classification rule and placeholders are disabled.
    #[error("Unsupported node type: {kind} ('{name}')")]
    UnsupportedNodeKind { kind: String, name: String },

    /// The host failed to resolve an instance's backing definition.
    #[error("Failed to resolve main component of '{node}': {message}")]
    DefinitionLookup { node: String, message: String },

    /// A child subtree failed; no partial result is kept.
    #[error("Child {index} ('{name}') failed: {source}")]
    ChildConversion {
        index: usize,
        name: String,
        #[source]
        source: Box<CodegenError>,
    },

    /// Style configuration is inconsistent.
    #[error("Invalid style configuration: {0}")]
    InvalidConfig(String),

    /// Template rendering error.
    #[error("Template error: {0}")]
    TemplateError(#[from] handlebars::RenderError),

    /// Invalid template.
    #[error("Invalid template: {0}")]
    InvalidTemplate(#[from] handlebars::TemplateError),

    /// Host snapshot could not be loaded.
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CodegenError {
    /// The innermost error, skipping child-conversion wrappers.
    pub fn root_cause(&self) -> &CodegenError {
        match self {
            CodegenError::ChildConversion { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
