//! Error types for the generation domain

use thiserror::Error;

/// Errors that can occur while a helper synthesizes text
#[derive(Error, Debug)]
pub enum GenerationError {
    /// A template invoked a helper with the wrong argument shape
    #[error("Invalid arguments for helper '{helper}': {reason}")]
    InvalidArgument { helper: String, reason: String },

    #[error("Type render error: {0}")]
    TypeRender(String),

    #[error("Template not registered: {0}")]
    MissingTemplate(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GenerationError {
    pub fn invalid_argument(helper: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            helper: helper.into(),
            reason: reason.into(),
        }
    }
}
