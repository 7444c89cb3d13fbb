//! Error handling for the tsgen helper library.
//!
//! This module defines the main error type `Error` used at the crate
//! boundary, along with a convenient `Result` type alias. It uses `thiserror`
//! and implements conversions from the error types of the crates we touch.
//!
//! # Examples
//!
//! ```
//! use tsgen_helpers::core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     Err(Error::config("useUnionTypes must be a boolean"))
//! }
//!
//! assert!(might_fail().is_err());
//! ```

use thiserror::Error;

use crate::generation::GenerationError;

/// Result type for tsgen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for tsgen operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Template engine error
    #[error("Template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// Helper invocation error
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::Config(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Config(s)
    }
}
