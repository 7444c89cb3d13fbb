//! tsgen core
//!
//! Crate-wide error type and the configuration snapshot every helper reads.

pub mod config;
pub mod error;

pub use config::{HelperConfig, HttpClient};
pub use error::{Error, Result};
