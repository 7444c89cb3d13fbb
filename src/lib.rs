//! tsgen template helpers
//!
//! String synthesis behind the templates of a TypeScript client generator:
//! composing union/intersection types, rendering enums inline or by
//! reference, escaping descriptions for comments and template literals, and
//! building the generic signature of generated request stubs. The helpers are
//! bound into [`tera`] through a [`HelperRegistry`] built once per run from a
//! read-only [`HelperConfig`].
#![deny(unsafe_code)]

pub mod core;
pub mod generation;
pub mod infrastructure;

// Re-exports
pub use crate::core::{Error, HelperConfig, HttpClient, Result};
pub use generation::{
    Branches, Continuations, EnumMember, GenerationError, Parameter, ParameterLocation,
    TypeComposer, TypeDescriptor, TypeRenderer,
};
pub use infrastructure::{HelperRegistry, TemplateEngine, TemplateEngineBuilder};
