//! Port interfaces for the generation domain

use serde_json::Value as JsonValue;

use crate::generation::GenerationError;

/// Renders a single composite member to its type expression.
///
/// The composite helpers call back through this port for every member, so
/// the engine's own `type` template (or a stub in tests) decides how a member
/// looks. The argument is the merged render context: configuration keys, the
/// member's attributes, and the enclosing `parent` name when there is one.
pub trait TypeRenderer: Send + Sync {
    fn render_type(&self, context: &JsonValue) -> Result<String, GenerationError>;
}

impl<F> TypeRenderer for F
where
    F: Fn(&JsonValue) -> Result<String, GenerationError> + Send + Sync,
{
    fn render_type(&self, context: &JsonValue) -> Result<String, GenerationError> {
        self(context)
    }
}
