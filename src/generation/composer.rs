//! Union and intersection type composition

use std::fmt;
use std::sync::Arc;

use crate::core::HelperConfig;
use crate::generation::utils::unique;
use crate::generation::{GenerationError, TypeDescriptor, TypeRenderer, type_render_context};

/// How composite members are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composition {
    Union,
    Intersection,
}

impl Composition {
    pub fn separator(&self) -> &'static str {
        match self {
            Composition::Union => " | ",
            Composition::Intersection => " & ",
        }
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Composition::Union => write!(f, "union"),
            Composition::Intersection => write!(f, "intersection"),
        }
    }
}

/// Builds `(A | B)` / `(A & B)` expressions from composite members.
///
/// Each member is rendered through the injected [`TypeRenderer`], so nested
/// composites and enums come out exactly as the `type` template would write
/// them. Results are deduplicated in first-seen order; only an expression with
/// more than one distinct member is parenthesized, because callers splice the
/// result straight into larger type expressions.
#[derive(Clone)]
pub struct TypeComposer {
    config: Arc<HelperConfig>,
    renderer: Arc<dyn TypeRenderer>,
}

impl fmt::Debug for TypeComposer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeComposer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl TypeComposer {
    pub fn new(config: Arc<HelperConfig>, renderer: Arc<dyn TypeRenderer>) -> Self {
        Self { config, renderer }
    }

    pub fn union(
        &self,
        properties: &[TypeDescriptor],
        parent: Option<&str>,
    ) -> Result<String, GenerationError> {
        self.compose(Composition::Union, properties, parent)
    }

    pub fn intersection(
        &self,
        properties: &[TypeDescriptor],
        parent: Option<&str>,
    ) -> Result<String, GenerationError> {
        self.compose(Composition::Intersection, properties, parent)
    }

    pub fn compose(
        &self,
        composition: Composition,
        properties: &[TypeDescriptor],
        parent: Option<&str>,
    ) -> Result<String, GenerationError> {
        let parent = parent.filter(|p| !p.is_empty());
        let rendered = properties
            .iter()
            .map(|property| {
                let context = type_render_context(&self.config, property, parent)?;
                self.renderer.render_type(&context)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let types = unique(rendered);
        tracing::trace!(
            %composition,
            members = properties.len(),
            distinct = types.len(),
            "composed type expression"
        );

        let joined = types.join(composition.separator());
        if types.len() > 1 {
            Ok(format!("({joined})"))
        } else {
            Ok(joined)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HttpClient;
    use serde_json::Value as JsonValue;
    use std::sync::Mutex;

    fn type_of(context: &JsonValue) -> Result<String, GenerationError> {
        Ok(context["type"].as_str().unwrap_or_default().to_string())
    }

    fn composer() -> TypeComposer {
        TypeComposer::new(Arc::new(HelperConfig::default()), Arc::new(type_of))
    }

    fn descriptors(types: &[&str]) -> Vec<TypeDescriptor> {
        types.iter().map(|t| TypeDescriptor::new(*t)).collect()
    }

    #[test]
    fn test_union_deduplicates_and_parenthesizes() {
        let result = composer()
            .union(&descriptors(&["string", "number", "string"]), None)
            .unwrap();
        assert_eq!(result, "(string | number)");
    }

    #[test]
    fn test_singleton_is_not_parenthesized() {
        assert_eq!(composer().union(&descriptors(&["string"]), None).unwrap(), "string");
        assert_eq!(
            composer()
                .intersection(&descriptors(&["Pet", "Pet"]), None)
                .unwrap(),
            "Pet"
        );
    }

    #[test]
    fn test_intersection() {
        let result = composer()
            .intersection(&descriptors(&["A", "B"]), None)
            .unwrap();
        assert_eq!(result, "(A & B)");
    }

    #[test]
    fn test_empty_members_render_empty() {
        assert_eq!(composer().union(&[], Some("Pet")).unwrap(), "");
    }

    #[test]
    fn test_renderer_sees_config_and_parent() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = {
            let seen = Arc::clone(&seen);
            move |context: &JsonValue| -> Result<String, GenerationError> {
                seen.lock().unwrap().push(context.clone());
                type_of(context)
            }
        };
        let config = HelperConfig::new(HttpClient::Xhr).with_use_union_types(true);
        let composer = TypeComposer::new(Arc::new(config), Arc::new(recorder));

        composer
            .union(&descriptors(&["'a'", "'b'"]), Some("Pet"))
            .unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(seen.iter().all(|context| context["parent"] == "Pet"));
        assert!(seen.iter().all(|context| context["httpClient"] == "xhr"));
        assert!(seen.iter().all(|context| context["useUnionTypes"] == true));
    }

    #[test]
    fn test_renderer_failure_propagates() {
        let failing = |_: &JsonValue| -> Result<String, GenerationError> {
            Err(GenerationError::TypeRender("boom".to_string()))
        };
        let composer = TypeComposer::new(Arc::new(HelperConfig::default()), Arc::new(failing));

        let result = composer.union(&descriptors(&["string"]), None);
        assert!(matches!(result, Err(GenerationError::TypeRender(_))));
    }
}
