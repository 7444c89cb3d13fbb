//! Render context handed to the type renderer for one composite member

use serde_json::{Map, Value as JsonValue};

use crate::core::HelperConfig;
use crate::generation::{GenerationError, TypeDescriptor};

/// Builds the context for rendering `descriptor` as part of a composite.
///
/// Layering, last one wins: configuration keys, then the member's own
/// attributes, then `parent`. Without a parent the key is removed so a
/// stale parent on the member cannot leak into the rendered reference.
pub fn type_render_context(
    config: &HelperConfig,
    descriptor: &TypeDescriptor,
    parent: Option<&str>,
) -> Result<JsonValue, GenerationError> {
    let mut context = into_object(serde_json::to_value(config)?);
    context.extend(into_object(serde_json::to_value(descriptor)?));

    match parent {
        Some(parent) => {
            context.insert("parent".to_string(), JsonValue::String(parent.to_string()));
        }
        None => {
            context.remove("parent");
        }
    }

    Ok(JsonValue::Object(context))
}

fn into_object(value: JsonValue) -> Map<String, JsonValue> {
    match value {
        JsonValue::Object(map) => map,
        _ => Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HttpClient;
    use serde_json::json;

    #[test]
    fn test_context_layers_config_member_parent() {
        let config = HelperConfig::new(HttpClient::Axios).with_use_union_types(true);
        let descriptor = TypeDescriptor::new("Pet")
            .with_attribute("useUnionTypes", json!(false))
            .with_attribute("export", json!("reference"));

        let context = type_render_context(&config, &descriptor, Some("Owner")).unwrap();

        assert_eq!(
            context,
            json!({
                "httpClient": "axios",
                "useOptions": false,
                "useUnionTypes": false,
                "type": "Pet",
                "export": "reference",
                "parent": "Owner"
            })
        );
    }

    #[test]
    fn test_context_without_parent_drops_member_parent() {
        let mut descriptor = TypeDescriptor::new("string");
        descriptor.parent = Some("Stale".to_string());

        let context = type_render_context(&HelperConfig::default(), &descriptor, None).unwrap();

        assert!(context.get("parent").is_none());
        assert_eq!(context["type"], "string");
    }
}
