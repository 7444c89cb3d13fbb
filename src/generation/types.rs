//! Schema-side types the helpers consume

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::fmt;

/// One member of a composite (union/intersection) type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Rendered or renderable type reference
    #[serde(rename = "type", default)]
    pub type_ref: String,

    /// Enclosing type name, used for qualified enum references
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    /// Every other attribute the schema model attached
    #[serde(flatten)]
    pub attributes: Map<String, JsonValue>,
}

impl TypeDescriptor {
    pub fn new(type_ref: impl Into<String>) -> Self {
        Self {
            type_ref: type_ref.into(),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: JsonValue) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }
}

/// One constant of an enumeration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumMember {
    /// Literal as it appears in generated source, e.g. `'active'` or `1`
    #[serde(deserialize_with = "literal_text")]
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl EnumMember {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            name: None,
            description: None,
        }
    }
}

/// Accepts a pre-rendered string literal or any other JSON scalar
fn literal_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match JsonValue::deserialize(deserializer)? {
        JsonValue::String(s) => s,
        other => other.to_string(),
    })
}

/// Where an operation parameter travels in the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterLocation {
    Body,
    Query,
    Path,
    Header,
    Cookie,
    FormData,
    #[serde(other)]
    Other,
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParameterLocation::Body => "body",
            ParameterLocation::Query => "query",
            ParameterLocation::Path => "path",
            ParameterLocation::Header => "header",
            ParameterLocation::Cookie => "cookie",
            ParameterLocation::FormData => "formData",
            ParameterLocation::Other => "other",
        };
        f.write_str(name)
    }
}

/// Operation parameter with its already rendered type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,

    #[serde(rename = "in", alias = "location")]
    pub location: ParameterLocation,

    #[serde(default)]
    pub is_required: bool,

    #[serde(rename = "type")]
    pub type_ref: String,
}

impl Parameter {
    pub fn new(
        name: impl Into<String>,
        location: ParameterLocation,
        is_required: bool,
        type_ref: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            location,
            is_required,
            type_ref: type_ref.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_descriptor_keeps_extra_attributes() {
        let descriptor: TypeDescriptor = serde_json::from_value(json!({
            "type": "string",
            "export": "generic",
            "isNullable": true
        }))
        .unwrap();

        assert_eq!(descriptor.type_ref, "string");
        assert!(descriptor.parent.is_none());
        assert_eq!(descriptor.attributes["export"], "generic");
        assert_eq!(descriptor.attributes["isNullable"], true);
    }

    #[test]
    fn test_enum_member_accepts_numeric_literals() {
        let members: Vec<EnumMember> =
            serde_json::from_value(json!([{ "value": "'a'" }, { "value": 2 }])).unwrap();
        assert_eq!(members[0].value, "'a'");
        assert_eq!(members[1].value, "2");
    }

    #[test]
    fn test_parameter_from_schema_model() {
        let parameter: Parameter = serde_json::from_value(json!({
            "name": "limit",
            "in": "query",
            "isRequired": false,
            "type": "number"
        }))
        .unwrap();

        assert_eq!(parameter, Parameter::new("limit", ParameterLocation::Query, false, "number"));
    }

    #[test]
    fn test_parameter_location_unknown_falls_back() {
        let location: ParameterLocation = serde_json::from_value(json!("matrix")).unwrap();
        assert_eq!(location, ParameterLocation::Other);

        let location: ParameterLocation = serde_json::from_value(json!("formData")).unwrap();
        assert_eq!(location.to_string(), "formData");
    }
}
