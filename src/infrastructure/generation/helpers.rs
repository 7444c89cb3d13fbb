//! Binding of the generation helpers into tera
//!
//! Branching helpers are registered as testers, so the `{% if %}` and
//! `{% else %}` arms of the template are the two continuations:
//!
//! ```text
//! {% if description is ifdef(deprecated) %}/** {{ description | escapeComment }} */{% endif %}
//! {% if property is ifdef("description", "deprecated") %}...{% endif %}
//! {% if httpClient is equals("angular") %}...{% else %}...{% endif %}
//! {% if httpClient is ne("angular") %}...{% endif %}
//! {% if name is containsSpaces %}'{{ name }}'{% else %}{{ name }}{% endif %}
//! ```
//!
//! tera reads a tester name starting with `not` as a negation, so `notEquals`
//! is bound as `ne`; `is not equals(...)` is the same test.
//!
//! tera resolves tester arguments before the tester runs, so a variable that
//! may be missing cannot be passed to `ifdef`. When the tested value is an
//! object, the arguments name its fields instead, and a missing field is
//! falsy.
//!
//! Everything that produces text is a filter:
//!
//! ```text
//! {{ properties | union(parent=name) }}
//! {{ enum | enumerator(parent=parent, name=name) }}
//! {{ parameters | toServerParameters }}
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use tera::{Filter, Tera};

use crate::core::HelperConfig;
use crate::generation::{
    Composition, EnumMember, GenerationError, Parameter, Truth, TypeComposer, TypeDescriptor,
    TypeRenderer, contains_spaces, equals, escape_comment, escape_description, ifdef,
    not_equals, render_enum, to_camel_case, to_lower_case, to_server_parameters,
};

/// Helpers registered as tera testers
pub const TESTERS: [&str; 4] = ["ifdef", "equals", "ne", "containsSpaces"];

/// Helpers registered as tera filters
pub const FILTERS: [&str; 8] = [
    "union",
    "intersection",
    "enumerator",
    "escapeComment",
    "escapeDescription",
    "camelCase",
    "lowerCase",
    "toServerParameters",
];

/// The immutable table of helpers for one generation run.
///
/// Built once from the configuration snapshot and the type renderer, then
/// bound into a [`Tera`] instance with [`HelperRegistry::register`].
#[derive(Debug, Clone)]
pub struct HelperRegistry {
    config: Arc<HelperConfig>,
    composer: TypeComposer,
}

impl HelperRegistry {
    pub fn new(config: HelperConfig, renderer: Arc<dyn TypeRenderer>) -> Self {
        let config = Arc::new(config);
        let composer = TypeComposer::new(Arc::clone(&config), renderer);
        Self { config, composer }
    }

    pub fn config(&self) -> &HelperConfig {
        &self.config
    }

    pub fn composer(&self) -> &TypeComposer {
        &self.composer
    }

    /// Every helper name a template may use
    pub fn names() -> impl Iterator<Item = &'static str> {
        TESTERS.into_iter().chain(FILTERS)
    }

    /// Bind every helper into `tera`
    pub fn register(&self, tera: &mut Tera) {
        tera.register_tester("ifdef", ifdef_test);
        tera.register_tester("equals", equals_test);
        tera.register_tester("ne", not_equals_test);
        tera.register_tester("containsSpaces", contains_spaces_test);

        tera.register_filter(
            "union",
            CompositeFilter::new(self.composer.clone(), Composition::Union),
        );
        tera.register_filter(
            "intersection",
            CompositeFilter::new(self.composer.clone(), Composition::Intersection),
        );
        tera.register_filter(
            "enumerator",
            EnumFilter {
                use_union_types: self.config.use_union_types,
            },
        );
        tera.register_filter("escapeComment", escape_comment_filter);
        tera.register_filter("escapeDescription", escape_description_filter);
        tera.register_filter("camelCase", camel_case_filter);
        tera.register_filter("lowerCase", lower_case_filter);
        tera.register_filter("toServerParameters", to_server_parameters_filter);

        tracing::debug!(
            testers = ?TESTERS,
            filters = ?FILTERS,
            use_union_types = self.config.use_union_types,
            http_client = %self.config.http_client,
            "registered template helpers"
        );
    }
}

fn to_tera_error(err: GenerationError) -> tera::Error {
    tera::Error::msg(err.to_string())
}

fn collection<T: DeserializeOwned>(helper: &str, value: &JsonValue) -> tera::Result<Vec<T>> {
    match value {
        JsonValue::Array(_) => serde_json::from_value(value.clone())
            .map_err(|e| to_tera_error(GenerationError::invalid_argument(helper, e.to_string()))),
        other => Err(to_tera_error(GenerationError::invalid_argument(
            helper,
            format!("expected an array, got {other}"),
        ))),
    }
}

fn text<'a>(helper: &str, value: &'a JsonValue) -> tera::Result<&'a str> {
    value.as_str().ok_or_else(|| {
        to_tera_error(GenerationError::invalid_argument(
            helper,
            format!("expected a string, got {value}"),
        ))
    })
}

/// Optional string argument; `null` and a missing key both mean absent
fn optional_arg<'a>(
    helper: &str,
    args: &'a HashMap<String, JsonValue>,
    key: &str,
) -> tera::Result<Option<&'a str>> {
    match args.get(key) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(to_tera_error(GenerationError::invalid_argument(
            helper,
            format!("argument '{key}' must be a string, got {other}"),
        ))),
    }
}

fn single_arg<'a>(helper: &str, args: &'a [JsonValue]) -> tera::Result<&'a JsonValue> {
    match args {
        [arg] => Ok(arg),
        _ => Err(to_tera_error(GenerationError::invalid_argument(
            helper,
            format!("expected exactly one argument, got {}", args.len()),
        ))),
    }
}

static NULL: JsonValue = JsonValue::Null;

fn ifdef_test(value: Option<&JsonValue>, args: &[JsonValue]) -> tera::Result<bool> {
    if let Some(JsonValue::Object(fields)) = value {
        if !args.is_empty() {
            let mut values = Vec::with_capacity(args.len());
            for key in args {
                values.push(fields.get(text("ifdef", key)?).unwrap_or(&NULL));
            }
            return Ok(ifdef(&values, &Truth));
        }
    }

    let values: Vec<&JsonValue> = value.into_iter().chain(args).collect();
    Ok(ifdef(&values, &Truth))
}

fn equals_test(value: Option<&JsonValue>, args: &[JsonValue]) -> tera::Result<bool> {
    let other = single_arg("equals", args)?;
    Ok(equals(value.unwrap_or(&JsonValue::Null), other, &Truth))
}

fn not_equals_test(value: Option<&JsonValue>, args: &[JsonValue]) -> tera::Result<bool> {
    let other = single_arg("ne", args)?;
    Ok(not_equals(value.unwrap_or(&JsonValue::Null), other, &Truth))
}

fn contains_spaces_test(value: Option<&JsonValue>, _args: &[JsonValue]) -> tera::Result<bool> {
    Ok(match value {
        None => false,
        Some(JsonValue::String(s)) => contains_spaces(s, &Truth),
        Some(other) => contains_spaces(&other.to_string(), &Truth),
    })
}

/// `union` / `intersection`
struct CompositeFilter {
    composer: TypeComposer,
    composition: Composition,
}

impl CompositeFilter {
    fn new(composer: TypeComposer, composition: Composition) -> Self {
        Self {
            composer,
            composition,
        }
    }
}

impl Filter for CompositeFilter {
    fn filter(
        &self,
        value: &JsonValue,
        args: &HashMap<String, JsonValue>,
    ) -> tera::Result<JsonValue> {
        let helper = self.composition.to_string();
        let properties: Vec<TypeDescriptor> = collection(&helper, value)?;
        let parent = optional_arg(&helper, args, "parent")?;
        let composed = self
            .composer
            .compose(self.composition, &properties, parent)
            .map_err(to_tera_error)?;
        Ok(JsonValue::String(composed))
    }
}

struct EnumFilter {
    use_union_types: bool,
}

impl Filter for EnumFilter {
    fn filter(
        &self,
        value: &JsonValue,
        args: &HashMap<String, JsonValue>,
    ) -> tera::Result<JsonValue> {
        let members: Vec<EnumMember> = collection("enumerator", value)?;
        let parent = optional_arg("enumerator", args, "parent")?;
        let name = optional_arg("enumerator", args, "name")?;
        Ok(JsonValue::String(render_enum(
            &members,
            parent,
            name,
            self.use_union_types,
        )))
    }
}

fn escape_comment_filter(
    value: &JsonValue,
    _: &HashMap<String, JsonValue>,
) -> tera::Result<JsonValue> {
    Ok(JsonValue::String(escape_comment(text("escapeComment", value)?)))
}

fn escape_description_filter(
    value: &JsonValue,
    _: &HashMap<String, JsonValue>,
) -> tera::Result<JsonValue> {
    Ok(JsonValue::String(escape_description(text(
        "escapeDescription",
        value,
    )?)))
}

fn camel_case_filter(
    value: &JsonValue,
    _: &HashMap<String, JsonValue>,
) -> tera::Result<JsonValue> {
    Ok(JsonValue::String(to_camel_case(text("camelCase", value)?)))
}

fn lower_case_filter(
    value: &JsonValue,
    _: &HashMap<String, JsonValue>,
) -> tera::Result<JsonValue> {
    Ok(JsonValue::String(to_lower_case(text("lowerCase", value)?)))
}

fn to_server_parameters_filter(
    value: &JsonValue,
    _: &HashMap<String, JsonValue>,
) -> tera::Result<JsonValue> {
    let parameters: Vec<Parameter> = collection("toServerParameters", value)?;
    Ok(JsonValue::String(to_server_parameters(&parameters)))
}
