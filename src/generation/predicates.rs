//! Conditional helpers for gating template sections

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value as JsonValue;

use crate::generation::Branches;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Truthiness as templates see it: `null`, `false`, `0` and `""` are falsy,
/// everything else (including empty arrays and objects) is truthy.
pub fn is_truthy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(_) | JsonValue::Object(_) => true,
    }
}

/// Takes the "then" arm unless every value is falsy
pub fn ifdef<B: Branches>(values: &[&JsonValue], branches: &B) -> B::Output {
    branches.select(values.iter().any(|value| is_truthy(value)))
}

pub fn equals<T, B>(a: &T, b: &T, branches: &B) -> B::Output
where
    T: PartialEq + ?Sized,
    B: Branches,
{
    branches.select(a == b)
}

pub fn not_equals<T, B>(a: &T, b: &T, branches: &B) -> B::Output
where
    T: PartialEq + ?Sized,
    B: Branches,
{
    branches.select(a != b)
}

/// Takes the "then" arm when the value holds any whitespace
pub fn contains_spaces<B: Branches>(value: &str, branches: &B) -> B::Output {
    branches.select(WHITESPACE_RUN.is_match(value))
}
