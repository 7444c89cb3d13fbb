//! Enumeration rendering: qualified reference or inline literal union

use crate::generation::EnumMember;
use crate::generation::utils::unique;

/// Renders an enumeration as a type expression.
///
/// Unless `use_union_types` is set, an enum with both a `parent` and a `name`
/// is referenced as `Parent.Name`, since a named declaration for it is
/// emitted elsewhere. Otherwise the member literals are deduplicated by value
/// and joined into a literal union. Empty strings count as absent.
pub fn render_enum(
    enumerators: &[EnumMember],
    parent: Option<&str>,
    name: Option<&str>,
    use_union_types: bool,
) -> String {
    if !use_union_types {
        if let (Some(parent), Some(name)) = (present(parent), present(name)) {
            return format!("{parent}.{name}");
        }
    }

    unique(enumerators.iter().map(|member| member.value.as_str())).join(" | ")
}

fn present(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members(values: &[&str]) -> Vec<EnumMember> {
        values.iter().map(|value| EnumMember::new(*value)).collect()
    }

    #[test]
    fn test_qualified_reference_ignores_members() {
        assert_eq!(
            render_enum(&members(&["'x'"]), Some("Status"), Some("Kind"), false),
            "Status.Kind"
        );
        assert_eq!(render_enum(&[], Some("Status"), Some("Kind"), false), "Status.Kind");
    }

    #[test]
    fn test_literal_union_deduplicates_by_value() {
        let values = members(&["'a'", "'a'", "'b'"]);
        assert_eq!(render_enum(&values, None, None, true), "'a' | 'b'");
        assert_eq!(
            render_enum(&values, Some("Status"), Some("Kind"), true),
            "'a' | 'b'"
        );
    }

    #[test]
    fn test_literal_union_when_reference_is_incomplete() {
        let values = members(&["1", "2", "1"]);
        assert_eq!(render_enum(&values, Some("Status"), None, false), "1 | 2");
        assert_eq!(render_enum(&values, None, Some("Kind"), false), "1 | 2");
        assert_eq!(render_enum(&values, Some(""), Some("Kind"), false), "1 | 2");
    }

    #[test]
    fn test_empty_enum_renders_empty() {
        assert_eq!(render_enum(&[], None, None, true), "");
    }
}
