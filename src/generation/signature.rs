//! Generic call signature for generated request stubs

use crate::generation::{Parameter, ParameterLocation};

/// Type used for a slot that receives no value
pub const ABSENT_TYPE: &str = "undefined";

/// Type of the two leading placeholder arguments
pub const PLACEHOLDER_TYPE: &str = "any";

/// Builds the `<any, any, Body, Query>` type arguments of a stub function.
///
/// The body slot is the first `body` parameter's type (`| undefined` when
/// optional). The query slot is an inline record of every `query` parameter.
/// Either slot falls back to `undefined`. Layout is tab-indented with one
/// slot per line:
///
/// ```text
/// <
/// 	any,
/// 	any,
/// 	Pet,
/// 	{
/// 		limit?: number,
/// 		tags: string[]
/// 	}
/// >
/// ```
pub fn to_server_parameters(parameters: &[Parameter]) -> String {
    let body = match parameters
        .iter()
        .find(|p| p.location == ParameterLocation::Body)
    {
        Some(body) if body.is_required => body.type_ref.clone(),
        Some(body) => format!("{} | {ABSENT_TYPE}", body.type_ref),
        None => ABSENT_TYPE.to_string(),
    };

    let query_entries: Vec<String> = parameters
        .iter()
        .filter(|p| p.location == ParameterLocation::Query)
        .map(|p| {
            let optional = if p.is_required { "" } else { "?" };
            format!("\n\t\t{}{optional}: {}", p.name, p.type_ref)
        })
        .collect();
    let query = if query_entries.is_empty() {
        ABSENT_TYPE.to_string()
    } else {
        format!("{{{}\n\t}}", query_entries.join(","))
    };

    format!("<\n\t{PLACEHOLDER_TYPE},\n\t{PLACEHOLDER_TYPE},\n\t{body},\n\t{query}\n>")
}
