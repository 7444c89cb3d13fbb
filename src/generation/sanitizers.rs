//! Sanitizers for embedding free text in generated source
//!
//! Schema descriptions end up in two places: block comments above generated
//! declarations, and template-literal strings. Both functions here are total
//! and never fail.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Line terminator written between comment continuation lines
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

// `[^\r\n\x{2028}\x{2029}]` rather than `.`: a bare `\r` ends a line too.
static LINE_BREAK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\r?\n([^\r\n\x{2028}\x{2029}]*)").expect("line break pattern is valid")
});

/// Makes `value` safe inside a `/* ... */` comment.
///
/// Comment delimiters are collapsed to a single `*`, and every line after the
/// first is re-flowed onto a ` * ` continuation line with its leading and
/// trailing whitespace trimmed.
///
/// # Examples
/// ```
/// use tsgen_helpers::generation::sanitizers::{escape_comment, LINE_ENDING};
///
/// assert_eq!(escape_comment("ends */ here"), "ends * here");
/// assert_eq!(
///     escape_comment("first\n   second"),
///     format!("first{LINE_ENDING} * second")
/// );
/// ```
pub fn escape_comment(value: &str) -> String {
    let mut value = value.to_string();
    // a single pass leaves "**//" as "**/" and "//*" as "/*"
    while value.contains("*/") || value.contains("/*") {
        value = value.replace("*/", "*").replace("/*", "*");
    }
    LINE_BREAK
        .replace_all(&value, |caps: &Captures| {
            format!("{LINE_ENDING} * {}", caps[1].trim())
        })
        .into_owned()
}

/// Makes `value` safe inside a backtick template literal.
///
/// Backslashes are escaped first so the backslashes introduced for backticks
/// and `${` are not escaped a second time.
///
/// # Examples
/// ```
/// use tsgen_helpers::generation::sanitizers::escape_description;
///
/// assert_eq!(escape_description("a`b${c}"), "a\\`b\\${c}");
/// ```
pub fn escape_description(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_comment_removes_delimiters() {
        assert_eq!(escape_comment("/* nested */"), "* nested *");
        assert_eq!(escape_comment("a*/b/*c"), "a*b*c");

        assert_eq!(escape_comment("//*/"), "*");
        assert_eq!(escape_comment("**//"), "**");
        assert_eq!(escape_comment("a **// b"), "a ** b");

        let escaped = escape_comment("/*/ **/ /**/ ///**");
        assert!(!escaped.contains("*/"));
        assert!(!escaped.contains("/*"));
    }

    #[test]
    fn test_escape_comment_reflows_lines() {
        assert_eq!(
            escape_comment("line1\nline2"),
            format!("line1{LINE_ENDING} * line2")
        );
        assert_eq!(
            escape_comment("Summary\r\n    indented detail  \n\nlast"),
            format!("Summary{LINE_ENDING} * indented detail{LINE_ENDING} * {LINE_ENDING} * last")
        );
    }

    #[test]
    fn test_escape_comment_single_line_is_untouched() {
        assert_eq!(escape_comment("Plain description."), "Plain description.");
        assert_eq!(escape_comment(""), "");
    }

    #[test]
    fn test_escape_comment_is_stable_on_single_line_output() {
        let once = escape_comment("Returns */ the /* pet");
        assert_eq!(escape_comment(&once), once);
    }

    #[test]
    fn test_escape_comment_reflows_again_on_multi_line_output() {
        let once = escape_comment("a\nb");
        assert_eq!(once, format!("a{LINE_ENDING} * b"));

        // continuation prefixes are not recognized, so each pass adds one
        let twice = escape_comment(&once);
        assert_eq!(twice, format!("a{LINE_ENDING} * * b"));
    }

    #[test]
    fn test_escape_description_order() {
        assert_eq!(
            escape_description("a`b${c}\\d"),
            "a\\`b\\${c}\\\\d"
        );
        assert_eq!(escape_description("\\`"), "\\\\\\`");
        assert_eq!(escape_description("$ {not} $"), "$ {not} $");
    }

    #[test]
    fn test_escape_description_applies_rules_again_without_runaway() {
        let once = escape_description("`");
        assert_eq!(once, "\\`");

        // second pass escapes the backslash and the backtick exactly once each
        let twice = escape_description(&once);
        assert_eq!(twice, "\\\\\\`");
        assert_eq!(escape_description("plain text"), "plain text");
    }
}
