//! SQL formatting.
//!
//! Delegates to `sqlformat` with the house style: 2-space indentation,
//! uppercased keywords, one blank line between statements.

use sqlformat::{FormatOptions, Indent, QueryParams};

/// Format a SQL string.
///
/// `sqlformat` is lexical, not a parser — invalid SQL comes back re-indented
/// rather than rejected, which matches how the tool is used (cleaning up
/// query snippets, not validating them).
pub fn format(input: &str) -> String {
    sqlformat::format(
        input,
        &QueryParams::None,
        FormatOptions {
            indent: Indent::Spaces(2),
            uppercase: true,
            lines_between_queries: 1,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_keywords() {
        let out = format("select id, name from users where id = 1");
        assert!(out.starts_with("SELECT"));
        assert!(out.contains("FROM"));
        assert!(out.contains("WHERE"));
    }

    #[test]
    fn breaks_clauses_onto_lines() {
        let out = format("select a from t where b = 2 order by a");
        assert!(out.lines().count() > 1);
    }

    #[test]
    fn preserves_identifiers_and_literals() {
        let out = format("select 'Name' as label from MyTable");
        assert!(out.contains("'Name'"));
        assert!(out.contains("MyTable"));
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(format(""), "");
    }
}
