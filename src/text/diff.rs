//! Line-based text diffing.
//!
//! Two output modes over the same computed diff:
//!
//! - **Unified**: git-style hunks with `---`/`+++` headers and configurable
//!   context, suitable for piping into `patch`-aware tooling.
//! - **Plain**: every line of both inputs prefixed with `+`, `-`, or two
//!   spaces — the side-by-side-ish view for eyeballing small inputs.

use similar::{ChangeTag, TextDiff};

/// How to render the diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffMode {
    /// Git-style unified diff with `context` lines around each hunk.
    Unified { context: usize },
    /// Full listing of both inputs with +/-/space prefixes.
    Plain,
}

/// Diff two texts line by line.
///
/// `old_name`/`new_name` label the inputs in unified headers.
pub fn diff_lines(old: &str, new: &str, old_name: &str, new_name: &str, mode: DiffMode) -> String {
    let diff = TextDiff::from_lines(old, new);
    match mode {
        DiffMode::Unified { context } => diff
            .unified_diff()
            .context_radius(context)
            .header(old_name, new_name)
            .to_string(),
        DiffMode::Plain => {
            let mut out = String::new();
            for change in diff.iter_all_changes() {
                let sign = match change.tag() {
                    ChangeTag::Delete => "-",
                    ChangeTag::Insert => "+",
                    ChangeTag::Equal => " ",
                };
                out.push_str(sign);
                out.push(' ');
                out.push_str(change.value());
                if !change.value().ends_with('\n') {
                    out.push('\n');
                }
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_inputs_produce_empty_unified_diff() {
        let out = diff_lines("a\nb\n", "a\nb\n", "a", "b", DiffMode::Unified { context: 3 });
        assert!(out.is_empty());
    }

    #[test]
    fn plain_mode_lists_all_lines_with_signs() {
        let out = diff_lines("a\nb\n", "a\nc\n", "old", "new", DiffMode::Plain);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec!["  a", "- b", "+ c"]);
    }

    #[test]
    fn unified_mode_has_headers_and_hunk() {
        let out = diff_lines(
            "one\ntwo\nthree\n",
            "one\n2\nthree\n",
            "old.txt",
            "new.txt",
            DiffMode::Unified { context: 1 },
        );
        assert!(out.contains("--- old.txt"));
        assert!(out.contains("+++ new.txt"));
        assert!(out.contains("-two"));
        assert!(out.contains("+2"));
    }

    #[test]
    fn plain_mode_handles_missing_trailing_newline() {
        let out = diff_lines("a", "b", "old", "new", DiffMode::Plain);
        assert_eq!(out, "- a\n+ b\n");
    }
}
