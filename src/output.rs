//! CLI output formatting for multi-line tool results.
//!
//! Tools whose result is a single transformed text (formatters, codecs)
//! print it directly; this module formats the results that have structure —
//! hash reports, regex matches, counters, catalogs, sheet layouts.
//!
//! # Architecture
//!
//! Each result kind has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::generate::cron::CronExpr;
use crate::generate::hash::HashReport;
use crate::imaging::SheetLayout;
use crate::imaging::specs::{PaperSpec, PhotoSpec};
use crate::text::count::Counts;
use crate::text::regex_tester::MatchInfo;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

// ============================================================================
// Hash report
// ============================================================================

/// Format the four digests as aligned label/value lines.
pub fn format_hash_report(report: &HashReport) -> Vec<String> {
    vec![
        format!("MD5     {}", report.md5),
        format!("SHA-1   {}", report.sha1),
        format!("SHA-256 {}", report.sha256),
        format!("SHA-512 {}", report.sha512),
    ]
}

pub fn print_hash_report(report: &HashReport) {
    for line in format_hash_report(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Regex matches
// ============================================================================

/// Format matches as indexed lines with spans and capture groups.
///
/// ```text
/// 001 [2..4] "12"
///     group 1: "1"
/// ```
pub fn format_matches(matches: &[MatchInfo]) -> Vec<String> {
    if matches.is_empty() {
        return vec!["No matches".to_string()];
    }
    let mut lines = Vec::new();
    for (i, m) in matches.iter().enumerate() {
        lines.push(format!(
            "{} [{}..{}] {:?}",
            format_index(i + 1),
            m.start,
            m.end,
            m.text
        ));
        for (gi, group) in m.groups.iter().enumerate() {
            let value = match group {
                Some(text) => format!("{text:?}"),
                None => "<none>".to_string(),
            };
            lines.push(format!("{}group {}: {}", indent(1), gi + 1, value));
        }
    }
    lines.push(format!(
        "{} match{}",
        matches.len(),
        if matches.len() == 1 { "" } else { "es" }
    ));
    lines
}

pub fn print_matches(matches: &[MatchInfo]) {
    for line in format_matches(matches) {
        println!("{}", line);
    }
}

// ============================================================================
// Counter
// ============================================================================

/// Format the character/word/line/sentence counters.
pub fn format_counts(counts: &Counts) -> Vec<String> {
    vec![
        format!("Characters {}", counts.characters),
        format!("Words      {}", counts.words),
        format!("Lines      {}", counts.lines),
        format!("Sentences  {}", counts.sentences),
    ]
}

pub fn print_counts(counts: &Counts) {
    for line in format_counts(counts) {
        println!("{}", line);
    }
}

// ============================================================================
// Photo catalogs and sheet layout
// ============================================================================

/// Format the photo-format and paper-size catalogs.
///
/// ```text
/// Photo formats
/// 001 usa        USA (2×2 inch / 51×51mm)
/// ...
/// Paper sizes
/// 001 a4         A4 (210×297 mm)
/// ```
pub fn format_spec_catalog(photos: &[PhotoSpec], papers: &[PaperSpec]) -> Vec<String> {
    let mut lines = vec!["Photo formats".to_string()];
    for (i, spec) in photos.iter().enumerate() {
        lines.push(format!("{} {:<10} {}", format_index(i + 1), spec.id, spec.name));
    }
    lines.push(String::new());
    lines.push("Paper sizes".to_string());
    for (i, spec) in papers.iter().enumerate() {
        lines.push(format!("{} {:<10} {}", format_index(i + 1), spec.id, spec.name));
    }
    lines
}

pub fn print_spec_catalog(photos: &[PhotoSpec], papers: &[PaperSpec]) {
    for line in format_spec_catalog(photos, papers) {
        println!("{}", line);
    }
}

/// One-line summary of a computed print-sheet layout.
pub fn format_sheet_summary(layout: &SheetLayout) -> String {
    format!(
        "{}x{} px sheet, {} cols x {} rows = {} photos ({}x{} px each)",
        layout.paper_width_px,
        layout.paper_height_px,
        layout.cols,
        layout.rows,
        layout.tile_count(),
        layout.tile_width_px,
        layout.tile_height_px,
    )
}

// ============================================================================
// Cron presets
// ============================================================================

/// Format the preset table with expressions aligned to their descriptions.
pub fn format_cron_presets(presets: &[(&str, &str)]) -> Vec<String> {
    presets
        .iter()
        .map(|(expr, description)| format!("{expr:<14} {description}"))
        .collect()
}

pub fn print_cron_presets(presets: &[(&str, &str)]) {
    for line in format_cron_presets(presets) {
        println!("{}", line);
    }
}

/// Format an expression together with its description.
pub fn format_cron_report(expr: &CronExpr) -> Vec<String> {
    vec![expr.to_string(), expr.describe()]
}

pub fn print_cron_report(expr: &CronExpr) {
    for line in format_cron_report(expr) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::hash::digest_all;
    use crate::imaging::specs::{find_paper_spec, find_photo_spec};
    use crate::text::count::count;

    #[test]
    fn hash_report_has_four_labelled_lines() {
        let lines = format_hash_report(&digest_all("abc"));
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("MD5     "));
        assert!(lines[3].starts_with("SHA-512 "));
    }

    #[test]
    fn matches_render_spans_groups_and_total() {
        let matches = vec![MatchInfo {
            start: 2,
            end: 4,
            text: "12".to_string(),
            groups: vec![Some("1".to_string()), None],
        }];
        let lines = format_matches(&matches);
        assert_eq!(lines[0], "001 [2..4] \"12\"");
        assert_eq!(lines[1], "    group 1: \"1\"");
        assert_eq!(lines[2], "    group 2: <none>");
        assert_eq!(lines[3], "1 match");
    }

    #[test]
    fn empty_matches_say_so() {
        assert_eq!(format_matches(&[]), vec!["No matches".to_string()]);
    }

    #[test]
    fn counts_render_all_four_counters() {
        let lines = format_counts(&count("one two. three\n"));
        assert_eq!(lines.len(), 4);
        assert!(lines[1].contains('3'));
    }

    #[test]
    fn spec_catalog_lists_both_sections() {
        let lines = format_spec_catalog(
            crate::imaging::photo_specs(),
            crate::imaging::paper_specs(),
        );
        assert_eq!(lines[0], "Photo formats");
        assert!(lines.iter().any(|l| l.contains("Paper sizes")));
        assert!(lines.iter().any(|l| l.contains("001 usa")));
    }

    #[test]
    fn sheet_summary_for_reference_layout() {
        let layout = SheetLayout::compute(
            find_paper_spec("a4").unwrap(),
            find_photo_spec("usa").unwrap(),
            300,
            20,
        );
        assert_eq!(
            format_sheet_summary(&layout),
            "2480x3508 px sheet, 3 cols x 5 rows = 15 photos (602x602 px each)"
        );
    }

    #[test]
    fn cron_presets_align_expression_column() {
        let lines = format_cron_presets(&crate::generate::cron::presets());
        assert!(lines[0].starts_with("* * * * *"));
        assert!(lines.iter().all(|l| l.len() > 15));
    }
}
