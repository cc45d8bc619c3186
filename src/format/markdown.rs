//! Markdown rendering: HTML fragments and a standalone preview page.
//!
//! CommonMark conversion is pulldown-cmark; the preview shell is a Maud
//! template so the page structure is compile-time checked and interpolated
//! content is escaped by default (the rendered markdown itself is inserted
//! as `PreEscaped`, since it is already HTML).

use crate::config::Theme;
use maud::{DOCTYPE, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};

/// Convert CommonMark to an HTML fragment.
pub fn to_html(input: &str) -> String {
    let parser = Parser::new(input);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}

/// Render a full standalone preview page around the converted markdown.
///
/// The first `# heading` becomes the page title; "Preview" otherwise.
pub fn preview_page(input: &str, theme: Theme) -> String {
    let body = to_html(input);
    let title = input
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .unwrap_or("Preview")
        .trim();

    let (background, text, accent) = match theme {
        Theme::Light => ("#ffffff", "#1a1a1a", "#0060c0"),
        Theme::Dark => ("#14161a", "#e6e6e6", "#6cb2ff"),
    };
    let css = format!(
        "body {{ max-width: 46rem; margin: 2rem auto; padding: 0 1rem; \
         font-family: system-ui, sans-serif; line-height: 1.6; \
         background: {background}; color: {text}; }}\n\
         a {{ color: {accent}; }}\n\
         pre {{ overflow-x: auto; padding: 0.75rem; border: 1px solid {accent}33; }}\n\
         code {{ font-family: ui-monospace, monospace; }}"
    );

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                main { (PreEscaped(body)) }
            }
        }
    }
    .into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_headings_and_emphasis() {
        let out = to_html("# Title\n\nsome *emphasis* here");
        assert!(out.contains("<h1>Title</h1>"));
        assert!(out.contains("<em>emphasis</em>"));
    }

    #[test]
    fn converts_code_blocks() {
        let out = to_html("```\nlet x = 1;\n```");
        assert!(out.contains("<pre><code>"));
    }

    #[test]
    fn preview_page_is_a_full_document() {
        let page = preview_page("# Hello\n\nbody text", Theme::Light);
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Hello</title>"));
        assert!(page.contains("<h1>Hello</h1>"));
    }

    #[test]
    fn preview_page_without_heading_uses_default_title() {
        let page = preview_page("just a paragraph", Theme::Light);
        assert!(page.contains("<title>Preview</title>"));
    }

    #[test]
    fn dark_theme_changes_palette() {
        let light = preview_page("x", Theme::Light);
        let dark = preview_page("x", Theme::Dark);
        assert!(light.contains("#ffffff"));
        assert!(dark.contains("#14161a"));
    }
}
