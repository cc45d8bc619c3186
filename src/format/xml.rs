//! XML pretty-printing and minification.
//!
//! Implemented as event rewriting: parse the document with quick-xml, then
//! re-emit every event through a writer configured for the target style.
//! Whitespace-only text nodes are dropped in both directions so indentation
//! from the source does not leak into the output.

use quick_xml::events::Event;
use quick_xml::{Reader, Writer};
use std::io::Cursor;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum XmlError {
    #[error("XML parse error at position {position}: {source}")]
    Parse {
        position: u64,
        source: quick_xml::Error,
    },
    #[error("XML write error: {0}")]
    Write(#[from] std::io::Error),
    #[error("output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Pretty-print with 2-space indentation.
pub fn format(input: &str) -> Result<String, XmlError> {
    rewrite(input, Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2))
}

/// Strip inter-element whitespace.
pub fn minify(input: &str) -> Result<String, XmlError> {
    rewrite(input, Writer::new(Cursor::new(Vec::new())))
}

fn rewrite(input: &str, mut writer: Writer<Cursor<Vec<u8>>>) -> Result<String, XmlError> {
    let mut reader = Reader::from_str(input);
    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            // Inter-element indentation from the source would fight the
            // writer's own layout
            Ok(Event::Text(t)) if t.iter().all(|b| b.is_ascii_whitespace()) => {}
            Ok(event) => writer.write_event(event)?,
            Err(source) => {
                return Err(XmlError::Parse {
                    position: reader.error_position(),
                    source,
                });
            }
        }
    }
    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_nested_elements() {
        let out = format("<root><item id=\"1\">a</item><item>b</item></root>").unwrap();
        assert_eq!(
            out,
            "<root>\n  <item id=\"1\">a</item>\n  <item>b</item>\n</root>"
        );
    }

    #[test]
    fn minify_strips_indentation() {
        let out = minify("<root>\n  <a>\n    <b>x</b>\n  </a>\n</root>\n").unwrap();
        assert_eq!(out, "<root><a><b>x</b></a></root>");
    }

    #[test]
    fn format_then_minify_roundtrips() {
        let source = "<a><b>1</b><c/></a>";
        let pretty = format(source).unwrap();
        assert_eq!(minify(&pretty).unwrap(), source);
    }

    #[test]
    fn preserves_text_with_content() {
        let out = format("<p>hello <b>world</b></p>").unwrap();
        assert!(out.contains("hello "));
    }

    #[test]
    fn preserves_declaration_and_comments() {
        let out = format("<?xml version=\"1.0\"?><r><!-- note --><x/></r>").unwrap();
        assert!(out.starts_with("<?xml version=\"1.0\"?>"));
        assert!(out.contains("<!-- note -->"));
    }

    #[test]
    fn mismatched_tags_are_an_error() {
        assert!(matches!(format("<a><b></a>"), Err(XmlError::Parse { .. })));
    }
}
