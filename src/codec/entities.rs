//! HTML entity escaping and unescaping.
//!
//! Escaping covers the five characters that are unsafe in any HTML context.
//! Unescaping additionally understands the common named entities and decimal
//! and hex numeric character references.

use std::borrow::Cow;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EntityError {
    #[error("invalid numeric character reference: &#{0};")]
    BadNumeric(String),
}

/// Escape `& < > " '` as named/numeric entities.
///
/// Returns the input unchanged (no allocation) when nothing needs escaping.
pub fn encode(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Resolve a named entity (without `&`/`;`) to its character.
fn named(name: &str) -> Option<char> {
    Some(match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "copy" => '©',
        "reg" => '®',
        "trade" => '™',
        "hellip" => '…',
        "mdash" => '—',
        "ndash" => '–',
        _ => return None,
    })
}

/// Unescape named and numeric entities.
///
/// Unknown named entities are left as-is (browsers do the same); malformed
/// numeric references are an error.
pub fn decode(input: &str) -> Result<String, EntityError> {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        let Some(semi) = rest[1..].find(';').map(|i| i + 1) else {
            // No terminator: literal ampersand
            out.push('&');
            rest = &rest[1..];
            continue;
        };
        let body = &rest[1..semi];
        if let Some(num) = body.strip_prefix('#') {
            let code = if let Some(hex) = num.strip_prefix(['x', 'X']) {
                u32::from_str_radix(hex, 16)
            } else {
                num.parse::<u32>()
            }
            .map_err(|_| EntityError::BadNumeric(num.to_string()))?;
            let c = char::from_u32(code).ok_or_else(|| EntityError::BadNumeric(num.to_string()))?;
            out.push(c);
        } else if let Some(c) = named(body) {
            out.push(c);
        } else {
            // Unknown entity: pass through verbatim
            out.push_str(&rest[..=semi]);
        }
        rest = &rest[semi + 1..];
    }
    out.push_str(rest);
    Ok(out)
}
