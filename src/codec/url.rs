//! URL percent-encoding and decoding.
//!
//! Encoding uses the conservative component set: everything except ASCII
//! alphanumerics and `-_.~` is escaped, matching `encodeURIComponent`-style
//! behavior rather than whole-URL escaping.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use thiserror::Error;

/// Unreserved characters (RFC 3986 §2.3) stay literal; everything else is escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Error, Debug)]
pub enum UrlCodecError {
    #[error("decoded bytes are not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Percent-encode a URL component.
pub fn encode(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// Percent-decode a URL component. `+` is not treated as a space.
pub fn decode(input: &str) -> Result<String, UrlCodecError> {
    Ok(percent_decode_str(input).decode_utf8()?.into_owned())
}
