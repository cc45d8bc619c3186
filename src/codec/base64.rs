//! Base64 encoding and decoding (standard alphabet, padded).

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Base64Error {
    #[error("invalid base64: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error("decoded bytes are not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Encode text to standard padded base64.
pub fn encode(input: &str) -> String {
    STANDARD.encode(input.as_bytes())
}

/// Decode standard base64 to text.
///
/// Fails on malformed base64 and on decoded bytes that are not UTF-8.
pub fn decode(input: &str) -> Result<String, Base64Error> {
    let bytes = STANDARD.decode(input.trim())?;
    Ok(String::from_utf8(bytes)?)
}
