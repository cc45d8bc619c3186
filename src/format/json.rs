//! JSON formatting, minification, and validation.
//!
//! Object key order is preserved (serde_json's `preserve_order` feature), so
//! formatting is a whitespace-only transform.

use serde_json::Value;

/// Pretty-print with 2-space indentation.
pub fn format(input: &str) -> Result<String, serde_json::Error> {
    let value: Value = serde_json::from_str(input)?;
    serde_json::to_string_pretty(&value)
}

/// Strip all insignificant whitespace.
pub fn minify(input: &str) -> Result<String, serde_json::Error> {
    let value: Value = serde_json::from_str(input)?;
    serde_json::to_string(&value)
}

/// Parse-only check. `Ok` means the input is valid JSON.
pub fn validate(input: &str) -> Result<(), serde_json::Error> {
    serde_json::from_str::<Value>(input).map(|_| ())
}
