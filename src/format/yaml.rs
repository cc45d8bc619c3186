//! YAML validation and YAML → JSON conversion.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum YamlError {
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("JSON render error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse-only check. `Ok` means the input is valid YAML.
pub fn validate(input: &str) -> Result<(), YamlError> {
    serde_yaml::from_str::<serde_yaml::Value>(input)?;
    Ok(())
}

/// Convert a YAML document to pretty-printed JSON.
///
/// YAML-only constructs that JSON cannot represent (e.g. non-string mapping
/// keys) surface as render errors.
pub fn to_json(input: &str) -> Result<String, YamlError> {
    let value: serde_yaml::Value = serde_yaml::from_str(input)?;
    Ok(serde_json::to_string_pretty(&value)?)
}
