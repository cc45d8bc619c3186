//! JWT decoding (inspection only — signatures are NOT verified).

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JwtError {
    #[error("a JWT has 3 dot-separated parts, got {0}")]
    WrongPartCount(usize),
    #[error("invalid base64url in {part}: {source}")]
    Decode {
        part: &'static str,
        source: base64::DecodeError,
    },
    #[error("{part} is not valid JSON: {source}")]
    Json {
        part: &'static str,
        source: serde_json::Error,
    },
}

/// A decoded token: header and payload pretty-printed, signature untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedJwt {
    pub header: String,
    pub payload: String,
    /// Raw base64url signature. Present but never verified here.
    pub signature: String,
}

fn decode_part(raw: &str, part: &'static str) -> Result<String, JwtError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(raw.trim_end_matches('='))
        .map_err(|source| JwtError::Decode { part, source })?;
    let value: serde_json::Value =
        serde_json::from_slice(&bytes).map_err(|source| JwtError::Json { part, source })?;
    // Pretty-printing a just-parsed value cannot fail
    Ok(serde_json::to_string_pretty(&value).unwrap_or_default())
}

/// Decode a JWT's header and payload.
pub fn decode(token: &str) -> Result<DecodedJwt, JwtError> {
    let parts: Vec<&str> = token.trim().split('.').collect();
    if parts.len() != 3 {
        return Err(JwtError::WrongPartCount(parts.len()));
    }
    Ok(DecodedJwt {
        header: decode_part(parts[0], "header")?,
        payload: decode_part(parts[1], "payload")?,
        signature: parts[2].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_token(header: &str, payload: &str, sig: &str) -> String {
        format!(
            "{}.{}.{}",
            URL_SAFE_NO_PAD.encode(header),
            URL_SAFE_NO_PAD.encode(payload),
            sig
        )
    }

    #[test]
    fn decodes_header_and_payload() {
        let token = make_token(
            r#"{"alg":"HS256","typ":"JWT"}"#,
            r#"{"sub":"1234","name":"Jane"}"#,
            "sig-bytes",
        );
        let decoded = decode(&token).unwrap();
        assert!(decoded.header.contains("\"alg\": \"HS256\""));
        assert!(decoded.payload.contains("\"name\": \"Jane\""));
        assert_eq!(decoded.signature, "sig-bytes");
    }

    #[test]
    fn wrong_part_count_is_an_error() {
        assert!(matches!(decode("a.b"), Err(JwtError::WrongPartCount(2))));
        assert!(matches!(decode("a.b.c.d"), Err(JwtError::WrongPartCount(4))));
    }

    #[test]
    fn padded_base64url_is_tolerated() {
        // Some producers emit padded segments; strip before decoding
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"none"}"#);
        let payload = format!("{}==", URL_SAFE_NO_PAD.encode(r#"{"a":1}"#));
        let token = format!("{header}.{payload}.x");
        assert!(decode(&token).is_ok());
    }

    #[test]
    fn non_json_payload_is_an_error() {
        let token = format!(
            "{}.{}.s",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"none"}"#),
            URL_SAFE_NO_PAD.encode("not json")
        );
        assert!(matches!(decode(&token), Err(JwtError::Json { part: "payload", .. })));
    }

    #[test]
    fn garbage_base64_is_an_error() {
        assert!(matches!(
            decode("!!!.???.sig"),
            Err(JwtError::Decode { part: "header", .. })
        ));
    }
}
