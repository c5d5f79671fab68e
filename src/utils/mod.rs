//! Helpers shared by the handler: the CORS header set and inbound body
//! decoding.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::collections::HashMap;

use crate::models::error::AppError;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_HEADERS: &str = "Content-Type";
pub const ALLOW_METHODS: &str = "POST, OPTIONS";

/// Headers attached to every response so browser callers can read it.
#[must_use]
pub fn cors_headers() -> HashMap<String, String> {
    HashMap::from([
        ("Access-Control-Allow-Origin".to_string(), ALLOW_ORIGIN.to_string()),
        ("Access-Control-Allow-Headers".to_string(), ALLOW_HEADERS.to_string()),
        ("Access-Control-Allow-Methods".to_string(), ALLOW_METHODS.to_string()),
    ])
}

/// Returns the request body as text.
///
/// Proxies base64-encode bodies they consider binary and flag it with
/// `isBase64Encoded`. A missing body is returned as an empty string and
/// fails later as invalid JSON.
///
/// # Errors
///
/// Returns `InvalidBody` if a flagged body is not valid base64 or UTF-8.
pub fn decode_body(body: Option<&str>, is_base64_encoded: bool) -> Result<String, AppError> {
    let raw = body.unwrap_or_default();
    if !is_base64_encoded {
        return Ok(raw.to_string());
    }

    let bytes = STANDARD
        .decode(raw.trim())
        .map_err(|e| AppError::InvalidBody(format!("Invalid base64 body: {e}")))?;
    String::from_utf8(bytes).map_err(|e| AppError::InvalidBody(format!("Body is not UTF-8: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_headers() {
        let headers = cors_headers();
        assert_eq!(headers.len(), 3);
        assert_eq!(headers["Access-Control-Allow-Origin"], "*");
        assert_eq!(headers["Access-Control-Allow-Headers"], "Content-Type");
        assert_eq!(headers["Access-Control-Allow-Methods"], "POST, OPTIONS");
    }

    #[test]
    fn test_decode_plain_body() {
        assert_eq!(decode_body(Some("{\"a\":1}"), false).unwrap(), "{\"a\":1}");
        assert_eq!(decode_body(None, false).unwrap(), "");
    }

    #[test]
    fn test_decode_base64_body() {
        let encoded = STANDARD.encode("{\"type\":\"topic\"}");
        assert_eq!(
            decode_body(Some(&encoded), true).unwrap(),
            "{\"type\":\"topic\"}"
        );
    }

    #[test]
    fn test_decode_bad_base64_body() {
        let err = decode_body(Some("%%%not base64"), true).unwrap_err();
        assert_eq!(err.kind(), "InvalidBody");
    }
}
