//! API error body (RFC 7807 problem details).

use serde::{Deserialize, Serialize};

/// Problem type URIs, relative to the blog's own origin.
pub mod problem {
    pub const UNSUPPORTED_CONVERTER: &str = "/problems/unsupported-converter";
    pub const INTERNAL: &str = "/problems/internal";
}

/// RFC 7807 Problem Details for HTTP APIs.
///
/// See: https://datatracker.ietf.org/doc/html/rfc7807
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub error_type: String,
    pub title: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorResponse {
    /// The `converter` query parameter named something other than markdown.
    pub fn unsupported_converter(value: &str) -> Self {
        Self {
            error_type: problem::UNSUPPORTED_CONVERTER.to_string(),
            title: "Unsupported converter".to_string(),
            status: 400,
            detail: Some(format!(
                "converter '{value}' is not supported, use 'markdown' or omit it"
            )),
        }
    }

    /// Storage or rendering failed. Details stay in the server log.
    pub fn internal_error() -> Self {
        Self {
            error_type: problem::INTERNAL.to_string(),
            title: "Internal Server Error".to_string(),
            status: 500,
            detail: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_converter_body() {
        let json = serde_json::to_value(ErrorResponse::unsupported_converter("bogus")).unwrap();

        assert_eq!(json["type"], "/problems/unsupported-converter");
        assert_eq!(json["status"], 400);
        assert!(json["detail"].as_str().unwrap().contains("'bogus'"));
    }

    #[test]
    fn test_internal_error_hides_detail() {
        let json = serde_json::to_value(ErrorResponse::internal_error()).unwrap();

        assert_eq!(json["type"], "/problems/internal");
        assert!(json.get("detail").is_none());
    }
}
