//! Proxy integration event and response models.
//!
//! The function is fronted by a Netlify / API Gateway style proxy, which
//! hands over the raw HTTP method and body and expects a
//! `{statusCode, headers, body}` document back.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Inbound proxy event. Only the fields the handler reads are modelled.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProxyEvent {
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_context: Option<RequestContext>,
}

/// HTTP API (payload v2) request context; carries the method there.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct RequestContext {
    #[serde(default)]
    pub http: Option<HttpDescription>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct HttpDescription {
    #[serde(default)]
    pub method: Option<String>,
}

impl ProxyEvent {
    /// Convenience constructor for a REST-style event.
    #[must_use]
    pub fn new(method: &str, body: Option<&str>) -> Self {
        Self {
            http_method: Some(method.to_string()),
            body: body.map(str::to_string),
            ..Self::default()
        }
    }

    /// HTTP method of the request, upper-cased.
    ///
    /// Prefers `httpMethod`, falling back to `requestContext.http.method`.
    /// Matching is case-insensitive: a lower-case `post` is handled as
    /// `POST`, since HTTP API v2 events may carry the method in any case.
    #[must_use]
    pub fn method(&self) -> Option<String> {
        self.http_method
            .as_deref()
            .or_else(|| {
                self.request_context
                    .as_ref()
                    .and_then(|ctx| ctx.http.as_ref())
                    .and_then(|http| http.method.as_deref())
            })
            .map(str::to_ascii_uppercase)
    }
}

/// Outbound proxy response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl ProxyResponse {
    /// Header lookup, case-insensitive.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
