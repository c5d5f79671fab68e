use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::error::AppError;

/// Which of the two decompositions the caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BreakdownKind {
    /// An educational or social topic split into sub-topics
    Topic,
    /// A game or activity method split into mechanical components
    #[default]
    Method,
}

impl BreakdownKind {
    /// Classifies a raw `type` value.
    ///
    /// Only the exact string `"topic"` selects [`BreakdownKind::Topic`];
    /// anything else, including a missing or non-string value, is a method.
    #[must_use]
    pub fn from_raw(raw: Option<&Value>) -> Self {
        match raw.and_then(Value::as_str) {
            Some("topic") => Self::Topic,
            _ => Self::Method,
        }
    }
}

/// Body of a breakdown POST.
///
/// Nothing beyond "is JSON and not `null`" is enforced on the way in: `type`
/// and `query` are read as object members when present, so arrays, numbers
/// and strings decode with both fields missing.
#[derive(Debug, Clone, Default)]
pub struct BreakdownRequest {
    pub kind: Option<Value>,
    pub query: Option<Value>,
}

impl BreakdownRequest {
    #[must_use]
    pub fn new(kind: &str, query: &str) -> Self {
        Self {
            kind: Some(Value::String(kind.to_string())),
            query: Some(Value::String(query.to_string())),
        }
    }

    /// Decodes a raw request body.
    ///
    /// Duplicate keys keep the last occurrence.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBody` if the body is not JSON or is `null`.
    pub fn from_json(body: &str) -> Result<Self, AppError> {
        let value: Value = serde_json::from_str(body)?;
        if value.is_null() {
            return Err(AppError::InvalidBody(
                "Cannot read properties of null (reading 'type')".to_string(),
            ));
        }
        Ok(Self {
            kind: value.get("type").cloned(),
            query: value.get("query").cloned(),
        })
    }

    #[must_use]
    pub fn breakdown_kind(&self) -> BreakdownKind {
        BreakdownKind::from_raw(self.kind.as_ref())
    }

    /// Query text as interpolated into the prompt.
    ///
    /// Strings are used verbatim; a missing query renders as `undefined` and
    /// `null` as `null`, other JSON values as their JSON text.
    #[must_use]
    pub fn query_text(&self) -> String {
        match &self.query {
            None => "undefined".to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// Successful response body.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BreakdownResponse {
    pub result: String,
}

/// Failure response body.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}
