//! Error types for the breakdown function.
//!
//! Every stage of the request pipeline returns `Result<_, AppError>`. The
//! handler turns whichever variant surfaces into a 500 response whose
//! `error` field is the variant's `Display` output, so the messages here are
//! what browser callers see.

use std::fmt;

/// Message returned when the API key is not configured.
pub const MISSING_CREDENTIAL_MESSAGE: &str = "Missing GEMINI_API_KEY in Netlify settings.";
/// Fallback when the upstream rejects a request without an error message.
pub const UPSTREAM_FALLBACK_MESSAGE: &str = "Google API Error";
/// Fallback when a fault carries no message at all.
pub const GENERIC_FALLBACK_MESSAGE: &str = "Server Error";

/// Custom error type for the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// `GEMINI_API_KEY` is unset or blank
    MissingCredential,
    /// Request body could not be decoded into a breakdown request
    InvalidBody(String),
    /// Upstream answered with a non-2xx status
    UpstreamStatus { status: u16, message: Option<String> },
    /// Upstream answered 2xx but without any generated text
    EmptyGeneration(String),
    /// Transport or decoding failure talking to the upstream
    Transport(String),
}

impl AppError {
    /// Short machine-friendly label used in log fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MissingCredential => "MissingCredential",
            Self::InvalidBody(_) => "InvalidBody",
            Self::UpstreamStatus { .. } => "UpstreamStatus",
            Self::EmptyGeneration(_) => "EmptyGeneration",
            Self::Transport(_) => "Transport",
        }
    }

    /// Message placed in the `error` field of the response body.
    #[must_use]
    pub fn client_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_FALLBACK_MESSAGE.to_string()
        } else {
            message
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCredential => f.write_str(MISSING_CREDENTIAL_MESSAGE),
            Self::UpstreamStatus { message, .. } => f.write_str(
                message
                    .as_deref()
                    .filter(|m| !m.is_empty())
                    .unwrap_or(UPSTREAM_FALLBACK_MESSAGE),
            ),
            Self::InvalidBody(msg) | Self::EmptyGeneration(msg) | Self::Transport(msg) => {
                write!(f, "{msg}")
            }
        }
    }
}

impl std::error::Error for AppError {}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Transport(format!("{error:#}"))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::InvalidBody(error.to_string())
    }
}
