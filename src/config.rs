//! Process-wide configuration for the breakdown function.
//!
//! Read once at cold start from the function's environment and shared by
//! reference with every invocation. Nothing here is mutated after load.

use lambda_runtime::tracing::{debug, warn};

/// Environment variable holding the Gemini API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
/// Optional override for the model name.
pub const MODEL_VAR: &str = "GEMINI_MODEL";
/// Optional override for the API origin (scheme + host).
pub const API_BASE_VAR: &str = "GEMINI_API_BASE";

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Read-only settings injected into the handler.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// `None` when the key is unset or blank; reported per request.
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
}

impl Config {
    /// Builds a config with default model and origin.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.and_then(non_blank),
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Loads the configuration from process environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads the configuration through an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR).and_then(non_blank);
        if api_key.is_none() {
            warn!(variable = API_KEY_VAR, "API key not configured; POST requests will fail");
        }

        let model = lookup(MODEL_VAR)
            .and_then(non_blank)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let api_base = lookup(API_BASE_VAR)
            .and_then(non_blank)
            .map_or_else(
                || DEFAULT_API_BASE.to_string(),
                |base| base.trim_end_matches('/').to_string(),
            );

        debug!(model = %model, api_base = %api_base, "Loaded configuration");

        Self {
            api_key,
            model,
            api_base,
        }
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Full `generateContent` URL carrying the key as a query credential.
    #[must_use]
    pub fn generate_content_url(&self, api_key: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.api_base,
            self.model,
            urlencoding::encode(api_key)
        )
    }
}

// The key must never reach the logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .finish()
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
