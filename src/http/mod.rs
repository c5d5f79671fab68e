use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::sync::LazyLock;

/// Status and decoded JSON body of an upstream response.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: Value,
}

impl HttpReply {
    #[must_use]
    pub const fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// True for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Trait for HTTP client operations to enable testing with mocks.
///
/// The handler only ever talks to the upstream through this trait, so tests
/// can assert on the outgoing request and script the reply without network
/// access.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Send a JSON POST and return the status with the JSON response body.
    ///
    /// Non-2xx statuses are not errors here; the caller inspects
    /// [`HttpReply::status`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or the response body
    /// is not valid JSON.
    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpReply>;
}

/// Production HTTP client implementation using reqwest.
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpReply> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .context("Failed to send request to the generation API")?;

        let status = response.status().as_u16();
        let body = response
            .json::<Value>()
            .await
            .context("Failed to parse response from the generation API")?;

        Ok(HttpReply { status, body })
    }
}

/// Global HTTP client for production use
pub static HTTP_CLIENT: LazyLock<ReqwestClient> = LazyLock::new(|| ReqwestClient::new(Client::new()));
