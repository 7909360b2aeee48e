//! Client for the Practicum grading API

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::debug;

use crate::StatusSource;
use crate::error::{ClientError, Result};

/// Default grading API endpoint
pub const PRACTICUM_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// HTTP client for the grading API
///
/// Issues a single GET per call, authorized with an OAuth token; the
/// `from_date` cursor goes out as a query parameter. No retries happen
/// here, the poll loop's periodic re-invocation is the retry policy.
#[derive(Debug, Clone)]
pub struct PracticumClient {
    /// Endpoint URL of the grading API
    base_url: String,
    /// OAuth token for the `Authorization` header
    token: String,
    /// HTTP client instance
    client: Client,
}

impl PracticumClient {
    /// Create a new client against the default endpoint
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_client(PRACTICUM_ENDPOINT, token, Client::new())
    }

    /// Create a new client with a custom endpoint and a configured HTTP client
    ///
    /// This allows you to set timeouts, proxies, TLS settings, etc., and
    /// lets tests point the client at a local mock server.
    pub fn with_client(
        base_url: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            client,
        }
    }

    /// Get the endpoint URL this client queries
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl StatusSource for PracticumClient {
    async fn homework_statuses(&self, from_date: i64) -> Result<Value> {
        debug!("Requesting homework statuses since {}", from_date);

        let response = self
            .client
            .get(&self.base_url)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ClientError::BadStatus {
                url: self.base_url.clone(),
                status: status.as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("failed to parse JSON response: {e}")))
    }
}
