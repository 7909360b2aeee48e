//! Client for the Telegram Bot API

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::Notifier;
use crate::error::{ClientError, Result};

/// Default Telegram Bot API host
pub const TELEGRAM_API: &str = "https://api.telegram.org";

/// Request body for the `sendMessage` method
#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// HTTP client for delivering chat notifications through a Telegram bot
#[derive(Debug, Clone)]
pub struct TelegramClient {
    /// API host (e.g., "https://api.telegram.org")
    base_url: String,
    /// Bot token issued by BotFather
    token: String,
    /// HTTP client instance
    client: Client,
}

impl TelegramClient {
    /// Create a new client against the default API host
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_client(TELEGRAM_API, token, Client::new())
    }

    /// Create a new client with a custom host and a configured HTTP client
    pub fn with_client(
        base_url: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        }
    }

    /// Get the API host this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Notifier for TelegramClient {
    async fn notify(&self, chat_id: &str, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.token);

        let response = self
            .client
            .post(&url)
            .json(&SendMessage { chat_id, text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // keep the bot token out of the error text
            return Err(ClientError::BadStatus {
                url: format!("{}/bot<token>/sendMessage", self.base_url),
                status: status.as_u16(),
            });
        }

        debug!("Message delivered to chat {}", chat_id);
        Ok(())
    }
}
