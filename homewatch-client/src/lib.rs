//! Homewatch HTTP Clients
//!
//! HTTP collaborators for the homework status bot: the Practicum grading
//! API (polled for homework review statuses) and the Telegram Bot API
//! (receives the notifications). Both clients share [`ClientError`].
//!
//! The bot's poll loop talks to these services only through the
//! [`StatusSource`] and [`Notifier`] traits, so tests can substitute
//! in-memory mocks for the real network.
//!
//! # Example
//!
//! ```no_run
//! use homewatch_client::{PracticumClient, StatusSource};
//!
//! #[tokio::main]
//! async fn main() -> homewatch_client::Result<()> {
//!     let client = PracticumClient::new("my-oauth-token");
//!     let response = client.homework_statuses(0).await?;
//!     println!("raw statuses: {response}");
//!     Ok(())
//! }
//! ```

pub mod error;
mod practicum;
mod telegram;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use practicum::{PRACTICUM_ENDPOINT, PracticumClient};
pub use telegram::{TELEGRAM_API, TelegramClient};

use async_trait::async_trait;
use serde_json::Value;

/// Source of homework review statuses
///
/// Implemented by [`PracticumClient`] against the real grading API and by
/// in-memory mocks in tests.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetches homework statuses changed since `from_date` (epoch seconds)
    ///
    /// Returns the raw parsed body; shape validation is the caller's job.
    async fn homework_statuses(&self, from_date: i64) -> Result<Value>;
}

/// Destination for user-facing notifications
///
/// Delivery is best-effort from the caller's point of view: the poll loop
/// logs a failed send and carries on.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Delivers `text` to the chat identified by `chat_id`
    async fn notify(&self, chat_id: &str, text: &str) -> Result<()>;
}
