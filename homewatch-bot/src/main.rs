//! Homewatch Bot
//!
//! A small daemon that polls the Practicum grading API for the review
//! status of the latest homework submission and forwards every status
//! change to a Telegram chat.
//!
//! Architecture:
//! - Configuration: credentials and poll interval from the environment
//! - Clients: HTTP communication with the grading API and Telegram
//! - Poller: fixed-interval fetch, validate, compare, notify loop
//!
//! The only fatal condition is missing configuration; once the loop is
//! running, every fault is logged, reported to the chat and survived.

mod config;
mod poller;
mod state;

use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use homewatch_client::{Notifier, PracticumClient, StatusSource, TelegramClient};

use crate::config::{Config, ConfigError};
use crate::poller::StatusPoller;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homewatch_bot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting homework status bot");

    // Load configuration; missing credentials end the process before any
    // request or notification goes out
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {e}");
            return Err(e.into());
        }
    };

    info!(
        "Loaded configuration: chat_id={}, poll interval {:?}",
        config.telegram_chat_id, config.poll_interval
    );

    // Initialize clients
    let source: Arc<dyn StatusSource> =
        Arc::new(PracticumClient::new(config.practicum_token.clone()));
    let notifier: Arc<dyn Notifier> = Arc::new(TelegramClient::new(config.telegram_token.clone()));

    info!("Clients initialized");

    // Start polling loop; never returns under normal operation
    let mut poller = StatusPoller::new(config, source, notifier);
    poller.run().await;

    Ok(())
}

/// Loads and validates configuration from environment variables
fn load_config() -> Result<Config, ConfigError> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
