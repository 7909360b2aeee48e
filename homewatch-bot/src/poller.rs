//! Status poller
//!
//! The heart of the bot: polls the grading API at a fixed interval,
//! validates what comes back, maps the latest homework record to a
//! notification text and forwards it to the chat when it changed since the
//! last delivery.
//!
//! Every cycle ends in the same fixed-period wait regardless of outcome,
//! so both polling and alerting happen at most once per interval.

use std::sync::Arc;

use thiserror::Error;
use tokio::time;
use tracing::{debug, error, info};

use homewatch_client::{ClientError, Notifier, StatusSource};
use homewatch_core::{CheckError, HomeworkRecord, check_response, status_message};

use crate::config::Config;
use crate::state::NotificationState;

/// Greeting sent once at startup
pub const GREETING: &str = "Привет, давай проверим твои ДЗ";

/// Sent when the API reports no homeworks at all
pub const NOTHING_TO_CHECK: &str = "Нет актуальных данных для проверки";

/// A single poll cycle fault
///
/// Both variants are recovered at the loop boundary and turned into a
/// user-facing failure message; a bad cycle never crashes the process.
#[derive(Debug, Error)]
pub enum PollError {
    /// The grading API could not be reached or answered badly
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The response arrived but failed validation
    #[error(transparent)]
    Check(#[from] CheckError),
}

/// Poller that continuously checks homework statuses and notifies on change
pub struct StatusPoller {
    config: Config,
    source: Arc<dyn StatusSource>,
    notifier: Arc<dyn Notifier>,
    state: NotificationState,
    /// Lower bound for the next fetch, epoch seconds. Kept at zero so every
    /// cycle re-reads the full history and the first record is always the
    /// most recent submission.
    from_date: i64,
}

impl StatusPoller {
    /// Creates a new poller with a fresh notification state
    pub fn new(config: Config, source: Arc<dyn StatusSource>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            config,
            source,
            notifier,
            state: NotificationState::new(),
            from_date: 0,
        }
    }

    /// Starts the polling loop
    ///
    /// Sends the greeting, then runs forever; termination comes from the
    /// outside (signal) or not at all.
    pub async fn run(&mut self) {
        info!(
            "Starting status poller (interval: {:?})",
            self.config.poll_interval
        );

        self.send(GREETING).await;

        let mut interval = time::interval(self.config.poll_interval);

        loop {
            interval.tick().await;
            self.cycle().await;
        }
    }

    /// Performs one poll cycle: fetch, validate, compare, maybe notify
    ///
    /// Any cycle fault becomes a user-facing failure message that goes
    /// through the same dedup gate as regular status messages, so repeated
    /// identical failures are reported once.
    async fn cycle(&mut self) {
        let message = match self.poll_once().await {
            Ok(message) => message,
            Err(e) => {
                error!("Poll cycle failed: {e}");
                format!("Сбой в работе: {e}")
            }
        };

        if self.state.is_changed(&message) {
            self.send(&message).await;
        } else {
            debug!("No change, nothing to send");
        }
    }

    /// Fetches and validates the latest statuses
    ///
    /// Returns the candidate notification text for this cycle: the status
    /// message for the most recent homework, or the nothing-to-check
    /// sentinel when the list is empty.
    async fn poll_once(&self) -> Result<String, PollError> {
        let response = self.source.homework_statuses(self.from_date).await?;
        let homeworks = check_response(&response)?;

        let Some(raw) = homeworks.first() else {
            debug!("No homeworks in response");
            return Ok(NOTHING_TO_CHECK.to_string());
        };

        let record = HomeworkRecord::from_value(raw)?;
        Ok(status_message(&record))
    }

    /// Best-effort send
    ///
    /// Delivery faults are logged and swallowed; the state only advances
    /// after a successful delivery, so an undelivered message is offered
    /// again next cycle.
    async fn send(&mut self, message: &str) {
        match self
            .notifier
            .notify(&self.config.telegram_chat_id, message)
            .await
        {
            Ok(()) => {
                debug!("Notification sent: {message}");
                self.state.mark_sent(message);
            }
            Err(e) => error!("Failed to send notification: {e}"),
        }
    }
}
