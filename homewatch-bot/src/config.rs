//! Bot configuration
//!
//! All credentials come from the process environment, read once at startup
//! and never reloaded. A missing credential is the one fatal condition in
//! the whole program.

use std::time::Duration;

use thiserror::Error;

/// Environment variable holding the grading API OAuth token
pub const PRACTICUM_TOKEN_VAR: &str = "PRACTICUM_TOKEN";
/// Environment variable holding the Telegram bot token
pub const TELEGRAM_TOKEN_VAR: &str = "TELEGRAM_TOKEN";
/// Environment variable holding the target chat id
pub const TELEGRAM_CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";

/// How long to wait between poll cycles unless overridden
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(600);

/// Fatal configuration faults
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// One or more required environment variables are absent or empty
    #[error("missing required environment variable(s): {}", .0.join(", "))]
    MissingVars(Vec<&'static str>),

    /// A present value is unusable
    #[error("{0}")]
    Invalid(String),
}

/// Bot configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth token for the grading API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Chat that receives the notifications
    pub telegram_chat_id: String,

    /// How often to poll the grading API for status changes
    pub poll_interval: Duration,
}

impl Config {
    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PRACTICUM_TOKEN (required)
    /// - TELEGRAM_TOKEN (required)
    /// - TELEGRAM_CHAT_ID (required)
    /// - POLL_INTERVAL (optional, seconds, default: 600)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup
    ///
    /// Every missing credential is collected before failing, so the
    /// operator learns about all of them in a single pass.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut missing = Vec::new();

        let practicum_token = require(&lookup, PRACTICUM_TOKEN_VAR, &mut missing);
        let telegram_token = require(&lookup, TELEGRAM_TOKEN_VAR, &mut missing);
        let telegram_chat_id = require(&lookup, TELEGRAM_CHAT_ID_VAR, &mut missing);

        let (Some(practicum_token), Some(telegram_token), Some(telegram_chat_id)) =
            (practicum_token, telegram_token, telegram_chat_id)
        else {
            return Err(ConfigError::MissingVars(missing));
        };

        let poll_interval = lookup("POLL_INTERVAL")
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_POLL_INTERVAL);

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            poll_interval,
        })
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval.is_zero() {
            return Err(ConfigError::Invalid(
                "poll_interval must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Looks up a required variable, recording its name when absent or empty
fn require(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    let value = lookup(name).filter(|v| !v.is_empty());
    if value.is_none() {
        missing.push(name);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn full_env() -> HashMap<String, String> {
        env(&[
            (PRACTICUM_TOKEN_VAR, "practicum-secret"),
            (TELEGRAM_TOKEN_VAR, "telegram-secret"),
            (TELEGRAM_CHAT_ID_VAR, "424242"),
        ])
    }

    #[test]
    fn test_full_environment() {
        let vars = full_env();
        let config = Config::from_lookup(|name| vars.get(name).cloned()).unwrap();

        assert_eq!(config.practicum_token, "practicum-secret");
        assert_eq!(config.telegram_token, "telegram-secret");
        assert_eq!(config.telegram_chat_id, "424242");
        assert_eq!(config.poll_interval, Duration::from_secs(600));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_all_variables_missing() {
        let err = Config::from_lookup(|_| None).unwrap_err();

        assert_eq!(
            err,
            ConfigError::MissingVars(vec![
                PRACTICUM_TOKEN_VAR,
                TELEGRAM_TOKEN_VAR,
                TELEGRAM_CHAT_ID_VAR,
            ])
        );
    }

    #[test]
    fn test_single_variable_missing_is_named() {
        let mut vars = full_env();
        vars.remove(TELEGRAM_CHAT_ID_VAR);

        let err = Config::from_lookup(|name| vars.get(name).cloned()).unwrap_err();
        assert_eq!(err, ConfigError::MissingVars(vec![TELEGRAM_CHAT_ID_VAR]));
        assert!(err.to_string().contains(TELEGRAM_CHAT_ID_VAR));
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let mut vars = full_env();
        vars.insert(PRACTICUM_TOKEN_VAR.to_string(), String::new());

        let err = Config::from_lookup(|name| vars.get(name).cloned()).unwrap_err();
        assert_eq!(err, ConfigError::MissingVars(vec![PRACTICUM_TOKEN_VAR]));
    }

    #[test]
    fn test_poll_interval_override() {
        let mut vars = full_env();
        vars.insert("POLL_INTERVAL".to_string(), "30".to_string());

        let config = Config::from_lookup(|name| vars.get(name).cloned()).unwrap();
        assert_eq!(config.poll_interval, Duration::from_secs(30));
    }

    #[test]
    fn test_zero_interval_is_invalid() {
        let mut vars = full_env();
        vars.insert("POLL_INTERVAL".to_string(), "0".to_string());

        let config = Config::from_lookup(|name| vars.get(name).cloned()).unwrap();
        assert!(config.validate().is_err());
    }
}
