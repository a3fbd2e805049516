use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub slack_incoming_webhook_url: String,
    /// Upper bound on one webhook delivery. Unbounded when unset.
    pub slack_webhook_timeout: Option<Duration>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "1337".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            slack_incoming_webhook_url: env::var("SLACK_INCOMING_WEBHOOK_URL")
                .context("SLACK_INCOMING_WEBHOOK_URL must be set")?,
            slack_webhook_timeout: env::var("SLACK_WEBHOOK_TIMEOUT_SECS")
                .ok()
                .map(|secs| secs.parse::<u64>().map(Duration::from_secs))
                .transpose()
                .context("SLACK_WEBHOOK_TIMEOUT_SECS must be a whole number of seconds")?,
        })
    }
}
