//! Slack incoming webhook client.
//!
//! A minimal client that posts Block Kit messages to an incoming webhook URL.
//!
//! # Example
//!
//! ```no_run
//! use slack_client::{Block, SlackWebhookClient};
//!
//! # #[tokio::main]
//! # async fn main() -> slack_client::Result<()> {
//! let client = SlackWebhookClient::new("https://hooks.slack.com/services/T000/B000/XXXX")?;
//!
//! client
//!     .post_blocks(&[Block::header("Published"), Block::section("*Title*: Hello")])
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod types;

pub use error::{Result, SlackError};
pub use types::{Block, Text, WebhookMessage};

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

/// Posts messages to one incoming webhook.
#[derive(Debug, Clone)]
pub struct SlackWebhookClient {
    http_client: Client,
    webhook_url: String,
}

impl SlackWebhookClient {
    /// Create a client for `webhook_url`.
    pub fn new(webhook_url: impl Into<String>) -> Result<Self> {
        Self::with_client(Client::new(), webhook_url)
    }

    /// Create a client whose requests give up after `timeout`.
    pub fn with_timeout(webhook_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Self::with_client(http_client, webhook_url)
    }

    fn with_client(http_client: Client, webhook_url: impl Into<String>) -> Result<Self> {
        let webhook_url = webhook_url.into();
        if webhook_url.trim().is_empty() {
            return Err(SlackError::Config("webhook URL is empty".into()));
        }
        Ok(Self {
            http_client,
            webhook_url,
        })
    }

    pub fn webhook_url(&self) -> &str {
        &self.webhook_url
    }

    /// POST `{"blocks": [...]}` to the webhook.
    pub async fn post_blocks(&self, blocks: &[Block]) -> Result<()> {
        debug!(block_count = blocks.len(), "Posting blocks to Slack webhook");

        let response = self
            .http_client
            .post(&self.webhook_url)
            .json(&WebhookMessage { blocks })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SlackError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!(status = status.as_u16(), "Slack webhook accepted message");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_url() {
        let err = SlackWebhookClient::new("  ").unwrap_err();
        assert!(matches!(err, SlackError::Config(_)));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_keeps_url() {
        let client = SlackWebhookClient::new("https://hooks.slack.com/services/T/B/X").unwrap();
        assert_eq!(client.webhook_url(), "https://hooks.slack.com/services/T/B/X");
    }
}
