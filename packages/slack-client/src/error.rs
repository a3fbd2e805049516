//! Error types for the Slack webhook client.

use thiserror::Error;

/// Result type for Slack client operations.
pub type Result<T> = std::result::Result<T, SlackError>;

/// Slack client errors.
#[derive(Debug, Error)]
pub enum SlackError {
    /// Webhook URL missing or unusable
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport failure (connection refused, DNS, timeout)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response from Slack
    #[error("Slack API error ({status}): {message}")]
    Api { status: u16, message: String },
}

impl SlackError {
    /// HTTP status of an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            SlackError::Api { status, .. } => Some(*status),
            SlackError::Network(e) => e.status().map(|s| s.as_u16()),
            SlackError::Config(_) => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, SlackError::Network(e) if e.is_timeout())
    }
}
