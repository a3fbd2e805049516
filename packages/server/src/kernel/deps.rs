//! Server dependencies for request handlers (using traits for testability)
//!
//! This module provides the central dependency container used by the domains.
//! All external services use trait abstractions to enable testing.

use anyhow::Result;
use async_trait::async_trait;
use slack_client::{Block, SlackWebhookClient};
use std::sync::Arc;

use crate::kernel::BaseMessageDelivery;

// =============================================================================
// SlackWebhookClient Adapter (implements BaseMessageDelivery trait)
// =============================================================================

/// Wrapper around SlackWebhookClient that implements BaseMessageDelivery trait
pub struct SlackWebhookAdapter(pub Arc<SlackWebhookClient>);

impl SlackWebhookAdapter {
    pub fn new(client: Arc<SlackWebhookClient>) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseMessageDelivery for SlackWebhookAdapter {
    async fn deliver(&self, blocks: &[Block]) -> Result<()> {
        // Keep the typed SlackError as the source so callers can downcast it
        self.0.post_blocks(blocks).await?;
        Ok(())
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to handlers (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    /// Outbound Slack delivery
    pub delivery: Arc<dyn BaseMessageDelivery>,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(delivery: Arc<dyn BaseMessageDelivery>) -> Self {
        Self { delivery }
    }
}
