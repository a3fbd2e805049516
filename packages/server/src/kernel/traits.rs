// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like "assemble a document message") lives in domain functions that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseMessageDelivery)

use anyhow::Result;
use async_trait::async_trait;
use slack_client::Block;

// =============================================================================
// Message Delivery Trait (Infrastructure - outbound chat messages)
// =============================================================================

#[async_trait]
pub trait BaseMessageDelivery: Send + Sync {
    /// Send one message made of `blocks`
    async fn deliver(&self, blocks: &[Block]) -> Result<()>;
}
