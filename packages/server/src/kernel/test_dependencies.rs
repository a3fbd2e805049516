// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use slack_client::Block;
use std::sync::{Arc, Mutex};

use super::{BaseMessageDelivery, ServerDeps};

// =============================================================================
// Mock Message Delivery
// =============================================================================

pub struct MockMessageDelivery {
    delivered: Arc<Mutex<Vec<Vec<Block>>>>,
    failure: Option<String>,
}

impl MockMessageDelivery {
    pub fn new() -> Self {
        Self {
            delivered: Arc::new(Mutex::new(Vec::new())),
            failure: None,
        }
    }

    /// Make every delivery fail with `message` (after recording it)
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::new()
        }
    }

    /// Get every message that was handed to the service
    pub fn delivered(&self) -> Vec<Vec<Block>> {
        self.delivered.lock().unwrap().clone()
    }

    pub fn delivery_count(&self) -> usize {
        self.delivered.lock().unwrap().len()
    }
}

impl Default for MockMessageDelivery {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseMessageDelivery for MockMessageDelivery {
    async fn deliver(&self, blocks: &[Block]) -> Result<()> {
        self.delivered.lock().unwrap().push(blocks.to_vec());
        match &self.failure {
            Some(message) => anyhow::bail!("{}", message),
            None => Ok(()),
        }
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

pub struct TestDependencies {
    pub delivery: Arc<MockMessageDelivery>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            delivery: Arc::new(MockMessageDelivery::new()),
        }
    }

    /// Set a mock delivery service
    pub fn mock_delivery(mut self, delivery: MockMessageDelivery) -> Self {
        self.delivery = Arc::new(delivery);
        self
    }

    /// Convert into ServerDeps for testing
    pub fn into_server_deps(self) -> Arc<ServerDeps> {
        Arc::new(ServerDeps::new(self.delivery))
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
