//! Document publishing actions.

use slack_client::{Block, SlackError};

use crate::kernel::ServerDeps;

use super::assembler::assemble;
use super::models::Document;

/// Render `document` and send it to Slack.
///
/// Returns the blocks that were handed to delivery. Delivery failures are
/// logged by [`deliver`] and never reach the caller.
pub async fn publish_document(deps: &ServerDeps, document: &Document) -> Vec<Block> {
    let blocks = assemble(document);

    tracing::info!(
        slug = %document.slug,
        block_count = blocks.len(),
        "Publishing document to Slack"
    );

    deliver(deps, &blocks).await;
    blocks
}

/// Fire-and-forget delivery: errors are logged and swallowed, never retried.
pub async fn deliver(deps: &ServerDeps, blocks: &[Block]) {
    let Err(e) = deps.delivery.deliver(blocks).await else {
        tracing::debug!("Slack delivery succeeded");
        return;
    };

    // Prefer the structured form when the adapter kept the Slack error
    match e.downcast_ref::<SlackError>() {
        Some(SlackError::Api { status, message }) => {
            tracing::error!(status, body = %message, "Slack webhook rejected message");
        }
        Some(slack_error) => {
            tracing::error!(
                error = %slack_error,
                timeout = slack_error.is_timeout(),
                "Slack webhook delivery failed"
            );
        }
        None => {
            tracing::error!(error = %e, "Message delivery failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::documents::models::{DocumentField, FieldKind};
    use crate::kernel::{MockMessageDelivery, TestDependencies};
    use serde_json::json;

    fn document() -> Document {
        Document {
            name: "Notes".to_string(),
            slug: "notes".to_string(),
            created_at: json!("2024-01-01"),
            updated_at: json!("2024-01-02"),
            fields: vec![DocumentField {
                kind: FieldKind::Number,
                name: "Count".to_string(),
                value: json!(42),
                structured_value: None,
            }],
        }
    }

    #[tokio::test]
    async fn publish_hands_assembled_blocks_to_delivery() {
        let test_deps = TestDependencies::new();
        let delivery = test_deps.delivery.clone();
        let deps = test_deps.into_server_deps();

        let blocks = publish_document(&deps, &document()).await;

        assert_eq!(blocks.len(), 3);
        assert_eq!(delivery.delivered(), vec![blocks]);
    }

    #[tokio::test]
    async fn delivery_failure_is_swallowed() {
        let test_deps =
            TestDependencies::new().mock_delivery(MockMessageDelivery::failing("connection reset"));
        let delivery = test_deps.delivery.clone();
        let deps = test_deps.into_server_deps();

        let blocks = publish_document(&deps, &document()).await;

        assert_eq!(blocks.len(), 3);
        assert_eq!(delivery.delivery_count(), 1);
    }
}
