//! Portway "document published" webhook handler.
//!
//! Receives the published document, renders it into Slack blocks and posts
//! it to the configured incoming webhook. The inbound payload is echoed back
//! unchanged whatever happens downstream.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;

use crate::kernel::ServerDeps;

use super::actions::publish_document;
use super::models::PublishedEvent;

/// State shared with the webhook handler.
#[derive(Clone)]
pub struct WebhookState {
    pub deps: Arc<ServerDeps>,
}

/// Build the axum router for the document webhook.
pub fn router(state: WebhookState) -> Router {
    Router::new()
        .route("/document/published", post(handle_document_published))
        .with_state(state)
}

/// Handle a published document.
///
/// Always answers 200 with the request body, byte for byte. Malformed events
/// and delivery failures are logged but do not affect the response.
async fn handle_document_published(
    State(state): State<WebhookState>,
    body: Bytes,
) -> impl IntoResponse {
    tracing::debug!(
        payload = %String::from_utf8_lossy(&body),
        "Received document published event"
    );

    match serde_json::from_slice::<PublishedEvent>(&body) {
        Ok(event) => {
            publish_document(&state.deps, &event.document).await;
        }
        Err(e) => {
            tracing::error!(error = %e, "Malformed document published event, not delivering");
        }
    }

    ([(header::CONTENT_TYPE, "application/json")], body)
}
