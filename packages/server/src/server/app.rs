//! Application setup and server configuration.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use slack_client::SlackWebhookClient;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::domains::documents::webhook::{self, WebhookState};
use crate::kernel::{ServerDeps, SlackWebhookAdapter};
use crate::server::routes::health_handler;

/// Build production dependencies from configuration
pub fn build_deps(config: &Config) -> Result<Arc<ServerDeps>> {
    let client = match config.slack_webhook_timeout {
        Some(timeout) => {
            SlackWebhookClient::with_timeout(config.slack_incoming_webhook_url.clone(), timeout)
        }
        None => SlackWebhookClient::new(config.slack_incoming_webhook_url.clone()),
    }
    .context("Failed to create Slack webhook client")?;

    Ok(Arc::new(ServerDeps::new(Arc::new(SlackWebhookAdapter::new(
        Arc::new(client),
    )))))
}

/// Build the Axum application router
pub fn build_app(deps: Arc<ServerDeps>) -> Router {
    // CORS configuration - Portway calls server-to-server, browsers only hit /health
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        // Health check
        .route("/health", get(health_handler))
        // Portway webhooks
        .merge(webhook::router(WebhookState { deps }))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
