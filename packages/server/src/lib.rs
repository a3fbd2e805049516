// Portway → Slack publish relay - API Core
//
// Receives "document published" events from Portway, renders the document
// into Slack Block Kit and posts it to an incoming webhook.
// Business logic lives in domains/, infrastructure seams in kernel/.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
