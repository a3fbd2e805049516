//! Documents domain - rendering Portway "document published" events into
//! Slack messages.

pub mod actions;
pub mod assembler;
pub mod formatter;
pub mod models;
pub mod webhook;

pub use actions::{deliver, publish_document};
pub use assembler::{assemble, context_block};
pub use formatter::format_field;
pub use models::{Document, DocumentField, FieldKind, PublishedEvent};
