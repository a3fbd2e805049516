//! Portway structured text.
//!
//! A structured text value is an ordered list of [`Node`]s: text leaves and
//! tagged elements (paragraphs, emphasis, links, lists, quotes, code). This
//! crate deserializes that tree and renders it to a chat markup dialect.
//!
//! # Example
//!
//! ```
//! use structured_text::{render, Node};
//!
//! # fn main() -> Result<(), serde_json::Error> {
//! let nodes: Vec<Node> = serde_json::from_str(r#"[
//!     {"type": "tag", "tag": "strong", "children": [{"type": "text", "data": "hi"}]}
//! ]"#)?;
//!
//! assert_eq!(render(&nodes), "*hi*");
//! # Ok(())
//! # }
//! ```
//!
//! Neither reading nor rendering fails on odd input: unknown node types,
//! unknown tags and over-deep subtrees produce empty output plus a `tracing`
//! warning.

pub mod escape;
pub mod markup;
pub mod node;
pub mod render;

pub use escape::escape_mrkdwn;
pub use markup::{Markup, Mrkdwn};
pub use node::{deserialize_nodes, deserialize_optional_nodes, Node, Tag};
pub use render::{render, RenderContext, Renderer, MAX_DEPTH};
