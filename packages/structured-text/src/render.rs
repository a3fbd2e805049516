//! Structured text → markup rendering.
//!
//! Pure structural recursion over [`Node`] with an explicit
//! [`RenderContext`] per subtree. No I/O and no shared state, so a
//! [`Renderer`] can be used from any number of requests at once.

use crate::markup::{Markup, Mrkdwn};
use crate::node::{Node, Tag};

/// Subtrees nested deeper than this render as empty.
pub const MAX_DEPTH: usize = 64;

/// Rendering state threaded through one subtree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    /// Set for every descendant of a blockquote.
    pub inside_blockquote: bool,
    /// Item counter of the innermost ordered list. Shared by sibling
    /// list items, never inherited past them.
    pub list_counter: Option<usize>,
}

impl RenderContext {
    /// Context for the children of an element: keeps quote mode, drops the
    /// list counter.
    fn descend(&self) -> Self {
        Self {
            inside_blockquote: self.inside_blockquote,
            list_counter: None,
        }
    }
}

/// Render nodes as Slack mrkdwn with a fresh context.
pub fn render(nodes: &[Node]) -> String {
    Renderer::new(Mrkdwn).render(nodes)
}

/// Renders structured text through a [`Markup`] dialect.
#[derive(Debug, Clone, Default)]
pub struct Renderer<M> {
    markup: M,
}

impl<M: Markup> Renderer<M> {
    pub fn new(markup: M) -> Self {
        Self { markup }
    }

    /// Render a top-level node list.
    pub fn render(&self, nodes: &[Node]) -> String {
        self.render_nodes(nodes, &mut RenderContext::default())
    }

    /// Render a node list under `ctx`. Outputs are concatenated in order
    /// with no separator.
    pub fn render_nodes(&self, nodes: &[Node], ctx: &mut RenderContext) -> String {
        self.walk(nodes, ctx, 0)
    }

    fn walk(&self, nodes: &[Node], ctx: &mut RenderContext, depth: usize) -> String {
        let mut output = String::new();
        for node in nodes {
            output.push_str(&self.render_node(node, ctx, depth));
        }
        output
    }

    /// Children of an element get their own context.
    fn inner(&self, children: &[Node], ctx: &RenderContext, depth: usize) -> String {
        self.walk(children, &mut ctx.descend(), depth)
    }

    fn render_node(&self, node: &Node, ctx: &mut RenderContext, depth: usize) -> String {
        let (tag, children) = match node {
            Node::Text { data } => return self.markup.escape(data).into_owned(),
            Node::Element { tag, children, .. } => (tag, children.as_slice()),
            Node::Unknown => {
                tracing::warn!("Unknown structured text node, skipping");
                return String::new();
            }
        };

        if depth >= MAX_DEPTH {
            tracing::warn!(tag = %tag, depth, "Structured text nested too deeply, dropping subtree");
            return String::new();
        }
        let depth = depth + 1;

        match tag {
            Tag::Paragraph => self.markup.paragraph(&self.inner(children, ctx, depth)),
            Tag::Bold => self.markup.bold(&self.inner(children, ctx, depth)),
            Tag::Italic => self.markup.italic(&self.inner(children, ctx, depth)),
            Tag::Strikethrough => self.markup.strikethrough(&self.inner(children, ctx, depth)),
            Tag::Link => {
                let text = self.inner(children, ctx, depth);
                match node.attr("href") {
                    Some(href) => self.markup.link(href, &text),
                    None => {
                        tracing::warn!("Link without href, rendering text only");
                        text
                    }
                }
            }
            Tag::LineBreak => self.markup.line_break(ctx.inside_blockquote).to_string(),
            Tag::CodeBlock => self.markup.code_block(&self.inner(children, ctx, depth)),
            Tag::InlineCode => self.markup.inline_code(&self.inner(children, ctx, depth)),
            Tag::Blockquote => {
                // Each child is quoted on its own; multi-line children are
                // not merged into a single quote. Quote mode reaches every
                // descendant, not only direct children, so a `br` nested in
                // a quoted paragraph or list item still continues the quote.
                let mut output = String::new();
                for child in children {
                    let mut quoted = RenderContext {
                        inside_blockquote: true,
                        list_counter: None,
                    };
                    let rendered = self.walk(std::slice::from_ref(child), &mut quoted, depth);
                    output.push_str(&self.markup.quote(&rendered));
                }
                output
            }
            Tag::UnorderedList => self.markup.list(&self.inner(children, ctx, depth)),
            Tag::OrderedList => {
                let mut numbered = RenderContext {
                    inside_blockquote: ctx.inside_blockquote,
                    list_counter: Some(0),
                };
                self.markup.list(&self.walk(children, &mut numbered, depth))
            }
            Tag::ListItem => {
                let number = ctx.list_counter.as_mut().map(|counter| {
                    *counter += 1;
                    *counter
                });
                self.markup.list_item(number, &self.inner(children, ctx, depth))
            }
            Tag::Heading(level) => self.markup.heading(*level, &self.inner(children, ctx, depth)),
            // A divider needs a block of its own, which a string cannot carry
            Tag::HorizontalRule => String::new(),
            Tag::Unknown(name) => {
                tracing::warn!(tag = %name, "Missing structured text tag, skipping");
                String::new()
            }
        }
    }
}
