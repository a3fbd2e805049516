//! Target markup dialects.
//!
//! The renderer walks the tree and asks a [`Markup`] implementation how to
//! spell each construct. [`Mrkdwn`] is Slack's dialect.

use std::borrow::Cow;

use crate::escape::escape_mrkdwn;

/// Spelling of each structured text construct in a target markup.
///
/// Every method receives already-rendered inner content.
pub trait Markup {
    fn escape<'a>(&self, text: &'a str) -> Cow<'a, str>;

    fn paragraph(&self, inner: &str) -> String;

    fn bold(&self, inner: &str) -> String;

    fn italic(&self, inner: &str) -> String;

    fn strikethrough(&self, inner: &str) -> String;

    fn link(&self, href: &str, text: &str) -> String;

    /// Line break, optionally continuing an open quote.
    fn line_break(&self, inside_blockquote: bool) -> &'static str;

    fn code_block(&self, inner: &str) -> String;

    fn inline_code(&self, inner: &str) -> String;

    /// One quoted child.
    fn quote(&self, inner: &str) -> String;

    /// Closes an ordered or unordered list.
    fn list(&self, inner: &str) -> String;

    /// List item; `number` is `Some` inside an ordered list.
    fn list_item(&self, number: Option<usize>, inner: &str) -> String;

    fn heading(&self, level: u8, inner: &str) -> String;
}

/// Slack `mrkdwn`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mrkdwn;

impl Markup for Mrkdwn {
    fn escape<'a>(&self, text: &'a str) -> Cow<'a, str> {
        escape_mrkdwn(text)
    }

    fn paragraph(&self, inner: &str) -> String {
        format!("{inner}\n\n")
    }

    fn bold(&self, inner: &str) -> String {
        format!("*{inner}*")
    }

    fn italic(&self, inner: &str) -> String {
        format!("_{inner}_")
    }

    fn strikethrough(&self, inner: &str) -> String {
        format!("~{inner}~")
    }

    fn link(&self, href: &str, text: &str) -> String {
        format!("<{href}|{text}>")
    }

    fn line_break(&self, inside_blockquote: bool) -> &'static str {
        if inside_blockquote {
            "\n >"
        } else {
            "\n"
        }
    }

    fn code_block(&self, inner: &str) -> String {
        format!("```{inner}```\n")
    }

    fn inline_code(&self, inner: &str) -> String {
        format!("`{inner}`")
    }

    // Each quoted child ends its own line so siblings never run together.
    fn quote(&self, inner: &str) -> String {
        if inner.ends_with('\n') {
            format!("> {inner}")
        } else {
            format!("> {inner}\n")
        }
    }

    fn list(&self, inner: &str) -> String {
        format!("{inner}\n")
    }

    fn list_item(&self, number: Option<usize>, inner: &str) -> String {
        match number {
            Some(n) => format!("{n}. {inner}\n"),
            None => format!("- {inner}\n"),
        }
    }

    // Slack has no heading syntax; every level renders as a bold line.
    fn heading(&self, _level: u8, inner: &str) -> String {
        format!("*{inner}*\n")
    }
}
