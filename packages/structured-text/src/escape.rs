//! Escaping of text content for Slack mrkdwn.
//!
//! Slack reserves `&`, `<` and `>` for entity and link syntax. Everything
//! else is passed through untouched.

use std::borrow::Cow;

/// Escape the characters Slack mrkdwn reserves.
///
/// Every occurrence is replaced, in a single left-to-right pass, so the `&`
/// of an entity produced for `<` or `>` is never escaped a second time.
///
/// # Examples
///
/// ```
/// use structured_text::escape_mrkdwn;
///
/// assert_eq!(escape_mrkdwn("a & b < c"), "a &amp; b &lt; c");
/// assert_eq!(escape_mrkdwn("plain"), "plain");
/// ```
pub fn escape_mrkdwn(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len() + text.len() / 4);
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }

    Cow::Owned(result)
}
