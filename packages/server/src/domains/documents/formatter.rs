//! Field → Block Kit block formatting.

use slack_client::Block;
use structured_text::{escape_mrkdwn, render};

use crate::common::utils::{human_readable_date_value, value_to_display};

use super::models::{DocumentField, FieldKind};

/// Format one document field as a Slack block.
///
/// Returns `None` for field kinds this service does not know; those fields
/// are dropped from the message.
pub fn format_field(field: &DocumentField) -> Option<Block> {
    let name = &field.name;

    let block = match field.kind {
        FieldKind::String => {
            let value = value_to_display(&field.value);
            Block::section(format!("*{}*: {}", name, escape_mrkdwn(&value)))
        }
        FieldKind::RichText => {
            let nodes = field.structured_value.as_deref().unwrap_or_default();
            if nodes.is_empty() {
                tracing::debug!(field = %name, "Rich text field has no structured value");
            }
            Block::section(render(nodes))
        }
        // Numbers and file references are not escaped
        FieldKind::Number | FieldKind::File => {
            Block::section(format!("*{}*: {}", name, value_to_display(&field.value)))
        }
        FieldKind::Image => Block::image(value_to_display(&field.value), name.as_str()),
        FieldKind::Date => Block::section(format!(
            "*{}*: {}",
            name,
            human_readable_date_value(&field.value)
        )),
        FieldKind::Unknown(code) => {
            tracing::warn!(field = %name, code, "Unknown field type, dropping field");
            return None;
        }
        FieldKind::Invalid => {
            tracing::warn!(field = %name, "Field without a numeric type, dropping field");
            return None;
        }
    };

    Some(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use structured_text::{Node, Tag};

    fn field(kind: FieldKind, name: &str, value: Value) -> DocumentField {
        DocumentField {
            kind,
            name: name.to_string(),
            value,
            structured_value: None,
        }
    }

    #[test]
    fn string_field_is_escaped() {
        let block = format_field(&field(FieldKind::String, "Title", json!("Q&A <live>")));
        assert_eq!(block, Some(Block::section("*Title*: Q&amp;A &lt;live&gt;")));
    }

    #[test]
    fn number_field() {
        let block = format_field(&field(FieldKind::Number, "Count", json!(42)));
        assert_eq!(block, Some(Block::section("*Count*: 42")));
    }

    #[test]
    fn number_field_is_not_escaped() {
        let block = format_field(&field(FieldKind::Number, "Odd", json!("1 < 2")));
        assert_eq!(block, Some(Block::section("*Odd*: 1 < 2")));
    }

    #[test]
    fn rich_text_field_renders_structured_value() {
        let mut f = field(FieldKind::RichText, "Body", Value::Null);
        f.structured_value = Some(vec![Node::element(
            Tag::Paragraph,
            vec![Node::element(Tag::Bold, vec![Node::text("Hello")])],
        )]);
        assert_eq!(format_field(&f), Some(Block::section("*Hello*\n\n")));
    }

    #[test]
    fn rich_text_without_structured_value_is_empty_section() {
        let f = field(FieldKind::RichText, "Body", json!("ignored"));
        assert_eq!(format_field(&f), Some(Block::section("")));
    }

    #[test]
    fn image_field() {
        let block = format_field(&field(
            FieldKind::Image,
            "Hero",
            json!("https://cdn.portway.app/hero.png"),
        ));
        assert_eq!(
            block,
            Some(Block::image("https://cdn.portway.app/hero.png", "Hero"))
        );
    }

    #[test]
    fn date_field() {
        let block = format_field(&field(
            FieldKind::Date,
            "Launch",
            json!("2024-03-05T17:00:00.000Z"),
        ));
        assert_eq!(block, Some(Block::section("*Launch*: Tue Mar 05 2024")));
    }

    #[test]
    fn file_field() {
        let block = format_field(&field(
            FieldKind::File,
            "Spec",
            json!("https://cdn.portway.app/spec.pdf"),
        ));
        assert_eq!(
            block,
            Some(Block::section("*Spec*: https://cdn.portway.app/spec.pdf"))
        );
    }

    #[test]
    fn unknown_field_is_dropped() {
        assert_eq!(format_field(&field(FieldKind::Unknown(42), "X", json!(1))), None);
    }

    #[test]
    fn invalid_field_is_dropped() {
        assert_eq!(format_field(&field(FieldKind::Invalid, "X", json!("1"))), None);
    }
}
