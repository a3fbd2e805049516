use slack_client::Block;

use crate::common::utils::human_readable_date_value;

use super::formatter::format_field;
use super::models::Document;

/// Context block: created and updated dates, then the slug.
pub fn context_block(document: &Document) -> Block {
    Block::context([
        format!("Created: *{}*", human_readable_date_value(&document.created_at)),
        format!("Updated: *{}*", human_readable_date_value(&document.updated_at)),
        format!("Slug: *{}*", document.slug),
    ])
}

/// Build the full message for a document.
///
/// Order is fixed: context, header with the document name, then one block
/// per field in field order. Fields of unknown kind are skipped.
pub fn assemble(document: &Document) -> Vec<Block> {
    let mut blocks = Vec::with_capacity(document.fields.len() + 2);
    blocks.push(context_block(document));
    blocks.push(Block::header(document.name.as_str()));
    blocks.extend(document.fields.iter().filter_map(format_field));
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::documents::models::{DocumentField, FieldKind};
    use serde_json::json;

    fn document(fields: Vec<DocumentField>) -> Document {
        Document {
            name: "Spring Launch".to_string(),
            slug: "spring-launch".to_string(),
            created_at: json!("2024-03-05T17:00:00.000Z"),
            updated_at: json!("2024-03-06T09:30:00.000Z"),
            fields,
        }
    }

    fn field(kind: FieldKind, name: &str, value: serde_json::Value) -> DocumentField {
        DocumentField {
            kind,
            name: name.to_string(),
            value,
            structured_value: None,
        }
    }

    #[test]
    fn context_block_lists_dates_and_slug() {
        assert_eq!(
            context_block(&document(vec![])),
            Block::context([
                "Created: *Tue Mar 05 2024*",
                "Updated: *Wed Mar 06 2024*",
                "Slug: *spring-launch*",
            ])
        );
    }

    #[test]
    fn context_block_accepts_epoch_millis_and_missing_dates() {
        let mut doc = document(vec![]);
        doc.created_at = json!(1709658000000u64);
        doc.updated_at = serde_json::Value::Null;
        assert_eq!(
            context_block(&doc),
            Block::context([
                "Created: *Tue Mar 05 2024*",
                "Updated: *Invalid Date*",
                "Slug: *spring-launch*",
            ])
        );
    }

    #[test]
    fn string_and_image_document_yields_four_blocks() {
        let blocks = assemble(&document(vec![
            field(FieldKind::String, "Title", json!("Hello")),
            field(FieldKind::Image, "Hero", json!("https://cdn.x/hero.png")),
        ]));

        let kinds: Vec<&str> = blocks.iter().map(Block::kind).collect();
        assert_eq!(kinds, vec!["context", "header", "section", "image"]);
        assert_eq!(blocks[1], Block::header("Spring Launch"));
        assert_eq!(blocks[2], Block::section("*Title*: Hello"));
    }

    #[test]
    fn fields_keep_their_order() {
        let blocks = assemble(&document(vec![
            field(FieldKind::Number, "B", json!(2)),
            field(FieldKind::Number, "A", json!(1)),
        ]));
        assert_eq!(blocks[2], Block::section("*B*: 2"));
        assert_eq!(blocks[3], Block::section("*A*: 1"));
    }

    #[test]
    fn unknown_fields_are_skipped_and_no_divider_added() {
        let blocks = assemble(&document(vec![
            field(FieldKind::Unknown(0), "Ghost", json!(null)),
            field(FieldKind::File, "Doc", json!("a.pdf")),
        ]));
        assert_eq!(blocks.len(), 3);
        assert!(!blocks.contains(&Block::divider()));
    }
}
