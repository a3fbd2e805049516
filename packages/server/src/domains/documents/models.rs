use serde::Deserialize;
use serde_json::Value;
use structured_text::{deserialize_optional_nodes, Node};

use crate::common::utils::de::{null_as_default, skip_invalid};

/// Inbound "document published" event.
#[derive(Debug, Clone, Deserialize)]
pub struct PublishedEvent {
    pub document: Document,
}

/// A published Portway document.
///
/// Timestamps are kept as received (ISO strings or epoch milliseconds) and
/// only parsed for display. Fields that cannot be read at all are dropped
/// here; everything else about the document is best effort.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Document {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    pub created_at: Value,
    pub updated_at: Value,
    #[serde(deserialize_with = "skip_invalid")]
    pub fields: Vec<DocumentField>,
}

/// One typed field of a document. `structured_value` is only meaningful for
/// [`FieldKind::RichText`], `value` for every other kind.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentField {
    #[serde(rename = "type", default)]
    pub kind: FieldKind,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub value: Value,
    #[serde(default, deserialize_with = "deserialize_optional_nodes")]
    pub structured_value: Option<Vec<Node>>,
}

/// Field kind, sent as a numeric code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub enum FieldKind {
    String,
    RichText,
    Number,
    Image,
    Date,
    File,
    /// Integer code outside the known range.
    Unknown(u64),
    /// Missing, or not a non-negative integer.
    #[default]
    Invalid,
}

impl From<Value> for FieldKind {
    fn from(value: Value) -> Self {
        value.as_u64().map_or(FieldKind::Invalid, FieldKind::from)
    }
}

impl From<u64> for FieldKind {
    fn from(code: u64) -> Self {
        match code {
            1 => FieldKind::String,
            2 => FieldKind::RichText,
            3 => FieldKind::Number,
            4 => FieldKind::Image,
            5 => FieldKind::Date,
            6 => FieldKind::File,
            other => FieldKind::Unknown(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_published_event() {
        let event: PublishedEvent = serde_json::from_value(json!({
            "document": {
                "name": "Launch",
                "slug": "launch",
                "createdAt": "2024-03-05T17:00:00.000Z",
                "updatedAt": "2024-03-06T09:30:00.000Z",
                "fields": [
                    {"type": 1, "name": "Title", "value": "Hello"},
                    {"type": 2, "name": "Body", "value": null, "structuredValue": [
                        {"type": "text", "data": "hi"}
                    ]},
                    {"type": 9, "name": "Mystery", "value": 1}
                ]
            }
        }))
        .unwrap();

        let doc = event.document;
        assert_eq!(doc.name, "Launch");
        assert_eq!(doc.created_at, json!("2024-03-05T17:00:00.000Z"));
        assert_eq!(doc.fields.len(), 3);
        assert_eq!(doc.fields[0].kind, FieldKind::String);
        assert_eq!(doc.fields[1].kind, FieldKind::RichText);
        assert_eq!(doc.fields[1].structured_value, Some(vec![Node::text("hi")]));
        assert_eq!(doc.fields[2].kind, FieldKind::Unknown(9));
    }

    #[test]
    fn missing_document_properties_default() {
        let doc: Document = serde_json::from_value(json!({"name": "Bare"})).unwrap();
        assert_eq!(doc.slug, "");
        assert!(doc.fields.is_empty());
    }

    #[test]
    fn unreadable_parts_do_not_fail_the_event() {
        let event: PublishedEvent = serde_json::from_value(json!({
            "document": {
                "name": null,
                "slug": "odd",
                "createdAt": 1709658000000u64,
                "fields": [
                    {"type": "1", "name": "Quoted code", "value": "x"},
                    {"name": null, "value": "no type"},
                    {"type": 2, "name": "Body", "structuredValue": [
                        {"type": "text", "data": "hi"},
                        {"type": "comment", "data": "x"}
                    ]},
                    {"type": 3, "name": {"not": "a name"}},
                    "not a field"
                ]
            }
        }))
        .unwrap();

        let doc = event.document;
        assert_eq!(doc.name, "");
        assert_eq!(doc.created_at, json!(1709658000000u64));
        assert_eq!(doc.updated_at, Value::Null);
        assert_eq!(doc.fields.len(), 3);
        assert_eq!(doc.fields[0].kind, FieldKind::Invalid);
        assert_eq!(doc.fields[1].kind, FieldKind::Invalid);
        assert_eq!(doc.fields[1].name, "");
        assert_eq!(
            doc.fields[2].structured_value,
            Some(vec![Node::text("hi"), Node::Unknown])
        );
    }

    #[test]
    fn null_structured_value_is_none() {
        let field: DocumentField =
            serde_json::from_value(json!({"type": 2, "structuredValue": null})).unwrap();
        assert_eq!(field.kind, FieldKind::RichText);
        assert_eq!(field.structured_value, None);
    }

    #[test]
    fn field_kind_from_json() {
        assert_eq!(FieldKind::from(json!(4)), FieldKind::Image);
        assert_eq!(FieldKind::from(json!(12)), FieldKind::Unknown(12));
        assert_eq!(FieldKind::from(json!(-1)), FieldKind::Invalid);
        assert_eq!(FieldKind::from(json!(1.5)), FieldKind::Invalid);
        assert_eq!(FieldKind::from(json!("1")), FieldKind::Invalid);
        assert_eq!(FieldKind::from(Value::Null), FieldKind::Invalid);
    }

    #[test]
    fn field_kind_codes() {
        let kinds: Vec<FieldKind> = (1..=7).map(FieldKind::from).collect();
        assert_eq!(
            kinds,
            vec![
                FieldKind::String,
                FieldKind::RichText,
                FieldKind::Number,
                FieldKind::Image,
                FieldKind::Date,
                FieldKind::File,
                FieldKind::Unknown(7),
            ]
        );
    }
}
