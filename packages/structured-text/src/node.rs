//! The structured text tree.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A node of a structured text value.
///
/// Serialized form:
///
/// ```json
/// {"type": "text", "data": "hello"}
/// {"type": "tag", "tag": "a", "attrs": {"href": "https://..."}, "children": [...]}
/// ```
///
/// Any other `type` becomes [`Node::Unknown`], which renders as nothing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// Text leaf.
    Text { data: String },
    /// Tagged element with ordered children.
    #[serde(rename = "tag")]
    Element {
        tag: Tag,
        #[serde(default, deserialize_with = "deserialize_nodes")]
        children: Vec<Node>,
        #[serde(default, deserialize_with = "null_as_default")]
        attrs: BTreeMap<String, Value>,
    },
    #[serde(other)]
    Unknown,
}

impl Node {
    pub fn text(data: impl Into<String>) -> Self {
        Node::Text { data: data.into() }
    }

    pub fn element(tag: Tag, children: Vec<Node>) -> Self {
        Node::Element {
            tag,
            children,
            attrs: BTreeMap::new(),
        }
    }

    pub fn link(href: impl Into<String>, children: Vec<Node>) -> Self {
        let mut attrs = BTreeMap::new();
        attrs.insert("href".to_string(), Value::String(href.into()));
        Node::Element {
            tag: Tag::Link,
            children,
            attrs,
        }
    }

    /// String attribute lookup. Non-string attribute values are ignored.
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            Node::Element { attrs, .. } => attrs.get(name).and_then(Value::as_str),
            Node::Text { .. } | Node::Unknown => None,
        }
    }
}

/// Deserialize a node list without letting one bad entry spoil the rest.
///
/// Entries that are not valid nodes become [`Node::Unknown`]. `null` or a
/// non-array value yields an empty list.
pub fn deserialize_nodes<'de, D>(deserializer: D) -> Result<Vec<Node>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(nodes_from_value(Value::deserialize(deserializer)?))
}

/// Like [`deserialize_nodes`], keeping `null` as `None`.
pub fn deserialize_optional_nodes<'de, D>(deserializer: D) -> Result<Option<Vec<Node>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        value => Ok(Some(nodes_from_value(value))),
    }
}

fn nodes_from_value(value: Value) -> Vec<Node> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| {
                Node::deserialize(item).unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "Malformed structured text node");
                    Node::Unknown
                })
            })
            .collect(),
        Value::Null => Vec::new(),
        other => {
            tracing::warn!(value = %other, "Structured text is not a list, ignoring");
            Vec::new()
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Element tag. Unrecognized names are kept in [`Tag::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Tag {
    Paragraph,
    Bold,
    Italic,
    Strikethrough,
    Link,
    LineBreak,
    CodeBlock,
    InlineCode,
    Blockquote,
    UnorderedList,
    OrderedList,
    ListItem,
    /// Heading level 1 through 6.
    Heading(u8),
    HorizontalRule,
    Unknown(String),
}

impl Tag {
    pub fn as_str(&self) -> &str {
        match self {
            Tag::Paragraph => "p",
            Tag::Bold => "strong",
            Tag::Italic => "em",
            Tag::Strikethrough => "s",
            Tag::Link => "a",
            Tag::LineBreak => "br",
            Tag::CodeBlock => "code",
            Tag::InlineCode => "inline_code",
            Tag::Blockquote => "blockquote",
            Tag::UnorderedList => "ul",
            Tag::OrderedList => "ol",
            Tag::ListItem => "li",
            Tag::Heading(1) => "h1",
            Tag::Heading(2) => "h2",
            Tag::Heading(3) => "h3",
            Tag::Heading(4) => "h4",
            Tag::Heading(5) => "h5",
            Tag::Heading(_) => "h6",
            Tag::HorizontalRule => "hr",
            Tag::Unknown(name) => name,
        }
    }
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        match name {
            "p" => Tag::Paragraph,
            "strong" => Tag::Bold,
            "em" => Tag::Italic,
            "s" => Tag::Strikethrough,
            "a" => Tag::Link,
            "br" => Tag::LineBreak,
            "code" => Tag::CodeBlock,
            "inline_code" => Tag::InlineCode,
            "blockquote" => Tag::Blockquote,
            "ul" => Tag::UnorderedList,
            "ol" => Tag::OrderedList,
            "li" => Tag::ListItem,
            "h1" => Tag::Heading(1),
            "h2" => Tag::Heading(2),
            "h3" => Tag::Heading(3),
            "h4" => Tag::Heading(4),
            "h5" => Tag::Heading(5),
            "h6" => Tag::Heading(6),
            "hr" => Tag::HorizontalRule,
            other => Tag::Unknown(other.to_string()),
        }
    }
}

impl From<String> for Tag {
    fn from(name: String) -> Self {
        match Tag::from(name.as_str()) {
            Tag::Unknown(_) => Tag::Unknown(name),
            tag => tag,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
