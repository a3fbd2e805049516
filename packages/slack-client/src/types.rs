use serde::{Deserialize, Serialize};

/// Text object embedded in blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Text {
    Mrkdwn { text: String },
    PlainText { text: String },
}

impl Text {
    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Text::Mrkdwn { text: text.into() }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Text::PlainText { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Text::Mrkdwn { text } | Text::PlainText { text } => text,
        }
    }
}

/// A Block Kit layout block.
///
/// Only the block types this service emits are modeled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Context {
        elements: Vec<Text>,
    },
    Header {
        text: Text,
    },
    Divider,
    Section {
        text: Text,
    },
    Image {
        image_url: String,
        alt_text: String,
        title: Text,
    },
}

impl Block {
    /// Context block of mrkdwn elements.
    pub fn context<I, S>(elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Block::Context {
            elements: elements.into_iter().map(Text::mrkdwn).collect(),
        }
    }

    pub fn header(text: impl Into<String>) -> Self {
        Block::Header {
            text: Text::plain(text),
        }
    }

    pub fn divider() -> Self {
        Block::Divider
    }

    /// Section block with mrkdwn text.
    pub fn section(text: impl Into<String>) -> Self {
        Block::Section {
            text: Text::mrkdwn(text),
        }
    }

    /// Image block whose alt text and title are both `name`.
    pub fn image(url: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Block::Image {
            image_url: url.into(),
            alt_text: name.clone(),
            title: Text::plain(name),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Block::Context { .. } => "context",
            Block::Header { .. } => "header",
            Block::Divider => "divider",
            Block::Section { .. } => "section",
            Block::Image { .. } => "image",
        }
    }
}

/// Body of an incoming webhook message.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookMessage<'a> {
    pub blocks: &'a [Block],
}
