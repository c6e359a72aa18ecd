//! Domain models for Claude conversation exports.
//!
//! These models mirror the JSON shape of a Claude data export. Unknown fields
//! are ignored, except inside [`Citation`] where they are kept verbatim.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::timestamp;

/// Title used when a conversation has no name.
pub const UNTITLED: &str = "Untitled";

/// Author of a chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sender {
    /// Message from the user.
    Human,
    /// Message from Claude.
    Assistant,
    /// Any other role, preserved as written in the export.
    Other(String),
}

impl From<String> for Sender {
    fn from(value: String) -> Self {
        match value.as_str() {
            "human" => Self::Human,
            "assistant" => Self::Assistant,
            _ => Self::Other(value),
        }
    }
}

impl From<Sender> for String {
    fn from(sender: Sender) -> Self {
        match sender {
            Sender::Human => "human".into(),
            Sender::Assistant => "assistant".into(),
            Sender::Other(value) => value,
        }
    }
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "Human"),
            Self::Assistant => write!(f, "Assistant"),
            Self::Other(value) => write!(f, "{value}"),
        }
    }
}

/// Account that owns a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub uuid: String,
}

/// Citation attached to a content block.
///
/// Exports currently carry no documented citation fields, so the whole
/// object is kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// A timestamped text segment within a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(with = "timestamp")]
    pub start_timestamp: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub stop_timestamp: DateTime<Utc>,
    /// Block type tag, e.g. `text`.
    #[serde(rename = "type")]
    pub content_type: String,
    pub text: String,
    #[serde(default)]
    pub citations: Vec<Citation>,
}

/// Reference to an attached or uploaded file.
///
/// Older exports list plain names, newer ones list objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Attachment {
    Name(String),
    Record(Map<String, Value>),
}

impl Attachment {
    /// Human-readable label for this reference.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Record(fields) => fields
                .get("file_name")
                .and_then(Value::as_str)
                .unwrap_or("(unnamed)"),
        }
    }
}

/// A single turn in a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub uuid: String,
    /// Plain-text body as provided by the export.
    pub text: String,
    /// Content blocks in original order.
    pub content: Vec<Content>,
    pub sender: Sender,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub files: Vec<Attachment>,
}

impl ChatMessage {
    /// Message body built from its content blocks.
    ///
    /// Non-empty block texts are joined by a blank line. Messages without any
    /// non-empty block fall back to `text`.
    #[must_use]
    pub fn body(&self) -> String {
        let blocks: Vec<&str> = self
            .content
            .iter()
            .map(|c| c.text.trim_end())
            .filter(|t| !t.is_empty())
            .collect();

        if blocks.is_empty() {
            self.text.trim_end().to_string()
        } else {
            blocks.join("\n\n")
        }
    }
}

/// A complete conversation with its messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub uuid: String,
    pub name: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
    pub account: Account,
    /// Messages in conversation order.
    #[serde(default)]
    pub chat_messages: Vec<ChatMessage>,
}

impl Conversation {
    /// Name to display, `Untitled` when the export has none.
    #[must_use]
    pub fn display_name(&self) -> &str {
        let name = self.name.trim();
        if name.is_empty() {
            UNTITLED
        } else {
            name
        }
    }

    /// Get total message count.
    #[must_use]
    pub const fn message_count(&self) -> usize {
        self.chat_messages.len()
    }

    /// Get human message count.
    #[must_use]
    pub fn human_message_count(&self) -> usize {
        self.chat_messages
            .iter()
            .filter(|m| m.sender == Sender::Human)
            .count()
    }

    /// Get assistant message count.
    #[must_use]
    pub fn assistant_message_count(&self) -> usize {
        self.chat_messages
            .iter()
            .filter(|m| m.sender == Sender::Assistant)
            .count()
    }
}

/// Whole export file parsed in one go.
///
/// Only suitable for small inputs; the extractor streams instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Export {
    pub conversations: Vec<Conversation>,
}
