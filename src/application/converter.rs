//! Markdown rendering of a single conversation.
//!
//! Rendering is a pure function of the conversation and the options: the
//! same input always produces byte-identical output.

use std::path::Path;

use chrono::{DateTime, Utc};

use crate::domain::{Attachment, ChatMessage, Conversation, MarkdownConfig, Result, Sender};
use crate::infrastructure::write_document;

/// Layout switches for the Markdown document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkdownOptions {
    /// Print each message's creation time under its header.
    pub timestamps: bool,
    /// List attachment and file references after each message.
    pub attachments: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            timestamps: true,
            attachments: true,
        }
    }
}

impl From<&MarkdownConfig> for MarkdownOptions {
    fn from(config: &MarkdownConfig) -> Self {
        Self {
            timestamps: config.timestamps,
            attachments: config.attachments,
        }
    }
}

/// Converts a conversation into a Markdown document.
#[derive(Debug, Clone)]
pub struct MarkdownConverter<'a> {
    conversation: &'a Conversation,
    options: MarkdownOptions,
}

impl<'a> MarkdownConverter<'a> {
    #[must_use]
    pub fn new(conversation: &'a Conversation) -> Self {
        Self {
            conversation,
            options: MarkdownOptions::default(),
        }
    }

    #[must_use]
    pub const fn with_options(mut self, options: MarkdownOptions) -> Self {
        self.options = options;
        self
    }

    /// Renders the whole document.
    #[must_use]
    pub fn convert(&self) -> String {
        let conv = self.conversation;
        let mut out = String::new();

        out.push_str(&format!("# {}\n\n", conv.display_name()));
        out.push_str(&format!("**Conversation ID:** `{}`\n", conv.uuid));
        out.push_str(&format!("**Created:** {}\n", format_timestamp(&conv.created_at)));
        out.push_str(&format!("**Updated:** {}\n", format_timestamp(&conv.updated_at)));
        out.push_str(&format!(
            "**Messages:** {} ({} human, {} assistant)\n\n",
            conv.message_count(),
            conv.human_message_count(),
            conv.assistant_message_count()
        ));
        out.push_str("---\n\n");

        for message in &conv.chat_messages {
            self.push_message(&mut out, message);
        }

        out
    }

    /// Renders the document and writes it to `path`, replacing any file there.
    ///
    /// # Errors
    /// Returns an IO error naming the path if it cannot be written.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        write_document(path, &self.convert())
    }

    fn push_message(&self, out: &mut String, message: &ChatMessage) {
        out.push_str(&format!("## {}\n\n", role_heading(&message.sender)));

        if self.options.timestamps {
            out.push_str(&format!("*{}*\n\n", format_timestamp(&message.created_at)));
        }

        let body = message.body();
        if !body.is_empty() {
            out.push_str(&body);
            out.push_str("\n\n");
        }

        if self.options.attachments {
            push_references(out, "Attachments", &message.attachments);
            push_references(out, "Files", &message.files);
        }

        out.push_str("---\n\n");
    }
}

fn role_heading(sender: &Sender) -> String {
    let icon = match sender {
        Sender::Human => "👤",
        Sender::Assistant => "🤖",
        Sender::Other(_) => "❓",
    };
    format!("{icon} {sender}")
}

fn push_references(out: &mut String, label: &str, refs: &[Attachment]) {
    if refs.is_empty() {
        return;
    }

    out.push_str(&format!("**{label}:**\n\n"));
    for reference in refs {
        out.push_str(&format!("- {}\n", reference.label()));
    }
    out.push('\n');
}

fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
