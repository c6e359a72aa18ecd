//! Output formatting for extracted conversations.
//!
//! Covers the document formats written to disk and the console views
//! printed by the commands.

use std::path::Path;

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};

use crate::domain::Conversation;

use super::extractor::ExportListing;

/// Document format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable Markdown format.
    #[default]
    Markdown,
    /// JSON format for programmatic use.
    Json,
}

impl OutputFormat {
    /// File extension for documents in this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Json => "json",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {s}. Use: markdown, json")),
        }
    }
}

/// Formats a conversation as pretty-printed JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn format_conversation_json(conversation: &Conversation) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(conversation).map(|mut json| {
        json.push('\n');
        json
    })
}

/// Formats a table listing of conversations, numbered from 1.
pub fn format_conversations_table(conversations: &[Conversation]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "Name", "UUID", "Created", "Msgs"]);

    for (i, conv) in conversations.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            truncate(conv.display_name(), 40),
            conv.uuid.clone(),
            conv.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            conv.message_count().to_string(),
        ]);
    }

    table.to_string()
}

/// Formats the totals line under a listing.
pub fn format_listing_summary(listing: &ExportListing) -> String {
    let mut out = format!(
        "{} Found {} conversations, showing first {}",
        "📋".bold(),
        listing.total.to_string().cyan(),
        listing.conversations.len().to_string().cyan()
    );

    if listing.remaining() > 0 {
        out.push_str(&format!(
            "\n... and {} more conversations",
            listing.remaining()
        ));
    }

    out
}

/// Formats the success report of an extraction.
pub fn format_extract_summary(conversation: &Conversation, output: &Path) -> String {
    format!(
        "{} Conversation extracted successfully!\n  📁 Output: {}\n  💬 Messages: {}",
        "✓".green().bold(),
        output.display().to_string().cyan(),
        conversation.message_count().to_string().cyan()
    )
}

/// Truncates a string to max length (in characters) with ellipsis.
fn truncate(s: &str, max_len: usize) -> String {
    let s = s.lines().next().unwrap_or(s);
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn conversation(uuid: &str, name: &str) -> Conversation {
        serde_json::from_value(json!({
            "uuid": uuid,
            "name": name,
            "created_at": "2024-01-01T08:30:00Z",
            "updated_at": "2024-01-01T08:30:00Z",
            "account": {"uuid": "acc"}
        }))
        .unwrap()
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world!", 8), "hello...");
        assert_eq!(truncate("first line\nsecond", 20), "first line");
        assert_eq!(truncate("ünïcödé text", 6), "ünï...");
    }

    #[test]
    fn test_output_format_from_str() {
        assert!(matches!(
            "markdown".parse::<OutputFormat>(),
            Ok(OutputFormat::Markdown)
        ));
        assert!(matches!("MD".parse::<OutputFormat>(), Ok(OutputFormat::Markdown)));
        assert!(matches!(
            "json".parse::<OutputFormat>(),
            Ok(OutputFormat::Json)
        ));
        assert!("table".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Json.extension(), "json");
    }

    #[test]
    fn test_table_lists_in_order() {
        let table = format_conversations_table(&[conversation("a1", "Alpha"), conversation("b2", "")]);
        let alpha = table.find("Alpha").unwrap();
        let untitled = table.find("Untitled").unwrap();
        assert!(alpha < untitled);
        assert!(table.contains("2024-01-01 08:30:00"));
    }

    #[test]
    fn test_listing_summary_mentions_rest() {
        colored::control::set_override(false);
        let listing = ExportListing {
            conversations: vec![conversation("a1", "Alpha")],
            total: 4,
        };
        let summary = format_listing_summary(&listing);
        assert!(summary.contains("Found 4 conversations, showing first 1"));
        assert!(summary.contains("... and 3 more conversations"));
    }

    #[test]
    fn test_json_round_trips() {
        let conv = conversation("a1", "Alpha");
        let json = format_conversation_json(&conv).unwrap();
        let back: Conversation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, conv);
    }
}
