//! Application layer - use cases and orchestration.
//!
//! This layer contains the extraction, conversion and formatting logic
//! the commands are built from.

pub mod converter;
pub mod extractor;
pub mod formatter;
pub mod parser;

pub use converter::{MarkdownConverter, MarkdownOptions};
pub use extractor::{ConversationExtractor, ExportListing};
pub use formatter::{
    format_conversation_json, format_conversations_table, format_extract_summary,
    format_listing_summary, OutputFormat,
};
