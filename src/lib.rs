//! Claude Conversation Extractor - pull single conversations out of Claude
//! data exports.
//!
//! The export is a JSON array of conversations that can run to hundreds of
//! megabytes. [`ConversationExtractor`] streams it one element at a time, so
//! finding a conversation stops at the first match and listing stops after
//! the requested number of entries. [`MarkdownConverter`] renders the result.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use claude_conversation_extractor::{ConversationExtractor, MarkdownConverter};
//!
//! let extractor = ConversationExtractor::new("conversations.json");
//! if let Some(conversation) = extractor.extract_conversation("28d595a3-5db0-492d-a49a-af74f13de505")? {
//!     MarkdownConverter::new(&conversation).save_to_file(Path::new("conversation.md"))?;
//! }
//! # Ok::<(), claude_conversation_extractor::domain::AppError>(())
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

pub use application::{ConversationExtractor, ExportListing, MarkdownConverter, MarkdownOptions};
pub use domain::{AppError, Conversation, Result};
