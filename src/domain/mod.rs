//! Domain layer - core types for conversation exports.
//!
//! This layer contains the export data model, configuration types and
//! error types without any IO.

pub mod config;
pub mod error;
pub mod models;
pub mod timestamp;

pub use config::{AppConfig, ListConfig, MarkdownConfig, OutputConfig};
pub use error::{AppError, Result};
pub use models::{
    Account, Attachment, ChatMessage, Citation, Content, Conversation, Export, Sender, UNTITLED,
};
