//! Domain-level error types for the conversation extractor.
//!
//! All errors are typed with `thiserror` and carry enough context (paths,
//! element positions, identifiers) to be reported to the user directly.
//! A conversation that is simply absent from an export is not an error:
//! lookups return `Ok(None)` for that case.

use std::path::PathBuf;
use thiserror::Error;

/// Application-level errors.
#[derive(Error, Debug)]
pub enum AppError {
    /// Export file does not exist.
    #[error("Export file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The export is not valid JSON or its top-level value is not an array.
    #[error("Malformed export: {message}")]
    Structure {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// A single conversation in the export is missing or has malformed fields.
    #[error("Invalid conversation at {location}: {message}")]
    InvalidConversation {
        location: String,
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// JSON rendering failed.
    #[error("JSON parse error: {message}")]
    JsonParse {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Configuration or argument error.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// IO operation failed.
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl AppError {
    /// Create a structural error without an underlying parser error.
    pub fn structure(message: impl Into<String>) -> Self {
        Self::Structure {
            message: message.into(),
            source: None,
        }
    }

    /// Create a structural error from a JSON syntax error.
    pub fn malformed_json(context: &str, err: serde_json::Error) -> Self {
        Self::Structure {
            message: format!("{context}: {err}"),
            source: Some(err),
        }
    }

    /// Create a validation error for the conversation at `index`.
    pub fn invalid_conversation(
        index: usize,
        uuid: Option<&str>,
        message: impl Into<String>,
        source: Option<serde_json::Error>,
    ) -> Self {
        let location = match uuid {
            Some(uuid) => format!("index {index} (uuid {uuid})"),
            None => format!("index {index}"),
        };

        Self::InvalidConversation {
            location,
            message: message.into(),
            source,
        }
    }

    /// Create a JSON parse error.
    pub fn json_parse(err: serde_json::Error) -> Self {
        Self::JsonParse {
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create an IO error with context.
    pub fn io(message: impl Into<String>, err: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(err),
        }
    }
}

/// Result type alias using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
