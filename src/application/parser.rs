//! Conversation parsing from raw export elements.
//!
//! Elements arrive as raw JSON text. Looking up a conversation only needs its
//! identifier, so the envelope is read first and the full model is built only
//! when it is actually wanted.

use serde::Deserialize;
use serde_json::value::RawValue;

use crate::domain::{AppError, Conversation, Result};

/// Identifier-only view of a conversation.
///
/// Every other field is skipped syntactically without being built.
#[derive(Debug, Deserialize)]
struct ConversationEnvelope {
    uuid: String,
}

/// Reads the identifier of the conversation element at `index`.
///
/// # Errors
/// Returns error if the element has no string `uuid`.
pub fn read_uuid(raw: &RawValue, index: usize) -> Result<String> {
    serde_json::from_str::<ConversationEnvelope>(raw.get())
        .map(|envelope| envelope.uuid)
        .map_err(|e| AppError::invalid_conversation(index, None, e.to_string(), Some(e)))
}

/// Parses the full conversation element at `index`.
///
/// # Errors
/// Returns error if a required field is missing or malformed. The error
/// names the element's index and, when readable, its identifier.
pub fn parse_conversation(raw: &RawValue, index: usize) -> Result<Conversation> {
    serde_json::from_str(raw.get()).map_err(|e| {
        let uuid = read_uuid(raw, index).ok();
        AppError::invalid_conversation(index, uuid.as_deref(), e.to_string(), Some(e))
    })
}
