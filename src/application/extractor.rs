//! Conversation extraction service.
//!
//! Streams an export file and builds conversation structures on demand.
//! Each call opens the file, scans only as far as it needs, and closes it.

use std::path::{Path, PathBuf};

use serde_json::value::RawValue;

use crate::domain::{Conversation, Result};
use crate::infrastructure::{open_export, ExportReader};

use super::parser::{parse_conversation, read_uuid};

/// First conversations of an export together with the export's size.
#[derive(Debug, Clone, Default)]
pub struct ExportListing {
    /// Conversations in file order, at most the requested limit.
    pub conversations: Vec<Conversation>,
    /// Number of conversations in the whole export.
    pub total: usize,
}

impl ExportListing {
    /// Conversations in the export that were not listed.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.total.saturating_sub(self.conversations.len())
    }
}

/// Reads conversations from a Claude export file.
#[derive(Debug, Clone)]
pub struct ConversationExtractor {
    path: PathBuf,
}

impl ConversationExtractor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the export file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Finds the first conversation whose identifier equals `uuid`.
    ///
    /// Conversations before the match are only checked for an identifier;
    /// nothing after the match is read. Returns `Ok(None)` when no
    /// conversation matches.
    ///
    /// # Errors
    /// Returns error if the file is missing, is not a JSON array, or the
    /// matching conversation (or an envelope before it) is malformed.
    pub fn extract_conversation(&self, uuid: &str) -> Result<Option<Conversation>> {
        let mut stream = self.open()?;

        while let Some((index, raw)) = stream.next_element::<Box<RawValue>>()? {
            let candidate = read_uuid(&raw, index)?;
            if candidate == uuid {
                tracing::info!(index, "Found conversation {uuid}");
                return parse_conversation(&raw, index).map(Some);
            }
            tracing::trace!(index, uuid = %candidate, "Skipping conversation");
        }

        tracing::info!(
            "Conversation {uuid} not found after scanning {} conversations",
            stream.consumed()
        );

        Ok(None)
    }

    /// Returns up to `limit` conversations in file order.
    ///
    /// # Errors
    /// Returns error if the file is missing, is not a JSON array, or one of
    /// the listed conversations is malformed.
    pub fn list_conversations(&self, limit: usize) -> Result<Vec<Conversation>> {
        let mut stream = self.open()?;
        read_conversations(&mut stream, limit)
    }

    /// Counts the conversations in the export without building them.
    ///
    /// # Errors
    /// Returns error if the file is missing or is not a well-formed JSON array.
    pub fn get_conversation_count(&self) -> Result<usize> {
        let mut stream = self.open()?;
        count_remaining(&mut stream)
    }

    /// Lists up to `limit` conversations and counts the rest in one pass.
    ///
    /// # Errors
    /// Same as [`Self::list_conversations`] and [`Self::get_conversation_count`].
    pub fn scan(&self, limit: usize) -> Result<ExportListing> {
        let mut stream = self.open()?;
        let conversations = read_conversations(&mut stream, limit)?;
        let total = count_remaining(&mut stream)?;

        tracing::info!(
            "Listed {} of {} conversations",
            conversations.len(),
            total
        );

        Ok(ExportListing {
            conversations,
            total,
        })
    }

    fn open(&self) -> Result<ExportReader> {
        let mut stream = open_export(&self.path)?;
        stream.begin()?;
        Ok(stream)
    }
}

/// Parses up to `limit` further conversations from `stream`.
fn read_conversations(stream: &mut ExportReader, limit: usize) -> Result<Vec<Conversation>> {
    let mut conversations = Vec::with_capacity(limit.min(64));

    while conversations.len() < limit {
        match stream.next_element::<Box<RawValue>>()? {
            Some((index, raw)) => conversations.push(parse_conversation(&raw, index)?),
            None => break,
        }
    }

    tracing::debug!("Parsed {} conversations", conversations.len());

    Ok(conversations)
}

/// Skips the rest of `stream`, returning the total element count.
fn count_remaining(stream: &mut ExportReader) -> Result<usize> {
    while stream.skip_element()? {}
    Ok(stream.consumed())
}
