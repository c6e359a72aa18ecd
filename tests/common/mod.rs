//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{json, Value};
use tempfile::TempDir;

/// Builder for a single conversation object in export format
pub struct ConversationBuilder {
    uuid: String,
    name: String,
    messages: Vec<Value>,
}

impl ConversationBuilder {
    pub fn new(uuid: &str) -> Self {
        Self {
            uuid: uuid.to_string(),
            name: format!("Conversation {uuid}"),
            messages: Vec::new(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn message(mut self, sender: &str, text: &str) -> Self {
        let index = self.messages.len();
        self.messages.push(json!({
            "uuid": format!("{}-m{index}", self.uuid),
            "text": text,
            "content": [{
                "start_timestamp": "2024-01-01T00:00:00Z",
                "stop_timestamp": "2024-01-01T00:00:01Z",
                "type": "text",
                "text": text,
                "citations": []
            }],
            "sender": sender,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z",
            "attachments": [],
            "files": []
        }));
        self
    }

    pub fn to_json(&self) -> Value {
        json!({
            "uuid": self.uuid,
            "name": self.name,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z",
            "account": {"uuid": "acc1"},
            "chat_messages": self.messages
        })
    }
}

/// Temporary working directory holding an export file
pub struct ExportFixture {
    temp_dir: TempDir,
    export_path: PathBuf,
}

impl ExportFixture {
    /// Write the given conversations as `conversations.json`
    pub fn new(conversations: &[ConversationBuilder]) -> Self {
        let export: Vec<Value> = conversations.iter().map(ConversationBuilder::to_json).collect();
        Self::raw(&serde_json::to_string_pretty(&export).expect("Failed to serialize export"))
    }

    /// Write arbitrary content as `conversations.json`
    pub fn raw(content: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let export_path = temp_dir.path().join("conversations.json");
        fs::write(&export_path, content).expect("Failed to write export");
        Self {
            temp_dir,
            export_path,
        }
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn export_path(&self) -> &Path {
        &self.export_path
    }
}

/// The worked example export with a single conversation
pub const EXAMPLE_EXPORT: &str = r#"[{"uuid":"a1","name":"Test","created_at":"2024-01-01T00:00:00Z","updated_at":"2024-01-01T00:00:00Z","account":{"uuid":"acc1"},"chat_messages":[{"uuid":"m1","text":"hi","content":[{"start_timestamp":"2024-01-01T00:00:00Z","stop_timestamp":"2024-01-01T00:00:01Z","type":"text","text":"hi","citations":[]}],"sender":"human","created_at":"2024-01-01T00:00:00Z","updated_at":"2024-01-01T00:00:00Z","attachments":[],"files":[]}]}]"#;
