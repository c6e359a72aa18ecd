//! Configuration model.
//!
//! Every section and field has a default so a partial (or absent)
//! configuration file is always valid.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Settings for `list-conversations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConfig {
    /// Number of conversations shown when `--limit` is not given.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

const fn default_limit() -> usize {
    10
}

/// Settings for written documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory for documents written without `--output`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    /// Document format: markdown or json.
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: None,
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "markdown".into()
}

/// Settings for the Markdown document layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkdownConfig {
    /// Print each message's creation time under its header.
    #[serde(default = "default_true")]
    pub timestamps: bool,

    /// List attachment and file references after each message.
    #[serde(default = "default_true")]
    pub attachments: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            timestamps: true,
            attachments: true,
        }
    }
}

const fn default_true() -> bool {
    true
}

/// Complete application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub list: ListConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub markdown: MarkdownConfig,
}

impl AppConfig {
    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".claude-extract")
    }

    /// Get the default config file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        Self::default_data_dir().join("config.toml")
    }

    /// Where a conversation is written when no explicit path is given.
    ///
    /// Path separators in the identifier are replaced so the file always
    /// lands directly in the output directory.
    #[must_use]
    pub fn default_output_path(&self, uuid: &str, extension: &str) -> PathBuf {
        let file_stem: String = uuid
            .chars()
            .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
            .collect();
        let file_name = format!("{file_stem}.{extension}");

        match &self.output.dir {
            Some(dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.list.limit, 10);
        assert_eq!(config.output.format, "markdown");
        assert!(config.output.dir.is_none());
        assert!(config.markdown.timestamps);
        assert!(config.markdown.attachments);
    }

    #[test]
    fn test_default_output_path() {
        let mut config = AppConfig::default();
        assert_eq!(
            config.default_output_path("a1", "md"),
            PathBuf::from("a1.md")
        );

        config.output.dir = Some(PathBuf::from("exports"));
        assert_eq!(
            config.default_output_path("../evil/id", "json"),
            PathBuf::from("exports").join(".._evil_id.json")
        );
    }

    #[test]
    fn test_default_config_path_under_data_dir() {
        let path = AppConfig::default_config_path();
        assert!(path.ends_with(".claude-extract/config.toml"));
    }
}
