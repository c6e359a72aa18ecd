//! Configuration file management.
//!
//! Handles loading the TOML configuration file and writing the default one.

use std::fs;
use std::path::Path;

use crate::domain::{AppConfig, AppError, Result};

/// Default configuration file content.
pub const DEFAULT_CONFIG: &str = r#"# Claude Conversation Extractor Configuration
# Auto-generated - edit as needed

[list]
# Conversations shown by list-conversations without --limit (default: 10)
limit = 10

[output]
# Directory for documents written without --output (default: current directory)
# dir = "exports"

# Document format: markdown or json
format = "markdown"

[markdown]
# Show each message's creation time under its header
timestamps = true

# List attachment and file references after each message
attachments = true
"#;

/// Load configuration from `explicit`, or from the default location.
///
/// An explicitly given file must exist; a missing default file yields the
/// built-in defaults.
///
/// # Errors
/// Returns error if the file cannot be read or parsed.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(AppError::Config {
                message: format!("Config file not found: {}", path.display()),
            });
        }
        return load_config_from_file(path);
    }

    let config_path = AppConfig::default_config_path();
    if config_path.exists() {
        load_config_from_file(&config_path)
    } else {
        tracing::debug!("No config at {}, using defaults", config_path.display());
        Ok(AppConfig::default())
    }
}

/// Load configuration from a specific file.
///
/// # Errors
/// Returns error if file cannot be read or parsed.
pub fn load_config_from_file(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::io(format!("Failed to read config file: {}", path.display()), e))?;

    let config = toml::from_str(&content).map_err(|e| AppError::Config {
        message: format!("Failed to parse config file {}: {e}", path.display()),
    })?;

    tracing::debug!(path = %path.display(), "Configuration loaded");

    Ok(config)
}

/// Create the default configuration file if it doesn't exist.
///
/// Returns `true` when a new file was written.
///
/// # Errors
/// Returns error if file cannot be created.
pub fn ensure_config_exists(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AppError::io("Failed to create config directory", e))?;
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| AppError::io("Failed to create default config", e))?;

    tracing::info!(path = %config_path.display(), "Created default configuration");

    Ok(true)
}
