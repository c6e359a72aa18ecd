//! Writing rendered documents to disk.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, Result};

/// Writes `content` to `path`, replacing any existing file.
///
/// Parent directories are not created.
///
/// # Errors
/// Returns an IO error naming the path if the file cannot be written.
pub fn write_document(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|e| AppError::io(format!("Failed to write {}", path.display()), e))?;

    tracing::info!(path = %path.display(), bytes = content.len(), "Document written");

    Ok(())
}
