//! Export file access.
//!
//! Opens a Claude export for streaming. The handle lives only as long as the
//! returned reader, so each operation opens, scans and closes the file.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use crate::domain::{AppError, Result};

use super::json_stream::JsonArrayReader;

/// Reader over the conversations array of an export file.
pub type ExportReader = JsonArrayReader<BufReader<File>>;

/// Opens an export file for streaming.
///
/// # Errors
/// Returns `FileNotFound` if the path does not exist, or an IO error if it
/// cannot be opened.
pub fn open_export(path: &Path) -> Result<ExportReader> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => AppError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => AppError::io(format!("Failed to open {}", path.display()), e),
    })?;

    tracing::debug!("Opened export: {}", path.display());

    Ok(JsonArrayReader::new(BufReader::new(file)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.json");

        match open_export(&path) {
            Err(AppError::FileNotFound { path: reported }) => assert_eq!(reported, path),
            Err(e) => panic!("unexpected error: {e}"),
            Ok(_) => panic!("expected FileNotFound"),
        }
    }

    #[test]
    fn test_open_and_stream() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[{{"uuid": "a"}}, {{"uuid": "b"}}]"#).unwrap();
        file.flush().unwrap();

        let mut reader = open_export(file.path()).unwrap();
        while reader.skip_element().unwrap() {}
        assert_eq!(reader.consumed(), 2);
    }
}
