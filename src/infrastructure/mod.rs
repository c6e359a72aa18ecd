//! Infrastructure layer - external adapters (filesystem, configuration).
//!
//! This layer handles all I/O operations and external dependencies.

pub mod config;
pub mod export_file;
pub mod json_stream;
pub mod output;

pub use config::{ensure_config_exists, load_config, load_config_from_file};
pub use export_file::{open_export, ExportReader};
pub use json_stream::JsonArrayReader;
pub use output::write_document;
