//! CLI interface using clap.
//!
//! Provides command-line arguments and subcommands for the tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Claude Conversation Extractor - Extract Claude conversations from JSON
/// exports and convert them to Markdown.
#[derive(Parser, Debug)]
#[command(name = "claude-extract")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (use multiple times for more verbosity).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ~/.claude-extract/config.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract a conversation by UUID and convert it to Markdown.
    Extract {
        /// UUID of the conversation to extract.
        #[arg(short, long)]
        uuid: String,

        /// Path to the Claude export JSON file.
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (defaults to <uuid>.md).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Document format: markdown or json.
        #[arg(short, long)]
        format: Option<String>,
    },

    /// List available conversations in the export file.
    ListConversations {
        /// Path to the Claude export JSON file.
        #[arg(short, long)]
        input: PathBuf,

        /// Maximum number of conversations to list.
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show the configuration file location and effective settings.
    Config {
        /// Write the default configuration file if it does not exist.
        #[arg(long)]
        init: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_args() {
        let cli = Cli::try_parse_from([
            "claude-extract",
            "extract",
            "--uuid",
            "a1",
            "--input",
            "export.json",
            "--verbose",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Extract {
                uuid,
                input,
                output,
                format,
            } => {
                assert_eq!(uuid, "a1");
                assert_eq!(input, PathBuf::from("export.json"));
                assert!(output.is_none());
                assert!(format.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_list_short_args() {
        let cli =
            Cli::try_parse_from(["claude-extract", "list-conversations", "-i", "x.json", "-l", "3"])
                .unwrap();
        assert!(matches!(
            cli.command,
            Commands::ListConversations { limit: Some(3), .. }
        ));
    }

    #[test]
    fn test_extract_requires_uuid() {
        assert!(Cli::try_parse_from(["claude-extract", "extract", "-i", "x.json"]).is_err());
    }
}
