//! Claude Conversation Extractor - Extract conversations from Claude data
//! exports and convert them to Markdown.
//!
//!   claude-extract list-conversations -i conversations.json
//!   claude-extract extract -u <uuid> -i conversations.json -o chat.md
//!   claude-extract config --init

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use claude_conversation_extractor::application::{
    format_conversation_json, format_conversations_table, format_extract_summary,
    format_listing_summary, ConversationExtractor, MarkdownConverter, MarkdownOptions,
    OutputFormat,
};
use claude_conversation_extractor::cli::{Cli, Commands};
use claude_conversation_extractor::domain::{self, AppConfig, AppError};
use claude_conversation_extractor::infrastructure::{
    ensure_config_exists, load_config, write_document,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);
    let verbose = cli.verbose > 0;

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            report_error(e, verbose);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic.
fn run(cli: Cli) -> domain::Result<ExitCode> {
    let verbose = cli.verbose > 0;
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Extract {
            uuid,
            input,
            output,
            format,
        } => {
            let config = load_config(config_path)?;
            cmd_extract(&config, &uuid, &input, output, format.as_deref(), verbose)
        }
        Commands::ListConversations { input, limit } => {
            let config = load_config(config_path)?;
            cmd_list(&input, limit.unwrap_or(config.list.limit))?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Config { init } => {
            cmd_config(config_path, init)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Extract one conversation and write it to disk.
fn cmd_extract(
    config: &AppConfig,
    uuid: &str,
    input: &Path,
    output: Option<PathBuf>,
    format: Option<&str>,
    verbose: bool,
) -> domain::Result<ExitCode> {
    let format: OutputFormat = format
        .unwrap_or(config.output.format.as_str())
        .parse()
        .map_err(|message| AppError::Config { message })?;

    if verbose {
        println!("🔍 Loading export file: {}", input.display());
        println!("🎯 Searching for conversation: {uuid}");
    }

    let extractor = ConversationExtractor::new(input);
    let Some(conversation) = extractor.extract_conversation(uuid)? else {
        eprintln!(
            "{} Conversation with UUID '{}' not found",
            "✗".red().bold(),
            uuid
        );
        return Ok(ExitCode::FAILURE);
    };

    if verbose {
        println!("✅ Found conversation: {}", conversation.display_name());
    }

    let path = match output {
        Some(path) => path,
        None => {
            if let Some(dir) = &config.output.dir {
                std::fs::create_dir_all(dir).map_err(|e| {
                    AppError::io(format!("Failed to create directory {}", dir.display()), e)
                })?;
            }
            config.default_output_path(uuid, format.extension())
        }
    };

    match format {
        OutputFormat::Markdown => {
            if verbose {
                println!("📝 Converting to markdown...");
            }
            MarkdownConverter::new(&conversation)
                .with_options(MarkdownOptions::from(&config.markdown))
                .save_to_file(&path)?;
        }
        OutputFormat::Json => {
            let json = format_conversation_json(&conversation).map_err(AppError::json_parse)?;
            write_document(&path, &json)?;
        }
    }

    println!("{}", format_extract_summary(&conversation, &path));

    Ok(ExitCode::SUCCESS)
}

/// List conversations command.
fn cmd_list(input: &Path, limit: usize) -> domain::Result<()> {
    println!("🔍 Loading export file: {}", input.display());

    let listing = ConversationExtractor::new(input).scan(limit)?;

    if listing.total == 0 {
        println!("📭 No conversations found in the export file");
        return Ok(());
    }

    if !listing.conversations.is_empty() {
        println!("{}", format_conversations_table(&listing.conversations));
    }
    println!();
    println!("{}", format_listing_summary(&listing));

    Ok(())
}

/// Show (and optionally create) the configuration file.
fn cmd_config(explicit: Option<&Path>, init: bool) -> domain::Result<()> {
    let path = explicit.map_or_else(AppConfig::default_config_path, Path::to_path_buf);

    if init {
        if ensure_config_exists(&path)? {
            println!("{} Created {}", "✓".green().bold(), path.display());
        } else {
            println!("Config already exists: {}", path.display());
        }
    }

    let config = if path.exists() {
        load_config(Some(&path))?
    } else {
        AppConfig::default()
    };

    let rendered = toml::to_string_pretty(&config).map_err(|e| AppError::Config {
        message: format!("Failed to serialize config: {e}"),
    })?;

    println!("{} {}", "📂 Config file:".bold(), path.display());
    if !path.exists() {
        println!("   (not present, showing defaults; create it with `config --init`)");
    }
    println!();
    print!("{rendered}");

    Ok(())
}

/// Print an error; verbose mode adds the cause chain.
fn report_error(err: AppError, verbose: bool) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if verbose {
        eprintln!();
        eprintln!("{:?}", anyhow::Error::new(err));
    }
}

/// Setup tracing/logging based on verbosity level.
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
