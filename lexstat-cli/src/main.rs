//! Lexstat CLI - command-line interface for directory lexical statistics
//!
//! Runs the same engine as the web service directly against local paths.

use clap::{Parser, Subcommand};
use lexstat_core::{
    config_error, init_logging, log_operation_error, log_operation_start, log_operation_success,
    EmptyDatasetPolicy, ErrorContext, LexstatConfig, LexstatError, LexstatResult, LoggingConfig,
};
use lexstat_engine::StatsProcessor;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "lexstat")]
#[command(about = "Word and character statistics for text files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate statistics for every regular file under a directory
    Stats {
        /// Directory to scan
        dir: PathBuf,

        /// Report zeros instead of failing when there are no files or words
        #[arg(long)]
        allow_empty: bool,
    },

    /// Word statistics for a single file
    FileStats {
        /// File to scan
        file: PathBuf,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Initialize default configuration
        #[arg(long)]
        init: bool,

        /// Validate current configuration
        #[arg(long)]
        validate: bool,
    },
}

#[tokio::main]
async fn main() -> LexstatResult<()> {
    let cli = Cli::parse();

    let logging_config = cli_logging_config(cli.verbose);
    init_logging(&logging_config).map_err(|e| LexstatError::Config {
        message: format!("Failed to initialize logging: {}", e),
        source: Some(e),
        context: ErrorContext::new("cli")
            .with_operation("init_logging")
            .with_suggestion("Check logging configuration"),
    })?;

    info!("Starting Lexstat CLI v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Stats { dir, allow_empty } => {
            let config = load_config(cli.config.as_ref()).await?;
            handle_stats(&dir, allow_empty, &config)?;
        }
        Commands::FileStats { file } => {
            handle_file_stats(&file)?;
        }
        Commands::Config {
            show,
            init,
            validate,
        } => {
            handle_config(cli.config.as_ref(), show, init, validate).await?;
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout carries only command output
fn cli_logging_config(verbose: bool) -> LoggingConfig {
    let level = if verbose { "debug" } else { "warn" };
    LoggingConfig {
        level: level.to_string(),
        log_to_stderr: true,
        filter_directives: ["lexstat_core", "lexstat_engine", "lexstat_cli"]
            .iter()
            .map(|target| format!("{}={}", target, level))
            .collect(),
        ..LoggingConfig::default()
    }
}

fn default_config_paths() -> Vec<PathBuf> {
    [
        dirs::config_dir().map(|d| d.join("lexstat").join("config.toml")),
        dirs::home_dir().map(|d| d.join(".lexstat").join("config.toml")),
        Some(PathBuf::from("lexstat.toml")),
    ]
    .into_iter()
    .flatten()
    .collect()
}

async fn load_config(config_path: Option<&PathBuf>) -> LexstatResult<LexstatConfig> {
    if let Some(path) = config_path {
        info!("Loading configuration from {:?}", path);
        return LexstatConfig::from_file(path);
    }

    for path in default_config_paths() {
        if path.exists() {
            info!("Loading configuration from {:?}", path);
            return LexstatConfig::from_file(&path);
        }
    }

    info!("No configuration file found, using defaults");
    Ok(LexstatConfig::default())
}

fn stats_policy(allow_empty: bool, config: &LexstatConfig) -> EmptyDatasetPolicy {
    if allow_empty {
        EmptyDatasetPolicy::Zero
    } else {
        config.stats.empty_dataset_policy
    }
}

fn print_json<T: Serialize>(value: &T) -> LexstatResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn handle_stats(dir: &Path, allow_empty: bool, config: &LexstatConfig) -> LexstatResult<()> {
    log_operation_start!("dir_stats", dir = %dir.display());

    let processor = StatsProcessor::with_policy(stats_policy(allow_empty, config));
    let stats = processor.dir_stats(dir).inspect_err(|e| {
        log_operation_error!("dir_stats", e, dir = %dir.display());
    })?;

    log_operation_success!("dir_stats", files = stats.file_count);
    print_json(&stats)
}

fn handle_file_stats(file: &Path) -> LexstatResult<()> {
    log_operation_start!("file_stats", file = %file.display());

    let stats = StatsProcessor::new().file_stats(file).inspect_err(|e| {
        log_operation_error!("file_stats", e, file = %file.display());
    })?;

    log_operation_success!("file_stats", words = stats.word_count);
    print_json(&stats)
}

async fn handle_config(
    config_path: Option<&PathBuf>,
    show: bool,
    init: bool,
    validate: bool,
) -> LexstatResult<()> {
    if init {
        let path = match config_path {
            Some(path) => path.clone(),
            None => dirs::config_dir()
                .or_else(|| dirs::home_dir().map(|d| d.join(".config")))
                .ok_or_else(|| config_error!("No configuration directory available", "cli"))?
                .join("lexstat")
                .join("config.toml"),
        };
        init_config_file(&path).await?;
        println!("Configuration initialized at: {:?}", path);
    }

    if show {
        let config = load_config(config_path).await?;
        let rendered = toml::to_string_pretty(&config).map_err(|e| LexstatError::Config {
            message: format!("Failed to render configuration: {}", e),
            source: Some(Box::new(e)),
            context: ErrorContext::new("cli").with_operation("show_config"),
        })?;
        println!("{}", rendered);
    }

    if validate {
        let config = load_config(config_path).await?;
        match config.validate() {
            Ok(()) => println!("Configuration is valid"),
            Err(e) => {
                println!("Configuration validation failed: {}", e);
                return Err(e);
            }
        }
    }

    if !(init || show || validate) {
        println!("Use --show, --init or --validate");
    }

    Ok(())
}

async fn init_config_file(path: &Path) -> LexstatResult<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| LexstatError::from_io(e, parent, "cli", "create_config_dir"))?;
    }
    LexstatConfig::default().save_to_file(path)
}
