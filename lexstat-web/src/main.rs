//! Lexstat Web Server
//!
//! Serves file CRUD and lexical statistics for one root directory.

use clap::Parser;
use lexstat_core::{init_logging, EmptyDatasetPolicy, LexstatConfig};
use lexstat_web::server::LexstatServerBuilder;
use lexstat_web::WebConfig;
use std::path::PathBuf;
use tracing::{error, info};

/// Lexstat Web Server - file storage and lexical statistics over HTTP
#[derive(Parser)]
#[command(name = "lexstat-web")]
#[command(about = "HTTP service for file CRUD and directory statistics")]
#[command(version)]
struct Args {
    /// Server host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Server port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory every request path is resolved against
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Empty dataset policy (error, zero)
    #[arg(long)]
    empty_policy: Option<EmptyDatasetPolicy>,

    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    /// Config file, then `LEXSTAT_*` environment, then command line
    fn web_config(&self, file_config: &LexstatConfig) -> WebConfig {
        let mut config = WebConfig::from_lexstat_config(file_config).with_env_overrides();

        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(root) = &self.root {
            config.root_dir = root.clone();
        }
        if let Some(policy) = self.empty_policy {
            config.empty_dataset_policy = policy;
        }
        config
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<LexstatConfig, Box<dyn std::error::Error>> {
    let config = match path {
        Some(path) => LexstatConfig::from_file(path)?,
        None => LexstatConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    let mut file_config = match load_config(args.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    file_config.logging.level = args.log_level.clone();
    file_config.logging.filter_directives = vec![
        format!("lexstat_web={}", args.log_level),
        format!("lexstat_engine={}", args.log_level),
        format!("lexstat_core={}", args.log_level),
        "tower_http=debug".to_string(),
    ];
    if let Err(e) = init_logging(&file_config.logging) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let config = args.web_config(&file_config);
    info!(address = %config.address(), root = %config.root_dir.display(), "Configuration loaded");

    let server = match LexstatServerBuilder::from_config(config).build().await {
        Ok(server) => server,
        Err(e) => {
            error!("Failed to build server: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.start().await {
        error!("Server failed: {}", e);
        std::process::exit(1);
    }
}
