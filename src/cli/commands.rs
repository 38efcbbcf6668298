//! CLI command implementations
//!
//! `start` follows a fixed boot sequence: configuration load, logging init,
//! store construction, then the HTTP serving loop. `main.rs` stays free of
//! all of this.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::store::SubmissionStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the backing file holding the submission collection
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// HTTP server settings
    #[serde(default)]
    pub http: HttpServerConfig,
}

fn default_data_file() -> String {
    "./db.json".to_string()
}

impl Config {
    /// Load configuration from file.
    ///
    /// A missing file yields the default configuration; an unreadable or
    /// malformed file is an error.
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default_with_data_file())
            }
            Err(e) => return Err(CliError::config(format!("Failed to read config: {}", e))),
        };

        serde_json::from_str(&content)
            .map_err(|e| CliError::config(format!("Invalid config JSON: {}", e)))
    }

    fn default_with_data_file() -> Self {
        Self {
            data_file: default_data_file(),
            http: HttpServerConfig::default(),
        }
    }
}

/// Parse arguments and dispatch to the requested command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Init { config } => init(&config),
        Command::Start { config } => start(&config),
    }
}

/// Write a default configuration file at `config_path`.
///
/// Refuses to overwrite an existing file.
pub fn init(config_path: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::config(format!(
            "Config already exists: {}",
            config_path.display()
        )));
    }

    let config = Config::default_with_data_file();
    let content = serde_json::to_string_pretty(&config)
        .map_err(|e| CliError::config(format!("Failed to serialize config: {}", e)))?;
    fs::write(config_path, content)?;

    println!("Wrote default config to {}", config_path.display());
    Ok(())
}

/// Start the submitdb server.
///
/// Boot sequence:
/// 1. Configuration load
/// 2. Logging init
/// 3. Store construction over the configured backing file
/// 4. HTTP server activation
pub fn start(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "submitdb=info,tower_http=info".into()),
        )
        .init();

    tracing::info!(data_file = %config.data_file, "booting submitdb");

    let store = SubmissionStore::new(&config.data_file);
    let server = HttpServer::with_config(config.http, store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}
