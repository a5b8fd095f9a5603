//! # Toolshop Storefront Entry Point
//!
//! ## Startup Sequence
//! 1. Parse flags (`--config`)
//! 2. Load configuration (file, then `TOOLSHOP_*` environment), logging
//!    through a temporary default subscriber
//! 3. Initialize tracing (stderr) with the configured filter
//! 4. Build the store and state holders
//! 5. Answer JSON requests on stdin, one per line, until EOF

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};

use toolshop_storefront::config::{AppConfig, DEFAULT_LOG_FILTER};
use toolshop_storefront::state::AppState;
use toolshop_storefront::{init_tracing, serve, with_startup_logging};

#[derive(Parser)]
#[command(name = "toolshop-storefront")]
#[command(about = "Tool shop storefront and admin console over JSON lines")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, env = "TOOLSHOP_CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.or_else(AppConfig::default_config_path);
    let loaded = with_startup_logging(std::io::stderr, || AppConfig::load(config_path.clone()));
    let log_filter = loaded
        .as_ref()
        .map(|c| c.log_filter.clone())
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter);

    let config = loaded.unwrap_or_else(|e| {
        warn!("Failed to load storefront config: {}. Using defaults.", e);
        AppConfig::default()
    });

    info!(config_path = ?config_path, "Starting Toolshop storefront");
    let app = AppState::from_config(config);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    serve(&app, stdin.lock(), stdout.lock())?;
    Ok(())
}
