//! learnhub - local account and session manager
//!
//! # Examples
//!
//! ```bash
//! learnhub signup --name Asha --email asha@x.com --password secret1
//! learnhub whoami --pretty
//! learnhub visit /library
//! learnhub logout
//! ```

use lh_cli::{Cli, CliErrorResult, Runner, logger, session_config};
use lh_config::Config;
use lh_storage::{FileStore, KeyValueStore};

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::{debug, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!("Command failed: {e}");
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliErrorResult<String> {
    // Load and validate configuration
    let config_dir = Config::config_dir()?;
    let config = Config::load_from(&config_dir)?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path(&config_dir),
        config.logging.colored,
    )?;

    info!("Starting learnhub v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let profile_dir = cli
        .profile_dir
        .unwrap_or_else(|| config.profile_path(&config_dir));
    info!("Using profile {}", profile_dir.display());

    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(profile_dir));
    let session = lh_auth::SessionManager::new(store, session_config(&config.auth));

    let output = Runner::new(&session).run(cli.command).await?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    Ok(json)
}
