use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "learnhub")]
#[command(about = "Local account and session manager for the LearnHub platform")]
#[command(version)]
pub struct Cli {
    /// Profile directory holding persisted accounts and session
    /// (defaults to <config_dir>/<storage.profile_dir>)
    #[arg(long, global = true)]
    pub profile_dir: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}
