//! lh-cli library
//!
//! Exposes the command runner so tests can drive a profile without
//! spawning the binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod runner;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliErrorResult};
pub use runner::{Runner, session_config};
