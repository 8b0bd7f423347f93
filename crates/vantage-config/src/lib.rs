//! Configuration for the Vantage viewer.
//!
//! Runtime-configurable settings that persist to disk as RON files, with
//! CLI overrides via clap.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{ApiConfig, Config, DebugConfig, ViewConfig};
pub use error::ConfigError;
