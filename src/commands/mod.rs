//! CLI command definitions and dispatch.

pub mod config;
pub mod filter;
pub mod queue;
pub mod save;

use clap::{Parser, Subcommand};

use recordhook_core::config::AppConfig;
use recordhook_core::result::AppResult;

use crate::output::OutputFormat;

/// recordhook — hookable record pipelines
#[derive(Debug, Parser)]
#[command(name = "recordhook", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Save a record through the hookable save pipeline
    Save(save::SaveArgs),
    /// Enqueue print requests and work the queue until empty
    Queue(queue::QueueArgs),
    /// Print the values matching a parity predicate
    Filter(filter::FilterArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command with the result of loading configuration.
    ///
    /// Only `config` commands can run with a configuration that failed to load.
    pub fn execute(&self, config: AppResult<AppConfig>) -> AppResult<()> {
        match &self.command {
            Commands::Config(args) => config::execute(args, &self.config, config, self.format),
            Commands::Save(args) => save::execute(args, &config?, self.format),
            Commands::Queue(args) => queue::execute(args, &config?, self.format),
            Commands::Filter(args) => filter::execute(args, &config?),
        }
    }
}
