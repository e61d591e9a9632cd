//! recordhook — run records through hookable save and print pipelines.
//!
//! This binary is the composition root: it loads configuration, sets up
//! tracing, picks the message sink, and hands it to the commands.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use recordhook_core::config::AppConfig;
use recordhook_core::config::logging::LoggingConfig;

mod commands;
mod output;

use commands::Cli;

fn main() {
    let cli = Cli::parse();

    let config = AppConfig::load(&cli.config);
    let fallback = LoggingConfig::default();
    init_logging(config.as_ref().map(|c| &c.logging).unwrap_or(&fallback));

    if let Err(e) = cli.execute(config) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Initialize tracing/logging on stderr so sink output on stdout stays clean.
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
