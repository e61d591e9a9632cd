//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use recordhook_core::config::AppConfig;
use recordhook_core::result::AppResult;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Validate the configuration file
    Validate,
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config_path: &str,
    config: AppResult<AppConfig>,
    format: OutputFormat,
) -> AppResult<()> {
    match &args.command {
        ConfigCommand::Show => {
            let config = config?;
            output::print_summary("Configuration", &settings(&config), &config, format)?;
        }
        ConfigCommand::Validate => match config {
            Ok(config) => {
                output::print_success(&format!("Configuration '{}' is valid", config_path));
                output::print_kv("Log level", &config.logging.level);
                output::print_kv("Sink", &describe_sink(&config));
                output::print_kv("Queue capacity", &config.queue.capacity.to_string());
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {}", e));
                return Err(e);
            }
        },
    }

    Ok(())
}

fn settings(config: &AppConfig) -> Vec<(&'static str, String)> {
    vec![
        ("logging.level", config.logging.level.clone()),
        ("logging.format", config.logging.format.clone()),
        ("sink", describe_sink(config)),
        ("queue.capacity", config.queue.capacity.to_string()),
        ("queue.max_copies", config.queue.max_copies.to_string()),
    ]
}

fn describe_sink(config: &AppConfig) -> String {
    if config.sink.kind == "file" {
        format!("file ({})", config.sink.path)
    } else {
        config.sink.kind.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_cover_every_section() {
        let mut config = AppConfig::default();
        config.sink.kind = "file".to_string();
        config.sink.path = "out/records.log".to_string();

        let settings = settings(&config);
        let keys: Vec<&str> = settings.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec![
                "logging.level",
                "logging.format",
                "sink",
                "queue.capacity",
                "queue.max_copies"
            ]
        );
        assert_eq!(settings[2].1, "file (out/records.log)");
        assert_eq!(settings[3].1, "64");
    }

    #[test]
    fn test_validate_reports_load_error() {
        let args = ConfigArgs {
            command: ConfigCommand::Validate,
        };
        let err = execute(
            &args,
            "bad.toml",
            Err(recordhook_core::AppError::configuration("broken")),
            OutputFormat::Table,
        )
        .expect_err("invalid config");
        assert_eq!(err.kind, recordhook_core::error::ErrorKind::Configuration);
    }
}
