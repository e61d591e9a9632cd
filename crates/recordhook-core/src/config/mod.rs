//! Application configuration schemas.
//!
//! Configuration is deserialized from an optional TOML file via the
//! `config` crate and overlaid with environment variables. Every field
//! carries a serde default, so a missing file yields a usable config.

pub mod logging;
pub mod queue;
pub mod sink;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::queue::QueueConfig;
use self::sink::SinkConfig;

use crate::error::AppError;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "RECORDHOOK";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Message sink settings.
    #[serde(default)]
    pub sink: SinkConfig,
    /// Request queue settings.
    #[serde(default)]
    pub queue: QueueConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// The file is optional. Values are then overridden by environment
    /// variables of the form `RECORDHOOK__SECTION__KEY`.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let app: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        app.validate()?;
        Ok(app)
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.queue.capacity == 0 {
            return Err(AppError::configuration("queue.capacity must be at least 1"));
        }
        if self.queue.max_copies == 0 {
            return Err(AppError::configuration(
                "queue.max_copies must be at least 1",
            ));
        }
        Ok(())
    }
}
