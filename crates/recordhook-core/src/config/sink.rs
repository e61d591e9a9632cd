//! Message sink configuration.

use serde::{Deserialize, Serialize};

/// Selects which [`MessageSink`](crate::traits::MessageSink) the
/// composition root builds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SinkConfig {
    /// Sink kind: `"stdout"`, `"file"`, or `"memory"`.
    #[serde(default = "default_kind")]
    pub kind: String,
    /// Output file path, required when `kind = "file"`.
    #[serde(default)]
    pub path: String,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            kind: default_kind(),
            path: String::new(),
        }
    }
}

fn default_kind() -> String {
    "stdout".to_string()
}
