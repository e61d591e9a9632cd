//! Request queue configuration.

use serde::{Deserialize, Serialize};

/// Limits applied by the in-memory request queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Maximum number of requests held, pending or in flight.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Maximum copies accepted for a single request.
    #[serde(default = "default_max_copies")]
    pub max_copies: u32,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            max_copies: default_max_copies(),
        }
    }
}

fn default_capacity() -> usize {
    64
}

fn default_max_copies() -> u32 {
    99
}
