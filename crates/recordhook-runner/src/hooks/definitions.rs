//! Stage definitions for a single run.

use serde::{Deserialize, Serialize};

/// A step of a run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookStage {
    /// The caller's `before` hook.
    Before,
    /// The caller's primary override.
    Primary,
    /// The runner's built-in default processing.
    Default,
    /// The caller's `after` hook.
    After,
}

impl HookStage {
    /// Returns the string name of this stage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Before => "before",
            Self::Primary => "primary",
            Self::Default => "default",
            Self::After => "after",
        }
    }
}

impl std::fmt::Display for HookStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
