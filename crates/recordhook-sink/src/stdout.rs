//! Standard-output sink.

use std::io::Write;

use recordhook_core::result::AppResult;
use recordhook_core::traits::MessageSink;

/// Writes each message as one line on standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl StdoutSink {
    /// Create a new stdout sink.
    pub fn new() -> Self {
        Self
    }
}

impl MessageSink for StdoutSink {
    fn kind(&self) -> &str {
        "stdout"
    }

    fn write(&self, message: &str) -> AppResult<()> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{message}")?;
        Ok(())
    }
}
