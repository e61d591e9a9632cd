//! Builds the configured sink.

use std::sync::Arc;

use tracing::info;

use recordhook_core::config::sink::SinkConfig;
use recordhook_core::error::AppError;
use recordhook_core::result::AppResult;
use recordhook_core::traits::MessageSink;

use crate::file::FileSink;
use crate::memory::MemorySink;
use crate::stdout::StdoutSink;

/// Build the sink selected by `config.kind`.
pub fn build_sink(config: &SinkConfig) -> AppResult<Arc<dyn MessageSink>> {
    let sink: Arc<dyn MessageSink> = match config.kind.as_str() {
        "stdout" => Arc::new(StdoutSink::new()),
        "memory" => Arc::new(MemorySink::new()),
        "file" => {
            if config.path.trim().is_empty() {
                return Err(AppError::configuration(
                    "sink.path is required when sink.kind = \"file\"",
                ));
            }
            Arc::new(FileSink::open(&config.path)?)
        }
        other => {
            return Err(AppError::configuration(format!(
                "Unknown sink kind '{other}' (expected stdout, file, or memory)"
            )));
        }
    };

    info!(kind = %sink.kind(), "Message sink initialized");
    Ok(sink)
}
