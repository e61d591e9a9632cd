//! Default save: serialize a record and write it to a sink.

use std::sync::Arc;

use tracing::debug;

use recordhook_core::error::AppError;
use recordhook_core::traits::MessageSink;
use recordhook_core::types::Record;
use recordhook_runner::DefaultProcessing;

/// Writes each record as a single JSON line to an injected sink.
///
/// The sink is always supplied by the caller; `SinkSave` never picks one.
#[derive(Debug, Clone)]
pub struct SinkSave {
    sink: Arc<dyn MessageSink>,
}

impl SinkSave {
    /// Create a save step that writes to `sink`.
    pub fn new(sink: Arc<dyn MessageSink>) -> Self {
        Self { sink }
    }
}

impl DefaultProcessing<Record> for SinkSave {
    type Error = AppError;

    fn process(&self, record: &mut Record) -> Result<(), AppError> {
        let line = serde_json::to_string(record)?;
        self.sink.write(&line)?;
        debug!(record_id = %record.id, kind = %record.kind, sink = %self.sink.kind(), "Record saved");
        Ok(())
    }
}
