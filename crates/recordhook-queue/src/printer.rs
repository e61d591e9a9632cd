//! Default processing for print requests.

use std::sync::Arc;

use recordhook_core::error::AppError;
use recordhook_core::traits::MessageSink;
use recordhook_core::types::PrintRequest;
use recordhook_runner::DefaultProcessing;

/// "Prints" a request by writing a summary line to an injected sink.
#[derive(Debug, Clone)]
pub struct SinkPrinter {
    sink: Arc<dyn MessageSink>,
}

impl SinkPrinter {
    /// Create a printer writing to `sink`.
    pub fn new(sink: Arc<dyn MessageSink>) -> Self {
        Self { sink }
    }
}

impl DefaultProcessing<PrintRequest> for SinkPrinter {
    type Error = AppError;

    fn process(&self, request: &mut PrintRequest) -> Result<(), AppError> {
        self.sink.write(&format!(
            "printing '{}' x{}",
            request.document, request.copies
        ))
    }
}
