//! Enqueue print requests and work the queue until it is empty.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use recordhook_core::config::AppConfig;
use recordhook_core::result::AppResult;
use recordhook_core::types::PrintRequest;
use recordhook_queue::{RequestModifier, RequestQueue, RequestWorker, SinkPrinter};
use recordhook_runner::Hooks;
use recordhook_sink::build_sink;

use crate::output::{self, OutputFormat};

/// Arguments for the queue command
#[derive(Debug, Args)]
pub struct QueueArgs {
    /// Document to print, repeatable
    #[arg(short, long = "document", required = true)]
    pub documents: Vec<String>,

    /// Copies per document
    #[arg(long, default_value_t = 1)]
    pub copies: u32,
}

/// Table row for a processed request
#[derive(Debug, Serialize, Tabled)]
struct RequestRow {
    id: String,
    document: String,
    copies: u32,
    status: String,
}

impl From<PrintRequest> for RequestRow {
    fn from(request: PrintRequest) -> Self {
        Self {
            id: request.id.to_string(),
            document: request.document,
            copies: request.copies,
            status: request.status.to_string(),
        }
    }
}

/// Execute the queue command
pub fn execute(args: &QueueArgs, config: &AppConfig, format: OutputFormat) -> AppResult<()> {
    let sink = build_sink(&config.sink)?;
    let queue = RequestQueue::new(SinkPrinter::new(sink), config.queue.clone());

    submit(&queue, &args.documents, args.copies)?;
    let done = drain(&queue)?;

    let rows: Vec<RequestRow> = done.into_iter().map(RequestRow::from).collect();
    output::print_rows(&rows, format, "No requests processed.")
}

fn submit(modifier: &dyn RequestModifier, documents: &[String], copies: u32) -> AppResult<()> {
    for document in documents {
        modifier.create_request(document, copies)?;
    }
    Ok(())
}

fn drain(worker: &dyn RequestWorker) -> AppResult<Vec<PrintRequest>> {
    let mut done = Vec::new();
    while let Some(request) = worker.work_on_request(Hooks::new())? {
        done.push(request);
    }
    Ok(done)
}
