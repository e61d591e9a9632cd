//! Save a record through the hookable save pipeline.

use std::sync::Arc;

use clap::Args;
use serde::Serialize;

use recordhook_core::config::AppConfig;
use recordhook_core::error::AppError;
use recordhook_core::result::AppResult;
use recordhook_core::traits::MessageSink;
use recordhook_core::types::{Record, RecordId};
use recordhook_runner::{HookStage, Hooks, OperationRunner};
use recordhook_sink::{SinkSave, build_sink};

use crate::output::{self, OutputFormat};

/// Arguments for the save command
#[derive(Debug, Args)]
pub struct SaveArgs {
    /// Record kind
    #[arg(short, long, default_value = "record")]
    pub kind: String,

    /// Field assignment, repeatable
    #[arg(long = "field", value_name = "KEY=VALUE")]
    pub fields: Vec<String>,

    /// Replace the JSON save with a one-line summary
    #[arg(long)]
    pub custom: bool,

    /// Write before/after audit lines around the save
    #[arg(long)]
    pub audit: bool,
}

/// Result of a save run
#[derive(Debug, Serialize)]
struct SaveOutcome {
    record_id: RecordId,
    stages: Vec<HookStage>,
}

/// Execute the save command
pub fn execute(args: &SaveArgs, config: &AppConfig, format: OutputFormat) -> AppResult<()> {
    let sink = build_sink(&config.sink)?;
    let mut record = build_record(args)?;

    let runner = OperationRunner::new(SinkSave::new(sink.clone()));
    let hooks = build_hooks(args, &sink);
    let report = runner.run_traced(&mut record, hooks)?;

    let outcome = SaveOutcome {
        record_id: record.id,
        stages: report.stages,
    };
    let pairs = [
        ("Record", outcome.record_id.to_string()),
        ("Kind", record.kind.clone()),
        ("Stages", render_stages(&outcome.stages)),
    ];
    output::print_summary("Record saved", &pairs, &outcome, format)
}

fn render_stages(stages: &[HookStage]) -> String {
    stages
        .iter()
        .map(HookStage::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn build_record(args: &SaveArgs) -> AppResult<Record> {
    let mut record = Record::new(args.kind.as_str());
    for assignment in &args.fields {
        let (key, value) = Record::parse_assignment(assignment).ok_or_else(|| {
            AppError::validation(format!("Invalid field '{assignment}', expected KEY=VALUE"))
        })?;
        record.set_field(&key, value);
    }
    Ok(record)
}

fn build_hooks(args: &SaveArgs, sink: &Arc<dyn MessageSink>) -> Hooks<'static, Record, AppError> {
    let mut hooks = Hooks::new();

    if args.audit {
        let before = sink.clone();
        let after = sink.clone();
        hooks = hooks
            .before(move |r: &mut Record| before.write(&format!("before {}", r.id)))
            .after(move |r: &mut Record| after.write(&format!("after {}", r.id)));
    }

    if args.custom {
        let summary = sink.clone();
        hooks = hooks.primary(move |r: &mut Record| {
            summary.write(&format!(
                "saved {} '{}' ({} fields)",
                r.id,
                r.kind,
                r.fields.len()
            ))
        });
    }

    hooks
}
