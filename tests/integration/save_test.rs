//! Integration tests for saving records through a file-backed sink.

mod helpers;

use recordhook_core::error::ErrorKind;
use recordhook_core::traits::MessageSink;
use recordhook_core::types::Record;
use recordhook_runner::{Hooks, OperationRunner};
use recordhook_sink::{SinkSave, build_sink};

use helpers::{CallLog, file_sink_config};

#[test]
fn test_default_save_writes_json_to_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config = file_sink_config(temp.path());
    let sink = build_sink(&config.sink).expect("sink");
    let runner = OperationRunner::new(SinkSave::new(sink));

    let mut record = Record::new("user").with_string("name", "ada");
    runner.run(&mut record, Hooks::new()).expect("save");

    let contents = std::fs::read_to_string(&config.sink.path).expect("read");
    let saved: Record = serde_json::from_str(contents.trim_end()).expect("json line");
    assert_eq!(saved, record);
}

#[test]
fn test_audit_hooks_surround_saved_line() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config = file_sink_config(temp.path());
    let sink = build_sink(&config.sink).expect("sink");
    let runner = OperationRunner::new(SinkSave::new(sink.clone()));

    let mut record = Record::new("order").with_int("qty", 3);
    let (before, after) = (sink.clone(), sink.clone());
    let hooks = Hooks::new()
        .before(move |r: &mut Record| before.write(&format!("before {}", r.id)))
        .after(move |r: &mut Record| after.write(&format!("after {}", r.id)));
    runner.run(&mut record, hooks).expect("save");

    let contents = std::fs::read_to_string(&config.sink.path).expect("read");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], format!("before {}", record.id));
    assert!(lines[1].starts_with('{'));
    assert_eq!(lines[2], format!("after {}", record.id));
}

#[test]
fn test_failed_before_hook_leaves_file_empty() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config = file_sink_config(temp.path());
    let sink = build_sink(&config.sink).expect("sink");
    let runner = OperationRunner::new(SinkSave::new(sink));
    let log = CallLog::new();

    let mut record = Record::new("order");
    let hooks = Hooks::new().before(log.failing("validate")).after(log.stub("a"));
    let err = runner.run(&mut record, hooks).expect_err("rejected");

    assert_eq!(err.kind, ErrorKind::Hook);
    assert_eq!(log.calls(), vec!["validate(order)"]);
    let contents = std::fs::read_to_string(&config.sink.path).expect("read");
    assert!(contents.is_empty());
}
