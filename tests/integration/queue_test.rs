//! Integration tests for the request queue's segregated roles.

mod helpers;

use std::sync::Arc;

use recordhook_core::config::AppConfig;
use recordhook_core::error::ErrorKind;
use recordhook_core::types::{PrintRequest, RequestStatus};
use recordhook_queue::{RequestModifier, RequestQueue, RequestWorker, SinkPrinter};
use recordhook_runner::Hooks;
use recordhook_sink::MemorySink;

use helpers::CallLog;

fn submit_all(modifier: &dyn RequestModifier, documents: &[&str]) {
    for document in documents {
        modifier.create_request(document, 2).expect("create");
    }
}

fn work_all(worker: &dyn RequestWorker, log: &CallLog) -> Vec<PrintRequest> {
    let mut done = Vec::new();
    loop {
        let hooks = Hooks::new().before(log.stub("b")).after(log.stub("a"));
        match worker.work_on_request(hooks).expect("work") {
            Some(request) => done.push(request),
            None => break,
        }
    }
    done
}

#[test]
fn test_roles_cooperate_through_one_queue() {
    let sink = MemorySink::new();
    let config = AppConfig::default();
    let queue = RequestQueue::new(SinkPrinter::new(Arc::new(sink.clone())), config.queue);
    let log = CallLog::new();

    submit_all(&queue, &["a.pdf", "b.pdf"]);
    let done = work_all(&queue, &log);

    assert_eq!(done.len(), 2);
    assert!(done.iter().all(|r| r.status == RequestStatus::Done));
    assert_eq!(
        log.calls(),
        vec!["b(a.pdf)", "a(a.pdf)", "b(b.pdf)", "a(b.pdf)"]
    );
    assert_eq!(sink.messages(), vec!["printing 'a.pdf' x2", "printing 'b.pdf' x2"]);
}

#[test]
fn test_custom_primary_skips_printer_and_retry_succeeds() {
    let sink = MemorySink::new();
    let queue = RequestQueue::new(
        SinkPrinter::new(Arc::new(sink.clone())),
        AppConfig::default().queue,
    );
    let log = CallLog::new();
    submit_all(&queue, &["report.pdf"]);

    let err = queue
        .work_on_request(Hooks::new().primary(log.failing("p")))
        .expect_err("offline");
    assert_eq!(err.kind, ErrorKind::Hook);
    assert_eq!(queue.len(), 1);

    let done = queue
        .work_on_request(Hooks::new().primary(log.stub("p")))
        .expect("work")
        .expect("request");
    assert_eq!(done.document, "report.pdf");
    assert!(queue.is_empty());
    assert!(sink.messages().is_empty());
    assert_eq!(log.calls(), vec!["p(report.pdf)", "p(report.pdf)"]);
}
