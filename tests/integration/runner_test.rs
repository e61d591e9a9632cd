//! Integration tests for the operation runner's ordering and failure rules.

mod helpers;

use recordhook_core::error::{AppError, ErrorKind};
use recordhook_runner::{HookStage, Hooks, OperationRunner, run};

use helpers::{CallLog, TestRecord};

#[test]
fn test_before_default_after_sequence() {
    let log = CallLog::new();
    let runner = OperationRunner::new(log.default_processing::<TestRecord>());
    let mut record = TestRecord { id: 1 };

    let hooks = Hooks::new().before(log.stub("b")).after(log.stub("a"));
    runner.run(&mut record, hooks).expect("run");

    assert_eq!(log.calls(), vec!["b(1)", "default(1)", "a(1)"]);
}

#[test]
fn test_primary_only_sequence() {
    let log = CallLog::new();
    let runner = OperationRunner::new(log.default_processing::<TestRecord>());
    let mut record = TestRecord { id: 2 };

    runner
        .run(&mut record, Hooks::new().primary(log.stub("p")))
        .expect("run");

    assert_eq!(log.calls(), vec!["p(2)"]);
}

#[test]
fn test_before_failure_is_returned_verbatim() {
    let log = CallLog::new();
    let runner = OperationRunner::new(log.default_processing::<TestRecord>());
    let mut record = TestRecord { id: 3 };

    let hooks = Hooks::new()
        .before(log.failing("b"))
        .after(log.stub("a"));
    let err = runner.run(&mut record, hooks).expect_err("before fails");

    assert_eq!(err.kind, ErrorKind::Hook);
    assert_eq!(err.message, "b failed");
    assert_eq!(log.calls(), vec!["b(3)"]);
}

#[test]
fn test_primary_failure_skips_after() {
    let log = CallLog::new();
    let runner = OperationRunner::new(log.default_processing::<TestRecord>());
    let mut record = TestRecord { id: 4 };

    let hooks = Hooks::new()
        .primary(log.failing("p"))
        .after(log.stub("a"));
    let err = runner.run(&mut record, hooks).expect_err("primary fails");

    assert_eq!(err.message, "p failed");
    assert_eq!(log.calls(), vec!["p(4)"]);
}

#[test]
fn test_custom_error_type_passes_through() {
    #[derive(Debug, PartialEq)]
    enum Refusal {
        ReadOnly { id: u32 },
    }

    let runner = OperationRunner::new(|_: &mut TestRecord| -> Result<(), Refusal> { Ok(()) });
    let mut record = TestRecord { id: 5 };

    let hooks = Hooks::new().before(|r: &mut TestRecord| Err(Refusal::ReadOnly { id: r.id }));
    let err = runner.run(&mut record, hooks).expect_err("refused");

    assert_eq!(err, Refusal::ReadOnly { id: 5 });
}

#[test]
fn test_traced_run_and_free_function_agree() {
    let log = CallLog::new();
    let default = log.default_processing::<TestRecord>();
    let runner = OperationRunner::new(log.default_processing::<TestRecord>());

    let mut first = TestRecord { id: 6 };
    let report = runner
        .run_traced(&mut first, Hooks::new().after(log.stub("a")))
        .expect("run");
    assert_eq!(report.stages, vec![HookStage::Default, HookStage::After]);

    let mut second = TestRecord { id: 7 };
    run(&mut second, Hooks::new().after(log.stub("a")), &default).expect("run");

    assert_eq!(
        log.calls(),
        vec!["default(6)", "a(6)", "default(7)", "a(7)"]
    );
}

#[test]
fn test_concurrent_runs_share_one_runner() {
    let runner = OperationRunner::new(|r: &mut TestRecord| -> Result<(), AppError> {
        r.id += 100;
        Ok(())
    });

    std::thread::scope(|scope| {
        for id in 0..4 {
            let runner = &runner;
            scope.spawn(move || {
                let mut record = TestRecord { id };
                let hooks = Hooks::new().after(|r: &mut TestRecord| {
                    r.id *= 2;
                    Ok(())
                });
                runner.run(&mut record, hooks).expect("run");
                assert_eq!(record.id, (id + 100) * 2);
            });
        }
    });
}
