//! The operation runner.
//!
//! A run executes, in fixed order:
//! 1. the `before` hook, if supplied
//! 2. the `primary` override if supplied, otherwise the default processing
//! 3. the `after` hook, if supplied
//!
//! Exactly one of the override and the default executes. The first
//! failing step aborts the remaining steps and its error is returned
//! to the caller as-is.

use serde::Serialize;
use tracing::{debug, trace};

use crate::default::DefaultProcessing;
use crate::hooks::definitions::HookStage;
use crate::hooks::set::{HookFn, Hooks, Primary};

/// Stages that executed during a successful run, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Executed stages.
    pub stages: Vec<HookStage>,
}

impl RunReport {
    /// Returns whether the default processing ran.
    pub fn used_default(&self) -> bool {
        self.stages.contains(&HookStage::Default)
    }
}

/// Runs records through optional hooks around a default processing step.
///
/// The runner owns only its default processing and keeps nothing
/// between calls, so a shared reference can serve concurrent runs on
/// independent records whenever `D` is `Sync`.
#[derive(Debug, Clone, Default)]
pub struct OperationRunner<D> {
    default: D,
}

impl<D> OperationRunner<D> {
    /// Creates a runner around the given default processing.
    pub fn new(default: D) -> Self {
        Self { default }
    }

    /// Runs `record` through `hooks`.
    pub fn run<R>(&self, record: &mut R, hooks: Hooks<'_, R, D::Error>) -> Result<(), D::Error>
    where
        D: DefaultProcessing<R>,
    {
        execute(record, hooks, &self.default, &mut None)
    }

    /// Runs `record` through `hooks` and reports which stages executed.
    pub fn run_traced<R>(
        &self,
        record: &mut R,
        hooks: Hooks<'_, R, D::Error>,
    ) -> Result<RunReport, D::Error>
    where
        D: DefaultProcessing<R>,
    {
        let mut report = Some(RunReport::default());
        execute(record, hooks, &self.default, &mut report)?;
        Ok(report.unwrap_or_default())
    }
}

/// Runs `record` through `hooks`, falling back to `default` for the main step.
pub fn run<R, D>(record: &mut R, hooks: Hooks<'_, R, D::Error>, default: &D) -> Result<(), D::Error>
where
    D: DefaultProcessing<R> + ?Sized,
{
    execute(record, hooks, default, &mut None)
}

fn execute<R, D>(
    record: &mut R,
    hooks: Hooks<'_, R, D::Error>,
    default: &D,
    report: &mut Option<RunReport>,
) -> Result<(), D::Error>
where
    D: DefaultProcessing<R> + ?Sized,
{
    let (before, primary, after) = hooks.into_parts();

    if let Some(hook) = before {
        invoke(HookStage::Before, hook, record, report)?;
    }

    match primary {
        Primary::Custom(hook) => invoke(HookStage::Primary, hook, record, report)?,
        Primary::Default => {
            trace!(stage = %HookStage::Default, "Running stage");
            default.process(record).inspect_err(|_| {
                debug!(stage = %HookStage::Default, "Stage failed, aborting run");
            })?;
            record_stage(report, HookStage::Default);
        }
    }

    if let Some(hook) = after {
        invoke(HookStage::After, hook, record, report)?;
    }

    Ok(())
}

fn invoke<R, E>(
    stage: HookStage,
    mut hook: HookFn<'_, R, E>,
    record: &mut R,
    report: &mut Option<RunReport>,
) -> Result<(), E> {
    trace!(stage = %stage, "Running stage");
    hook(record).inspect_err(|_| {
        debug!(stage = %stage, "Stage failed, aborting run");
    })?;
    record_stage(report, stage);
    Ok(())
}

fn record_stage(report: &mut Option<RunReport>, stage: HookStage) {
    if let Some(report) = report {
        report.stages.push(stage);
    }
}
