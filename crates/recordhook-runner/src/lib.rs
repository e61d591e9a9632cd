//! # recordhook-runner
//!
//! Runs a primary operation on a caller-owned record with optional
//! hooks around it:
//!
//! - `before` runs first, if supplied
//! - the caller's `primary` runs if supplied, otherwise the runner's
//!   [`DefaultProcessing`]
//! - `after` runs last, if supplied
//!
//! The first failing step aborts the rest and its error is returned
//! unchanged. The runner holds no state between calls.

pub mod default;
pub mod hooks;
pub mod runner;

pub use default::DefaultProcessing;
pub use hooks::definitions::HookStage;
pub use hooks::set::{HookFn, Hooks, Primary};
pub use runner::{OperationRunner, RunReport, run};
