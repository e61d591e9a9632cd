//! # recordhook-queue
//!
//! An in-memory queue of print requests. Its capabilities are split by
//! consumer role:
//!
//! - [`RequestModifier`] for code that creates and deletes requests
//! - [`RequestWorker`] for code that processes them
//!
//! [`RequestQueue`] implements both; each consumer only sees the role it needs.

pub mod printer;
pub mod queue;
pub mod traits;

pub use printer::SinkPrinter;
pub use queue::RequestQueue;
pub use traits::{RequestModifier, RequestWorker};
