//! Core traits defined in `recordhook-core` and implemented by other crates.

pub mod sink;

pub use sink::MessageSink;
