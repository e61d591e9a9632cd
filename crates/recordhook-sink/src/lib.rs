//! # recordhook-sink
//!
//! Concrete [`MessageSink`](recordhook_core::traits::MessageSink)
//! implementations, the factory that picks one from configuration, and
//! [`SinkSave`], the default processing that writes records to a sink.

pub mod factory;
pub mod file;
pub mod memory;
pub mod save;
pub mod stdout;

pub use factory::build_sink;
pub use file::FileSink;
pub use memory::MemorySink;
pub use save::SinkSave;
pub use stdout::StdoutSink;
