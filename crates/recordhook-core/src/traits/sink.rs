//! Message sink capability.

use crate::result::AppResult;

/// An abstract destination for text messages.
///
/// Consumers depend on this trait only. The concrete sink (stdout, file,
/// in-memory) is chosen by the composition root and passed in. The
/// implementations live in `recordhook-sink`.
pub trait MessageSink: Send + Sync + std::fmt::Debug {
    /// Return the sink kind name (e.g., "stdout", "file").
    fn kind(&self) -> &str;

    /// Write one message.
    fn write(&self, message: &str) -> AppResult<()>;
}
