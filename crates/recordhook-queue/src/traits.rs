//! Role contracts for the request queue.

use recordhook_core::error::AppError;
use recordhook_core::result::AppResult;
use recordhook_core::types::{PrintRequest, RequestId};
use recordhook_runner::Hooks;

/// Creates and deletes print requests.
pub trait RequestModifier {
    /// Enqueues a new request and returns its id.
    fn create_request(&self, document: &str, copies: u32) -> AppResult<RequestId>;

    /// Removes a pending request.
    fn delete_request(&self, id: RequestId) -> AppResult<()>;
}

/// Processes print requests.
pub trait RequestWorker {
    /// Works on the oldest pending request with the given hooks.
    ///
    /// Returns `Ok(None)` when nothing is pending. On failure the request
    /// stays queued at the front and the hook's error is returned as-is.
    fn work_on_request(
        &self,
        hooks: Hooks<'_, PrintRequest, AppError>,
    ) -> AppResult<Option<PrintRequest>>;
}
