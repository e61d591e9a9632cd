//! FIFO request queue backed by an operation runner.

use std::collections::VecDeque;
use std::sync::Mutex;

use tracing::{debug, info, warn};

use recordhook_core::config::queue::QueueConfig;
use recordhook_core::error::AppError;
use recordhook_core::result::AppResult;
use recordhook_core::types::{PrintRequest, RequestId, RequestStatus};
use recordhook_runner::{DefaultProcessing, Hooks, OperationRunner};

use crate::traits::{RequestModifier, RequestWorker};

/// Requests held by the queue.
#[derive(Debug, Default)]
struct QueueState {
    /// Pending requests, oldest first.
    pending: VecDeque<PrintRequest>,
    /// Requests popped by a worker and not yet finished.
    ///
    /// Each one keeps its slot so a failed run can always be requeued
    /// without exceeding capacity.
    in_flight: usize,
}

impl QueueState {
    fn occupied(&self) -> usize {
        self.pending.len() + self.in_flight
    }
}

/// In-memory FIFO of pending print requests.
#[derive(Debug)]
pub struct RequestQueue<D> {
    /// Pending and in-flight requests.
    state: Mutex<QueueState>,
    /// Runner used to work on each request.
    runner: OperationRunner<D>,
    /// Limits.
    config: QueueConfig,
}

impl<D> RequestQueue<D> {
    /// Creates an empty queue that processes requests with `default`.
    pub fn new(default: D, config: QueueConfig) -> Self {
        Self {
            state: Mutex::new(QueueState::default()),
            runner: OperationRunner::new(default),
            config,
        }
    }

    /// Snapshot of pending requests, oldest first.
    pub fn pending(&self) -> Vec<PrintRequest> {
        self.lock().pending.iter().cloned().collect()
    }

    /// Number of pending requests.
    pub fn len(&self) -> usize {
        self.lock().pending.len()
    }

    /// Returns whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.lock().pending.is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, QueueState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn validate(&self, document: &str, copies: u32) -> AppResult<()> {
        if document.trim().is_empty() {
            return Err(AppError::validation("document must not be empty"));
        }
        if copies == 0 {
            return Err(AppError::validation("copies must be at least 1"));
        }
        if copies > self.config.max_copies {
            return Err(AppError::validation(format!(
                "copies must not exceed {}",
                self.config.max_copies
            )));
        }
        Ok(())
    }
}

impl<D> RequestModifier for RequestQueue<D> {
    fn create_request(&self, document: &str, copies: u32) -> AppResult<RequestId> {
        self.validate(document, copies)?;

        let mut state = self.lock();
        if state.occupied() >= self.config.capacity {
            return Err(AppError::conflict(format!(
                "queue is full ({} pending, {} in flight)",
                state.pending.len(),
                state.in_flight
            )));
        }

        let request = PrintRequest::new(document, copies);
        let id = request.id;
        state.pending.push_back(request);

        info!(request_id = %id, document = %document, copies, "Print request created");
        Ok(id)
    }

    fn delete_request(&self, id: RequestId) -> AppResult<()> {
        let mut state = self.lock();
        let index = state
            .pending
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| AppError::not_found(format!("Print request {id} not found")))?;
        state.pending.remove(index);

        info!(request_id = %id, "Print request deleted");
        Ok(())
    }
}

impl<D> RequestWorker for RequestQueue<D>
where
    D: DefaultProcessing<PrintRequest, Error = AppError>,
{
    fn work_on_request(
        &self,
        hooks: Hooks<'_, PrintRequest, AppError>,
    ) -> AppResult<Option<PrintRequest>> {
        // The lock is released before hooks run so they may use the queue.
        let original = {
            let mut state = self.lock();
            let Some(request) = state.pending.pop_front() else {
                debug!("No pending print requests");
                return Ok(None);
            };
            state.in_flight += 1;
            request
        };

        let mut request = original.clone();
        let outcome = self.runner.run(&mut request, hooks);

        let mut state = self.lock();
        state.in_flight -= 1;
        match outcome {
            Ok(()) => {
                request.status = RequestStatus::Done;
                info!(request_id = %request.id, document = %request.document, "Print request done");
                Ok(Some(request))
            }
            Err(e) => {
                warn!(request_id = %original.id, error = %e, "Print request failed, requeued");
                state.pending.push_front(original);
                Err(e)
            }
        }
    }
}
