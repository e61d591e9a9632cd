//! Print requests held by the request queue.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::RequestId;

/// Processing state of a print request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Waiting in the queue.
    Pending,
    /// Worked on successfully.
    Done,
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Done => write!(f, "done"),
        }
    }
}

/// A request to print a document some number of times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintRequest {
    /// Request identity.
    pub id: RequestId,
    /// Document name or path.
    pub document: String,
    /// Number of copies.
    pub copies: u32,
    /// Current status.
    pub status: RequestStatus,
    /// When the request was created.
    pub created_at: DateTime<Utc>,
}

impl PrintRequest {
    /// Creates a pending request.
    pub fn new(document: impl Into<String>, copies: u32) -> Self {
        Self {
            id: RequestId::new(),
            document: document.into(),
            copies,
            status: RequestStatus::Pending,
            created_at: Utc::now(),
        }
    }
}
