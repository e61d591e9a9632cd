//! Shared domain types.

pub mod filter;
pub mod id;
pub mod record;
pub mod request;

pub use id::{RecordId, RequestId};
pub use record::Record;
pub use request::{PrintRequest, RequestStatus};
