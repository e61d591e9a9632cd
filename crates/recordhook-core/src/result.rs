//! Convenience result type alias for recordhook.

use crate::error::AppError;

/// A specialized `Result` type for recordhook operations.
pub type AppResult<T> = Result<T, AppError>;
