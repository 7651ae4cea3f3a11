//! Convenience result type alias for InviteHub.

use crate::error::AppError;

/// A specialized `Result` type for InviteHub operations.
pub type AppResult<T> = Result<T, AppError>;
