//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing task domain values.
///
/// Every variant is user-correctable input; the boundary layer reports these
/// as invalid-input failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the 200-character limit.
    #[error("task title exceeds 200 character limit ({0} characters)")]
    TitleTooLong(usize),

    /// The task description exceeds the 1000-character limit.
    #[error("task description exceeds 1000 character limit ({0} characters)")]
    DescriptionTooLong(usize),

    /// The owner identifier is empty.
    #[error("owner identifier must not be empty")]
    EmptyOwnerId,

    /// The status filter value is not one of `all`, `pending`, `completed`.
    #[error("unknown status filter: {0} (expected all, pending, or completed)")]
    UnknownStatusFilter(String),
}
