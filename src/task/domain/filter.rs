//! Completion-status filter for task listings.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};

/// Completion-status filter applied when listing an owner's tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    /// Include every task regardless of completion.
    #[default]
    All,
    /// Include only tasks with `completed == false`.
    Pending,
    /// Include only tasks with `completed == true`.
    Completed,
}

impl StatusFilter {
    /// Returns the canonical query-parameter representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }

    /// Returns `true` when a task with the given completion flag passes the
    /// filter.
    #[must_use]
    pub const fn matches(self, completed: bool) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !completed,
            Self::Completed => completed,
        }
    }
}

impl TryFrom<&str> for StatusFilter {
    type Error = TaskDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "all" => Ok(Self::All),
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            other => Err(TaskDomainError::UnknownStatusFilter(other.to_owned())),
        }
    }
}
