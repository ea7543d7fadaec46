//! Request and response body shapes for the task resource.

use crate::api::status::ErrorKind;
use crate::auth::ports::AuthError;
use crate::task::domain::Task;
use crate::task::services::TaskLifecycleError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/{user_id}/tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTaskBody {
    /// Task title; required, non-blank, at most 200 characters.
    pub title: String,
    /// Task description; defaults to empty when omitted.
    #[serde(default)]
    pub description: String,
}

/// Body of `PUT /api/{user_id}/tasks/{task_id}`.
///
/// Absent fields leave the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTaskBody {
    /// Replacement title, when supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Replacement description, when supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Wire representation of a task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResponse {
    /// Store-assigned task identifier.
    pub id: i64,
    /// Owning identity, surfaced under the path parameter's name.
    pub user_id: String,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Completion flag.
    pub completed: bool,
    /// Creation timestamp (RFC 3339).
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp (RFC 3339).
    pub updated_at: DateTime<Utc>,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().into_inner(),
            user_id: task.owner_id().as_str().to_owned(),
            title: task.title().as_str().to_owned(),
            description: task.description().as_str().to_owned(),
            completed: task.completed(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

/// Wire representation of a failed request.
///
/// Carries a stable machine-distinguishable kind plus a human-readable
/// reason; internal identifiers and stack traces never appear here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Stable error classification.
    pub error: ErrorKind,
    /// Human-readable reason.
    pub detail: String,
}

impl From<&TaskLifecycleError> for ErrorBody {
    fn from(err: &TaskLifecycleError) -> Self {
        let kind = ErrorKind::from(err);
        let detail = match err {
            // Store failures stay opaque on the wire.
            TaskLifecycleError::Repository(_) => "internal error".to_owned(),
            other => other.to_string(),
        };
        Self {
            error: kind,
            detail,
        }
    }
}

impl From<&AuthError> for ErrorBody {
    fn from(err: &AuthError) -> Self {
        Self {
            error: ErrorKind::Unauthorized,
            detail: err.to_string(),
        }
    }
}
