//! Service layer for the ownership-enforced task lifecycle.
//!
//! Provides [`TaskLifecycleService`] which coordinates the six task
//! operations: create, list, get, update, toggle-complete, and delete.
//! Every operation authorizes the path-declared owner against the verified
//! identity before touching the store, and single-resource operations
//! re-authorize against the loaded record's owner. Error precedence is
//! uniform: path mismatch, then absent record, then owner mismatch.

use crate::task::{
    domain::{
        AccessDenied, NewTask, OwnerId, StatusFilter, Task, TaskDescription, TaskDomainError,
        TaskId, TaskTitle, authorize,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    declared_owner: String,
    verified_identity: String,
    title: String,
    description: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with required fields.
    #[must_use]
    pub fn new(
        declared_owner: impl Into<String>,
        verified_identity: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            declared_owner: declared_owner.into(),
            verified_identity: verified_identity.into(),
            title: title.into(),
            description: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request payload for updating a task's mutable fields.
///
/// Fields left unset are not touched by the update; supplying a field
/// replaces it subject to the same validation as creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    declared_owner: String,
    verified_identity: String,
    task_id: TaskId,
    title: Option<String>,
    description: Option<String>,
}

impl UpdateTaskRequest {
    /// Creates a request that updates no fields.
    #[must_use]
    pub fn new(
        declared_owner: impl Into<String>,
        verified_identity: impl Into<String>,
        task_id: TaskId,
    ) -> Self {
        Self {
            declared_owner: declared_owner.into(),
            verified_identity: verified_identity.into(),
            task_id,
            title: None,
            description: None,
        }
    }

    /// Sets a replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Input validation failed; the caller can correct and retry.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// The caller's identity does not grant access to the resource.
    #[error(transparent)]
    Forbidden(#[from] AccessDenied),

    /// No task exists for the identifier within the owner's space.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Opaque store failure; nothing for the caller to correct.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskLifecycleError {
    /// Maps a repository-level missing record onto the service's NotFound
    /// class; it only arises when a save races a concurrent delete, and
    /// callers should observe a single NotFound kind.
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Ownership-enforced task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a task owned by the verified identity.
    ///
    /// The stored record starts uncompleted with equal creation and update
    /// timestamps; the store assigns the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Forbidden`] when the declared owner does
    /// not match the verified identity, [`TaskLifecycleError::Domain`] when
    /// title or description validation fails, or
    /// [`TaskLifecycleError::Repository`] when the insert fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let CreateTaskRequest {
            declared_owner,
            verified_identity,
            title,
            description,
        } = request;

        authorize(&declared_owner, &verified_identity, None)?;

        let owner = OwnerId::new(verified_identity)?;
        let task_title = TaskTitle::new(title)?;
        let task_description = description
            .map(TaskDescription::new)
            .transpose()?
            .unwrap_or_default();

        let draft = NewTask::new(owner, task_title, task_description, &*self.clock);
        Ok(self.repository.insert(&draft).await?)
    }

    /// Lists the verified identity's tasks, filtered by completion status.
    ///
    /// `status_filter` must be one of `all`, `pending`, or `completed`.
    /// Ordering is store-determined and unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Forbidden`] on a declared-owner
    /// mismatch, [`TaskLifecycleError::Domain`] for an unknown filter value,
    /// or [`TaskLifecycleError::Repository`] when the scan fails.
    pub async fn list(
        &self,
        declared_owner: &str,
        verified_identity: &str,
        status_filter: &str,
    ) -> TaskLifecycleResult<Vec<Task>> {
        authorize(declared_owner, verified_identity, None)?;

        let filter = StatusFilter::try_from(status_filter)?;
        let owner = OwnerId::new(verified_identity)?;
        Ok(self.repository.list_for_owner(&owner, filter).await?)
    }

    /// Fetches a single task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Forbidden`] on a declared-owner or
    /// resource-owner mismatch, [`TaskLifecycleError::NotFound`] when no
    /// record exists, or [`TaskLifecycleError::Repository`] when the lookup
    /// fails.
    pub async fn get(
        &self,
        declared_owner: &str,
        verified_identity: &str,
        task_id: TaskId,
    ) -> TaskLifecycleResult<Task> {
        self.load_authorized(declared_owner, verified_identity, task_id)
            .await
    }

    /// Replaces any supplied fields on a task and refreshes its timestamp.
    ///
    /// Supplied-field validation runs before the store lookup, so invalid
    /// input is reported even for an identifier that does not exist. The
    /// update timestamp is refreshed on every authorized, found record, even
    /// when no fields were supplied.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when a supplied field fails
    /// validation, [`TaskLifecycleError::Forbidden`] on an ownership
    /// mismatch, [`TaskLifecycleError::NotFound`] when no record exists, or
    /// [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn update(&self, request: UpdateTaskRequest) -> TaskLifecycleResult<Task> {
        let UpdateTaskRequest {
            declared_owner,
            verified_identity,
            task_id,
            title,
            description,
        } = request;

        authorize(&declared_owner, &verified_identity, None)?;

        let new_title = title.map(TaskTitle::new).transpose()?;
        let new_description = description.map(TaskDescription::new).transpose()?;

        let mut task = self
            .load_authorized(&declared_owner, &verified_identity, task_id)
            .await?;
        task.apply_update(new_title, new_description, &*self.clock);
        self.repository.save(&task).await?;
        Ok(task)
    }

    /// Flips a task's completion flag and refreshes its timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Forbidden`] on an ownership mismatch,
    /// [`TaskLifecycleError::NotFound`] when no record exists, or
    /// [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn toggle_complete(
        &self,
        declared_owner: &str,
        verified_identity: &str,
        task_id: TaskId,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self
            .load_authorized(declared_owner, verified_identity, task_id)
            .await?;
        task.toggle_completed(&*self.clock);
        self.repository.save(&task).await?;
        Ok(task)
    }

    /// Permanently removes a task.
    ///
    /// Deletion is irreversible; a repeat call with the same identifier
    /// reports the record as missing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Forbidden`] on an ownership mismatch,
    /// [`TaskLifecycleError::NotFound`] when no record exists, or
    /// [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn delete(
        &self,
        declared_owner: &str,
        verified_identity: &str,
        task_id: TaskId,
    ) -> TaskLifecycleResult<()> {
        self.load_authorized(declared_owner, verified_identity, task_id)
            .await?;

        let removed = self.repository.delete(task_id).await?;
        if !removed {
            // The record vanished between the lookup and the delete.
            return Err(TaskLifecycleError::NotFound(task_id));
        }
        Ok(())
    }

    /// Runs the uniform single-resource authorization sequence: path-level
    /// check, lookup, then resource-level check against the stored owner.
    async fn load_authorized(
        &self,
        declared_owner: &str,
        verified_identity: &str,
        task_id: TaskId,
    ) -> TaskLifecycleResult<Task> {
        authorize(declared_owner, verified_identity, None)?;

        let task = self
            .repository
            .find_by_id(task_id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(task_id))?;

        authorize(declared_owner, verified_identity, Some(task.owner_id()))?;
        Ok(task)
    }
}
