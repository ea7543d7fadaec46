//! `PostgreSQL` repository implementation for task persistence.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{
        NewTask, OwnerId, PersistedTaskData, StatusFilter, Task, TaskDescription, TaskId,
        TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by task repository adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn insert(&self, draft: &NewTask) -> TaskRepositoryResult<Task> {
        let new_row = NewTaskRow {
            owner_id: draft.owner_id().as_str().to_owned(),
            title: draft.title().as_str().to_owned(),
            description: draft.description().as_str().to_owned(),
            completed: draft.completed(),
            created_at: draft.created_at(),
            updated_at: draft.updated_at(),
        };

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            row_to_task(row)
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list_for_owner(
        &self,
        owner: &OwnerId,
        filter: StatusFilter,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let owner_str = owner.as_str().to_owned();
        self.run_blocking(move |connection| {
            let mut query = tasks::table
                .filter(tasks::owner_id.eq(&owner_str))
                .into_boxed();
            query = match filter {
                StatusFilter::All => query,
                StatusFilter::Pending => query.filter(tasks::completed.eq(false)),
                StatusFilter::Completed => query.filter(tasks::completed.eq(true)),
            };

            let rows = query
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn save(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let title = task.title().as_str().to_owned();
        let description = task.description().as_str().to_owned();
        let completed = task.completed();
        let updated_at = task.updated_at();

        self.run_blocking(move |connection| {
            let updated_count =
                diesel::update(tasks::table.filter(tasks::id.eq(task_id.into_inner())))
                    .set((
                        tasks::title.eq(&title),
                        tasks::description.eq(&description),
                        tasks::completed.eq(completed),
                        tasks::updated_at.eq(updated_at),
                    ))
                    .execute(connection)
                    .map_err(TaskRepositoryError::persistence)?;

            if updated_count == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            let deleted_count =
                diesel::delete(tasks::table.filter(tasks::id.eq(id.into_inner())))
                    .execute(connection)
                    .map_err(TaskRepositoryError::persistence)?;
            Ok(deleted_count > 0)
        })
        .await
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        owner_id,
        title,
        description,
        completed,
        created_at,
        updated_at,
    } = row;

    let parsed_owner =
        OwnerId::new(owner_id).map_err(TaskRepositoryError::invalid_persisted_data)?;
    let parsed_title =
        TaskTitle::new(title).map_err(TaskRepositoryError::invalid_persisted_data)?;
    let parsed_description =
        TaskDescription::new(description).map_err(TaskRepositoryError::invalid_persisted_data)?;

    let data = PersistedTaskData {
        id: TaskId::from_raw(id),
        owner_id: parsed_owner,
        title: parsed_title,
        description: parsed_description,
        completed,
        created_at,
        updated_at,
    };
    Ok(Task::from_persisted(data))
}
