//! Task persistence behind a swappable store trait.

use async_trait::async_trait;
use contracts::TaskStatus;
use sqlx::PgPool;
use uuid::Uuid;

/// Persisted task row. `user_id` is an opaque profile reference and is not
/// validated against the profile service at write time.
#[derive(Debug, Clone)]
pub struct TaskRecord {
    pub id: Uuid,
    pub user_id: String,
    pub title: String,
    pub status: TaskStatus,
}

/// Fields for a new task, before an id is assigned.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub user_id: String,
    pub title: String,
    pub status: TaskStatus,
}

#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Persist a new task and return it with its generated id.
    async fn save(&self, task: NewTask) -> Result<TaskRecord, sqlx::Error>;

    /// Fetch a task by id. `None` when absent.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<TaskRecord>, sqlx::Error>;

    /// All tasks in creation order.
    async fn find_all(&self) -> Result<Vec<TaskRecord>, sqlx::Error>;

    /// Tasks owned by one user, in creation order.
    async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<TaskRecord>, sqlx::Error>;

    /// Rewrite a task's status. `None` when the task is absent.
    async fn update_status(&self, id: Uuid, status: TaskStatus) -> Result<Option<TaskRecord>, sqlx::Error>;

    async fn delete_by_id(&self, id: Uuid) -> Result<(), sqlx::Error>;
}

pub struct PgTaskStore {
    pool: PgPool,
}

impl PgTaskStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

type TaskTuple = (Uuid, String, String, String);

fn from_tuple((id, user_id, title, status): TaskTuple) -> Result<TaskRecord, sqlx::Error> {
    let status = TaskStatus::from_str(&status)
        .ok_or_else(|| sqlx::Error::Decode(format!("unknown task status: {status}").into()))?;
    Ok(TaskRecord { id, user_id, title, status })
}

#[async_trait]
impl TaskStore for PgTaskStore {
    async fn save(&self, task: NewTask) -> Result<TaskRecord, sqlx::Error> {
        let id = Uuid::new_v4();
        sqlx::query("INSERT INTO tasks (id, user_id, title, status) VALUES ($1, $2, $3, $4)")
            .bind(id)
            .bind(&task.user_id)
            .bind(&task.title)
            .bind(task.status.as_str())
            .execute(&self.pool)
            .await?;

        Ok(TaskRecord { id, user_id: task.user_id, title: task.title, status: task.status })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<TaskRecord>, sqlx::Error> {
        let row = sqlx::query_as::<_, TaskTuple>(
            "SELECT id, user_id, title, status FROM tasks WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(from_tuple).transpose()
    }

    async fn find_all(&self) -> Result<Vec<TaskRecord>, sqlx::Error> {
        let rows = sqlx::query_as::<_, TaskTuple>(
            "SELECT id, user_id, title, status FROM tasks ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(from_tuple).collect()
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<TaskRecord>, sqlx::Error> {
        let rows = sqlx::query_as::<_, TaskTuple>(
            "SELECT id, user_id, title, status FROM tasks WHERE user_id = $1 ORDER BY created_at ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(from_tuple).collect()
    }

    async fn update_status(&self, id: Uuid, status: TaskStatus) -> Result<Option<TaskRecord>, sqlx::Error> {
        let row = sqlx::query_as::<_, TaskTuple>(
            "UPDATE tasks SET status = $2 WHERE id = $1 RETURNING id, user_id, title, status",
        )
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(from_tuple).transpose()
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
