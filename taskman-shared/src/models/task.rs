/// Task model and database operations
///
/// This module provides the Task model. Every task belongs to exactly one
/// user, fixed at creation time; the owning user's existence is validated by
/// the route handler before insert.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     title TEXT NOT NULL,
///     content TEXT NOT NULL,
///     priority INTEGER NOT NULL,
///     user_id INTEGER NOT NULL REFERENCES users (id)
/// );
/// ```
///
/// Foreign-key enforcement is not enabled: deleting a user leaves its tasks
/// in place with a dangling user_id.
///
/// # Example
///
/// ```no_run
/// use taskman_shared::models::task::{Task, CreateTask};
/// use taskman_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let id = Task::create(
///     &pool,
///     CreateTask {
///         title: "Write report".to_string(),
///         content: "Quarterly numbers".to_string(),
///         priority: 1,
///     },
///     1,
/// )
/// .await?;
/// println!("Created task: {}", id);
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Task model representing a single to-do item
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task ID (database-generated)
    pub id: i64,

    /// Short title
    pub title: String,

    /// Free-form task body
    pub content: String,

    /// Numeric priority
    pub priority: i32,

    /// ID of the owning user, fixed at creation
    pub user_id: i64,
}

/// Input for creating a new task
///
/// The owning user is supplied separately, not as part of the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    /// Short title
    pub title: String,

    /// Free-form task body
    pub content: String,

    /// Numeric priority
    pub priority: i32,
}

/// Input for updating an existing task
///
/// user_id is immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTask {
    /// New title
    pub title: String,

    /// New content
    pub content: String,

    /// New priority
    pub priority: i32,
}

impl Task {
    /// Returns all tasks
    ///
    /// No filtering or pagination; an empty database yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, content, priority, user_id
            FROM tasks
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Finds a task by ID
    ///
    /// # Returns
    ///
    /// The task if found, None otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, content, priority, user_id
            FROM tasks
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Creates a new task owned by `user_id`
    ///
    /// The caller is responsible for validating that `user_id` references an
    /// existing user; this function inserts unconditionally.
    ///
    /// # Returns
    ///
    /// The generated row ID of the new task
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn create(
        pool: &SqlitePool,
        data: CreateTask,
        user_id: i64,
    ) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO tasks (title, content, priority, user_id)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(data.title)
        .bind(data.content)
        .bind(data.priority)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Updates title, content and priority of an existing task
    ///
    /// user_id is never touched. Existence is checked via the affected-row
    /// count rather than a pre-read.
    ///
    /// # Returns
    ///
    /// The number of rows affected (0 if the task does not exist)
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: UpdateTask,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET title = ?, content = ?, priority = ?
            WHERE id = ?
            "#,
        )
        .bind(data.title)
        .bind(data.content)
        .bind(data.priority)
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Deletes a task by ID
    ///
    /// # Returns
    ///
    /// The number of rows affected (0 if the task does not exist)
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM tasks
            WHERE id = ?
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }
}
