/// User model and database operations
///
/// This module provides the User model and CRUD operations for managing user
/// accounts of the task manager.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     username TEXT NOT NULL,
///     firstname TEXT NOT NULL,
///     lastname TEXT NOT NULL,
///     age INTEGER NOT NULL,
///     slug TEXT NOT NULL
/// );
/// ```
///
/// The slug is derived from the username exactly once, at creation time, and
/// is never recomputed on update. Username uniqueness is intended but not
/// enforced.
///
/// # Example
///
/// ```no_run
/// use taskman_shared::models::user::{User, CreateUser};
/// use taskman_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let new_user = CreateUser {
///     username: "john-doe".to_string(),
///     firstname: "John".to_string(),
///     lastname: "Doe".to_string(),
///     age: 30,
/// };
///
/// let id = User::create(&pool, new_user).await?;
/// println!("Created user: {}", id);
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use slug::slugify;
use sqlx::SqlitePool;

/// User model representing a task-manager account
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (database-generated)
    pub id: i64,

    /// Display username
    ///
    /// Intended to be unique, but uniqueness is not enforced
    pub username: String,

    /// First name
    pub firstname: String,

    /// Last name
    pub lastname: String,

    /// Age in years
    pub age: i32,

    /// URL-safe slug derived from the username at creation time
    pub slug: String,
}

/// Input for creating a new user
///
/// The slug is computed from `username` during `User::create`; it is not
/// part of the input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display username (source of the slug)
    pub username: String,

    /// First name
    pub firstname: String,

    /// Last name
    pub lastname: String,

    /// Age in years
    pub age: i32,
}

/// Input for updating an existing user
///
/// Only firstname, lastname and age are mutable. Username and slug are
/// immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New first name
    pub firstname: String,

    /// New last name
    pub lastname: String,

    /// New age
    pub age: i32,
}

impl User {
    /// Returns all users
    ///
    /// No pagination; an empty database yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, firstname, lastname, age, slug
            FROM users
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(users)
    }

    /// Finds a user by ID
    ///
    /// # Returns
    ///
    /// The user if found, None otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, firstname, lastname, age, slug
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Creates a new user in the database
    ///
    /// The slug is derived from the submitted username via `slug::slugify`
    /// (lowercase, whitespace and punctuation to hyphens, non-ASCII
    /// transliterated). No uniqueness check is performed on the username.
    ///
    /// # Returns
    ///
    /// The generated row ID of the new user
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use taskman_shared::models::user::{User, CreateUser};
    /// # use sqlx::SqlitePool;
    /// # async fn example(pool: SqlitePool) -> Result<(), sqlx::Error> {
    /// let new_user = CreateUser {
    ///     username: "john-doe".to_string(),
    ///     firstname: "John".to_string(),
    ///     lastname: "Doe".to_string(),
    ///     age: 30,
    /// };
    ///
    /// let id = User::create(&pool, new_user).await?;
    /// println!("Created user: {}", id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(pool: &SqlitePool, data: CreateUser) -> Result<i64, sqlx::Error> {
        let slug = slugify(&data.username);

        let result = sqlx::query(
            r#"
            INSERT INTO users (username, firstname, lastname, age, slug)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(data.username)
        .bind(data.firstname)
        .bind(data.lastname)
        .bind(data.age)
        .bind(slug)
        .execute(pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Updates firstname, lastname and age of an existing user
    ///
    /// Username and slug are never touched. Existence is checked via the
    /// affected-row count rather than a pre-read.
    ///
    /// # Returns
    ///
    /// The number of rows affected (0 if the user does not exist)
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: UpdateUser,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET firstname = ?, lastname = ?, age = ?
            WHERE id = ?
            "#,
        )
        .bind(data.firstname)
        .bind(data.lastname)
        .bind(data.age)
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Deletes a user by ID
    ///
    /// Tasks referencing the user are left in place (dangling user_id).
    ///
    /// # Returns
    ///
    /// The number of rows affected (0 if the user does not exist)
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }
}
