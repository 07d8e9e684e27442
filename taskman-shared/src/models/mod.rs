/// Database models for taskman
///
/// This module contains the two resource models and their CRUD operations.
///
/// # Models
///
/// - `user`: User accounts (username, name fields, age, derived slug)
/// - `task`: Tasks owned by a user (title, content, priority)
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
/// User::create(&pool, new_user).await?;
/// # Ok(())
/// # }
/// ```

pub mod task;
pub mod user;
