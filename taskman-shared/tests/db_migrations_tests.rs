/// Integration tests for database migrations
///
/// These tests run against an in-memory SQLite database and need no
/// external services.

use taskman_shared::db::migrations::run_migrations;
use taskman_shared::db::pool::{close_pool, create_pool, DatabaseConfig};

fn memory_config() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_run_migrations_creates_tables() {
    let pool = create_pool(memory_config())
        .await
        .expect("Failed to create pool");

    run_migrations(&pool).await.expect("Migrations should run");

    // Both resource tables exist afterwards
    let tables: Vec<(String,)> = sqlx::query_as(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('users', 'tasks') ORDER BY name",
    )
    .fetch_all(&pool)
    .await
    .expect("Schema query should succeed");

    let names: Vec<&str> = tables.iter().map(|(n,)| n.as_str()).collect();
    assert_eq!(names, vec!["tasks", "users"]);

    close_pool(pool).await;
}

#[tokio::test]
async fn test_run_migrations_is_idempotent() {
    let pool = create_pool(memory_config())
        .await
        .expect("Failed to create pool");

    run_migrations(&pool).await.expect("First run should succeed");
    run_migrations(&pool)
        .await
        .expect("Second run should be a no-op");

    close_pool(pool).await;
}
