/// Database migration runner
///
/// This module runs the embedded schema migrations using sqlx's migration
/// system. Migration files live in the `migrations/` directory at this
/// crate's root and are compiled into the binary.
///
/// # Example
///
/// ```no_run
/// use taskman_shared::db::pool::{create_pool, DatabaseConfig};
/// use taskman_shared::db::migrations::run_migrations;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let pool = create_pool(DatabaseConfig::default()).await?;
///     run_migrations(&pool).await?;
///     Ok(())
/// }
/// ```

use sqlx::SqlitePool;
use tracing::{info, warn};

/// Runs all pending database migrations
///
/// Creates the sqlx migrations bookkeeping table if needed, then applies
/// every migration that has not been applied yet. Re-running against an
/// up-to-date database is a no-op.
///
/// # Errors
///
/// Returns an error if a migration fails to execute or the database
/// connection is lost during migration.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    info!("Starting database migrations");

    let migrations = sqlx::migrate!("./migrations");

    match migrations.run(pool).await {
        Ok(()) => {
            info!("All database migrations completed successfully");
            Ok(())
        }
        Err(e) => {
            warn!("Migration failed: {}", e);
            Err(e)
        }
    }
}
