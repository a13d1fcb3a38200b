//! Shared setup for database integration tests.

use lingua_db::Migrator;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

/// Open a fresh in-memory SQLite database with all migrations applied.
pub async fn setup_db() -> DatabaseConnection {
    // One connection: every pooled connection would otherwise get its own
    // empty in-memory database.
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1);

    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}
