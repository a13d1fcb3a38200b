//! Database migrations.
//!
//! Migrations are managed using sea-orm-migration. They are written with the
//! schema builder so the same set runs on PostgreSQL and SQLite.

pub use sea_orm_migration::prelude::*;

mod m20261014_000001_parent_resources;
mod m20261014_000002_task_pdfs;

/// Migrator for running database migrations.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261014_000001_parent_resources::Migration),
            Box::new(m20261014_000002_task_pdfs::Migration),
        ]
    }
}
