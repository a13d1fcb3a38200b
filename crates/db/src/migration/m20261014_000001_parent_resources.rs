//! Identity tables for the resources that own attachments.
//!
//! The content tables belong to the wider platform. Each is created here
//! with just `id`, `title` and `created_at`, and only if it does not exist
//! yet, so the service can also run against an empty database.

use lingua_core::attachment::ResourceKind;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for kind in ResourceKind::ALL {
            manager
                .create_table(
                    Table::create()
                        .table(Alias::new(kind.table_name()))
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Alias::new("id"))
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Alias::new("title")).string().not_null())
                        .col(
                            ColumnDef::new(Alias::new("created_at"))
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        // The tables may predate this migration; leave them in place.
        Ok(())
    }
}
