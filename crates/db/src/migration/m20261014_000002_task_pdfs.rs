//! PDF attachments for content resources.
//!
//! `resource_id` has no foreign key: the owning table depends on
//! `resource_type`. Lookups and scoped deletes filter on both columns, hence
//! the composite index.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TaskPdfs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TaskPdfs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TaskPdfs::ResourceType).string_len(20).not_null())
                    .col(ColumnDef::new(TaskPdfs::ResourceId).integer().not_null())
                    .col(ColumnDef::new(TaskPdfs::FilePath).text().not_null())
                    .col(ColumnDef::new(TaskPdfs::FileName).string().not_null())
                    .col(ColumnDef::new(TaskPdfs::FileSize).big_integer().null())
                    .col(
                        ColumnDef::new(TaskPdfs::UploadDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(TaskPdfs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(TaskPdfs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_task_pdfs_resource")
                    .table(TaskPdfs::Table)
                    .col(TaskPdfs::ResourceType)
                    .col(TaskPdfs::ResourceId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TaskPdfs::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TaskPdfs {
    Table,
    Id,
    ResourceType,
    ResourceId,
    FilePath,
    FileName,
    FileSize,
    UploadDate,
    CreatedAt,
    UpdatedAt,
}
