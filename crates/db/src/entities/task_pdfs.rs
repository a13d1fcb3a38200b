//! `SeaORM` Entity for task_pdfs table.

use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::ResourceType;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "task_pdfs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub resource_type: ResourceType,
    pub resource_id: i32,
    #[sea_orm(column_type = "Text")]
    pub file_path: String,
    pub file_name: String,
    pub file_size: Option<i64>,
    pub upload_date: DateTimeWithTimeZone,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

// `resource_id` points at a different table per `resource_type`, so there is
// no foreign key to declare.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
