//! Attachment repository for database operations.
//!
//! Implements task PDF persistence using SeaORM.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use crate::entities::{sea_orm_active_enums::ResourceType as DbResourceType, task_pdfs};
use lingua_core::attachment::{
    Attachment, AttachmentError, AttachmentRepository as AttachmentRepoTrait, NewAttachment,
    ParentRef, ResourceKind,
};

/// Attachment repository implementation.
#[derive(Debug, Clone)]
pub struct AttachmentRepository {
    db: DatabaseConnection,
}

impl AttachmentRepository {
    /// Create a new attachment repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn insert_batch(
        &self,
        parent: ParentRef,
        items: Vec<NewAttachment>,
    ) -> Result<Vec<task_pdfs::Model>, DbErr> {
        let txn = self.db.begin().await?;

        let now = Utc::now().into();
        let mut created = Vec::with_capacity(items.len());
        for item in items {
            let row = task_pdfs::ActiveModel {
                resource_type: Set(to_db_resource_type(parent.kind)),
                resource_id: Set(parent.id),
                file_path: Set(item.file_path),
                file_name: Set(item.file_name),
                file_size: Set(item.file_size),
                upload_date: Set(item.upload_date.into()),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            };
            // Dropping `txn` on error rolls the whole batch back.
            created.push(row.insert(&txn).await?);
        }

        txn.commit().await?;

        Ok(created)
    }
}

impl AttachmentRepoTrait for AttachmentRepository {
    async fn list_for_parent(&self, parent: ParentRef) -> Result<Vec<Attachment>, AttachmentError> {
        let models = task_pdfs::Entity::find()
            .filter(task_pdfs::Column::ResourceType.eq(to_db_resource_type(parent.kind)))
            .filter(task_pdfs::Column::ResourceId.eq(parent.id))
            .order_by_desc(task_pdfs::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| AttachmentError::repository(e.to_string()))?;

        Ok(models.into_iter().map(to_domain).collect())
    }

    async fn create_many(
        &self,
        parent: ParentRef,
        items: Vec<NewAttachment>,
    ) -> Result<Vec<Attachment>, AttachmentError> {
        let models = self
            .insert_batch(parent, items)
            .await
            .map_err(|e| AttachmentError::repository(e.to_string()))?;

        Ok(models.into_iter().map(to_domain).collect())
    }

    async fn delete_scoped(&self, parent: ParentRef, id: i32) -> Result<bool, AttachmentError> {
        let result = task_pdfs::Entity::delete_many()
            .filter(task_pdfs::Column::Id.eq(id))
            .filter(task_pdfs::Column::ResourceType.eq(to_db_resource_type(parent.kind)))
            .filter(task_pdfs::Column::ResourceId.eq(parent.id))
            .exec(&self.db)
            .await
            .map_err(|e| AttachmentError::repository(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }

    async fn delete_for_parent(&self, parent: ParentRef) -> Result<u64, AttachmentError> {
        let result = task_pdfs::Entity::delete_many()
            .filter(task_pdfs::Column::ResourceType.eq(to_db_resource_type(parent.kind)))
            .filter(task_pdfs::Column::ResourceId.eq(parent.id))
            .exec(&self.db)
            .await
            .map_err(|e| AttachmentError::repository(e.to_string()))?;

        Ok(result.rows_affected)
    }
}

/// Convert domain resource kind to database enum.
fn to_db_resource_type(kind: ResourceKind) -> DbResourceType {
    match kind {
        ResourceKind::Video => DbResourceType::Video,
        ResourceKind::Audio => DbResourceType::Audio,
        ResourceKind::Speaking => DbResourceType::Speaking,
        ResourceKind::Writing => DbResourceType::Writing,
        ResourceKind::Reading => DbResourceType::Reading,
        ResourceKind::Story => DbResourceType::Story,
        ResourceKind::Blog => DbResourceType::Blog,
        ResourceKind::EslVideo => DbResourceType::EslVideo,
        ResourceKind::EslAudio => DbResourceType::EslAudio,
    }
}

/// Convert database enum to domain resource kind.
fn from_db_resource_type(t: DbResourceType) -> ResourceKind {
    match t {
        DbResourceType::Video => ResourceKind::Video,
        DbResourceType::Audio => ResourceKind::Audio,
        DbResourceType::Speaking => ResourceKind::Speaking,
        DbResourceType::Writing => ResourceKind::Writing,
        DbResourceType::Reading => ResourceKind::Reading,
        DbResourceType::Story => ResourceKind::Story,
        DbResourceType::Blog => ResourceKind::Blog,
        DbResourceType::EslVideo => ResourceKind::EslVideo,
        DbResourceType::EslAudio => ResourceKind::EslAudio,
    }
}

/// Convert database model to domain model.
fn to_domain(model: task_pdfs::Model) -> Attachment {
    Attachment {
        id: model.id,
        resource_type: from_db_resource_type(model.resource_type),
        resource_id: model.resource_id,
        file_path: model.file_path,
        file_name: model.file_name,
        file_size: model.file_size,
        upload_date: model.upload_date.with_timezone(&Utc),
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveEnum;

    #[test]
    fn test_resource_type_mapping_roundtrip() {
        for kind in ResourceKind::ALL {
            let db = to_db_resource_type(kind);
            assert_eq!(from_db_resource_type(db), kind);
            assert_eq!(db.to_value(), kind.as_str());
        }
    }
}
