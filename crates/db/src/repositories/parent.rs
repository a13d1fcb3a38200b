//! Parent resource lookups.
//!
//! The nine content tables share an `id` primary key, so a single repository
//! can check existence in any of them by table name. Table names come from
//! the closed [`ResourceKind`] set, never from request input.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Alias, Expr, Order, Query};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};

use lingua_core::attachment::{AttachmentError, ParentLookup, ParentRegistry, ResourceKind};

/// Repository over the parent resource tables.
#[derive(Debug, Clone)]
pub struct ParentResourceRepository {
    db: DatabaseConnection,
}

impl ParentResourceRepository {
    /// Creates a new parent resource repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether a resource of `kind` with primary key `id` exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn exists(&self, kind: ResourceKind, id: i32) -> Result<bool, DbErr> {
        let query = Query::select()
            .expr(Expr::val(1))
            .from(Alias::new(kind.table_name()))
            .and_where(Expr::col(Alias::new("id")).eq(id))
            .limit(1)
            .to_owned();

        let stmt = self.db.get_database_backend().build(&query);
        Ok(self.db.query_one(stmt).await?.is_some())
    }

    /// Finds the id of a resource by exact title.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_title(
        &self,
        kind: ResourceKind,
        title: &str,
    ) -> Result<Option<i32>, DbErr> {
        let query = Query::select()
            .column(Alias::new("id"))
            .from(Alias::new(kind.table_name()))
            .and_where(Expr::col(Alias::new("title")).eq(title))
            .order_by(Alias::new("id"), Order::Asc)
            .limit(1)
            .to_owned();

        let stmt = self.db.get_database_backend().build(&query);
        match self.db.query_one(stmt).await? {
            Some(row) => Ok(Some(row.try_get("", "id")?)),
            None => Ok(None),
        }
    }

    /// Inserts a resource row and returns its id.
    ///
    /// Used by the seeder and tests; the platform owns real content rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, kind: ResourceKind, title: &str) -> Result<i32, DbErr> {
        let mut insert = Query::insert();
        insert
            .into_table(Alias::new(kind.table_name()))
            .columns([Alias::new("title"), Alias::new("created_at")])
            .returning_col(Alias::new("id"));
        insert
            .values([Expr::value(title), Expr::value(Utc::now())])
            .map_err(|e| DbErr::Custom(e.to_string()))?;

        let stmt = self.db.get_database_backend().build(&insert);
        let row = self
            .db
            .query_one(stmt)
            .await?
            .ok_or(DbErr::RecordNotInserted)?;

        row.try_get("", "id")
    }

    /// Deletes a resource row. Attachments are not touched.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, kind: ResourceKind, id: i32) -> Result<bool, DbErr> {
        let delete = Query::delete()
            .from_table(Alias::new(kind.table_name()))
            .and_where(Expr::col(Alias::new("id")).eq(id))
            .to_owned();

        let stmt = self.db.get_database_backend().build(&delete);
        Ok(self.db.execute(stmt).await?.rows_affected() > 0)
    }
}

/// [`ParentLookup`] backed by one parent table.
#[derive(Debug, Clone)]
pub struct ParentTableLookup {
    repo: ParentResourceRepository,
    kind: ResourceKind,
}

impl ParentTableLookup {
    /// Creates a lookup for `kind`.
    #[must_use]
    pub const fn new(repo: ParentResourceRepository, kind: ResourceKind) -> Self {
        Self { repo, kind }
    }
}

#[async_trait]
impl ParentLookup for ParentTableLookup {
    async fn exists(&self, id: i32) -> Result<bool, AttachmentError> {
        self.repo
            .exists(self.kind, id)
            .await
            .map_err(|e| AttachmentError::repository(e.to_string()))
    }
}

/// Builds a registry with a table lookup for every resource kind.
#[must_use]
pub fn parent_registry(db: &DatabaseConnection) -> ParentRegistry {
    let repo = ParentResourceRepository::new(db.clone());
    let mut registry = ParentRegistry::new();
    for kind in ResourceKind::ALL {
        registry.register(kind, Arc::new(ParentTableLookup::new(repo.clone(), kind)));
    }
    registry
}
