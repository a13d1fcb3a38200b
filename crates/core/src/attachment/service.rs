//! Attachment service implementation.

use std::sync::Arc;

use chrono::Utc;

use super::candidate::filter_candidates;
use super::error::AttachmentError;
use super::registry::ParentRegistry;
use super::types::{Attachment, NewAttachment, ParentRef, PdfCandidate, parse_record_id};

/// Repository trait for attachment persistence.
///
/// This trait is implemented by the db crate to provide actual database operations.
pub trait AttachmentRepository: Send + Sync {
    /// List attachments of a parent, newest id first.
    fn list_for_parent(
        &self,
        parent: ParentRef,
    ) -> impl std::future::Future<Output = Result<Vec<Attachment>, AttachmentError>> + Send;

    /// Insert a batch of attachments for a parent, all or nothing.
    ///
    /// Returns the created rows in input order.
    fn create_many(
        &self,
        parent: ParentRef,
        items: Vec<NewAttachment>,
    ) -> impl std::future::Future<Output = Result<Vec<Attachment>, AttachmentError>> + Send;

    /// Delete the attachment matching `id` under `parent`.
    ///
    /// Returns whether a row was removed.
    fn delete_scoped(
        &self,
        parent: ParentRef,
        id: i32,
    ) -> impl std::future::Future<Output = Result<bool, AttachmentError>> + Send;

    /// Delete every attachment of a parent. Returns the number removed.
    fn delete_for_parent(
        &self,
        parent: ParentRef,
    ) -> impl std::future::Future<Output = Result<u64, AttachmentError>> + Send;
}

/// Attachment service mediating all access to the attachment table.
pub struct AttachmentService<R: AttachmentRepository> {
    parents: Arc<ParentRegistry>,
    repo: Arc<R>,
}

impl<R: AttachmentRepository> AttachmentService<R> {
    /// Create a new attachment service.
    #[must_use]
    pub fn new(parents: Arc<ParentRegistry>, repo: Arc<R>) -> Self {
        Self { parents, repo }
    }

    /// Resolve the parent named by raw path segments.
    ///
    /// Returns `Ok(None)` for an unknown type, a malformed id, or a resource
    /// that does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the existence lookup itself fails.
    pub async fn resolve_parent(
        &self,
        resource_type: &str,
        resource_id: &str,
    ) -> Result<Option<ParentRef>, AttachmentError> {
        self.parents.resolve(resource_type, resource_id).await
    }

    async fn require_parent(
        &self,
        resource_type: &str,
        resource_id: &str,
    ) -> Result<ParentRef, AttachmentError> {
        self.resolve_parent(resource_type, resource_id)
            .await?
            .ok_or_else(|| AttachmentError::parent_not_found(resource_type, resource_id))
    }

    /// List the attachments of a parent, newest id first.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parent does not resolve
    /// - Database operation fails
    pub async fn list(
        &self,
        resource_type: &str,
        resource_id: &str,
    ) -> Result<Vec<Attachment>, AttachmentError> {
        let parent = self.require_parent(resource_type, resource_id).await?;
        self.repo.list_for_parent(parent).await
    }

    /// Add a batch of attachments to a parent.
    ///
    /// Candidates missing a file path or file name are dropped; the rest are
    /// inserted together.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parent does not resolve
    /// - No candidate survives filtering
    /// - Database operation fails
    pub async fn add(
        &self,
        resource_type: &str,
        resource_id: &str,
        candidates: Vec<PdfCandidate>,
    ) -> Result<Vec<Attachment>, AttachmentError> {
        let parent = self.require_parent(resource_type, resource_id).await?;

        let items = filter_candidates(candidates, Utc::now());
        if items.is_empty() {
            return Err(AttachmentError::NoValidAttachments);
        }

        self.repo.create_many(parent, items).await
    }

    /// Delete one attachment of a parent.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parent does not resolve
    /// - No attachment with this id belongs to the parent
    /// - Database operation fails
    pub async fn delete(
        &self,
        resource_type: &str,
        resource_id: &str,
        id: &str,
    ) -> Result<(), AttachmentError> {
        let parent = self.require_parent(resource_type, resource_id).await?;

        let Some(attachment_id) = parse_record_id(id) else {
            return Err(AttachmentError::not_found(id));
        };

        if self.repo.delete_scoped(parent, attachment_id).await? {
            Ok(())
        } else {
            Err(AttachmentError::not_found(id))
        }
    }

    /// Remove every attachment of a parent.
    ///
    /// Intended for code that deletes parent resources. Nothing calls this
    /// automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails.
    pub async fn purge_parent(&self, parent: ParentRef) -> Result<u64, AttachmentError> {
        self.repo.delete_for_parent(parent).await
    }
}
