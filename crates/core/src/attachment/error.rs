//! Attachment error types.

use lingua_shared::AppError;
use thiserror::Error;

/// Attachment operation errors.
#[derive(Debug, Error)]
pub enum AttachmentError {
    /// The parent resource is unknown, malformed, or does not exist.
    #[error("parent resource not found: {resource_type}/{resource_id}")]
    ParentNotFound {
        /// Resource type as requested.
        resource_type: String,
        /// Resource id as requested.
        resource_id: String,
    },

    /// Attachment not found under the given parent.
    #[error("attachment not found: {0}")]
    NotFound(String),

    /// Every candidate in a batch was rejected.
    #[error("No valid PDFs")]
    NoValidAttachments,

    /// Repository operation failed.
    #[error("{0}")]
    Repository(String),
}

impl AttachmentError {
    /// Create a parent not found error.
    #[must_use]
    pub fn parent_not_found(resource_type: &str, resource_id: &str) -> Self {
        Self::ParentNotFound {
            resource_type: resource_type.to_string(),
            resource_id: resource_id.to_string(),
        }
    }

    /// Create an attachment not found error.
    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    /// Create a repository error.
    #[must_use]
    pub fn repository(msg: impl Into<String>) -> Self {
        Self::Repository(msg.into())
    }
}

impl From<AttachmentError> for AppError {
    fn from(err: AttachmentError) -> Self {
        match err {
            AttachmentError::ParentNotFound { .. } | AttachmentError::NotFound(_) => {
                Self::NotFound(err.to_string())
            }
            AttachmentError::NoValidAttachments => Self::Validation(err.to_string()),
            AttachmentError::Repository(msg) => Self::Database(msg),
        }
    }
}
