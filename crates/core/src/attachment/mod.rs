//! Attachment registry for PDF files owned by content resources.
//!
//! This module provides business logic for attachments including:
//! - The closed set of resource kinds that can own attachments
//! - Parent existence checks through an injected registry
//! - Candidate filtering for bulk creation
//! - Listing, bulk creation, scoped deletion, and parent purge

mod candidate;
mod error;
mod registry;
mod service;
mod types;

#[cfg(test)]
mod props;

pub use candidate::{filter_candidates, parse_upload_date};
pub use error::AttachmentError;
pub use registry::{ParentLookup, ParentRegistry};
pub use service::{AttachmentRepository, AttachmentService};
pub use types::{Attachment, NewAttachment, ParentRef, PdfCandidate, ResourceKind, parse_record_id};
