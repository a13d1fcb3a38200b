//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod parent;
pub mod task_pdf;

pub use parent::{ParentResourceRepository, ParentTableLookup, parent_registry};
pub use task_pdf::AttachmentRepository;
