//! Core business logic for Lingua.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//!
//! # Modules
//!
//! - `attachment` - PDF attachments hung off content resources

pub mod attachment;
