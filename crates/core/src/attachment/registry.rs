//! Parent resource registry.
//!
//! Maps each [`ResourceKind`] to a lookup that can tell whether a resource
//! with a given primary key exists. The registry is built once at startup and
//! shared; tests build one from fakes.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use super::error::AttachmentError;
use super::types::{ParentRef, ResourceKind, parse_record_id};

/// Existence check for one kind of parent resource.
#[async_trait]
pub trait ParentLookup: Send + Sync {
    /// Returns whether a resource with this primary key exists.
    async fn exists(&self, id: i32) -> Result<bool, AttachmentError>;
}

/// Registry of parent lookups, keyed by resource kind.
#[derive(Clone, Default)]
pub struct ParentRegistry {
    lookups: HashMap<ResourceKind, Arc<dyn ParentLookup>>,
}

impl std::fmt::Debug for ParentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<_> = self.lookups.keys().map(ResourceKind::as_str).collect();
        kinds.sort_unstable();
        f.debug_struct("ParentRegistry").field("kinds", &kinds).finish()
    }
}

impl ParentRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the lookup for a kind, replacing any previous one.
    pub fn register(&mut self, kind: ResourceKind, lookup: Arc<dyn ParentLookup>) {
        self.lookups.insert(kind, lookup);
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with(mut self, kind: ResourceKind, lookup: Arc<dyn ParentLookup>) -> Self {
        self.register(kind, lookup);
        self
    }

    /// Whether a lookup is registered for the kind.
    #[must_use]
    pub fn is_registered(&self, kind: ResourceKind) -> bool {
        self.lookups.contains_key(&kind)
    }

    /// Resolve a parent from raw path segments.
    ///
    /// Returns `Ok(None)` when the type is not a known kind, the id is not a
    /// non-negative integer, no lookup is registered for the kind, or the
    /// resource does not exist. Storage is only consulted once both segments
    /// are valid.
    pub async fn resolve(
        &self,
        resource_type: &str,
        resource_id: &str,
    ) -> Result<Option<ParentRef>, AttachmentError> {
        let Some(kind) = ResourceKind::parse(resource_type) else {
            return Ok(None);
        };
        let Some(id) = parse_record_id(resource_id) else {
            return Ok(None);
        };
        let Some(lookup) = self.lookups.get(&kind) else {
            return Ok(None);
        };

        if lookup.exists(id).await? {
            Ok(Some(ParentRef::new(kind, id)))
        } else {
            Ok(None)
        }
    }
}
