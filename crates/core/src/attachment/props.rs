//! Property-based tests for parent resolution and candidate filtering.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use proptest::prelude::*;

use crate::attachment::{
    AttachmentError, NewAttachment, ParentLookup, ParentRegistry, PdfCandidate, ResourceKind,
    filter_candidates, parse_record_id,
};

/// Lookup that says yes to everything and counts calls.
#[derive(Default)]
struct Everything {
    calls: AtomicUsize,
}

#[async_trait]
impl ParentLookup for Everything {
    async fn exists(&self, _id: i32) -> Result<bool, AttachmentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    }
}

fn registry_of_everything() -> (ParentRegistry, Arc<Everything>) {
    let lookup = Arc::new(Everything::default());
    let mut registry = ParentRegistry::new();
    for kind in ResourceKind::ALL {
        registry.register(kind, lookup.clone());
    }
    (registry, lookup)
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime")
        .block_on(future)
}

/// Strategy for strings that are not resource kind tags.
fn arb_unknown_type() -> impl Strategy<Value = String> {
    "[a-zA-Z_ -]{0,16}".prop_filter("must not be a kind", |s| ResourceKind::parse(s).is_none())
}

/// Strategy for optional path/name fields, biased toward empty values.
fn arb_field() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        "[a-z./:]{1,20}".prop_map(Some),
    ]
}

fn arb_candidate() -> impl Strategy<Value = PdfCandidate> {
    (arb_field(), arb_field(), proptest::option::of(any::<i64>())).prop_map(
        |(file_path, file_name, file_size)| PdfCandidate {
            file_path,
            file_name,
            file_size,
            upload_date: None,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Unknown resource types never resolve and never reach a lookup.
    #[test]
    fn prop_unknown_type_is_absent(resource_type in arb_unknown_type(), id in 0..i32::MAX) {
        let (registry, lookup) = registry_of_everything();
        let resolved = block_on(registry.resolve(&resource_type, &id.to_string())).unwrap();
        prop_assert_eq!(resolved, None);
        prop_assert_eq!(lookup.calls.load(Ordering::SeqCst), 0);
    }

    /// Ids with any non-digit character never resolve.
    #[test]
    fn prop_non_integer_id_is_absent(id in "[0-9]{0,4}[^0-9][ -~]{0,4}") {
        let (registry, lookup) = registry_of_everything();
        let resolved = block_on(registry.resolve("video", &id)).unwrap();
        prop_assert_eq!(resolved, None);
        prop_assert_eq!(lookup.calls.load(Ordering::SeqCst), 0);
    }

    /// Every non-negative i32 rendered in decimal parses back to itself.
    #[test]
    fn prop_record_id_roundtrip(id in 0..=i32::MAX) {
        prop_assert_eq!(parse_record_id(&id.to_string()), Some(id));
    }

    /// Filtering keeps exactly the candidates with a non-empty path and name.
    #[test]
    fn prop_filter_keeps_only_complete(batch in proptest::collection::vec(arb_candidate(), 0..12)) {
        let expected = batch
            .iter()
            .filter(|c| {
                c.file_path.as_deref().is_some_and(|s| !s.is_empty())
                    && c.file_name.as_deref().is_some_and(|s| !s.is_empty())
            })
            .count();

        let kept: Vec<NewAttachment> = filter_candidates(batch, Utc::now());
        prop_assert_eq!(kept.len(), expected);
        prop_assert!(kept.iter().all(|a| !a.file_path.is_empty() && !a.file_name.is_empty()));
        prop_assert!(kept.iter().all(|a| a.file_size.is_none_or(|s| s >= 0)));
    }
}
