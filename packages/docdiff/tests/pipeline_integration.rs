//! End-to-end pipeline tests and property checks.

use docdiff::{
    compare_pair, ingest, similarity, ContentFingerprint, DocdiffError, DocumentStore, MemoryStore,
};
use proptest::prelude::*;

#[tokio::test]
async fn upload_dedup_compare_scenario() {
    let store = MemoryStore::new();

    // Upload report.txt
    let first = ingest(&store, "report.txt", b"Hello\nWorld").await.unwrap();
    assert!(first.is_new_document);

    // Identical bytes under a different name reuse the stored document
    let duplicate = ingest(&store, "copy.txt", b"Hello\nWorld").await.unwrap();
    assert!(!duplicate.is_new_document);
    assert_eq!(duplicate.document_id, first.document_id);

    // Different bytes get a fresh document
    let second = ingest(&store, "report2.txt", b"Hello\nPlanet")
        .await
        .unwrap();
    assert!(second.is_new_document);
    assert_ne!(second.document_id, first.document_id);

    // Similar but not identical
    let result = compare_pair(&store, first.document_id, second.document_id)
        .await
        .unwrap();
    assert!(result.similarity_percent > 0.0 && result.similarity_percent < 100.0);
    assert!(result.diff.contains("- World"));
    assert!(result.diff.contains("+ Planet"));
}

#[tokio::test]
async fn compare_nonexistent_id_fails() {
    let store = MemoryStore::new();
    let known = ingest(&store, "a.txt", b"text").await.unwrap().document_id;

    let err = compare_pair(&store, known, uuid::Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, DocdiffError::DocumentNotFound { .. }));
}

#[tokio::test]
async fn docx_upload_end_to_end() {
    let store = MemoryStore::new();
    let bytes = docdiff::testing::docx_fixture(&["Section one", "Section two"]);

    let outcome = ingest(&store, "contract.docx", &bytes).await.unwrap();
    let stored = store.fetch(outcome.document_id).await.unwrap().unwrap();
    assert_eq!(stored.content, "Section one\nSection two");
}

proptest! {
    #[test]
    fn fingerprint_is_deterministic(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(ContentFingerprint::of(&bytes), ContentFingerprint::of(&bytes));
    }

    #[test]
    fn distinct_inputs_fingerprint_differently(
        a in proptest::collection::vec(any::<u8>(), 0..256),
        b in proptest::collection::vec(any::<u8>(), 0..256),
    ) {
        prop_assume!(a != b);
        prop_assert_ne!(ContentFingerprint::of(&a), ContentFingerprint::of(&b));
    }

    #[test]
    fn similarity_stays_in_bounds(a in ".{0,64}", b in ".{0,64}") {
        let score = similarity(&a, &b);
        prop_assert!((0.0..=100.0).contains(&score));
    }

    #[test]
    fn identical_non_empty_texts_score_100(t in ".{1,64}") {
        prop_assert_eq!(similarity(&t, &t), 100.0);
    }
}
