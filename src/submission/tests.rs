//! Submission Module Tests
//!
//! ## Test Scopes
//! - **Validation**: Emptiness and length rules, header parsing.
//! - **Idempotency**: Replay, conflict, and unkeyed duplicates.
//! - **Concurrency**: Concurrent keyed submissions collapse into one record.

#[cfg(test)]
mod tests {
    use crate::error::{ErrorKind, MAX_TEXT_LENGTH, TextError};
    use crate::idempotency::ledger::IdempotencyLedger;
    use crate::idempotency::types::Reconciled;
    use crate::storage::memory::RecordStore;
    use crate::submission::service::submit_text;
    use crate::submission::validation::{parse_idempotency_key, validate_text};
    use axum::http::HeaderValue;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn fresh() -> (RecordStore, IdempotencyLedger) {
        (RecordStore::new(), IdempotencyLedger::new())
    }

    // ============================================================
    // VALIDATION TESTS
    // ============================================================

    #[test]
    fn test_validate_accepts_single_char() {
        assert!(validate_text("a").is_ok());
    }

    #[test]
    fn test_validate_rejects_empty() {
        assert_eq!(validate_text(""), Err(TextError::EmptyText));
    }

    #[test]
    fn test_validate_rejects_whitespace_only() {
        assert_eq!(validate_text("   "), Err(TextError::EmptyText));
        assert_eq!(validate_text("\n\t "), Err(TextError::EmptyText));
    }

    #[test]
    fn test_validate_length_boundary() {
        let at_limit = "x".repeat(MAX_TEXT_LENGTH);
        let over_limit = "x".repeat(MAX_TEXT_LENGTH + 1);

        assert!(validate_text(&at_limit).is_ok());
        assert_eq!(
            validate_text(&over_limit),
            Err(TextError::TooLong {
                max: MAX_TEXT_LENGTH
            })
        );
    }

    #[test]
    fn test_validate_length_counts_characters_not_bytes() {
        // 280 two-byte characters is 560 bytes but still within the limit
        let text = "é".repeat(MAX_TEXT_LENGTH);

        assert!(validate_text(&text).is_ok());
    }

    #[test]
    fn test_validate_length_includes_surrounding_whitespace() {
        let text = format!(" {} ", "x".repeat(MAX_TEXT_LENGTH - 1));

        assert!(matches!(validate_text(&text), Err(TextError::TooLong { .. })));
    }

    #[test]
    fn test_too_long_message() {
        let err = TextError::TooLong {
            max: MAX_TEXT_LENGTH,
        };

        assert_eq!(
            err.to_string(),
            "Text exceeds the maximum length of 280 characters"
        );
    }

    #[test]
    fn test_parse_idempotency_key() {
        assert_eq!(parse_idempotency_key(None), Ok(None));
        assert_eq!(
            parse_idempotency_key(Some(&HeaderValue::from_static(""))),
            Ok(None)
        );
        assert_eq!(
            parse_idempotency_key(Some(&HeaderValue::from_static("abc-123"))),
            Ok(Some("abc-123".to_string()))
        );
    }

    #[test]
    fn test_parse_idempotency_key_rejects_opaque_bytes() {
        let value = HeaderValue::from_bytes(&[0xfa, 0xfb]).unwrap();

        assert_eq!(
            parse_idempotency_key(Some(&value)),
            Err(TextError::InvalidIdempotencyKey)
        );
    }

    // ============================================================
    // SUBMIT TESTS
    // ============================================================

    #[test]
    fn test_submit_without_key_creates() {
        let (store, ledger) = fresh();

        let outcome = submit_text(&store, &ledger, "Hello world", None).unwrap();

        assert_eq!(outcome.record().text, "Hello world");
        assert!(!outcome.is_replay());
        assert_eq!(store.len(), 1);
        assert!(ledger.is_empty(), "Unkeyed submissions are not recorded in the ledger");
    }

    #[test]
    fn test_submit_without_key_never_deduplicates() {
        let (store, ledger) = fresh();

        let first = submit_text(&store, &ledger, "same", None).unwrap();
        let second = submit_text(&store, &ledger, "same", None).unwrap();

        assert_ne!(first.record().id, second.record().id);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_submit_invalid_text_does_not_mutate() {
        let (store, ledger) = fresh();
        let long = "y".repeat(MAX_TEXT_LENGTH + 1);

        assert!(submit_text(&store, &ledger, "", Some("k")).is_err());
        assert!(submit_text(&store, &ledger, "   ", None).is_err());
        assert!(submit_text(&store, &ledger, &long, Some("k")).is_err());

        assert!(store.is_empty());
        assert!(ledger.lookup("k").is_none());
    }

    #[test]
    fn test_submit_replay_returns_same_record() {
        let (store, ledger) = fresh();

        let first = submit_text(&store, &ledger, "hi", Some("K")).unwrap();
        let second = submit_text(&store, &ledger, "hi", Some("K")).unwrap();

        assert!(matches!(first, Reconciled::Created(_)));
        assert!(matches!(second, Reconciled::Replayed(_)));
        assert_eq!(first.record(), second.record());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_submit_conflict_on_different_text() {
        let (store, ledger) = fresh();
        submit_text(&store, &ledger, "a", Some("K")).unwrap();

        let err = submit_text(&store, &ledger, "b", Some("K")).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(store.len(), 1);
        assert_eq!(store.find_containing("a").len(), 1);
        assert!(store.find_containing("b").is_empty());
    }

    #[test]
    fn test_submit_validation_precedes_conflict() {
        let (store, ledger) = fresh();
        submit_text(&store, &ledger, "a", Some("K")).unwrap();

        let err = submit_text(&store, &ledger, " ", Some("K")).unwrap_err();

        assert_eq!(err, TextError::EmptyText);
    }

    #[test]
    fn test_submit_distinct_keys_create_distinct_records() {
        let (store, ledger) = fresh();

        let a = submit_text(&store, &ledger, "same", Some("K1")).unwrap();
        let b = submit_text(&store, &ledger, "same", Some("K2")).unwrap();

        assert_ne!(a.record().id, b.record().id);
        assert_eq!(store.len(), 2);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_submit_keyed_record_is_searchable() {
        let (store, ledger) = fresh();
        let outcome = submit_text(&store, &ledger, "Keyed Entry", Some("K")).unwrap();

        let found = store.find_containing("keyed");

        assert_eq!(found, vec![outcome.into_record()]);
    }

    // ============================================================
    // CONCURRENCY TESTS
    // ============================================================

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_same_key_creates_one_record() {
        let store = Arc::new(RecordStore::new());
        let ledger = Arc::new(IdempotencyLedger::new());

        let mut tasks = Vec::new();
        for _ in 0..64 {
            let store = store.clone();
            let ledger = ledger.clone();
            tasks.push(tokio::spawn(async move {
                submit_text(&store, &ledger, "retry me", Some("fresh-key"))
                    .unwrap()
                    .into_record()
            }));
        }

        let mut ids = HashSet::new();
        for task in tasks {
            ids.insert(task.await.unwrap().id);
        }

        assert_eq!(ids.len(), 1, "All callers must see the same record");
        assert_eq!(store.len(), 1);
        assert_eq!(ledger.len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_distinct_keys_all_create() {
        let store = Arc::new(RecordStore::new());
        let ledger = Arc::new(IdempotencyLedger::new());

        let mut tasks = Vec::new();
        for i in 0..32 {
            let store = store.clone();
            let ledger = ledger.clone();
            tasks.push(tokio::spawn(async move {
                let key = format!("key-{}", i);
                submit_text(&store, &ledger, "text", Some(&key)).unwrap()
            }));
        }

        for task in tasks {
            assert!(!task.await.unwrap().is_replay());
        }

        assert_eq!(store.len(), 32);
        assert_eq!(ledger.len(), 32);
    }
}
