//! Unit tests for the attempt ledger

use std::sync::Arc;

use crate::domain::entities::attempt::FlowKind;
use crate::repositories::InMemoryAttemptRepository;
use crate::services::ledger::AttemptLedger;

fn ledger() -> (AttemptLedger, InMemoryAttemptRepository) {
    let repo = InMemoryAttemptRepository::new();
    let ledger = AttemptLedger::new(Arc::new(repo.clone()), FlowKind::SignUp);
    (ledger, repo)
}

#[tokio::test]
async fn test_record_attempt_appends() {
    let (ledger, repo) = ledger();
    ledger.record_attempt("0911", "1.1.1.1", false).await.unwrap();
    ledger.record_attempt("0911", "1.1.1.1", true).await.unwrap();

    assert_eq!(repo.len().await, 2);
    assert_eq!(ledger.flow(), FlowKind::SignUp);
}

#[tokio::test]
async fn test_unconsumed_failures_ignore_successes() {
    let (ledger, _) = ledger();
    ledger.record_attempt("0911", "1.1.1.1", false).await.unwrap();
    ledger.record_attempt("0911", "1.1.1.1", true).await.unwrap();
    ledger.record_attempt("0922", "1.1.1.1", false).await.unwrap();
    ledger.record_attempt("0933", "3.3.3.3", false).await.unwrap();

    let failures = ledger.unconsumed_failures("0911", "1.1.1.1").await.unwrap();
    assert_eq!(failures.len(), 2);
    assert!(failures.into_iter().all(|a| !a.succeeded));
}

#[tokio::test]
async fn test_mark_consumed_twice_is_idempotent() {
    let (ledger, _) = ledger();
    for _ in 0..3 {
        ledger.record_attempt("0911", "1.1.1.1", false).await.unwrap();
    }
    let failures = ledger.unconsumed_failures("0911", "1.1.1.1").await.unwrap();

    assert_eq!(ledger.mark_consumed(&failures).await.unwrap(), 3);
    assert_eq!(ledger.mark_consumed(&failures).await.unwrap(), 0);
    assert!(ledger
        .unconsumed_failures("0911", "1.1.1.1")
        .await
        .unwrap()
        .is_empty());

    ledger.record_attempt("0911", "1.1.1.1", false).await.unwrap();
    let remaining = ledger.unconsumed_failures("0911", "1.1.1.1").await.unwrap();
    assert_eq!(remaining.len(), 1);
}
