//! Tests for the in-memory attempt repository

use crate::domain::entities::attempt::Attempt;
use crate::repositories::attempt::{AttemptRepository, InMemoryAttemptRepository};

#[tokio::test]
async fn test_find_unconsumed_failures_matches_phone_or_ip() {
    let repo = InMemoryAttemptRepository::new();
    repo.create(Attempt::new("0911", "1.1.1.1", false)).await.unwrap();
    repo.create(Attempt::new("0922", "2.2.2.2", false)).await.unwrap();
    repo.create(Attempt::new("0933", "3.3.3.3", false)).await.unwrap();
    repo.create(Attempt::new("0911", "1.1.1.1", true)).await.unwrap();

    let failures = repo.find_unconsumed_failures("0911", "2.2.2.2").await.unwrap();
    assert_eq!(failures.len(), 2);
    assert!(failures.iter().all(|a| !a.succeeded));
}

#[tokio::test]
async fn test_mark_consumed_reports_only_flipped_rows() {
    let repo = InMemoryAttemptRepository::new();
    let first = repo.create(Attempt::new("0911", "1.1.1.1", false)).await.unwrap();
    let second = repo.create(Attempt::new("0911", "1.1.1.1", false)).await.unwrap();

    assert_eq!(repo.mark_consumed(&[first.id]).await.unwrap(), 1);
    assert_eq!(repo.mark_consumed(&[first.id, second.id]).await.unwrap(), 1);
    assert_eq!(repo.mark_consumed(&[first.id, second.id]).await.unwrap(), 0);

    let stored = repo.find_by_id(first.id).await.unwrap().unwrap();
    assert!(stored.consumed_by_ban);
    assert!(repo.find_unconsumed_failures("0911", "1.1.1.1").await.unwrap().is_empty());
}
