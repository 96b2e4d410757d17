//! Tests for the in-memory verification repository

use crate::domain::entities::verification::VerificationRecord;
use crate::repositories::verification::{
    InMemoryVerificationRepository, VerificationRepository,
};

#[tokio::test]
async fn test_upsert_overwrites_code() {
    let repo = InMemoryVerificationRepository::new();
    let first = repo.upsert(VerificationRecord::new("0911", "111111")).await.unwrap();
    let second = repo.upsert(VerificationRecord::new("0911", "222222")).await.unwrap();

    assert_eq!(second.last_code, "222222");
    assert_eq!(second.created_at, first.created_at);
    let stored = repo.find_by_phone("0911").await.unwrap().unwrap();
    assert_eq!(stored.last_code, "222222");
}

#[tokio::test]
async fn test_mark_validated_is_compare_and_set() {
    let repo = InMemoryVerificationRepository::new();
    repo.upsert(VerificationRecord::new("0911", "111111")).await.unwrap();

    assert!(!repo.mark_validated_if_matches("0911", "000000").await.unwrap());
    assert!(repo.mark_validated_if_matches("0911", "111111").await.unwrap());
    assert!(!repo.mark_validated_if_matches("0911", "111111").await.unwrap());
    assert!(!repo.mark_validated_if_matches("0999", "111111").await.unwrap());
}

#[tokio::test]
async fn test_upsert_resets_validation() {
    let repo = InMemoryVerificationRepository::new();
    repo.upsert(VerificationRecord::new("0911", "111111")).await.unwrap();
    repo.mark_validated_if_matches("0911", "111111").await.unwrap();

    let stored = repo.upsert(VerificationRecord::new("0911", "333333")).await.unwrap();
    assert!(!stored.is_validated);
}
