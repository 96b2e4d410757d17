//! Tests for the in-memory registration repository

use std::sync::Arc;

use crate::domain::entities::registration::RegistrationCredential;
use crate::repositories::registration::{
    InMemoryRegistrationRepository, RegistrationRepository,
};

#[tokio::test]
async fn test_consume_once() {
    let repo = InMemoryRegistrationRepository::new();
    repo.create(RegistrationCredential::new("abc", "0911")).await.unwrap();

    assert_eq!(repo.consume("abc").await.unwrap(), Some("0911".to_string()));
    assert_eq!(repo.consume("abc").await.unwrap(), None);
    assert_eq!(repo.consume("unknown").await.unwrap(), None);
    assert!(repo.find_by_id("abc").await.unwrap().unwrap().is_consumed);
}

#[tokio::test]
async fn test_duplicate_id_rejected() {
    let repo = InMemoryRegistrationRepository::new();
    repo.create(RegistrationCredential::new("abc", "0911")).await.unwrap();
    assert!(repo.create(RegistrationCredential::new("abc", "0922")).await.is_err());
}

#[tokio::test]
async fn test_retire_outstanding() {
    let repo = InMemoryRegistrationRepository::new();
    repo.create(RegistrationCredential::new("a", "0911")).await.unwrap();
    repo.create(RegistrationCredential::new("b", "0911")).await.unwrap();
    repo.create(RegistrationCredential::new("c", "0922")).await.unwrap();

    assert_eq!(repo.retire_outstanding("0911").await.unwrap(), 2);
    assert!(repo.outstanding_for("0911").await.is_empty());
    assert_eq!(repo.outstanding_for("0922").await.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_consume_has_single_winner() {
    let repo = Arc::new(InMemoryRegistrationRepository::new());
    repo.create(RegistrationCredential::new("race", "0911")).await.unwrap();

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move { repo.consume("race").await.unwrap() })
        })
        .collect();

    let mut winners = 0;
    for handle in handles {
        if handle.await.unwrap().is_some() {
            winners += 1;
        }
    }
    assert_eq!(winners, 1);
}
