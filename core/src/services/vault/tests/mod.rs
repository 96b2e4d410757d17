//! Unit tests for the pre-registration vault

use std::collections::HashSet;
use std::sync::Arc;

use crate::errors::{AuthError, DomainError};
use crate::repositories::{InMemoryRegistrationRepository, RegistrationRepository};
use crate::services::vault::{PreRegistrationVault, VaultConfig};

fn vault() -> (Arc<PreRegistrationVault>, InMemoryRegistrationRepository) {
    let repo = InMemoryRegistrationRepository::new();
    let vault = PreRegistrationVault::new(Arc::new(repo.clone()), VaultConfig::default());
    (Arc::new(vault), repo)
}

#[tokio::test]
async fn test_mint_produces_url_safe_unique_ids() {
    let (vault, _) = vault();
    let mut ids = HashSet::new();
    for i in 0..50 {
        let id = vault.mint(&format!("09{:09}", i)).await.unwrap();
        // 32 bytes, unpadded base64
        assert_eq!(id.len(), 43);
        assert!(id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        ids.insert(id);
    }
    assert_eq!(ids.len(), 50);
}

#[tokio::test]
async fn test_consume_returns_bound_phone_once() {
    let (vault, _) = vault();
    let id = vault.mint("0911").await.unwrap();

    assert_eq!(vault.consume(&id).await.unwrap(), "0911");
    assert!(matches!(
        vault.consume(&id).await,
        Err(DomainError::Auth(AuthError::InvalidCredential))
    ));
}

#[tokio::test]
async fn test_consume_unknown_id() {
    let (vault, _) = vault();
    assert!(matches!(
        vault.consume("not-a-credential").await,
        Err(DomainError::Auth(AuthError::InvalidCredential))
    ));
}

#[tokio::test]
async fn test_mint_retires_previous_credential() {
    let (vault, repo) = vault();
    let first = vault.mint("0911").await.unwrap();
    let second = vault.mint("0911").await.unwrap();

    assert_eq!(repo.outstanding_for("0911").await.len(), 1);
    assert!(vault.consume(&first).await.is_err());
    assert_eq!(vault.consume(&second).await.unwrap(), "0911");
    assert!(repo.find_by_id(&first).await.unwrap().unwrap().is_consumed);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_consume_exactly_once() {
    let (vault, _) = vault();
    let id = vault.mint("0911").await.unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let vault = Arc::clone(&vault);
            let id = id.clone();
            tokio::spawn(async move { vault.consume(&id).await })
        })
        .collect();

    let mut successes = 0;
    let mut rejections = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(phone) => {
                assert_eq!(phone, "0911");
                successes += 1;
            }
            Err(DomainError::Auth(AuthError::InvalidCredential)) => rejections += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
    assert_eq!(successes, 1);
    assert_eq!(rejections, 7);
}
