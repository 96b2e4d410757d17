//! Unit tests for the password credential issuer

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::domain::entities::account::{Account, AccountProfile};
use crate::errors::{AuthError, DomainError};
use crate::repositories::{AccountRepository, InMemoryAccountRepository};
use crate::services::credentials::{
    CredentialIssuer, CredentialIssuerConfig, PasswordCredentialIssuer, TokenKind,
};

fn config() -> CredentialIssuerConfig {
    CredentialIssuerConfig {
        jwt_secret: "test-secret".to_string(),
        issuer: "gatekeeper-test".to_string(),
        access_token_expiry: 300,
        refresh_token_expiry: 3600,
        bcrypt_cost: 4,
    }
}

async fn issuer_with_account(phone: &str, password: &str) -> PasswordCredentialIssuer {
    let accounts = Arc::new(InMemoryAccountRepository::new());
    let issuer = PasswordCredentialIssuer::new(accounts.clone(), config());
    let hash = issuer.hash_password(password).await.unwrap();
    accounts
        .create(Account::new(phone, AccountProfile::default(), hash))
        .await
        .unwrap();
    issuer
}

#[tokio::test]
async fn test_hash_password_is_not_plaintext() {
    let issuer = PasswordCredentialIssuer::new(
        Arc::new(InMemoryAccountRepository::new()),
        config(),
    );
    let hash = issuer.hash_password("s3cret-pass").await.unwrap();
    assert_ne!(hash, "s3cret-pass");
    assert!(bcrypt::verify("s3cret-pass", &hash).unwrap());
}

#[tokio::test]
async fn test_issue_tokens_for_valid_password() {
    let issuer = issuer_with_account("09121234567", "s3cret-pass").await;
    let tokens = issuer.issue("09121234567", "s3cret-pass").await.unwrap();

    assert_eq!(tokens.expires_in, 300);
    let access = issuer.verify_token(&tokens.access).unwrap();
    assert_eq!(access.phone, "09121234567");
    assert_eq!(access.token_type, TokenKind::Access);
    let refresh = issuer.verify_token(&tokens.refresh).unwrap();
    assert_eq!(refresh.token_type, TokenKind::Refresh);
    assert_eq!(refresh.sub, access.sub);
}

#[tokio::test]
async fn test_wrong_password_is_invalid_credentials() {
    let issuer = issuer_with_account("09121234567", "s3cret-pass").await;
    let result = issuer.issue("09121234567", "wrong-pass").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
}

#[tokio::test]
async fn test_unknown_account_is_invalid_credentials() {
    let issuer = issuer_with_account("09121234567", "s3cret-pass").await;
    let result = issuer.issue("09350000000", "s3cret-pass").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
}

#[tokio::test]
async fn test_tampered_token_rejected() {
    let issuer = issuer_with_account("09121234567", "s3cret-pass").await;
    let tokens = issuer.issue("09121234567", "s3cret-pass").await.unwrap();
    let tampered = format!("{}x", tokens.access);
    assert!(issuer.verify_token(&tampered).is_err());
}

#[tokio::test(flavor = "current_thread")]
async fn test_hashing_does_not_stall_the_runtime() {
    let issuer = PasswordCredentialIssuer::new(
        Arc::new(InMemoryAccountRepository::new()),
        CredentialIssuerConfig {
            bcrypt_cost: 11,
            ..config()
        },
    );

    let (hashed_at, ticked_at) = tokio::join!(
        async {
            issuer.hash_password("s3cret-pass").await.unwrap();
            Instant::now()
        },
        async {
            tokio::time::sleep(Duration::from_millis(5)).await;
            Instant::now()
        },
    );

    assert!(ticked_at < hashed_at, "timer waited for the hash");
}

#[tokio::test]
async fn test_refresh_issues_new_access_token() {
    let issuer = issuer_with_account("09121234567", "s3cret-pass").await;
    let tokens = issuer.issue("09121234567", "s3cret-pass").await.unwrap();

    let refreshed = issuer.refresh(&tokens.refresh).await.unwrap();
    assert_eq!(refreshed.refresh, tokens.refresh);
    assert_eq!(refreshed.expires_in, 300);
    let access = issuer.verify_token(&refreshed.access).unwrap();
    assert_eq!(access.token_type, TokenKind::Access);
    assert_eq!(access.phone, "09121234567");
    assert_eq!(access.sub, issuer.verify_token(&tokens.access).unwrap().sub);
}

#[tokio::test]
async fn test_refresh_rejects_access_token() {
    let issuer = issuer_with_account("09121234567", "s3cret-pass").await;
    let tokens = issuer.issue("09121234567", "s3cret-pass").await.unwrap();

    for token in [tokens.access.as_str(), "not-a-token"] {
        let result = issuer.refresh(token).await;
        assert!(matches!(
            result,
            Err(DomainError::Auth(AuthError::InvalidCredentials))
        ));
    }
}

#[tokio::test]
async fn test_refresh_rejects_token_of_another_issuer() {
    let issuer = issuer_with_account("09121234567", "s3cret-pass").await;
    let tokens = issuer.issue("09121234567", "s3cret-pass").await.unwrap();

    let other = PasswordCredentialIssuer::new(
        Arc::new(InMemoryAccountRepository::new()),
        CredentialIssuerConfig {
            jwt_secret: "other-secret".to_string(),
            ..config()
        },
    );
    assert!(other.refresh(&tokens.refresh).await.is_err());
}

#[tokio::test]
async fn test_refresh_rejects_inactive_account() {
    let accounts = Arc::new(InMemoryAccountRepository::new());
    let issuer = PasswordCredentialIssuer::new(accounts.clone(), config());
    let hash = issuer.hash_password("s3cret-pass").await.unwrap();
    let account = accounts
        .create(Account::new("09121234567", AccountProfile::default(), hash))
        .await
        .unwrap();
    let tokens = issuer.issue("09121234567", "s3cret-pass").await.unwrap();

    let mut replacement = Account::new("09121234567", AccountProfile::default(), "hash");
    replacement.id = account.id;
    replacement.is_active = false;
    let fresh = Arc::new(InMemoryAccountRepository::with_account(replacement));
    let reissuer = PasswordCredentialIssuer::new(fresh, config());

    let result = reissuer.refresh(&tokens.refresh).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
}
