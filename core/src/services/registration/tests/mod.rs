//! Unit tests for the registration flow

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;

use crate::domain::entities::account::{Account, AccountProfile};
use crate::domain::entities::attempt::FlowKind;
use crate::domain::value_objects::SessionTokens;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::{
    AccountRepository, InMemoryAccountRepository, InMemoryAttemptRepository,
    InMemoryBanRepository, InMemoryRegistrationRepository, InMemoryVerificationRepository,
};
use crate::services::ban::{BanPolicy, BanPolicyConfig};
use crate::services::credentials::{
    CredentialIssuer, CredentialIssuerConfig, PasswordCredentialIssuer,
};
use crate::services::ledger::AttemptLedger;
use crate::services::registration::{NewAccount, RegistrationFlow};
use crate::services::vault::{PreRegistrationVault, VaultConfig};
use crate::services::verification::{SmsSender, VerificationConfig, VerificationRegistry};

struct NullSms;

#[async_trait::async_trait]
impl SmsSender for NullSms {
    async fn send_code(&self, _phone: &str, _code: &str) -> Result<String, String> {
        Ok("null".to_string())
    }
}

/// Fails the first hash, then delegates
struct FlakyHasher {
    inner: PasswordCredentialIssuer,
    failed_once: AtomicBool,
}

#[async_trait]
impl CredentialIssuer for FlakyHasher {
    async fn hash_password(&self, password: &str) -> DomainResult<String> {
        if !self.failed_once.swap(true, Ordering::SeqCst) {
            return Err(DomainError::Internal {
                message: "hasher unavailable".to_string(),
            });
        }
        self.inner.hash_password(password).await
    }

    async fn issue(&self, phone: &str, password: &str) -> DomainResult<SessionTokens> {
        self.inner.issue(phone, password).await
    }

    async fn refresh(&self, refresh_token: &str) -> DomainResult<SessionTokens> {
        self.inner.refresh(refresh_token).await
    }
}

fn password_issuer(accounts: Arc<dyn AccountRepository>) -> PasswordCredentialIssuer {
    PasswordCredentialIssuer::new(
        accounts,
        CredentialIssuerConfig {
            bcrypt_cost: 4,
            ..Default::default()
        },
    )
}

fn flow_with(accounts: InMemoryAccountRepository, max_wrong_retry: usize) -> RegistrationFlow {
    flow_with_issuer(accounts, max_wrong_retry, |accounts| {
        Arc::new(password_issuer(accounts))
    })
}

fn flow_with_issuer(
    accounts: InMemoryAccountRepository,
    max_wrong_retry: usize,
    issuer: impl FnOnce(Arc<dyn AccountRepository>) -> Arc<dyn CredentialIssuer>,
) -> RegistrationFlow {
    let ledger = Arc::new(AttemptLedger::new(
        Arc::new(InMemoryAttemptRepository::new()),
        FlowKind::SignUp,
    ));
    let policy = Arc::new(BanPolicy::new(
        ledger,
        Arc::new(InMemoryBanRepository::new()),
        BanPolicyConfig {
            max_wrong_retry,
            ban_duration: Duration::hours(1),
        },
    ));
    let vault = Arc::new(PreRegistrationVault::new(
        Arc::new(InMemoryRegistrationRepository::new()),
        VaultConfig::default(),
    ));
    let registry = Arc::new(VerificationRegistry::new(
        Arc::new(InMemoryVerificationRepository::new()),
        Arc::clone(&vault),
        Arc::clone(&policy),
        Arc::new(NullSms),
        VerificationConfig::default(),
    ));
    let accounts: Arc<dyn AccountRepository> = Arc::new(accounts);
    let issuer = issuer(Arc::clone(&accounts));
    RegistrationFlow::new(policy, registry, vault, accounts, issuer)
}

fn new_account() -> NewAccount {
    NewAccount::new(
        AccountProfile {
            username: "sara".to_string(),
            email: "sara@example.com".to_string(),
            first_name: "Sara".to_string(),
            last_name: "Ahmadi".to_string(),
        },
        "correct-horse",
    )
}

#[tokio::test]
async fn test_full_registration_round_trip() {
    let accounts = InMemoryAccountRepository::new();
    let flow = flow_with(accounts.clone(), 5);

    let sent = flow.request_code("09121234567", "1.1.1.1").await.unwrap();
    let credential_id = flow
        .confirm_code("09121234567", &sent.code, "1.1.1.1")
        .await
        .unwrap();
    let account = flow
        .complete_registration(&credential_id, new_account())
        .await
        .unwrap();

    assert_eq!(account.phone_number, "09121234567");
    assert_eq!(account.username, "sara");
    assert_ne!(account.password_hash, "correct-horse");
    assert!(flow.account_exists("09121234567").await.unwrap());
}

#[tokio::test]
async fn test_request_code_for_registered_phone() {
    let existing = Account::new("09121234567", AccountProfile::default(), "hash");
    let flow = flow_with(InMemoryAccountRepository::with_account(existing), 5);

    let result = flow.request_code("09121234567", "1.1.1.1").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::AlreadyRegistered))
    ));
}

#[tokio::test]
async fn test_credential_cannot_be_reused() {
    let flow = flow_with(InMemoryAccountRepository::new(), 5);
    let sent = flow.request_code("09121234567", "1.1.1.1").await.unwrap();
    let credential_id = flow
        .confirm_code("09121234567", &sent.code, "1.1.1.1")
        .await
        .unwrap();
    flow.complete_registration(&credential_id, new_account())
        .await
        .unwrap();

    let again = flow.complete_registration(&credential_id, new_account()).await;
    assert!(matches!(
        again,
        Err(DomainError::Auth(AuthError::InvalidCredential))
    ));
}

#[tokio::test]
async fn test_unknown_credential() {
    let flow = flow_with(InMemoryAccountRepository::new(), 5);
    let result = flow.complete_registration("forged", new_account()).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidCredential))
    ));
}

#[tokio::test]
async fn test_confirm_code_rejects_malformed_code() {
    let flow = flow_with(InMemoryAccountRepository::new(), 5);
    flow.request_code("09121234567", "1.1.1.1").await.unwrap();

    let short = flow.confirm_code("09121234567", "123", "1.1.1.1").await;
    assert!(matches!(
        short,
        Err(DomainError::ValidationErr(ValidationError::InvalidLength {
            expected: 6,
            actual: 3,
            ..
        }))
    ));

    let letters = flow.confirm_code("09121234567", "12ab56", "1.1.1.1").await;
    assert!(matches!(
        letters,
        Err(DomainError::ValidationErr(ValidationError::InvalidFormat { .. }))
    ));
}

#[tokio::test]
async fn test_missing_password_rejected_before_consuming() {
    let flow = flow_with(InMemoryAccountRepository::new(), 5);
    let sent = flow.request_code("09121234567", "1.1.1.1").await.unwrap();
    let credential_id = flow
        .confirm_code("09121234567", &sent.code, "1.1.1.1")
        .await
        .unwrap();

    let mut fields = new_account();
    fields.password.clear();
    assert!(flow.complete_registration(&credential_id, fields).await.is_err());

    // The credential is still redeemable
    assert!(flow
        .complete_registration(&credential_id, new_account())
        .await
        .is_ok());
}

#[tokio::test]
async fn test_request_code_rate_limited() {
    let flow = flow_with(InMemoryAccountRepository::new(), 2);
    flow.request_code("09121234567", "1.1.1.1").await.unwrap();
    flow.request_code("09121234567", "1.1.1.1").await.unwrap();

    let result = flow.request_code("09121234567", "1.1.1.1").await;
    assert!(matches!(result, Err(DomainError::Auth(AuthError::RateLimited))));
}

#[tokio::test]
async fn test_hash_failure_leaves_credential_redeemable() {
    let accounts = InMemoryAccountRepository::new();
    let flow = flow_with_issuer(accounts.clone(), 5, |accounts| {
        Arc::new(FlakyHasher {
            inner: password_issuer(accounts),
            failed_once: AtomicBool::new(false),
        })
    });
    let sent = flow.request_code("09121234567", "1.1.1.1").await.unwrap();
    let credential_id = flow
        .confirm_code("09121234567", &sent.code, "1.1.1.1")
        .await
        .unwrap();

    let failed = flow.complete_registration(&credential_id, new_account()).await;
    assert!(matches!(failed, Err(DomainError::Internal { .. })));
    assert!(!flow.account_exists("09121234567").await.unwrap());

    let account = flow
        .complete_registration(&credential_id, new_account())
        .await
        .unwrap();
    assert_eq!(account.phone_number, "09121234567");
}
