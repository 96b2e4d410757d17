//! Unit tests for the sign-in guard

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;

use crate::domain::entities::attempt::FlowKind;
use crate::domain::value_objects::SessionTokens;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{InMemoryAttemptRepository, InMemoryBanRepository};
use crate::services::ban::{BanPolicy, BanPolicyConfig};
use crate::services::credentials::CredentialIssuer;
use crate::services::ledger::AttemptLedger;
use crate::services::sign_in::{SignInGuard, SignInGuardConfig};

/// Accepts a single phone/password pair
struct MockCredentialIssuer {
    phone: String,
    password: String,
    calls: AtomicUsize,
    storage_down: bool,
}

impl MockCredentialIssuer {
    fn new(phone: &str, password: &str) -> Self {
        Self {
            phone: phone.to_string(),
            password: password.to_string(),
            calls: AtomicUsize::new(0),
            storage_down: false,
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CredentialIssuer for MockCredentialIssuer {
    async fn hash_password(&self, password: &str) -> DomainResult<String> {
        Ok(format!("hashed:{}", password))
    }

    async fn issue(&self, phone: &str, password: &str) -> DomainResult<SessionTokens> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.storage_down {
            return Err(DomainError::storage("connection refused"));
        }
        if phone == self.phone && password == self.password {
            Ok(SessionTokens::new("access".into(), "refresh".into(), 300))
        } else {
            Err(AuthError::InvalidCredentials.into())
        }
    }

    async fn refresh(&self, _refresh_token: &str) -> DomainResult<SessionTokens> {
        Err(AuthError::InvalidCredentials.into())
    }
}

struct Fixture {
    guard: SignInGuard,
    issuer: Arc<MockCredentialIssuer>,
    attempts: InMemoryAttemptRepository,
}

fn fixture(issuer: MockCredentialIssuer, record_success: bool) -> Fixture {
    let attempts = InMemoryAttemptRepository::new();
    let ledger = Arc::new(AttemptLedger::new(
        Arc::new(attempts.clone()),
        FlowKind::SignIn,
    ));
    let policy = Arc::new(BanPolicy::new(
        ledger,
        Arc::new(InMemoryBanRepository::new()),
        BanPolicyConfig {
            max_wrong_retry: 3,
            ban_duration: Duration::minutes(15),
        },
    ));
    let issuer = Arc::new(issuer);
    let guard = SignInGuard::new(policy, issuer.clone(), SignInGuardConfig { record_success });
    Fixture {
        guard,
        issuer,
        attempts,
    }
}

#[tokio::test]
async fn test_successful_sign_in_is_recorded() {
    let f = fixture(MockCredentialIssuer::new("0911", "pw"), true);
    let tokens = f.guard.sign_in("0911", "pw", "1.1.1.1").await.unwrap();

    assert_eq!(tokens.access, "access");
    let attempts = f.attempts.find_by_phone("0911").await;
    assert_eq!(attempts.len(), 1);
    assert!(attempts[0].succeeded);
}

#[tokio::test]
async fn test_success_recording_can_be_disabled() {
    let f = fixture(MockCredentialIssuer::new("0911", "pw"), false);
    f.guard.sign_in("0911", "pw", "1.1.1.1").await.unwrap();
    assert!(f.attempts.is_empty().await);
}

#[tokio::test]
async fn test_wrong_password_records_failure() {
    let f = fixture(MockCredentialIssuer::new("0911", "pw"), true);
    let result = f.guard.sign_in("0911", "nope", "1.1.1.1").await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
    let attempts = f.attempts.find_by_phone("0911").await;
    assert_eq!(attempts.len(), 1);
    assert!(!attempts[0].succeeded);
}

#[tokio::test]
async fn test_banned_after_threshold_skips_issuer() {
    let f = fixture(MockCredentialIssuer::new("0911", "pw"), true);
    for _ in 0..3 {
        let _ = f.guard.sign_in("0911", "nope", "1.1.1.1").await;
    }
    assert_eq!(f.issuer.calls(), 3);

    let result = f.guard.sign_in("0911", "pw", "1.1.1.1").await;
    assert!(matches!(result, Err(DomainError::Auth(AuthError::RateLimited))));
    assert_eq!(f.issuer.calls(), 3);

    // Same ip, different phone is throttled too
    let other = f.guard.sign_in("0922", "pw", "1.1.1.1").await;
    assert!(matches!(other, Err(DomainError::Auth(AuthError::RateLimited))));
}

#[tokio::test]
async fn test_storage_failure_is_not_recorded_as_attempt() {
    let mut issuer = MockCredentialIssuer::new("0911", "pw");
    issuer.storage_down = true;
    let f = fixture(issuer, true);

    let result = f.guard.sign_in("0911", "pw", "1.1.1.1").await;
    assert!(matches!(result, Err(DomainError::Storage { .. })));
    assert!(f.attempts.is_empty().await);
}
