//! bcrypt + HS256 JWT credential issuer

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gk_shared::phone::mask_phone_number;

use crate::domain::value_objects::SessionTokens;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::AccountRepository;

use super::config::CredentialIssuerConfig;
use super::traits::CredentialIssuer;

/// Kind of an issued token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// Claims carried by issued tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account id)
    pub sub: String,
    /// Phone number of the account
    pub phone: String,
    /// Access or refresh
    pub token_type: TokenKind,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
    /// Issuer
    pub iss: String,
    /// JWT ID
    pub jti: String,
}

/// Credential issuer backed by the account store
pub struct PasswordCredentialIssuer {
    accounts: Arc<dyn AccountRepository>,
    config: CredentialIssuerConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl PasswordCredentialIssuer {
    /// Creates a new credential issuer
    ///
    /// # Arguments
    ///
    /// * `accounts` - Account storage used to look up password hashes
    /// * `config` - Signing and hashing configuration
    pub fn new(accounts: Arc<dyn AccountRepository>, config: CredentialIssuerConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.validate_exp = true;

        Self {
            accounts,
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Decode and validate a token issued by this issuer
    pub fn verify_token(&self, token: &str) -> DomainResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| DomainError::Auth(AuthError::InvalidCredentials))
    }

    fn encode_token(
        &self,
        account_id: Uuid,
        phone: &str,
        token_type: TokenKind,
        lifetime: i64,
    ) -> DomainResult<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: account_id.to_string(),
            phone: phone.to_string(),
            token_type,
            iat: now,
            exp: now + lifetime,
            iss: self.config.issuer.clone(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            DomainError::Internal {
                message: format!("Failed to encode token: {}", e),
            }
        })
    }
}

/// Run a bcrypt operation on the blocking pool
async fn run_bcrypt<T, F>(action: &str, task: F) -> DomainResult<T>
where
    F: FnOnce() -> Result<T, bcrypt::BcryptError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| DomainError::Internal {
            message: format!("Password {} task failed: {}", action, e),
        })?
        .map_err(|e| DomainError::Internal {
            message: format!("Failed to {} password: {}", action, e),
        })
}

#[async_trait]
impl CredentialIssuer for PasswordCredentialIssuer {
    async fn hash_password(&self, password: &str) -> DomainResult<String> {
        let password = password.to_string();
        let cost = self.config.bcrypt_cost;
        run_bcrypt("hash", move || bcrypt::hash(password, cost)).await
    }

    async fn issue(&self, phone: &str, password: &str) -> DomainResult<SessionTokens> {
        let account = match self.accounts.find_by_phone(phone).await? {
            Some(account) if account.is_active => account,
            _ => return Err(AuthError::InvalidCredentials.into()),
        };

        let candidate = password.to_string();
        let hash = account.password_hash.clone();
        let matches = run_bcrypt("verify", move || bcrypt::verify(candidate, &hash)).await?;
        if !matches {
            return Err(AuthError::InvalidCredentials.into());
        }

        let access = self.encode_token(
            account.id,
            phone,
            TokenKind::Access,
            self.config.access_token_expiry,
        )?;
        let refresh = self.encode_token(
            account.id,
            phone,
            TokenKind::Refresh,
            self.config.refresh_token_expiry,
        )?;

        tracing::debug!(
            phone = %mask_phone_number(phone),
            account_id = %account.id,
            event = "session_tokens_issued",
            "Issued session tokens"
        );

        Ok(SessionTokens::new(
            access,
            refresh,
            self.config.access_token_expiry,
        ))
    }

    async fn refresh(&self, refresh_token: &str) -> DomainResult<SessionTokens> {
        let claims = self.verify_token(refresh_token)?;
        if claims.token_type != TokenKind::Refresh {
            return Err(AuthError::InvalidCredentials.into());
        }

        let account = match self.accounts.find_by_phone(&claims.phone).await? {
            Some(account) if account.is_active && account.id.to_string() == claims.sub => account,
            _ => return Err(AuthError::InvalidCredentials.into()),
        };

        let access = self.encode_token(
            account.id,
            &account.phone_number,
            TokenKind::Access,
            self.config.access_token_expiry,
        )?;

        tracing::debug!(
            phone = %mask_phone_number(&account.phone_number),
            account_id = %account.id,
            event = "access_token_refreshed",
            "Refreshed access token"
        );

        Ok(SessionTokens::new(
            access,
            refresh_token.to_string(),
            self.config.access_token_expiry,
        ))
    }
}
