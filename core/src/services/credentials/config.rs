//! Configuration for the password credential issuer

/// Configuration for the password credential issuer
#[derive(Debug, Clone)]
pub struct CredentialIssuerConfig {
    /// HS256 signing secret
    pub jwt_secret: String,
    /// `iss` claim of issued tokens
    pub issuer: String,
    /// Access token lifetime in seconds
    pub access_token_expiry: i64,
    /// Refresh token lifetime in seconds
    pub refresh_token_expiry: i64,
    /// bcrypt cost factor
    pub bcrypt_cost: u32,
}

impl Default for CredentialIssuerConfig {
    fn default() -> Self {
        Self::from(&gk_shared::AuthConfig::default())
    }
}

impl From<&gk_shared::AuthConfig> for CredentialIssuerConfig {
    fn from(config: &gk_shared::AuthConfig) -> Self {
        Self {
            jwt_secret: config.jwt.secret.clone(),
            issuer: config.jwt.issuer.clone(),
            access_token_expiry: config.jwt.access_token_expiry,
            refresh_token_expiry: config.jwt.refresh_token_expiry,
            bcrypt_cost: config.bcrypt_cost,
        }
    }
}
