//! Authentication configuration

use serde::{Deserialize, Serialize};

const DEFAULT_SECRET: &str = "your-secret-key-change-in-production";

/// Costs accepted by bcrypt
pub const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

/// JWT configuration for issued session tokens
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// Refresh token expiry time in seconds
    pub refresh_token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            access_token_expiry: 300,      // 5 minutes
            refresh_token_expiry: 86400,   // 1 day
            issuer: String::from("gatekeeper"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    #[serde(default)]
    pub jwt: JwtConfig,

    /// bcrypt cost factor for account passwords
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,

    /// Record successful sign-ins in the sign-in ledger
    #[serde(default = "default_record_sign_in_success")]
    pub record_sign_in_success: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            bcrypt_cost: default_bcrypt_cost(),
            record_sign_in_success: default_record_sign_in_success(),
        }
    }
}

impl AuthConfig {
    /// Check the bcrypt cost is one the hasher accepts
    pub fn validate(&self) -> Result<(), String> {
        if !BCRYPT_COST_RANGE.contains(&self.bcrypt_cost) {
            return Err(format!(
                "bcrypt_cost must be between {} and {}",
                BCRYPT_COST_RANGE.start(),
                BCRYPT_COST_RANGE.end()
            ));
        }
        Ok(())
    }
}

fn default_bcrypt_cost() -> u32 {
    12
}

fn default_record_sign_in_success() -> bool {
    true
}
