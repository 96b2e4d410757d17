//! Configuration module with business-specific sub-modules
//!
//! - `abuse` - Ban thresholds and durations per flow
//! - `auth` - Session token and password hashing configuration
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `registration` - Verification code and registration credential settings
//! - `server` - HTTP server configuration
//! - `sms` - SMS transport configuration

pub mod abuse;
pub mod auth;
pub mod database;
pub mod environment;
pub mod registration;
pub mod server;
pub mod sms;

use serde::{Deserialize, Serialize};

pub use abuse::{AbuseControlConfig, BanPolicyConfig, MAX_BAN_DURATION_SECONDS};
pub use auth::{AuthConfig, JwtConfig};
pub use database::{DatabaseConfig, MEMORY_DATABASE_URL};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use registration::RegistrationConfig;
pub use server::ServerConfig;
pub use sms::SmsConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// Ban policies
    #[serde(default)]
    pub abuse: AbuseControlConfig,

    /// Verification code settings
    #[serde(default)]
    pub registration: RegistrationConfig,

    /// SMS transport
    #[serde(default)]
    pub sms: SmsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            abuse: AbuseControlConfig::default(),
            registration: RegistrationConfig::default(),
            sms: SmsConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            logging: LoggingConfig::for_environment(Environment::Development),
            ..Default::default()
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig::new("0.0.0.0", 8080),
            logging: LoggingConfig::for_environment(Environment::Production),
            sms: SmsConfig {
                provider: String::from("twilio"),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.environment.is_production() && self.auth.jwt.is_using_default_secret() {
            return Err("JWT secret must be changed in production".to_string());
        }
        if self.environment.is_production() && self.database.is_memory() {
            return Err("In-memory store is not allowed in production".to_string());
        }
        self.auth
            .validate()
            .map_err(|e| format!("auth: {}", e))?;
        self.abuse
            .sign_up
            .validate()
            .map_err(|e| format!("abuse.sign_up: {}", e))?;
        self.abuse
            .sign_in
            .validate()
            .map_err(|e| format!("abuse.sign_in: {}", e))?;
        self.registration.validate()?;
        Ok(())
    }
}
