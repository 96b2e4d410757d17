//! Shared utilities and common types for the Gatekeeper server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures
//! - Utility functions (phone validation, masking)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AbuseControlConfig, AppConfig, AuthConfig, BanPolicyConfig, DatabaseConfig, Environment,
    JwtConfig, LogFormat, LoggingConfig, RegistrationConfig, ServerConfig, SmsConfig,
    MAX_BAN_DURATION_SECONDS,
};
pub use errors::{error_codes, ErrorResponse};
pub use utils::phone;
