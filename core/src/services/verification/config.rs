//! Configuration for the verification registry

/// Default number of digits in a verification code
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Configuration for the verification registry
#[derive(Debug, Clone, Copy)]
pub struct VerificationConfig {
    /// Number of decimal digits in a generated code
    pub code_length: usize,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
        }
    }
}

impl From<&gk_shared::RegistrationConfig> for VerificationConfig {
    fn from(config: &gk_shared::RegistrationConfig) -> Self {
        Self {
            code_length: config.code_length,
        }
    }
}
