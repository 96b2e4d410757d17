//! Registration configuration

use serde::{Deserialize, Serialize};

/// Verification code and registration credential settings
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct RegistrationConfig {
    /// Number of decimal digits in a verification code
    #[serde(default = "default_code_length")]
    pub code_length: usize,

    /// Random bytes behind a registration credential
    #[serde(default = "default_credential_bytes")]
    pub credential_bytes: usize,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            code_length: default_code_length(),
            credential_bytes: default_credential_bytes(),
        }
    }
}

impl RegistrationConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !(4..=10).contains(&self.code_length) {
            return Err(format!(
                "code_length must be between 4 and 10, got {}",
                self.code_length
            ));
        }
        if self.credential_bytes < 16 {
            return Err("credential_bytes must be at least 16".to_string());
        }
        Ok(())
    }
}

fn default_code_length() -> usize {
    6
}

fn default_credential_bytes() -> usize {
    32
}
