//! Configuration for the pre-registration vault

/// Default number of random bytes behind a credential id
pub const DEFAULT_CREDENTIAL_BYTES: usize = 32;

#[derive(Debug, Clone, Copy)]
pub struct VaultConfig {
    /// Random bytes behind each credential id
    pub credential_bytes: usize,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            credential_bytes: DEFAULT_CREDENTIAL_BYTES,
        }
    }
}

impl From<&gk_shared::RegistrationConfig> for VaultConfig {
    fn from(config: &gk_shared::RegistrationConfig) -> Self {
        Self {
            credential_bytes: config.credential_bytes,
        }
    }
}
