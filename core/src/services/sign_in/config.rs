//! Configuration for the sign-in guard

#[derive(Debug, Clone, Copy)]
pub struct SignInGuardConfig {
    /// Record successful sign-ins in the sign-in ledger
    pub record_success: bool,
}

impl Default for SignInGuardConfig {
    fn default() -> Self {
        Self {
            record_success: true,
        }
    }
}

impl From<&gk_shared::AuthConfig> for SignInGuardConfig {
    fn from(config: &gk_shared::AuthConfig) -> Self {
        Self {
            record_success: config.record_sign_in_success,
        }
    }
}
