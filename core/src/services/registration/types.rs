//! Input types for the registration flow

use serde::Deserialize;

use crate::domain::entities::account::AccountProfile;
use crate::errors::ValidationError;

/// Account fields submitted together with a registration credential
#[derive(Debug, Clone, Deserialize)]
pub struct NewAccount {
    pub profile: AccountProfile,
    pub password: String,
}

impl NewAccount {
    pub fn new(profile: AccountProfile, password: impl Into<String>) -> Self {
        Self {
            profile,
            password: password.into(),
        }
    }

    /// Reject missing required fields
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.profile.username.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "username".to_string(),
            });
        }
        if self.password.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "password".to_string(),
            });
        }
        Ok(())
    }
}
