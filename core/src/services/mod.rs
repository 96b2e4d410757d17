//! Business services layer
//!
//! Leaf-first: the attempt ledger feeds the ban policy; the verification
//! registry and the pre-registration vault sit under the registration
//! flow; the sign-in guard wraps the credential issuer.

pub mod ban;
pub mod credentials;
pub mod ledger;
pub mod registration;
pub mod sign_in;
pub mod vault;
pub mod verification;

pub use ban::{BanPolicy, BanPolicyConfig};
pub use credentials::{CredentialIssuer, CredentialIssuerConfig, PasswordCredentialIssuer};
pub use ledger::{AttemptLedger, FailureSet};
pub use registration::{NewAccount, RegistrationFlow};
pub use sign_in::{SignInGuard, SignInGuardConfig};
pub use vault::{PreRegistrationVault, VaultConfig};
pub use verification::{SentCode, SmsSender, VerificationConfig, VerificationRegistry};
