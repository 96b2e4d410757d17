//! Value objects representing immutable domain concepts.

pub mod session_tokens;

// Re-export commonly used types
pub use session_tokens::SessionTokens;
