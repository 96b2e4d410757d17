//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Mobile numbers accepted for registration: 09 + operator digit + 8 digits
static MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^09[0-39]\d{8}$").unwrap()
});

/// Maximum stored length of a phone number
pub const PHONE_NUMBER_MAX_LENGTH: usize = 16;

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Check if a phone number is an accepted mobile number
pub fn is_valid_phone(phone: &str) -> bool {
    MOBILE_REGEX.is_match(&normalize_phone_number(phone))
}

/// Mask a phone number for display and logs (e.g., 091****5678)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() >= 7 {
        format!(
            "{}****{}",
            &normalized[0..3],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}
