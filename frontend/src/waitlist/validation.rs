use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

// Shape check only: something@something.something, no whitespace, a single '@'.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WaitlistError {
    #[error("Please enter a valid email address")]
    InvalidEmailFormat,
}

/// Checks that `email` looks like an address. Says nothing about whether it
/// can receive mail.
pub fn validate_email(email: &str) -> Result<(), WaitlistError> {
    if EMAIL_SHAPE.is_match(email) {
        Ok(())
    } else {
        Err(WaitlistError::InvalidEmailFormat)
    }
}
