//! Validation of newsletter email addresses
//!
//! Only the syntactic shape is checked: something without whitespace or `@`, an `@`,
//! then a domain that contains at least one `.` with non-empty parts around it.
//! Deliverability is never checked.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Reasons an email address is rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("email address is empty")]
    Empty,

    #[error("email address is malformed")]
    Malformed,
}

/// Trim `raw` and check it has the `local@domain.tld` shape.
///
/// Returns the trimmed address on success.
pub fn validate_email(raw: &str) -> Result<&str, EmailError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(EmailError::Empty);
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(EmailError::Malformed);
    }
    Ok(email)
}

/// Convenience wrapper around [`validate_email`]
pub fn is_valid_email(raw: &str) -> bool {
    validate_email(raw).is_ok()
}
