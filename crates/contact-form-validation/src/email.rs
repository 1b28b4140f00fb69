//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

/// Longest accepted address (RFC 5321 path limit minus the brackets)
pub const MAX_EMAIL_LENGTH: usize = 254;
/// Longest accepted local part
pub const MAX_LOCAL_LENGTH: usize = 64;
/// Longest accepted domain
pub const MAX_DOMAIN_LENGTH: usize = 253;

// RFC 5322 shaped: dot-atom local part, hostname labels of at most 63 chars
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

/// Validates email format
///
/// Checks for:
/// - At most 254 characters overall
/// - Exactly one '@' symbol
/// - Local part of at most 64 characters, domain of at most 253
/// - A standards-shaped address pattern
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.len() > MAX_EMAIL_LENGTH {
        return false;
    }

    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };

    if local.len() > MAX_LOCAL_LENGTH || domain.len() > MAX_DOMAIN_LENGTH {
        return false;
    }

    EMAIL_REGEX.is_match(email)
}

/// Domain part of an address, if it has one
pub fn email_domain(email: &str) -> Option<&str> {
    email.rsplit_once('@').map(|(_, domain)| domain)
}
