//! Per-field validation rules
//!
//! Every rule is pure and total: the same input always yields the same
//! result, and a rule never panics. Rules run in a fixed order per field and
//! the first failing one wins.

use crate::email::is_valid_email;
use crate::field::FieldId;
use crate::sanitize::{contains_script_marker, looks_like_injection};
use crate::string::{char_len, digit_count, is_alpha_space, is_one_of, is_phone_shape};

/// Shown when a name or company trips the injection heuristics
pub const SUSPICIOUS_INPUT: &str =
    "Invalid characters detected. Please use only alphanumeric characters and standard punctuation.";

/// Shown for a missing or wrong challenge answer
pub const CHALLENGE_MESSAGE: &str = "Please solve the security check correctly";

const EMAIL_MESSAGE: &str = "Please enter valid e-mail address...";

/// Dropdown values that mean "nothing selected"
pub const COUNTRY_PLACEHOLDERS: &[&str] = &["", "Select Country/Region", "Please select", "0"];

/// Validate a single field value
///
/// Returns `None` when the value is acceptable, or the message to show next
/// to the field. `ChallengeAnswer` is only checked for presence here; use
/// [`validate_challenge_answer`] to compare it with the expected answer.
///
/// # Examples
/// ```
/// use contact_form_validation::{validate, FieldId};
/// assert_eq!(validate(FieldId::FirstName, "Alice"), None);
/// assert!(validate(FieldId::FirstName, "Al").is_some());
/// ```
pub fn validate(field: FieldId, raw: &str) -> Option<String> {
    let value = raw.trim();

    match field {
        FieldId::Description => validate_description(value),
        FieldId::FirstName => validate_first_name(value),
        FieldId::LastName => validate_last_name(value),
        FieldId::Country => validate_country(value),
        FieldId::Phone => validate_phone(value),
        FieldId::Email => validate_email(value),
        FieldId::Company => validate_company(value),
        // Selected or not; whitespace counts as a selection
        FieldId::Relationship => {
            raw.is_empty().then(|| "Please select your relationship to us".to_string())
        }
        FieldId::ChallengeAnswer => value.is_empty().then(|| CHALLENGE_MESSAGE.to_string()),
    }
}

/// Validate the challenge answer against the expected result
///
/// The answer must be present and parse as a whole number equal to
/// `expected`.
pub fn validate_challenge_answer(raw: &str, expected: i64) -> Option<String> {
    match raw.trim().parse::<i64>() {
        Ok(answer) if answer == expected => None,
        _ => Some(CHALLENGE_MESSAGE.to_string()),
    }
}

fn validate_description(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Please provide a description".to_string());
    }
    if char_len(value) < 5 {
        return Some("Description must be at least 5 characters".to_string());
    }
    None
}

fn validate_first_name(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Please enter your first name".to_string());
    }
    if !is_alpha_space(value) {
        return Some("First name must contain only alphabetic characters".to_string());
    }
    let len = char_len(value);
    if len < 3 {
        return Some("First name must be at least 3 characters".to_string());
    }
    if len > 15 {
        return Some("First name must not exceed 15 characters".to_string());
    }
    None
}

fn validate_last_name(value: &str) -> Option<String> {
    if is_suspicious(value) {
        return Some(SUSPICIOUS_INPUT.to_string());
    }
    if value.is_empty() {
        return Some("Please enter your last name".to_string());
    }
    if !is_alpha_space(value) {
        return Some("Last name must contain only alphabetic characters".to_string());
    }
    let len = char_len(value);
    if len < 1 {
        return Some("Last name must be at least 1 character".to_string());
    }
    if len > 15 {
        return Some("Last name must not exceed 15 characters".to_string());
    }
    None
}

fn validate_country(value: &str) -> Option<String> {
    is_one_of(value, COUNTRY_PLACEHOLDERS).then(|| "Please select your country/region".to_string())
}

fn validate_phone(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Please enter your contact number".to_string());
    }
    if !is_phone_shape(value) {
        return Some(
            "Phone number must contain only numeric digits with optional hyphen".to_string(),
        );
    }
    if value.matches('-').count() > 1 {
        return Some(
            "Phone number can contain only one hyphen to separate area code".to_string(),
        );
    }
    let digits = digit_count(value);
    if digits < 7 {
        return Some("Phone number must contain at least 7 digits".to_string());
    }
    if digits > 15 {
        return Some("Phone number must not exceed 15 digits".to_string());
    }
    None
}

fn validate_email(value: &str) -> Option<String> {
    if value.is_empty() || !is_valid_email(value) {
        return Some(EMAIL_MESSAGE.to_string());
    }
    None
}

fn validate_company(value: &str) -> Option<String> {
    if is_suspicious(value) {
        return Some(SUSPICIOUS_INPUT.to_string());
    }
    if value.is_empty() {
        return Some("Please enter your company name".to_string());
    }
    if !is_alpha_space(value) {
        return Some("Company name must contain only alphabetic characters".to_string());
    }
    let len = char_len(value);
    if len < 5 {
        return Some("Company name must be at least 5 characters".to_string());
    }
    if len > 50 {
        return Some("Company name must not exceed 50 characters".to_string());
    }
    None
}

fn is_suspicious(value: &str) -> bool {
    looks_like_injection(value) || contains_script_marker(value)
}
