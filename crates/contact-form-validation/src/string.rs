//! String helpers shared by the field rules

use once_cell::sync::Lazy;
use regex::Regex;

static ALPHA_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("alpha pattern is valid"));

static PHONE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+(-[0-9]+)?$").expect("phone pattern is valid"));

/// Length in characters, not bytes
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Non-empty and made of ASCII letters and whitespace only
pub fn is_alpha_space(s: &str) -> bool {
    ALPHA_SPACE.is_match(s)
}

/// Digits with at most one inner hyphen (`555-1234567`)
pub fn is_phone_shape(s: &str) -> bool {
    PHONE_SHAPE.is_match(s)
}

/// Number of ASCII digits in `s`
pub fn digit_count(s: &str) -> usize {
    s.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Enum/value restriction
pub fn is_one_of(value: &str, allowed: &[&str]) -> bool {
    allowed.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_counts_chars() {
        assert_eq!(char_len("hello"), 5);
        assert_eq!(char_len("héllo"), 5);
    }

    #[test]
    fn test_alpha_space() {
        assert!(is_alpha_space("Mary Ann"));
        assert!(!is_alpha_space(""));
        assert!(!is_alpha_space("R2D2"));
        assert!(!is_alpha_space("O'Neil"));
    }

    #[test]
    fn test_phone_shape() {
        assert!(is_phone_shape("1234567"));
        assert!(is_phone_shape("020-79460958"));
        assert!(!is_phone_shape("12-34-56"));
        assert!(!is_phone_shape("-1234"));
        assert!(!is_phone_shape("1234-"));
        assert!(!is_phone_shape("+441234"));
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count("123-4567"), 7);
        assert_eq!(digit_count("abc"), 0);
    }

    #[test]
    fn test_enum_variant() {
        let allowed = &["", "0"];
        assert!(is_one_of("0", allowed));
        assert!(!is_one_of("IN", allowed));
    }
}
