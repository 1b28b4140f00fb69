//! Input filters applied while the user types and pastes
//!
//! These are cosmetic UX guards. `looks_like_injection` is a denylist
//! heuristic, not a parser, and must never be relied on as a trust boundary.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Maximum number of digits a phone number may carry
pub const MAX_PHONE_DIGITS: usize = 15;

/// Maximum length of a phone value (15 digits plus one hyphen)
pub const MAX_PHONE_LENGTH: usize = MAX_PHONE_DIGITS + 1;

// SQL keywords, word-bounded
static SQL_KEYWORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(SELECT|INSERT|UPDATE|DELETE|DROP|CREATE|ALTER|EXEC|EXECUTE|UNION|SCRIPT)\b",
    )
    .expect("SQL keyword pattern is valid")
});

// Comment and statement-separator tokens
static SQL_SEPARATORS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(--|#|/\*|\*/|;|\||&)").expect("separator pattern is valid")
});

// OR 1=1 / AND 2 = 2
static NUMERIC_TAUTOLOGY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(OR|AND)\s+\d+\s*=\s*\d+").expect("numeric tautology pattern is valid")
});

// AND 'x'='x' / OR ''=''
static QUOTED_TAUTOLOGY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\b(OR|AND)\s+(['"][^'"]*['"]|['"])\s*=\s*['"]"#)
        .expect("quoted tautology pattern is valid")
});

const SCRIPT_MARKERS: &[&str] = &["<script", "javascript:", "onerror="];

/// How `filter_text` restricts a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterMode {
    /// ASCII letters and whitespace only (names, company)
    Alpha,
    /// Digits and at most one hyphen, capped at 15 digits / 16 characters
    PhoneDigitsWithHyphen,
}

impl FilterMode {
    /// Parse a mode name as used by the WASM bindings and the CLI
    ///
    /// # Examples
    /// ```
    /// use contact_form_validation::FilterMode;
    /// assert_eq!(FilterMode::parse("alpha"), Some(FilterMode::Alpha));
    /// assert_eq!(FilterMode::parse("phone"), Some(FilterMode::PhoneDigitsWithHyphen));
    /// assert_eq!(FilterMode::parse("digits"), None);
    /// ```
    pub fn parse(mode: &str) -> Option<Self> {
        match mode {
            "alpha" => Some(FilterMode::Alpha),
            "phone" | "phoneDigitsWithHyphen" => Some(FilterMode::PhoneDigitsWithHyphen),
            _ => None,
        }
    }
}

/// Drop every character outside the mode's allowed set
///
/// Returns a new string; the input is never modified.
pub fn filter_text(raw: &str, mode: FilterMode) -> String {
    match mode {
        FilterMode::Alpha => raw.chars().filter(|c| is_alpha_char(*c)).collect(),
        FilterMode::PhoneDigitsWithHyphen => filter_phone(raw),
    }
}

/// Whether a single keystroke may be inserted into `current`
///
/// Phone values accept a hyphen only after at least one character and
/// only if none is present yet.
pub fn accepts_keystroke(mode: FilterMode, current: &str, ch: char) -> bool {
    match mode {
        FilterMode::Alpha => is_alpha_char(ch),
        FilterMode::PhoneDigitsWithHyphen => {
            ch.is_ascii_digit() || (ch == '-' && !current.is_empty() && !current.contains('-'))
        }
    }
}

/// Heuristic SQL-injection detector
///
/// # Examples
/// ```
/// use contact_form_validation::looks_like_injection;
/// assert!(looks_like_injection("x' OR 1=1"));
/// assert!(looks_like_injection("Robert; DROP TABLE students"));
/// assert!(!looks_like_injection("Smith"));
/// ```
pub fn looks_like_injection(text: &str) -> bool {
    SQL_KEYWORDS.is_match(text)
        || SQL_SEPARATORS.is_match(text)
        || NUMERIC_TAUTOLOGY.is_match(text)
        || QUOTED_TAUTOLOGY.is_match(text)
}

/// Whether text carries a script tag or inline-handler marker
pub fn contains_script_marker(text: &str) -> bool {
    SCRIPT_MARKERS.iter().any(|marker| text.contains(marker))
}

fn is_alpha_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c.is_whitespace()
}

/// Keep the first hyphen, drop any later ones
pub fn ensure_single_hyphen(value: &str) -> String {
    match value.find('-') {
        Some(first) => {
            let (head, tail) = value.split_at(first + 1);
            let mut out = String::with_capacity(value.len());
            out.push_str(head);
            out.extend(tail.chars().filter(|c| *c != '-'));
            out
        }
        None => value.to_string(),
    }
}

fn filter_phone(raw: &str) -> String {
    let stripped: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect();
    let mut value = ensure_single_hyphen(&stripped);

    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() > MAX_PHONE_DIGITS {
        let kept = &digits[..MAX_PHONE_DIGITS];
        // The hyphen's byte index equals the number of digits before it
        value = match value.find('-') {
            Some(idx) if idx < kept.len() => format!("{}-{}", &kept[..idx], &kept[idx..]),
            _ => kept.to_string(),
        };
    }

    // Only ASCII remains, so byte truncation is char-safe
    value.truncate(MAX_PHONE_LENGTH);
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("John", "John")]
    #[case("Jo3hn!", "John")]
    #[case("Mary Ann", "Mary Ann")]
    #[case("<script>", "script")]
    #[case("Zoë", "Zo")]
    #[case("", "")]
    fn test_alpha_filter(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(filter_text(raw, FilterMode::Alpha), expected);
    }

    #[rstest]
    #[case("1234567", "1234567")]
    #[case("(555) 123-4567", "555123-4567")]
    #[case("12-34-56", "12-3456")]
    #[case("--12", "-12")]
    #[case("12345678901234567890", "123456789012345")]
    #[case("123-45678901234567", "123-456789012345")]
    #[case("12345678901234567-8", "123456789012345")]
    #[case("+44 20 7946 0958", "442079460958")]
    fn test_phone_filter(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(filter_text(raw, FilterMode::PhoneDigitsWithHyphen), expected);
    }

    #[test]
    fn test_phone_filter_respects_length_cap() {
        let filtered = filter_text("1-2345678901234567890", FilterMode::PhoneDigitsWithHyphen);
        assert_eq!(filtered, "1-23456789012345");
        assert_eq!(filtered.len(), MAX_PHONE_LENGTH);
    }

    #[test]
    fn test_ensure_single_hyphen() {
        assert_eq!(ensure_single_hyphen("1-2-3-4"), "1-234");
        assert_eq!(ensure_single_hyphen("1234"), "1234");
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let raw = String::from("Jo3hn");
        let _ = filter_text(&raw, FilterMode::Alpha);
        assert_eq!(raw, "Jo3hn");
    }

    #[test]
    fn test_keystrokes() {
        assert!(accepts_keystroke(FilterMode::Alpha, "", 'a'));
        assert!(accepts_keystroke(FilterMode::Alpha, "a", ' '));
        assert!(!accepts_keystroke(FilterMode::Alpha, "a", '1'));

        assert!(accepts_keystroke(FilterMode::PhoneDigitsWithHyphen, "", '7'));
        assert!(!accepts_keystroke(FilterMode::PhoneDigitsWithHyphen, "", '-'));
        assert!(accepts_keystroke(FilterMode::PhoneDigitsWithHyphen, "555", '-'));
        assert!(!accepts_keystroke(FilterMode::PhoneDigitsWithHyphen, "555-1", '-'));
        assert!(!accepts_keystroke(FilterMode::PhoneDigitsWithHyphen, "555", 'x'));
    }

    #[rstest]
    #[case("select * from users")]
    #[case("DROP table")]
    #[case("name -- comment")]
    #[case("a#b")]
    #[case("/* hi */")]
    #[case("a;b")]
    #[case("a|b")]
    #[case("Smith & Sons")]
    #[case("x or 1=1")]
    #[case("x AND 2 = 2")]
    #[case("x AND 'x'='x'")]
    #[case("x OR ''=''")]
    #[case("<SCRIPT>")]
    fn test_injection_detected(#[case] text: &str) {
        assert!(looks_like_injection(text), "expected {:?} to be flagged", text);
    }

    #[rstest]
    #[case("Smith")]
    #[case("Selection Partners")]
    #[case("Oregon Andes")]
    #[case("Mary Ann")]
    #[case("")]
    fn test_injection_not_detected(#[case] text: &str) {
        assert!(!looks_like_injection(text), "expected {:?} to pass", text);
    }

    #[test]
    fn test_script_markers() {
        assert!(contains_script_marker("<script>alert(1)</script>"));
        assert!(contains_script_marker("javascript:void(0)"));
        assert!(contains_script_marker("img onerror=x"));
        assert!(!contains_script_marker("Scripted Solutions"));
    }
}
