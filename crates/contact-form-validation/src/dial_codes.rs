//! Country to international dialing prefix table
//!
//! Read-only; used to pre-select the displayed dial code when the visitor
//! picks a country. The phone field is never validated against it.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// ISO 3166-1 alpha-2 code and its `+`-prefixed dial code
pub static DIAL_CODES: &[(&str, &str)] = &[
    ("AF", "+93"), ("AL", "+355"), ("DZ", "+213"), ("AR", "+54"), ("AU", "+61"), ("AT", "+43"),
    ("BH", "+973"), ("BD", "+880"), ("BE", "+32"), ("BR", "+55"), ("BN", "+673"), ("BG", "+359"),
    ("CA", "+1"), ("CL", "+56"), ("CN", "+86"), ("CO", "+57"), ("CR", "+506"), ("HR", "+385"),
    ("CZ", "+420"), ("DK", "+45"), ("EG", "+20"), ("EE", "+372"), ("FI", "+358"), ("FR", "+33"),
    ("DE", "+49"), ("GH", "+233"), ("GR", "+30"), ("HK", "+852"), ("HU", "+36"), ("IS", "+354"),
    ("IN", "+91"), ("ID", "+62"), ("IE", "+353"), ("IL", "+972"), ("IT", "+39"), ("JP", "+81"),
    ("JO", "+962"), ("KE", "+254"), ("KW", "+965"), ("LV", "+371"), ("LB", "+961"), ("MY", "+60"),
    ("MX", "+52"), ("MA", "+212"), ("NL", "+31"), ("NZ", "+64"), ("NG", "+234"), ("NO", "+47"),
    ("OM", "+968"), ("PK", "+92"), ("PH", "+63"), ("PL", "+48"), ("PT", "+351"), ("QA", "+974"),
    ("RO", "+40"), ("RU", "+7"), ("SA", "+966"), ("SG", "+65"), ("ZA", "+27"), ("KR", "+82"),
    ("ES", "+34"), ("SE", "+46"), ("CH", "+41"), ("TW", "+886"), ("TH", "+66"), ("TR", "+90"),
    ("UA", "+380"), ("AE", "+971"), ("GB", "+44"), ("US", "+1"), ("VN", "+84"),
];

static DIAL_CODE_INDEX: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| DIAL_CODES.iter().copied().collect());

/// Dial code for a country, e.g. `dial_code("IN") == Some("+91")`
pub fn dial_code(country: &str) -> Option<&'static str> {
    DIAL_CODE_INDEX.get(country).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_countries() {
        assert_eq!(dial_code("IN"), Some("+91"));
        assert_eq!(dial_code("GB"), Some("+44"));
        assert_eq!(dial_code("US"), Some("+1"));
        assert_eq!(dial_code("CA"), Some("+1"));
    }

    #[test]
    fn test_unknown_country() {
        assert_eq!(dial_code("XX"), None);
        assert_eq!(dial_code(""), None);
        assert_eq!(dial_code("in"), None);
    }

    #[test]
    fn test_table_is_well_formed() {
        assert_eq!(DIAL_CODE_INDEX.len(), DIAL_CODES.len(), "duplicate country code");
        for (country, code) in DIAL_CODES {
            assert_eq!(country.len(), 2);
            assert!(code.starts_with('+'));
            assert!(code[1..].chars().all(|c| c.is_ascii_digit()));
        }
    }
}
