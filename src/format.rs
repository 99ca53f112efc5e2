use regex::Regex;
use std::sync::OnceLock;

// sometimes suite numbers contain dots, or letters
fn plain_suite() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z0-9\.]+$").unwrap())
}

fn non_digit() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\D").unwrap())
}

/// The upstream dataset formats suites as `Suite 1234`, but extraction
/// sometimes returns just the bare number
pub fn format_suite(suite: &str) -> String {
    if plain_suite().is_match(suite) {
        format!("Suite {}", suite)
    } else {
        suite.to_string()
    }
}

pub fn format_state(state: &str) -> String {
    state.replace('.', "").to_uppercase()
}

/// Format a phone number as xxx-xxx-xxxx, tolerating a leading country code.
/// Anything that doesn't strip down to 10 or 11 digits is returned unchanged.
pub fn format_phone(phone: &str) -> String {
    let digits = non_digit().replace_all(phone, "");

    match digits.len() {
        // special case the +1 form
        11 => format!("{}-{}-{}", &digits[1..4], &digits[4..7], &digits[7..]),
        10 => format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..]),
        _ => phone.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_suite_bare_values_get_a_prefix() {
        assert_eq!(format_suite("100"), "Suite 100");
        assert_eq!(format_suite("100.3"), "Suite 100.3");
        assert_eq!(format_suite("12b"), "Suite 12b");
    }

    #[test]
    fn test_format_suite_passthrough() {
        assert_eq!(format_suite("Suite 100"), "Suite 100");
        assert_eq!(format_suite("Room B-40"), "Room B-40");
        assert_eq!(format_suite(""), "");
    }

    #[test]
    fn test_format_state() {
        assert_eq!(format_state("ma"), "MA");
        assert_eq!(format_state("D.C."), "DC");
    }

    #[test]
    fn test_format_phone() {
        assert_eq!(format_phone("(123) 456-7890"), "123-456-7890");
        assert_eq!(format_phone("1234567890"), "123-456-7890");
        assert_eq!(format_phone("+11234567891"), "123-456-7891");
    }

    #[test]
    fn test_format_phone_passthrough_on_odd_lengths() {
        // 9 digits
        assert_eq!(format_phone("123-456-789"), "123-456-789");
        // 12 digits
        assert_eq!(format_phone("123456789012"), "123456789012");
        assert_eq!(format_phone(""), "");
    }
}
