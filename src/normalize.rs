use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Street types that always compare in abbreviated form
const STREET_TYPE_ABBREVIATIONS: &[(&str, &str)] = &[
    ("street", "st"),
    ("avenue", "ave"),
    ("boulevard", "blvd"),
    ("drive", "dr"),
    ("lane", "ln"),
    ("road", "rd"),
    ("circle", "cir"),
    ("court", "ct"),
    ("place", "pl"),
    ("square", "sq"),
    ("terrace", "ter"),
    ("way", "way"),
    ("parkway", "pkwy"),
    ("freeway", "fwy"),
    ("highway", "hwy"),
    ("plaza", "plz"),
];

/// Cardinal directions, same treatment
const CARDINAL_ABBREVIATIONS: &[(&str, &str)] = &[
    ("east", "e"),
    ("west", "w"),
    ("north", "n"),
    ("south", "s"),
    ("southwest", "sw"),
    ("northeast", "ne"),
    ("southeast", "se"),
    ("northwest", "nw"),
];

fn street_types() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| STREET_TYPE_ABBREVIATIONS.iter().copied().collect())
}

fn cardinals() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| CARDINAL_ABBREVIATIONS.iter().copied().collect())
}

fn punctuation() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\w\s]").unwrap())
}

fn trailing_suite_number() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\.\d]+$").unwrap())
}

/// Normalize an address for comparison: lowercase, punctuation stripped, and
/// street types and cardinal directions always abbreviated, so
/// "123 Main Street East" and "123 Main St. E" come out the same.
pub fn normalize_address(address: &str) -> String {
    let address = address.to_lowercase();
    let address = punctuation().replace_all(&address, "");

    address
        .split_whitespace()
        .map(|word| {
            let word = street_types().get(word).copied().unwrap_or(word);
            cardinals().get(word).copied().unwrap_or(word)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cities compare case-insensitively
pub fn normalize_city(city: &str) -> String {
    city.to_lowercase()
}

/// Normalize a suite by keeping only the trailing run of digits at the end
/// of the string ("Suite 100.3" -> "100.3").
/// ...and dots, some suites have dots. A suite with no trailing digits
/// normalizes to empty, the same as no suite at all.
pub fn normalize_suite(suite: &str) -> String {
    trailing_suite_number()
        .find(suite)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_address_abbreviates() {
        assert_eq!(normalize_address("123 Main Street"), "123 main st");
        assert_eq!(normalize_address("456 Oak Avenue"), "456 oak ave");
        assert_eq!(
            normalize_address("789 Sunset Boulevard East"),
            "789 sunset blvd e"
        );
        assert_eq!(
            normalize_address("1 Memorial Parkway Northwest"),
            "1 memorial pkwy nw"
        );
    }

    #[test]
    fn test_normalize_address_strips_punctuation() {
        assert_eq!(normalize_address("123 Main St."), "123 main st");
        assert_eq!(normalize_address("2-A Harbor Rd, Floor 3"), "2a harbor rd floor 3");
    }

    #[test]
    fn test_normalize_address_collapses_whitespace() {
        assert_eq!(normalize_address("  123   Main  Street "), "123 main st");
        assert_eq!(normalize_address(""), "");
    }

    #[test]
    fn test_normalize_address_idempotent() {
        let inputs = [
            "123 Main Street East",
            "456 W. Jackson Blvd, Suite 900",
            "1 St. George Square",
        ];
        for input in inputs {
            let once = normalize_address(input);
            assert_eq!(normalize_address(&once), once);
        }
    }

    #[test]
    fn test_normalize_city() {
        assert_eq!(normalize_city("New York"), "new york");
        assert_eq!(normalize_city("chicago"), "chicago");
    }

    #[test]
    fn test_normalize_suite_trailing_digits() {
        assert_eq!(normalize_suite("Suite 100"), "100");
        assert_eq!(normalize_suite("STE 100.3"), "100.3");
        assert_eq!(normalize_suite("100"), "100");
    }

    #[test]
    fn test_normalize_suite_letters_collapse_to_empty() {
        assert_eq!(normalize_suite("Suite B"), "");
        assert_eq!(normalize_suite("B"), "");
        assert_eq!(normalize_suite(""), "");
    }
}
