//! Deadline extraction from result text.

use std::sync::OnceLock;

use regex::Regex;

/// Keyword prefixes accepted before a full-year date.
const DATE_KEYWORDS: &str = "deadline|apply by|last date|due date|register by|submit by|registration deadline|application deadline|closes on|close date|expiry|expires|ends on|till|before";

/// Shorter keyword list used for two-digit-year dates.
const SHORT_DATE_KEYWORDS: &str = "deadline|apply by|last date|due date|register by|submit by";

static DEADLINE_PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();

/// Ordered date shapes. Keyword-prefixed forms come first so an explicit
/// deadline beats an incidental date elsewhere in the text.
fn deadline_patterns() -> &'static [Regex] {
    DEADLINE_PATTERNS.get_or_init(|| {
        [
            // Keyword-prefixed dates
            format!(r"(?i)(?:{DATE_KEYWORDS}):?\s*([A-Z][a-z]+\s+\d{{1,2}},?\s+\d{{4}})"),
            format!(r"(?i)(?:{DATE_KEYWORDS}):?\s*(\d{{1,2}}\s+[A-Z][a-z]+\s+\d{{4}})"),
            format!(r"(?i)(?:{SHORT_DATE_KEYWORDS}):?\s*(\d{{1,2}}\s+[A-Z][a-z]+\s+'\d{{2}})"),
            format!(r"(?i)(?:{SHORT_DATE_KEYWORDS}):?\s*([A-Z][a-z]+\s+\d{{1,2}}\s+'\d{{2}})"),
            // Standalone dates
            format!(r"(?i)\b([A-Z][a-z]+\s+\d{{1,2}},?\s+20\d{{2}})\b"),
            format!(r"(?i)\b(\d{{1,2}}\s+[A-Z][a-z]+\s+20\d{{2}})\b"),
            format!(r"(?i)\b(\d{{1,2}}\s+[A-Z][a-z]+\s+'\d{{2}})\b"),
            format!(r"(?i)\b([A-Z][a-z]+\s+\d{{1,2}}\s+'\d{{2}})\b"),
            // Numeric formats
            format!(r"(?i)\b(\d{{1,2}}/\d{{1,2}}/20\d{{2}})\b"),
            format!(r"(?i)\b(\d{{1,2}}-\d{{1,2}}-20\d{{2}})\b"),
            format!(r"(?i)\b(20\d{{2}}-\d{{1,2}}-\d{{1,2}})\b"),
        ]
        .iter()
        .map(|pattern| Regex::new(pattern).unwrap())
        .collect()
    })
}

/// Extract the most explicit deadline mention from free text.
///
/// Patterns are tried in order and the first match wins. The matched
/// substring is returned as written, except that two-digit years are
/// expanded ('26 becomes 2026). Returns None when no shape matches.
pub fn extract_deadline(text: &str) -> Option<String> {
    for pattern in deadline_patterns() {
        if let Some(found) = pattern.captures(text).and_then(|caps| caps.get(1)) {
            let date = expand_short_year(found.as_str());
            log::debug!("Found deadline: {date}");
            return Some(date);
        }
    }
    None
}

/// Expand the two-digit-year shorthand seen on Indian listing sites.
/// Only the 2010s and 2020s are recognized.
fn expand_short_year(date: &str) -> String {
    date.replace("'2", "202").replace("'1", "201")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_prefixed_date() {
        assert_eq!(
            extract_deadline("Apply by: March 5, 2026"),
            Some("March 5, 2026".to_string())
        );
    }

    #[test]
    fn test_no_date_returns_none() {
        assert_eq!(extract_deadline("no dates here"), None);
    }

    #[test]
    fn test_keyword_date_beats_earlier_standalone_date() {
        let text = "Event runs January 10, 2026. Apply by: February 2, 2026.";
        assert_eq!(extract_deadline(text), Some("February 2, 2026".to_string()));
    }

    #[test]
    fn test_short_year_expanded() {
        assert_eq!(
            extract_deadline("Deadline: 15 Jan '26"),
            Some("15 Jan 2026".to_string())
        );
    }

    #[test]
    fn test_case_insensitive_keywords() {
        assert_eq!(
            extract_deadline("REGISTRATION DEADLINE: April 1, 2026"),
            Some("April 1, 2026".to_string())
        );
    }

    #[test]
    fn test_standalone_date_matches_without_keyword() {
        assert_eq!(
            extract_deadline("Grand finale on 14 March 2026 in Bangalore"),
            Some("14 March 2026".to_string())
        );
    }

    #[test]
    fn test_iso_numeric_date() {
        assert_eq!(
            extract_deadline("Results 2026-03-05 published"),
            Some("2026-03-05".to_string())
        );
    }

    #[test]
    fn test_slash_numeric_date() {
        assert_eq!(
            extract_deadline("Submit before end of window 15/02/2026 midnight"),
            Some("15/02/2026".to_string())
        );
    }
}
