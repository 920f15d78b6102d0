//! Field extraction from result text.

use std::sync::OnceLock;

use regex::Regex;

use crate::utils;

/// Keywords that mark an eligibility sentence.
const ELIGIBILITY_KEYWORDS: [&str; 8] = [
    "eligible",
    "eligibility",
    "open to",
    "for students",
    "requirements",
    "must be",
    "should be",
    "criteria",
];

static ORGANIZER_PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();

/// "by X", "organized by X", "X presents". Case-sensitive: the capture
/// anchors on a capitalized name.
fn organizer_patterns() -> &'static [Regex] {
    ORGANIZER_PATTERNS.get_or_init(|| {
        [
            r"by\s+([A-Z][a-zA-Z\s&]+?)(?:\s|$|,|\|)",
            r"organized by\s+([A-Z][a-zA-Z\s&]+?)(?:\s|$|,|\|)",
            r"([A-Z][a-zA-Z\s&]+?)\s+presents",
        ]
        .iter()
        .map(|pattern| Regex::new(pattern).unwrap())
        .collect()
    })
}

/// Extract an organizer name from title and snippet.
///
/// Falls back to the first two words of the title, then "Unknown".
pub fn extract_organizer(title: &str, snippet: &str) -> String {
    let text = format!("{title} {snippet}");

    for pattern in organizer_patterns() {
        if let Some(found) = pattern.captures(&text).and_then(|caps| caps.get(1)) {
            return found.as_str().trim().to_string();
        }
    }

    let words: Vec<&str> = title.split_whitespace().collect();
    if words.len() >= 2 {
        return words[..2].join(" ");
    }

    "Unknown".to_string()
}

/// Pull eligibility sentences out of a snippet.
///
/// Splits on periods and keeps sentences mentioning any eligibility
/// keyword. When nothing matches, the whole snippet is returned so
/// callers always have something to display.
pub fn extract_eligibility(snippet: &str) -> String {
    let sentences: Vec<&str> = snippet
        .split('.')
        .filter(|sentence| {
            let lowered = sentence.to_lowercase();
            ELIGIBILITY_KEYWORDS
                .iter()
                .any(|keyword| lowered.contains(keyword))
        })
        .map(str::trim)
        .collect();

    if sentences.is_empty() {
        snippet.to_string()
    } else {
        sentences.join(" ")
    }
}

/// Host of a URL, or "Unknown" when it cannot be parsed.
pub fn extract_domain(url: &str) -> String {
    utils::get_domain(url).unwrap_or_else(|| "Unknown".to_string())
}
