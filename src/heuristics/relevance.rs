//! Relevance scoring for raw search results.

/// Starting score before any signal is applied.
const BASE_SCORE: i32 = 50;

/// Keywords that signal an actionable listing.
const HIGH_VALUE_KEYWORDS: [&str; 7] = [
    "apply",
    "deadline",
    "eligibility",
    "register",
    "prize",
    "stipend",
    "2026",
];

/// Established opportunity platforms. The bonus applies once.
const TRUSTED_DOMAINS: [&str; 7] = [
    "devpost.com",
    "devfolio.co",
    "unstop.com",
    "internshala.com",
    "scholars4dev.com",
    "opportunitydesk.org",
    "linkedin.com",
];

/// Link substrings that mark account or legal pages rather than listings.
/// The penalty stacks per indicator.
const SPAM_INDICATORS: [&str; 6] = ["login", "signin", "profile", "settings", "terms", "privacy"];

/// Score a result from 0 to 100.
///
/// Base 50, +5 per high-value keyword in the title and +3 per keyword
/// in the snippet, +15 once for a trusted domain in the link, -20 for
/// each spam indicator in the link. Clamped to 0..=100.
pub fn relevance_score(title: &str, link: &str, snippet: &str) -> u8 {
    let title = title.to_lowercase();
    let link = link.to_lowercase();
    let snippet = snippet.to_lowercase();

    let mut score = BASE_SCORE;

    for keyword in HIGH_VALUE_KEYWORDS {
        if title.contains(keyword) {
            score += 5;
        }
        if snippet.contains(keyword) {
            score += 3;
        }
    }

    if TRUSTED_DOMAINS.iter().any(|domain| link.contains(domain)) {
        score += 15;
    }

    for indicator in SPAM_INDICATORS {
        if link.contains(indicator) {
            score -= 20;
        }
    }

    score.clamp(0, 100) as u8
}
