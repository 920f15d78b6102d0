//! Query suggestions derived from a student profile.

use std::collections::HashSet;

use crate::models::StudentProfile;

/// Cap on the suggestion list length.
const MAX_SUGGESTIONS: usize = 8;

/// Profile keywords and the queries they unlock, checked in order.
const CATEGORY_SUGGESTIONS: [(&[&str], &[&str]); 8] = [
    (
        &["computer", "software", "it", "information technology"],
        &["Software development internship 2026", "Tech hackathon 2026"],
    ),
    (
        &[
            "machine learning",
            "ai",
            "artificial intelligence",
            "data science",
            "deep learning",
        ],
        &["AI hackathon 2026", "Data Science competition 2026"],
    ),
    (
        &[
            "mechanical",
            "automobile",
            "automotive",
            "manufacturing",
            "cad",
            "solidworks",
            "catia",
        ],
        &[
            "Mechanical engineering internship 2026",
            "Product design competition",
            "Automotive hackathon",
        ],
    ),
    (
        &[
            "electrical", "electronics", "ece", "eee", "circuit", "vlsi", "embedded", "iot",
        ],
        &[
            "Electronics project competition 2026",
            "IoT hackathon 2026",
            "Hardware engineering internship",
        ],
    ),
    (
        &["civil", "construction", "structural", "architecture"],
        &[
            "Civil engineering internship 2026",
            "Infrastructure design competition",
            "Smart city hackathon",
        ],
    ),
    (
        &[
            "chemical",
            "biotech",
            "biotechnology",
            "pharmacy",
            "pharmaceutical",
        ],
        &[
            "Biotech innovation challenge 2026",
            "Chemical engineering internship",
            "Healthcare hackathon",
        ],
    ),
    (
        &["management", "mba", "business", "finance", "marketing"],
        &[
            "Business case competition 2026",
            "Startup challenge",
            "Management internship 2026",
        ],
    ),
    (
        &["design", "ui", "ux", "graphic", "creative"],
        &["Design competition 2026", "UI/UX hackathon"],
    ),
];

/// Queries every profile receives, appended after the category hits.
const GENERAL_SUGGESTIONS: [&str; 5] = [
    "Student hackathon 2026",
    "College internship program 2026",
    "Student fellowship 2026",
    "Innovation challenge",
    "Student startup competition",
];

/// Suggest search queries for a profile: category suggestions for
/// every keyword group the profile text mentions, then the general
/// set, deduplicated in order and capped at eight.
pub fn suggest(profile: &StudentProfile) -> Vec<String> {
    let text = profile.combined_text();
    let mut suggestions: Vec<String> = Vec::new();

    for (keywords, queries) in CATEGORY_SUGGESTIONS {
        if keywords.iter().any(|keyword| text.contains(keyword)) {
            suggestions.extend(queries.iter().map(|query| query.to_string()));
        }
    }
    suggestions.extend(GENERAL_SUGGESTIONS.iter().map(|query| query.to_string()));

    let mut seen = HashSet::new();
    suggestions.retain(|suggestion| seen.insert(suggestion.clone()));
    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}
