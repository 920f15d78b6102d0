//! Opportunity type inference.

use crate::models::OpportunityType;

/// Ordered category table. The first category with any keyword hit
/// wins, so "scholar" claims fellowship before the scholarship row
/// is consulted.
const TYPE_KEYWORDS: [(OpportunityType, &[&str]); 6] = [
    (OpportunityType::Hackathon, &["hackathon", "hack"]),
    (
        OpportunityType::Internship,
        &["internship", "intern", "summer training"],
    ),
    (
        OpportunityType::Fellowship,
        &["fellowship", "scholar", "grant"],
    ),
    (
        OpportunityType::Scholarship,
        &["scholarship", "financial aid"],
    ),
    (
        OpportunityType::Competition,
        &["competition", "contest", "challenge"],
    ),
    (
        OpportunityType::Program,
        &["program", "workshop", "bootcamp"],
    ),
];

/// Infer the category of a listing from its combined lowercased text.
pub fn infer_type(title: &str, snippet: &str) -> OpportunityType {
    let text = format!("{title} {snippet}").to_lowercase();

    for (candidate, keywords) in TYPE_KEYWORDS {
        if keywords.iter().any(|keyword| text.contains(keyword)) {
            return candidate;
        }
    }

    OpportunityType::Opportunity
}
