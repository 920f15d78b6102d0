//! Query enhancement.

/// Category to site-restriction clause, checked in order. First match
/// wins and later categories are not consulted.
const CATEGORY_DOMAINS: [(&str, &str); 4] = [
    (
        "hackathon",
        "site:devpost.com OR site:devfolio.co OR site:unstop.com",
    ),
    (
        "scholarship",
        "site:scholars4dev.com OR site:opportunitydesk.org",
    ),
    (
        "internship",
        "site:internshala.com OR site:linkedin.com/jobs",
    ),
    (
        "research",
        "site:researchgate.net OR site:scholar.google.com",
    ),
];

/// Expand a free-text query with an optional year token and a
/// platform allow-list for recognized categories.
pub fn enhance_query(query: &str, deadline_year: Option<&str>) -> String {
    let mut parts = vec![query.to_string()];

    if let Some(year) = deadline_year.filter(|year| !year.is_empty()) {
        parts.push(year.to_string());
    }

    let query_lower = query.to_lowercase();
    for (category, domains) in CATEGORY_DOMAINS {
        if query_lower.contains(category) {
            parts.push(format!("({domains})"));
            break;
        }
    }

    parts.join(" ")
}
