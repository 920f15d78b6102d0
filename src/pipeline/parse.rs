//! Result parsing and filtering.

use chrono::{NaiveDate, Utc};

use crate::heuristics::{
    extract_deadline, extract_domain, extract_eligibility, extract_organizer, infer_type,
    is_expired, relevance_score,
};
use crate::models::{Opportunity, OpportunityType, RawResult};

/// Minimum relevance score a result must reach to be kept.
const MIN_RELEVANCE_SCORE: u8 = 15;

/// Placeholder when no deadline shape matched.
const NO_DEADLINE: &str = "Not specified";

/// Output of one parse run.
#[derive(Debug, Default)]
pub struct ParseOutcome {
    /// Accepted records, sorted by descending relevance
    pub opportunities: Vec<Opportunity>,

    /// Results dropped for scoring under the threshold
    pub skipped_low_relevance: usize,

    /// Results dropped for a passed deadline
    pub skipped_expired: usize,
}

/// Turn raw search results into ranked opportunity records.
///
/// Low-relevance and expired results are dropped. A caller-supplied
/// type overrides inference on every record. The accepted set is
/// stable-sorted by descending relevance, so equal scores keep their
/// input order. `opportunity_id` reflects acceptance order, not rank.
pub fn parse_results(
    items: &[RawResult],
    type_filter: Option<OpportunityType>,
    today: NaiveDate,
) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();
    let discovered = Utc::now();

    log::debug!("Parsing {} search results", items.len());

    for item in items {
        let title = if item.title.is_empty() {
            "No title"
        } else {
            item.title.as_str()
        };
        let snippet = if item.snippet.is_empty() {
            "No description"
        } else {
            item.snippet.as_str()
        };

        let score = relevance_score(title, &item.link, snippet);
        if score < MIN_RELEVANCE_SCORE {
            log::debug!("Skipping low-relevance result (score {score}): {title}");
            outcome.skipped_low_relevance += 1;
            continue;
        }

        if is_expired(title, snippet, today) {
            log::debug!("Skipping expired result: {title}");
            outcome.skipped_expired += 1;
            continue;
        }

        let combined = format!("{title} {snippet}");
        let deadline = extract_deadline(&combined).unwrap_or_else(|| NO_DEADLINE.to_string());

        outcome.opportunities.push(Opportunity {
            id: None,
            title: title.to_string(),
            link: item.link.clone(),
            description: snippet.to_string(),
            source: extract_domain(&item.link),
            relevance_score: score,
            discovered_date: discovered,
            opportunity_type: type_filter.unwrap_or_else(|| infer_type(title, snippet)),
            organizer: extract_organizer(title, snippet),
            eligibility_text: extract_eligibility(snippet),
            deadline: deadline.clone(),
            apply_by: deadline,
            opportunity_id: format!("opp_{}", outcome.opportunities.len() + 1),
        });
    }

    outcome
        .opportunities
        .sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));

    log::info!(
        "Parse results: {} kept, {} low relevance, {} expired",
        outcome.opportunities.len(),
        outcome.skipped_low_relevance,
        outcome.skipped_expired
    );

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    fn raw(title: &str, link: &str, snippet: &str) -> RawResult {
        RawResult {
            title: title.to_string(),
            link: link.to_string(),
            snippet: snippet.to_string(),
        }
    }

    #[test]
    fn test_low_relevance_results_dropped() {
        let items = vec![raw(
            "Event",
            "https://example.com/login/signin/settings",
            "A thing",
        )];

        let outcome = parse_results(&items, None, today());
        assert!(outcome.opportunities.is_empty());
        assert_eq!(outcome.skipped_low_relevance, 1);
    }

    #[test]
    fn test_expired_results_dropped() {
        let items = vec![raw(
            "Old Hackathon",
            "https://unstop.com/old",
            "Registration closed",
        )];

        let outcome = parse_results(&items, None, today());
        assert!(outcome.opportunities.is_empty());
        assert_eq!(outcome.skipped_expired, 1);
    }

    #[test]
    fn test_sorted_by_score_with_stable_ties() {
        let items = vec![
            raw("Event B", "https://example.com/b", "Details"),
            raw("Event A", "https://unstop.com/a", "Details"),
            raw("Event C", "https://example.com/c", "Details"),
        ];

        let outcome = parse_results(&items, None, today());
        let order: Vec<(&str, &str)> = outcome
            .opportunities
            .iter()
            .map(|o| (o.title.as_str(), o.opportunity_id.as_str()))
            .collect();

        // A scores 65 (trusted domain); B and C tie at 50 and keep
        // input order. Identifiers follow acceptance order.
        assert_eq!(
            order,
            vec![
                ("Event A", "opp_2"),
                ("Event B", "opp_1"),
                ("Event C", "opp_3"),
            ]
        );
    }

    #[test]
    fn test_type_filter_overrides_inference() {
        let items = vec![raw(
            "Summer internship drive",
            "https://internshala.com/x",
            "Apply now",
        )];

        let inferred = parse_results(&items, None, today());
        assert_eq!(
            inferred.opportunities[0].opportunity_type,
            OpportunityType::Internship
        );

        let forced = parse_results(&items, Some(OpportunityType::Hackathon), today());
        assert_eq!(
            forced.opportunities[0].opportunity_type,
            OpportunityType::Hackathon
        );
    }

    #[test]
    fn test_deadline_pulled_from_title_and_snippet() {
        let items = vec![
            raw(
                "Apply by: March 5, 2026",
                "https://unstop.com/a",
                "Great event",
            ),
            raw("Plain event", "https://unstop.com/b", "No dates at all"),
        ];

        let outcome = parse_results(&items, None, today());
        assert_eq!(outcome.opportunities[0].deadline, "March 5, 2026");
        assert_eq!(outcome.opportunities[0].apply_by, "March 5, 2026");
        assert_eq!(outcome.opportunities[1].deadline, "Not specified");
    }

    #[test]
    fn test_missing_fields_get_placeholders() {
        let items = vec![raw("", "https://example.com/x", "")];

        let outcome = parse_results(&items, None, today());
        assert_eq!(outcome.opportunities[0].title, "No title");
        assert_eq!(outcome.opportunities[0].description, "No description");
    }
}
