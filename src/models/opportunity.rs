//! Opportunity data structures.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category of a discovered opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OpportunityType {
    Hackathon,
    Internship,
    Fellowship,
    Scholarship,
    Competition,
    Program,
    /// Fallback when no category keyword matches
    #[default]
    Opportunity,
}

impl OpportunityType {
    /// Lowercase name as used in serialized records and CLI arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hackathon => "hackathon",
            Self::Internship => "internship",
            Self::Fellowship => "fellowship",
            Self::Scholarship => "scholarship",
            Self::Competition => "competition",
            Self::Program => "program",
            Self::Opportunity => "opportunity",
        }
    }
}

impl fmt::Display for OpportunityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OpportunityType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hackathon" => Ok(Self::Hackathon),
            "internship" => Ok(Self::Internship),
            "fellowship" => Ok(Self::Fellowship),
            "scholarship" => Ok(Self::Scholarship),
            "competition" => Ok(Self::Competition),
            "program" => Ok(Self::Program),
            "opportunity" => Ok(Self::Opportunity),
            other => Err(format!("unknown opportunity type: {other}")),
        }
    }
}

/// One discovery request, constructed per call.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Free-text search query
    pub query: String,

    /// When set, overrides the inferred type on every parsed result
    pub opportunity_type: Option<OpportunityType>,

    /// Year token appended to the query before the search
    pub deadline_year: Option<String>,
}

impl SearchRequest {
    /// Create a request with no filters.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            opportunity_type: None,
            deadline_year: None,
        }
    }
}

/// A single item as returned by the search API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawResult {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub link: String,

    #[serde(default)]
    pub snippet: String,
}

/// A structured opportunity built from a raw search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opportunity {
    /// Store-assigned identifier, set by the persistence layer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Result title
    pub title: String,

    /// Full URL to the listing
    pub link: String,

    /// Result snippet text
    pub description: String,

    /// Host of the link, or "Unknown"
    pub source: String,

    /// Heuristic relevance score in 0..=100
    pub relevance_score: u8,

    /// When this record was parsed
    pub discovered_date: DateTime<Utc>,

    /// Inferred or caller-supplied category
    #[serde(rename = "type")]
    pub opportunity_type: OpportunityType,

    /// Extracted organizer name, or "Unknown"
    pub organizer: String,

    /// Eligibility sentences pulled from the snippet
    pub eligibility_text: String,

    /// Extracted deadline text, or "Not specified"
    pub deadline: String,

    /// Mirror of `deadline` kept for application-tracking consumers
    pub apply_by: String,

    /// Batch-local identifier ("opp_1", "opp_2", ...)
    pub opportunity_id: String,
}

/// Response surface for a live search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub opportunities: Vec<Opportunity>,
    pub count: usize,
    /// The enhanced query that was actually sent
    pub query: String,
    pub cached: bool,
}

/// Response surface for a cached read.
#[derive(Debug, Clone, Serialize)]
pub struct CachedOutcome {
    pub opportunities: Vec<Opportunity>,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_round_trip() {
        for name in [
            "hackathon",
            "internship",
            "fellowship",
            "scholarship",
            "competition",
            "program",
            "opportunity",
        ] {
            let parsed: OpportunityType = name.parse().unwrap();
            assert_eq!(parsed.as_str(), name);
        }
    }

    #[test]
    fn test_type_parse_rejects_unknown() {
        assert!("conference".parse::<OpportunityType>().is_err());
    }

    #[test]
    fn test_opportunity_serializes_type_key() {
        let opportunity = Opportunity {
            id: None,
            title: "Test Hackathon".to_string(),
            link: "https://unstop.com/test".to_string(),
            description: "A test".to_string(),
            source: "unstop.com".to_string(),
            relevance_score: 65,
            discovered_date: Utc::now(),
            opportunity_type: OpportunityType::Hackathon,
            organizer: "Test Org".to_string(),
            eligibility_text: "Open to all".to_string(),
            deadline: "Not specified".to_string(),
            apply_by: "Not specified".to_string(),
            opportunity_id: "opp_1".to_string(),
        };

        let json = serde_json::to_value(&opportunity).unwrap();
        assert_eq!(json["type"], "hackathon");
        assert!(json.get("id").is_none());
    }
}
