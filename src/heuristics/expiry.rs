//! Expired-listing detection.

use std::sync::OnceLock;

use chrono::{Duration, NaiveDate};
use regex::Regex;

/// Phrases that mark a listing as closed regardless of any date.
const EXPIRY_KEYWORDS: [&str; 4] = ["closed", "ended", "expired", "registration closed"];

/// How the capture groups of an expiry pattern map to a calendar date.
#[derive(Debug, Clone, Copy)]
enum DateShape {
    /// "jan 15, 2026"
    MonthDayYear,
    /// "15-01-2026" or "15/01/2026"
    DayMonthYear,
    /// "2026-01-15"
    YearMonthDay,
    /// "deadline: 15 jan 2026"
    DeadlineDayMonthYear,
}

static EXPIRY_PATTERNS: OnceLock<Vec<(Regex, DateShape)>> = OnceLock::new();

/// Date shapes scanned over lowercased text. Every match of every
/// pattern is checked, not just the first.
fn expiry_patterns() -> &'static [(Regex, DateShape)] {
    EXPIRY_PATTERNS.get_or_init(|| {
        [
            (
                r"(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]* (\d{1,2}),? (\d{4})",
                DateShape::MonthDayYear,
            ),
            (r"(\d{1,2})[-/](\d{1,2})[-/](\d{4})", DateShape::DayMonthYear),
            (r"(\d{4})-(\d{1,2})-(\d{1,2})", DateShape::YearMonthDay),
            (
                r"deadline:?\s*(\d{1,2})\s*(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s*(\d{4})",
                DateShape::DeadlineDayMonthYear,
            ),
        ]
        .iter()
        .map(|(pattern, shape)| (Regex::new(pattern).unwrap(), *shape))
        .collect()
    })
}

fn month_number(abbrev: &str) -> Option<u32> {
    let month = match abbrev {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

/// Build a date from one pattern match. Returns None for impossible
/// dates (month 45, February 30), which are skipped rather than
/// treated as expired.
fn build_date(shape: DateShape, caps: &regex::Captures<'_>) -> Option<NaiveDate> {
    let group = |index: usize| caps.get(index).map(|m| m.as_str());

    let (year, month, day) = match shape {
        DateShape::MonthDayYear => (
            group(3)?.parse().ok()?,
            month_number(group(1)?)?,
            group(2)?.parse().ok()?,
        ),
        DateShape::DayMonthYear => (
            group(3)?.parse().ok()?,
            group(2)?.parse().ok()?,
            group(1)?.parse().ok()?,
        ),
        DateShape::YearMonthDay => (
            group(1)?.parse().ok()?,
            group(2)?.parse().ok()?,
            group(3)?.parse().ok()?,
        ),
        DateShape::DeadlineDayMonthYear => (
            group(3)?.parse().ok()?,
            month_number(group(2)?)?,
            group(1)?.parse().ok()?,
        ),
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Decide whether a listing is already over.
///
/// True when an expiry phrase appears in the combined lowercased text,
/// or when any date found in it is strictly earlier than the day
/// before `today`.
pub fn is_expired(title: &str, snippet: &str, today: NaiveDate) -> bool {
    let text = format!("{title} {snippet}").to_lowercase();

    if EXPIRY_KEYWORDS.iter().any(|keyword| text.contains(keyword)) {
        return true;
    }

    let cutoff = today - Duration::days(1);

    for (pattern, shape) in expiry_patterns() {
        for caps in pattern.captures_iter(&text) {
            if let Some(date) = build_date(*shape, &caps) {
                if date < cutoff {
                    log::debug!("Expired: {date} is before {cutoff}");
                    return true;
                }
            }
        }
    }

    false
}
