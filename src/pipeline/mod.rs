//! Pipeline stages between the search gateway and the store.
//!
//! - `enhance_query`: expand a free-text query with year and platform hints
//! - `parse_results`: score, filter, and rank raw search results

mod enhance;
mod parse;

pub use enhance::enhance_query;
pub use parse::{ParseOutcome, parse_results};
