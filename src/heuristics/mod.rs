//! Text heuristics for scoring, classifying, and cleaning raw search
//! results. Pure functions over strings; no I/O.

mod classify;
mod deadline;
mod expiry;
mod extract;
mod relevance;

pub use classify::infer_type;
pub use deadline::extract_deadline;
pub use expiry::is_expired;
pub use extract::{extract_domain, extract_eligibility, extract_organizer};
pub use relevance::relevance_score;
