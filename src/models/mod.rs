// src/models/mod.rs

//! Domain models for the discovery application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod opportunity;
mod profile;

// Re-export all public types
pub use config::{Config, SearchConfig};
pub use opportunity::{
    CachedOutcome, Opportunity, OpportunityType, RawResult, SearchOutcome, SearchRequest,
};
pub use profile::{Education, Skills, StudentProfile};
