// src/lib.rs

//! oppscout: student opportunity discovery.
//!
//! Searches the web for hackathons, internships, scholarships and
//! similar opportunities, scores and filters the results, and keeps
//! a local cache of everything found.

pub mod error;
pub mod heuristics;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
