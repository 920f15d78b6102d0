//! Service layer for the discovery application.
//!
//! This module contains the business logic for:
//! - End-to-end discovery (`DiscoveryService`)
//! - Paginated web search with a mock fallback (`SearchClient`)
//! - Profile-driven query suggestions (`suggest`)

mod discovery;
mod mock;
mod search;
mod suggestions;

pub use discovery::DiscoveryService;
pub use mock::mock_results;
pub use search::{GoogleSearchApi, PageFetch, SearchApi, SearchClient, SearchCredentials};
pub use suggestions::suggest;
