//! Storage abstractions for opportunity persistence.
//!
//! The pipeline only needs "create record, get back its id" plus two
//! read paths. Backends implement `OpportunityStore`; the default is a
//! single JSON collection file on the local filesystem.
//!
//! ## Directory Structure
//!
//! ```text
//! storage/
//! ├── config.toml           # Application configuration
//! └── opportunities.json    # Cached opportunity collection
//! ```

pub mod local;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Opportunity, OpportunityType};

// Re-export for convenience
pub use local::LocalStore;

/// Trait for opportunity storage backends.
#[async_trait]
pub trait OpportunityStore: Send + Sync {
    /// Persist one opportunity and return it with the store-assigned id.
    ///
    /// Re-persisting the same link updates the existing record instead
    /// of duplicating it.
    async fn create_opportunity(&self, opportunity: &Opportunity) -> Result<Opportunity>;

    /// Most recently discovered opportunities, newest first, optionally
    /// filtered by type.
    async fn cached_opportunities(
        &self,
        limit: usize,
        opportunity_type: Option<OpportunityType>,
    ) -> Result<Vec<Opportunity>>;

    /// Look up a single opportunity by its store-assigned id.
    async fn get_opportunity(&self, id: &str) -> Result<Option<Opportunity>>;
}

/// Persist a batch item by item, returning the successfully stored
/// records. One failed write is logged and skipped; the remaining
/// items are still attempted.
pub async fn persist_batch(
    store: &dyn OpportunityStore,
    opportunities: &[Opportunity],
) -> Vec<Opportunity> {
    let mut persisted = Vec::with_capacity(opportunities.len());

    for opportunity in opportunities {
        match store.create_opportunity(opportunity).await {
            Ok(stored) => persisted.push(stored),
            Err(error) => {
                log::warn!(
                    "Failed to persist {} ({}): {}",
                    opportunity.opportunity_id,
                    opportunity.link,
                    error
                );
            }
        }
    }

    persisted
}
