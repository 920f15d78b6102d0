//! End-to-end opportunity discovery.
//!
//! Ties the pipeline together: enhance the query, run the paginated
//! search, parse and rank the results, then persist them.

use std::sync::Arc;

use chrono::Utc;

use crate::error::Result;
use crate::models::{CachedOutcome, Opportunity, OpportunityType, SearchOutcome, SearchRequest};
use crate::pipeline::{enhance_query, parse_results};
use crate::services::search::SearchClient;
use crate::storage::{OpportunityStore, persist_batch};

pub struct DiscoveryService {
    search: SearchClient,
    store: Arc<dyn OpportunityStore>,
}

impl DiscoveryService {
    pub fn new(search: SearchClient, store: Arc<dyn OpportunityStore>) -> Self {
        Self { search, store }
    }

    /// Run a full discovery pass for one search request.
    ///
    /// The outcome carries the persisted records (with storage ids)
    /// and the enhanced query that was actually sent.
    pub async fn search_opportunities(&self, request: &SearchRequest) -> Result<SearchOutcome> {
        let enhanced = enhance_query(&request.query, request.deadline_year.as_deref());
        log::info!("Searching opportunities: {enhanced}");

        let items = self.search.search(&enhanced).await;
        let parsed = parse_results(&items, request.opportunity_type, Utc::now().date_naive());
        let persisted = persist_batch(self.store.as_ref(), &parsed.opportunities).await;

        Ok(SearchOutcome {
            count: persisted.len(),
            opportunities: persisted,
            query: enhanced,
            cached: true,
        })
    }

    /// Previously persisted opportunities, newest first.
    pub async fn cached_opportunities(
        &self,
        limit: usize,
        opportunity_type: Option<OpportunityType>,
    ) -> Result<CachedOutcome> {
        let opportunities = self
            .store
            .cached_opportunities(limit, opportunity_type)
            .await?;
        Ok(CachedOutcome {
            count: opportunities.len(),
            opportunities,
        })
    }

    /// Look up one persisted opportunity by its storage id.
    pub async fn get_opportunity(&self, id: &str) -> Result<Option<Opportunity>> {
        self.store.get_opportunity(id).await
    }
}
