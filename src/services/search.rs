//! Search gateway for the programmable search API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{RawResult, SearchConfig};
use crate::services::mock::mock_results;
use crate::utils::http;

/// Search API endpoint.
const SEARCH_URL: &str = "https://www.googleapis.com/customsearch/v1";

/// Fixed pagination offsets: five pages of ten results.
const PAGE_OFFSETS: [u32; 5] = [1, 11, 21, 31, 41];

/// Results requested per page (API maximum).
const RESULTS_PER_PAGE: u8 = 10;

/// API credentials, read from the environment.
#[derive(Debug, Clone)]
pub struct SearchCredentials {
    pub api_key: String,
    pub engine_id: String,
}

impl SearchCredentials {
    /// Read credentials from `GOOGLE_SEARCH_API_KEY` and
    /// `GOOGLE_SEARCH_ENGINE_ID`. Empty values count as missing.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("GOOGLE_SEARCH_API_KEY")
            .ok()
            .filter(|value| !value.is_empty())?;
        let engine_id = std::env::var("GOOGLE_SEARCH_ENGINE_ID")
            .ok()
            .filter(|value| !value.is_empty())?;
        Some(Self { api_key, engine_id })
    }
}

/// Query parameters for one search page.
#[derive(Serialize)]
struct SearchQuery<'a> {
    key: &'a str,
    cx: &'a str,
    q: &'a str,
    num: u8,
    start: u32,
    #[serde(rename = "dateRestrict")]
    date_restrict: &'a str,
    sort: &'a str,
    gl: &'a str,
    cr: &'a str,
}

/// JSON body of one search response page.
#[derive(Debug, Default, Deserialize)]
struct SearchPage {
    #[serde(default)]
    items: Vec<RawResult>,
}

/// Outcome of fetching a single page.
#[derive(Debug)]
pub enum PageFetch {
    /// 200 with zero or more items
    Items(Vec<RawResult>),
    /// 429: stop paginating, keep what was accumulated
    RateLimited,
    /// Any other non-success status
    Failed(u16),
}

/// One page of the external search, behind a seam so the pagination
/// policy can be driven by scripted responses.
#[async_trait]
pub trait SearchApi: Send + Sync {
    async fn fetch_page(&self, query: &str, start: u32) -> Result<PageFetch>;
}

/// Live implementation against the hosted search API.
pub struct GoogleSearchApi {
    client: reqwest::Client,
    credentials: SearchCredentials,
}

impl GoogleSearchApi {
    pub fn new(config: &SearchConfig, credentials: SearchCredentials) -> Result<Self> {
        Ok(Self {
            client: http::create_client(config)?,
            credentials,
        })
    }
}

#[async_trait]
impl SearchApi for GoogleSearchApi {
    async fn fetch_page(&self, query: &str, start: u32) -> Result<PageFetch> {
        let params = SearchQuery {
            key: &self.credentials.api_key,
            cx: &self.credentials.engine_id,
            q: query,
            num: RESULTS_PER_PAGE,
            start,
            date_restrict: "m6",
            sort: "date:d:s",
            gl: "in",
            cr: "countryIN",
        };

        let response = self.client.get(SEARCH_URL).query(&params).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Ok(PageFetch::RateLimited);
        }
        if !status.is_success() {
            return Ok(PageFetch::Failed(status.as_u16()));
        }

        let page: SearchPage = response.json().await?;
        Ok(PageFetch::Items(page.items))
    }
}

/// Paginating search client with the fixed mock fallback.
///
/// Never fails: missing credentials, a dead first page, a transport
/// error, or zero accumulated items all yield the mock set instead.
pub struct SearchClient {
    api: Option<Box<dyn SearchApi>>,
}

impl SearchClient {
    /// Wrap an API implementation, or None when credentials are absent.
    pub fn new(api: Option<Box<dyn SearchApi>>) -> Self {
        Self { api }
    }

    /// Build a client from config and whatever credentials the
    /// environment holds.
    pub fn from_env(config: &SearchConfig) -> Result<Self> {
        match SearchCredentials::from_env() {
            Some(credentials) => Ok(Self::new(Some(Box::new(GoogleSearchApi::new(
                config,
                credentials,
            )?)))),
            None => {
                log::warn!("Search API credentials not configured");
                Ok(Self::new(None))
            }
        }
    }

    /// Run the paginated search for an already-enhanced query.
    pub async fn search(&self, query: &str) -> Vec<RawResult> {
        let Some(api) = self.api.as_deref() else {
            log::warn!("Missing search credentials, serving mock results");
            return mock_results();
        };

        match collect_pages(api, query).await {
            Ok(items) if !items.is_empty() => items,
            Ok(_) => {
                log::warn!("No results from the search API, serving mock results");
                mock_results()
            }
            Err(error) => {
                log::warn!("Search request failed: {error}. Serving mock results");
                mock_results()
            }
        }
    }
}

/// Fetch the fixed page offsets in order, applying the per-page
/// failure policy: 429 stops pagination and keeps the accumulated
/// items, a failed first page aborts, a failed later page is skipped.
/// Transport errors propagate and discard the whole attempt.
async fn collect_pages(api: &dyn SearchApi, query: &str) -> Result<Vec<RawResult>> {
    let regional_query = format!("{query} India");
    let mut collected = Vec::new();

    for start in PAGE_OFFSETS {
        log::debug!("Search page at offset {start}: {regional_query}");

        match api.fetch_page(&regional_query, start).await? {
            PageFetch::Items(items) => {
                log::debug!("Offset {start}: {} items", items.len());
                collected.extend(items);
            }
            PageFetch::RateLimited => {
                log::warn!(
                    "Rate limit hit at offset {start}, keeping {} items",
                    collected.len()
                );
                break;
            }
            PageFetch::Failed(status) => {
                if start == PAGE_OFFSETS[0] {
                    log::warn!("First page failed with status {status}, stopping search");
                    break;
                }
                log::warn!("Page at offset {start} failed with status {status}, continuing");
            }
        }
    }

    Ok(collected)
}
