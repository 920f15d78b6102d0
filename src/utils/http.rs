// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use crate::error::Result;
use crate::models::SearchConfig;

/// Create a configured asynchronous HTTP client.
pub fn create_client(config: &SearchConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client_from_default_config() {
        let config = SearchConfig::default();
        assert!(create_client(&config).is_ok());
    }
}
