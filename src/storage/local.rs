//! Local filesystem storage implementation.
//!
//! Keeps the whole opportunity collection in one JSON file and writes
//! it atomically (temp file, then rename). Record ids are derived from
//! the link, so rediscovering a listing overwrites its old record.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use sha2::{Digest, Sha256};
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::{Opportunity, OpportunityType};
use crate::storage::OpportunityStore;

/// Collection file holding every cached opportunity.
const COLLECTION_KEY: &str = "opportunities.json";

/// Local filesystem storage backend.
#[derive(Clone)]
pub struct LocalStore {
    root_dir: PathBuf,
}

impl LocalStore {
    /// Create a new LocalStore rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Get the full path for a relative key.
    fn path(&self, key: &str) -> PathBuf {
        self.root_dir.join(key)
    }

    /// Ensure parent directory exists.
    async fn ensure_dir(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path(key);
        self.ensure_dir(&path).await?;

        let tmp = path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }

    /// Write JSON data.
    async fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(value)?;
        self.write_bytes(key, &bytes).await
    }

    /// Read bytes, returning None if file doesn't exist.
    async fn read_bytes(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path(key);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }

    /// Read JSON data.
    async fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.read_bytes(key).await? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Load the collection, empty when no file exists yet.
    async fn load_collection(&self) -> Result<Vec<Opportunity>> {
        Ok(self.read_json(COLLECTION_KEY).await?.unwrap_or_default())
    }

    /// Stable record id: first 16 hex characters of the link digest.
    fn record_id(opportunity: &Opportunity) -> String {
        let digest = Sha256::digest(opportunity.link.as_bytes());
        hex::encode(digest)[..16].to_string()
    }
}

#[async_trait]
impl OpportunityStore for LocalStore {
    async fn create_opportunity(&self, opportunity: &Opportunity) -> Result<Opportunity> {
        let mut records = self.load_collection().await?;

        let mut stored = opportunity.clone();
        stored.id = Some(Self::record_id(opportunity));

        // A rediscovered link replaces its previous record
        match records.iter().position(|record| record.id == stored.id) {
            Some(index) => records[index] = stored.clone(),
            None => records.push(stored.clone()),
        }

        self.write_json(COLLECTION_KEY, &records).await?;
        Ok(stored)
    }

    async fn cached_opportunities(
        &self,
        limit: usize,
        opportunity_type: Option<OpportunityType>,
    ) -> Result<Vec<Opportunity>> {
        let mut records = self.load_collection().await?;

        if let Some(wanted) = opportunity_type {
            records.retain(|record| record.opportunity_type == wanted);
        }

        records.sort_by(|a, b| b.discovered_date.cmp(&a.discovered_date));
        records.truncate(limit);

        Ok(records)
    }

    async fn get_opportunity(&self, id: &str) -> Result<Option<Opportunity>> {
        let records = self.load_collection().await?;
        Ok(records
            .into_iter()
            .find(|record| record.id.as_deref() == Some(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use tempfile::TempDir;

    fn sample(title: &str, link: &str, minutes_ago: i64) -> Opportunity {
        Opportunity {
            id: None,
            title: title.to_string(),
            link: link.to_string(),
            description: "A test event".to_string(),
            source: "unstop.com".to_string(),
            relevance_score: 65,
            discovered_date: Utc::now() - Duration::minutes(minutes_ago),
            opportunity_type: OpportunityType::Hackathon,
            organizer: "Test Org".to_string(),
            eligibility_text: "Open to all".to_string(),
            deadline: "Not specified".to_string(),
            apply_by: "Not specified".to_string(),
            opportunity_id: "opp_1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_write_and_read() {
        let tmp = TempDir::new().unwrap();
        let store = LocalStore::new(tmp.path());

        store.write_bytes("test.txt", b"hello").await.unwrap();
        let data = store.read_bytes("test.txt").await.unwrap();
        assert_eq!(data, Some(b"hello".to_vec()));
    }

    #[tokio::test]
    async fn test_read_nonexistent() {
        let tmp = TempDir::new().unwrap();
        let store = LocalStore::new(tmp.path());

        let data = store.read_bytes("nope.txt").await.unwrap();
        assert!(data.is_none());
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_persists() {
        let tmp = TempDir::new().unwrap();
        let store = LocalStore::new(tmp.path());

        let stored = store
            .create_opportunity(&sample("Hack Night", "https://unstop.com/hack-night", 0))
            .await
            .unwrap();

        let id = stored.id.clone().unwrap();
        assert_eq!(id.len(), 16);

        let loaded = store.get_opportunity(&id).await.unwrap().unwrap();
        assert_eq!(loaded.title, "Hack Night");
    }

    #[tokio::test]
    async fn test_same_link_updates_in_place() {
        let tmp = TempDir::new().unwrap();
        let store = LocalStore::new(tmp.path());

        let first = store
            .create_opportunity(&sample("Hack Night", "https://unstop.com/hack-night", 10))
            .await
            .unwrap();
        let second = store
            .create_opportunity(&sample(
                "Hack Night (Updated)",
                "https://unstop.com/hack-night",
                0,
            ))
            .await
            .unwrap();

        assert_eq!(first.id, second.id);

        let cached = store.cached_opportunities(10, None).await.unwrap();
        assert_eq!(cached.len(), 1);
        assert_eq!(cached[0].title, "Hack Night (Updated)");
    }

    #[tokio::test]
    async fn test_cached_respects_limit_filter_and_order() {
        let tmp = TempDir::new().unwrap();
        let store = LocalStore::new(tmp.path());

        let mut internship = sample("Internship", "https://internshala.com/i", 30);
        internship.opportunity_type = OpportunityType::Internship;

        store
            .create_opportunity(&sample("Older Hack", "https://unstop.com/old", 60))
            .await
            .unwrap();
        store.create_opportunity(&internship).await.unwrap();
        store
            .create_opportunity(&sample("Newer Hack", "https://unstop.com/new", 5))
            .await
            .unwrap();

        let newest = store.cached_opportunities(2, None).await.unwrap();
        let titles: Vec<&str> = newest.iter().map(|o| o.title.as_str()).collect();
        assert_eq!(titles, vec!["Newer Hack", "Internship"]);

        let hackathons = store
            .cached_opportunities(10, Some(OpportunityType::Hackathon))
            .await
            .unwrap();
        assert_eq!(hackathons.len(), 2);
    }

    #[tokio::test]
    async fn test_get_opportunity_miss() {
        let tmp = TempDir::new().unwrap();
        let store = LocalStore::new(tmp.path());

        let missing = store.get_opportunity("deadbeefdeadbeef").await.unwrap();
        assert!(missing.is_none());
    }
}
