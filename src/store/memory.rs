//! In-memory store for tests and embedding.

use super::ConfigStore;
use crate::error::StoreError;
use crate::model::ApiConfig;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, ApiConfig>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> StoreError {
    StoreError::Io(std::io::Error::new(std::io::ErrorKind::Other, "memory store lock poisoned"))
}

#[async_trait]
impl ConfigStore for MemoryStore {
    async fn put(&self, config: &ApiConfig) -> Result<(), StoreError> {
        let mut records = self.records.write().map_err(|_| poisoned())?;
        records.insert(config.id.clone(), config.clone());
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<ApiConfig>, StoreError> {
        let records = self.records.read().map_err(|_| poisoned())?;
        Ok(records.get(id).cloned())
    }

    /// Sorted by id.
    async fn list(&self) -> Result<Vec<ApiConfig>, StoreError> {
        let records = self.records.read().map_err(|_| poisoned())?;
        let mut all: Vec<ApiConfig> = records.values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(all)
    }
}
