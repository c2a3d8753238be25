//! Directory-backed store: one pretty-printed `<id>.json` file per record.

use super::{is_safe_key, ConfigStore};
use crate::error::StoreError;
use crate::model::ApiConfig;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const EXTENSION: &str = "json";

#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens the store rooted at `dir`, creating the directory if it does not exist.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        Ok(FileStore { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", id, EXTENSION))
    }
}

#[async_trait]
impl ConfigStore for FileStore {
    async fn put(&self, config: &ApiConfig) -> Result<(), StoreError> {
        if !is_safe_key(&config.id) {
            return Err(StoreError::InvalidKey(config.id.clone()));
        }
        let encoded = serde_json::to_string_pretty(config)?;
        tokio::fs::write(self.record_path(&config.id), encoded).await?;
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<ApiConfig>, StoreError> {
        if !is_safe_key(id) {
            tracing::debug!(id, "rejecting unsafe record key");
            return Ok(None);
        }
        let content = match tokio::fs::read_to_string(self.record_path(id)).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&content)?))
    }

    async fn list(&self) -> Result<Vec<ApiConfig>, StoreError> {
        let mut entries = tokio::fs::read_dir(&self.dir).await?;
        let mut configs = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            let content = tokio::fs::read_to_string(&path).await?;
            configs.push(serde_json::from_str(&content)?);
        }
        Ok(configs)
    }
}
