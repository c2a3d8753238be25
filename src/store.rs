//! Persistence of [`ApiConfig`] records keyed by id. Records are never updated or
//! deleted after creation, so backends need no write coordination beyond a
//! single atomic-enough write per key.

use crate::error::StoreError;
use crate::model::ApiConfig;
use async_trait::async_trait;

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Writes `config` under `config.id`, replacing any existing record.
    async fn put(&self, config: &ApiConfig) -> Result<(), StoreError>;

    /// Returns `Ok(None)` for an unknown id; only real faults are errors.
    async fn get(&self, id: &str) -> Result<Option<ApiConfig>, StoreError>;

    /// All records. Callers must not depend on ordering.
    async fn list(&self) -> Result<Vec<ApiConfig>, StoreError>;
}

/// True when `id` can be used as a single file name inside the store directory.
pub(crate) fn is_safe_key(id: &str) -> bool {
    !id.is_empty() && !id.starts_with('.') && !id.contains(['/', '\\', '\0'])
}
