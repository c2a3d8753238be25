//! Management operations behind `/api/create` and `/api/list`.

use crate::error::{AppError, StoreError};
use crate::model::{ApiConfig, ApiMethod, CreateApiRequest, UnsupportedMethod};
use crate::store::ConfigStore;

pub const CREATE_FAILED: &str = "Failed to create API";
pub const LIST_FAILED: &str = "Failed to list APIs";

pub struct ApiRegistry;

impl ApiRegistry {
    /// Normalizes the method, assigns a fresh id and timestamp, and persists the record.
    pub async fn create(store: &dyn ConfigStore, request: CreateApiRequest) -> Result<ApiConfig, AppError> {
        let method: ApiMethod = request.method.parse().map_err(|e: UnsupportedMethod| {
            AppError::Validation {
                message: CREATE_FAILED,
                detail: e.to_string(),
            }
        })?;
        let config = ApiConfig::new(request.endpoint, method, request.response);
        store
            .put(&config)
            .await
            .map_err(|e| AppError::storage(CREATE_FAILED, e))?;
        tracing::info!(id = %config.id, endpoint = %config.endpoint, method = %config.method, "created mock api");
        Ok(config)
    }

    pub async fn list(store: &dyn ConfigStore) -> Result<Vec<ApiConfig>, StoreError> {
        store.list().await
    }
}
