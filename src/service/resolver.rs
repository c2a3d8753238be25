//! Mock resolution: inbound request -> stored config -> payload or single item.
//!
//! Every call re-reads the store; there is no cache.

use crate::error::ResolveError;
use crate::model::ApiConfig;
use crate::store::ConfigStore;
use axum::http::Method;
use serde_json::Value;

/// Field holding the item array when a response is object-shaped.
pub const MOCK_DATA_FIELD: &str = "mockData";

pub struct MockResolver;

impl MockResolver {
    /// Whole-resource lookup: the stored response, verbatim.
    pub async fn resolve(store: &dyn ConfigStore, id: &str, method: &Method) -> Result<Value, ResolveError> {
        let config = Self::load(store, id, method).await?;
        Ok(config.response)
    }

    /// Item lookup: the leftmost element of the item list whose `id` loosely equals `item_id`.
    pub async fn resolve_item(
        store: &dyn ConfigStore,
        id: &str,
        method: &Method,
        item_id: &str,
    ) -> Result<Value, ResolveError> {
        let config = Self::load(store, id, method).await?;
        let item = match config.response {
            Value::Array(items) => items.into_iter().find(|item| item_matches(item, item_id)),
            Value::Object(mut obj) => match obj.remove(MOCK_DATA_FIELD) {
                Some(Value::Array(items)) => items.into_iter().find(|item| item_matches(item, item_id)),
                _ => None,
            },
            _ => None,
        };
        item.ok_or(ResolveError::ItemNotFound)
    }

    async fn load(store: &dyn ConfigStore, id: &str, method: &Method) -> Result<ApiConfig, ResolveError> {
        let config = store.get(id).await?.ok_or(ResolveError::ApiNotFound)?;
        if !config.method.matches(method) {
            tracing::debug!(id, requested = %method, stored = %config.method, "method mismatch");
            return Err(ResolveError::MethodNotAllowed(method.to_string()));
        }
        Ok(config)
    }
}

/// Compares an element's `id` with a path key after normalizing both sides.
///
/// String ids compare verbatim. Numeric ids compare numerically against the key
/// parsed as a float, so `"2"`, `"2.0"` and `"02"` all select `2`. Elements that
/// are not objects, or whose `id` is any other type, never match. Keys that only
/// a lenient string-to-number coercion would accept are left unmatched on purpose:
/// boolean ids never equal `"1"`/`"0"`, hex keys such as `"0x10"` are not numbers,
/// and a blank key never equals `0`.
pub fn item_matches(item: &Value, item_id: &str) -> bool {
    match item.get("id") {
        Some(Value::String(s)) => s == item_id,
        Some(Value::Number(n)) => match (n.as_f64(), parse_numeric_key(item_id)) {
            (Some(stored), Some(key)) => stored == key,
            _ => false,
        },
        _ => false,
    }
}

fn parse_numeric_key(key: &str) -> Option<f64> {
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    key.parse::<f64>().ok().filter(|n| n.is_finite())
}
