//! Generated endpoints: any verb on `/api/:api_id` and `/api/:api_id/:item_id`.

use crate::error::AppError;
use crate::service::MockResolver;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::Method;
use axum::Json;
use serde_json::Value;

pub async fn resolve_api(
    State(state): State<AppState>,
    method: Method,
    Path(api_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    tracing::debug!(%api_id, %method, "resolving mock api");
    let payload = MockResolver::resolve(state.store.as_ref(), &api_id, &method)
        .await
        .map_err(|e| e.into_app_error("Failed to process API request"))?;
    Ok(Json(payload))
}

pub async fn resolve_item(
    State(state): State<AppState>,
    method: Method,
    Path((api_id, item_id)): Path<(String, String)>,
) -> Result<Json<Value>, AppError> {
    tracing::debug!(%api_id, %item_id, %method, "resolving mock item");
    let item = MockResolver::resolve_item(state.store.as_ref(), &api_id, &method, &item_id)
        .await
        .map_err(|e| e.into_app_error("Failed to process request"))?;
    Ok(Json(item))
}
