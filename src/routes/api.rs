//! Management and generated-endpoint routes under `/api`.

use crate::handlers::{api_not_found, create_api, list_apis, resolve_api, resolve_item};
use crate::state::AppState;
use axum::{
    routing::{any, get, post},
    Router,
};

/// Static management paths take precedence over the `:api_id` captures.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/create", post(create_api).fallback(api_not_found))
        .route("/api/list", get(list_apis).fallback(api_not_found))
        .route("/api/:api_id", any(resolve_api))
        .route("/api/:api_id/:item_id", any(resolve_item))
        .with_state(state)
}
