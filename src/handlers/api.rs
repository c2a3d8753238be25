//! Management API: create and list mock endpoint definitions.

use crate::error::AppError;
use crate::model::CreateApiRequest;
use crate::response::{api_list, created};
use crate::service::registry::{CREATE_FAILED, LIST_FAILED};
use crate::service::ApiRegistry;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

/// POST /api/create — persist a new mock endpoint.
pub async fn create_api(
    State(state): State<AppState>,
    body: Result<Json<CreateApiRequest>, JsonRejection>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let Json(request) = body.map_err(|e| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge
        } else {
            AppError::Validation {
                message: CREATE_FAILED,
                detail: e.body_text(),
            }
        }
    })?;
    let config = ApiRegistry::create(state.store.as_ref(), request).await?;
    Ok(created(config))
}

/// GET /api/list — every stored definition.
pub async fn list_apis(State(state): State<AppState>) -> Result<impl axum::response::IntoResponse, AppError> {
    let apis = ApiRegistry::list(state.store.as_ref())
        .await
        .map_err(|e| AppError::storage(LIST_FAILED, e))?;
    Ok(api_list(apis))
}

/// Non-matching verbs on the management paths fall through to an unknown-id lookup.
pub async fn api_not_found() -> AppError {
    AppError::NotFound("API not found".into())
}
