pub mod api;
pub mod common;

pub use api::api_routes;
pub use common::common_routes;

use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer};

/// Full application: common and `/api` routes, permissive CORS, bounded request bodies.
///
/// Each `layer` call re-boxes the stack into a route with an axum `Body`, so CORS
/// sits on top of the limit layer's rewritten 413 responses.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(api_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(RequestBodyLimitLayer::new(body_limit))
                .layer(DefaultBodyLimit::disable()),
        )
        .layer(middleware::map_response(payload_too_large_envelope))
        .layer(CorsLayer::permissive())
}

/// Replaces the limit layer's plain-text 413 with the JSON error envelope.
async fn payload_too_large_envelope(response: Response) -> Response {
    if response.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::PayloadTooLarge.into_response();
    }
    response
}
