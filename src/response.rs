//! Success envelopes for the management routes.

use crate::model::{ApiConfig, ApiMethod};
use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Created {
    pub success: bool,
    pub message: &'static str,
    pub api_id: String,
    pub endpoint: String,
    pub method: ApiMethod,
}

#[derive(Serialize, Debug)]
pub struct ApiList {
    pub success: bool,
    pub apis: Vec<ApiConfig>,
}

pub fn created(config: ApiConfig) -> (StatusCode, Json<Created>) {
    (
        StatusCode::CREATED,
        Json(Created {
            success: true,
            message: "API created successfully",
            api_id: config.id,
            endpoint: config.endpoint,
            method: config.method,
        }),
    )
}

pub fn api_list(apis: Vec<ApiConfig>) -> (StatusCode, Json<ApiList>) {
    (StatusCode::OK, Json(ApiList { success: true, apis }))
}
