//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

/// Faults raised by a [`crate::store::ConfigStore`] backend.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Codec(#[from] serde_json::Error),
    #[error("invalid record key: '{0}'")]
    InvalidKey(String),
}

/// Outcomes of mock resolution other than a payload.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("API not found")]
    ApiNotFound,
    #[error("Item not found")]
    ItemNotFound,
    #[error("Method {0} not allowed for this endpoint")]
    MethodNotAllowed(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ResolveError {
    /// Converts to an HTTP error; `fault_message` is used when the store failed.
    pub fn into_app_error(self, fault_message: &'static str) -> AppError {
        match self {
            ResolveError::ApiNotFound | ResolveError::ItemNotFound => AppError::NotFound(self.to_string()),
            ResolveError::MethodNotAllowed(_) => AppError::MethodNotAllowed(self.to_string()),
            ResolveError::Store(source) => AppError::Storage {
                message: fault_message,
                source,
            },
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    MethodNotAllowed(String),
    /// Malformed create input; answered with 500 like any other create failure.
    #[error("{message}: {detail}")]
    Validation { message: &'static str, detail: String },
    #[error("Request body too large")]
    PayloadTooLarge,
    #[error("{message}: {source}")]
    Storage {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

impl AppError {
    pub fn storage(message: &'static str, source: StoreError) -> Self {
        AppError::Storage { message, source }
    }
}

#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, error) = match self {
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message, None),
            AppError::MethodNotAllowed(message) => (StatusCode::METHOD_NOT_ALLOWED, message, None),
            AppError::Validation { message, detail } => {
                tracing::warn!(error = %detail, "{}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string(), Some(detail))
            }
            AppError::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "Request body too large".to_string(),
                Some("length limit exceeded".to_string()),
            ),
            AppError::Storage { message, source } => {
                tracing::error!(error = %source, "{}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string(), Some(source.to_string()))
            }
        };
        let body = ErrorBody {
            success: false,
            message,
            error,
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_errors_map_to_http_kinds() {
        assert!(matches!(
            ResolveError::ApiNotFound.into_app_error("x"),
            AppError::NotFound(m) if m == "API not found"
        ));
        assert!(matches!(
            ResolveError::MethodNotAllowed("PUT".into()).into_app_error("x"),
            AppError::MethodNotAllowed(m) if m == "Method PUT not allowed for this endpoint"
        ));
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(matches!(
            ResolveError::Store(io.into()).into_app_error("Failed to process request"),
            AppError::Storage { message: "Failed to process request", .. }
        ));
    }

    #[test]
    fn status_codes() {
        assert_eq!(AppError::NotFound("API not found".into()).into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::MethodNotAllowed("nope".into()).into_response().status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        let err = AppError::Validation {
            message: "Failed to create API",
            detail: "bad json".into(),
        };
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(AppError::PayloadTooLarge.into_response().status(), StatusCode::PAYLOAD_TOO_LARGE);
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        assert_eq!(
            AppError::storage("Failed to list APIs", io.into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
