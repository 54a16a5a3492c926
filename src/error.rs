//! Error types and their HTTP representation

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{debug, error};

use crate::api::models::{ErrorDetail, ErrorResponse};

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error taxonomy
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0}")]
    MethodNotAllowed(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Not-found error for a monster identifier as it appeared in the path
    pub fn monster_not_found(id: impl std::fmt::Display) -> Self {
        AppError::NotFound(format!("Monster '{}' not found", id))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Database(_) | AppError::Config(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "not_found",
            AppError::Validation(_) => "validation_error",
            AppError::InvalidRequest(_) | AppError::UnsupportedMediaType(_) => "invalid_request",
            AppError::MethodNotAllowed(_) => "method_not_allowed",
            AppError::Database(_) => "database_error",
            AppError::Unavailable(_) => "service_unavailable",
            AppError::Config(_) | AppError::Internal(_) => "internal_error",
        }
    }

    /// Message safe to hand back to clients
    fn public_message(&self) -> String {
        match self {
            AppError::Database(_) => "A database error occurred".to_string(),
            AppError::Config(_) => "Server misconfiguration".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(e) => {
                AppError::UnsupportedMediaType(e.body_text())
            }
            // Well-formed JSON that does not fit the request shape
            JsonRejection::JsonDataError(e) => AppError::Validation(e.body_text()),
            other => AppError::InvalidRequest(other.body_text()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!(error = %self, error_type = self.error_type(), "Request failed");
        } else {
            debug!(error = %self, error_type = self.error_type(), "Request rejected");
        }

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                message: self.public_message(),
                error_type: self.error_type().to_string(),
            },
        });

        (status, body).into_response()
    }
}
