//! Error handling for the web front-end
//!
//! `AppError` is returned by handlers that answer with a plain-text body
//! on failure (the download proxy). The listing page renders its errors
//! inline instead.

use crate::disk::DiskError;
use axum::{http::StatusCode, response::IntoResponse};

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    BadGateway(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::Internal(msg) => {
                tracing::error!(details = %msg, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "An internal error occurred".to_string())
            }
        };

        // &str bodies are served as text/plain; charset=utf-8
        (status, message).into_response()
    }
}

impl From<DiskError> for AppError {
    fn from(err: DiskError) -> Self {
        tracing::error!(error = ?err, "Download failed: {}", err);
        AppError::BadGateway(format!("Error downloading file: {}", err))
    }
}
