//! API Error Types
//!
//! Every failure becomes a JSON body `{ error: { code, message }, request_id }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configured dataset file could not be read
    #[error("Dataset {path:?} unavailable: {source}")]
    Dataset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Internal(String),

    /// Listener bind or accept failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    pub fn dataset(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ApiError::Dataset {
            path: path.into(),
            source,
        }
    }

    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::Dataset { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                (StatusCode::NOT_FOUND, "DATASET_NOT_FOUND")
            }
            ApiError::Dataset { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "DATASET_UNREADABLE"),
            ApiError::Internal(_) | ApiError::Io(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let request_id = uuid::Uuid::new_v4().to_string();

        if status.is_server_error() {
            tracing::error!(%request_id, code, error = %self, "Request failed");
        } else {
            tracing::warn!(%request_id, code, error = %self, "Request rejected");
        }

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
