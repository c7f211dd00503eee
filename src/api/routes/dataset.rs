//! Dataset Route
//!
//! - GET /data/salaries.json - Raw dataset bytes
//!
//! The file is streamed back as-is. Validation and aggregation happen in the
//! client; the server does no computation on the data.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// GET /data/salaries.json
pub async fn get_dataset(State(state): State<Arc<AppState>>) -> ApiResult<Response> {
    let path = state.dataset_path.as_ref().ok_or_else(|| {
        ApiError::NotFound("dataset is remote and not served by this server".to_string())
    })?;

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| ApiError::dataset(path, e))?;
    tracing::debug!("Serving dataset {:?} ({} bytes)", path, bytes.len());

    Ok(([(header::CONTENT_TYPE, "application/json")], bytes).into_response())
}
