//! Health Routes
//!
//! - GET /health/live - Process is up
//! - GET /health/ready - Dataset file is servable (always ready for remote datasets)
//! - GET /health - Dataset status, uptime and version

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// 503 while the configured dataset file is missing
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if state.dataset_path.is_none() || state.dataset_available().await {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// `degraded` when the dataset file is missing
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let (status, dataset) = match &state.dataset_path {
        None => ("healthy", "remote"),
        Some(_) if state.dataset_available().await => ("healthy", "ok"),
        Some(_) => ("degraded", "missing"),
    };

    Json(HealthResponse {
        status: status.to_string(),
        dataset: dataset.to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
