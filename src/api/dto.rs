//! Data Transfer Objects
//!
//! Response types for the API endpoints.

use serde::Serialize;

/// Health status response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded
    pub status: String,
    /// Dataset status: ok, missing, remote
    pub dataset: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
