//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::config::ApiConfig;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Local dataset file served at `/data/salaries.json`; `None` when the
    /// dataset is remote and clients fetch it directly
    pub dataset_path: Option<PathBuf>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state serving the dataset at `dataset_source`.
    ///
    /// URL sources are not proxied.
    pub fn new(dataset_source: &str, config: ApiConfig) -> Self {
        let dataset_path = if dataset_source.starts_with("http://")
            || dataset_source.starts_with("https://")
        {
            None
        } else {
            Some(PathBuf::from(dataset_source))
        };

        Self {
            dataset_path,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Whether the dataset file exists and is a regular file
    pub async fn dataset_available(&self) -> bool {
        match &self.dataset_path {
            Some(path) => tokio::fs::metadata(path)
                .await
                .map(|m| m.is_file())
                .unwrap_or(false),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_source_is_not_served() {
        let state = AppState::new("https://example.com/salaries.json", ApiConfig::default());
        assert!(state.dataset_path.is_none());

        let state = AppState::new("data/salaries.json", ApiConfig::default());
        assert_eq!(state.dataset_path, Some(PathBuf::from("data/salaries.json")));
    }
}
