//! Data fetch error types

use thiserror::Error;

/// Errors raised while fetching the salary dataset.
///
/// Aggregation itself is total over well-shaped input, so this is the only
/// failure the dashboard can end up in.
#[derive(Error, Debug)]
pub enum DataFetchError {
    /// Reading a local dataset failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The HTTP request could not be completed
    #[error("Network error: {0}")]
    Http(String),

    /// The server answered with a non-success status
    #[error("Request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    /// The body is not valid JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// The body is JSON but not a top-level array
    #[error("Data format is incorrect. Expected an array.")]
    Shape,

    /// An element is missing a required field or has the wrong type
    #[error("Invalid record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
}

impl From<serde_json::Error> for DataFetchError {
    fn from(err: serde_json::Error) -> Self {
        DataFetchError::Parse(err.to_string())
    }
}

#[cfg(feature = "server")]
impl From<reqwest::Error> for DataFetchError {
    fn from(err: reqwest::Error) -> Self {
        DataFetchError::Http(err.to_string())
    }
}

/// Result type alias for dataset fetches
pub type FetchResult<T> = Result<T, DataFetchError>;
