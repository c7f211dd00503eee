//! Data Sources
//!
//! The dataset is fetched exactly once. Every source funnels the fetched bytes
//! through [`parse_records`], which is the only validation boundary: the
//! payload must be a JSON array and every element must carry the three
//! required fields. There are no retries and no timeouts.

use async_trait::async_trait;

use super::error::{DataFetchError, FetchResult};
use super::types::SalaryRecord;

/// Something the dashboard can fetch salary records from
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch and validate the full record set (single attempt)
    async fn fetch_records(&self) -> FetchResult<Vec<SalaryRecord>>;

    /// Human-readable location, used in logs
    fn describe(&self) -> String;
}

/// Validate a fetched payload and decode its records.
///
/// Extra fields on each element are ignored.
pub fn parse_records(bytes: &[u8]) -> FetchResult<Vec<SalaryRecord>> {
    let payload: serde_json::Value = serde_json::from_slice(bytes)?;

    let items = match payload {
        serde_json::Value::Array(items) => items,
        _ => return Err(DataFetchError::Shape),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<SalaryRecord>(item).map_err(|e| {
                DataFetchError::InvalidRecord {
                    index,
                    reason: e.to_string(),
                }
            })
        })
        .collect()
}

/// Records held in memory; useful for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<SalaryRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<SalaryRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl DataSource for StaticSource {
    async fn fetch_records(&self) -> FetchResult<Vec<SalaryRecord>> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("static ({} records)", self.records.len())
    }
}

#[cfg(feature = "server")]
pub use native::{from_location, FileSource, HttpSource};

#[cfg(feature = "server")]
mod native {
    use super::*;
    use std::path::{Path, PathBuf};

    /// JSON file on the local filesystem
    #[derive(Debug, Clone)]
    pub struct FileSource {
        path: PathBuf,
    }

    impl FileSource {
        pub fn new(path: impl AsRef<Path>) -> Self {
            Self {
                path: path.as_ref().to_path_buf(),
            }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    #[async_trait]
    impl DataSource for FileSource {
        async fn fetch_records(&self) -> FetchResult<Vec<SalaryRecord>> {
            let bytes = tokio::fs::read(&self.path).await?;
            parse_records(&bytes)
        }

        fn describe(&self) -> String {
            self.path.display().to_string()
        }
    }

    /// JSON document served over HTTP(S)
    #[derive(Debug, Clone)]
    pub struct HttpSource {
        url: String,
        client: reqwest::Client,
    }

    impl HttpSource {
        pub fn new(url: impl Into<String>) -> Self {
            Self {
                url: url.into(),
                client: reqwest::Client::new(),
            }
        }
    }

    #[async_trait]
    impl DataSource for HttpSource {
        async fn fetch_records(&self) -> FetchResult<Vec<SalaryRecord>> {
            let response = self.client.get(&self.url).send().await?;

            let status = response.status();
            if !status.is_success() {
                return Err(DataFetchError::Status {
                    url: self.url.clone(),
                    status: status.as_u16(),
                });
            }

            let bytes = response.bytes().await?;
            parse_records(&bytes)
        }

        fn describe(&self) -> String {
            self.url.clone()
        }
    }

    /// Pick a source for a configured location: URLs go over HTTP, anything
    /// else is a file path.
    pub fn from_location(location: &str) -> Box<dyn DataSource> {
        if location.starts_with("http://") || location.starts_with("https://") {
            Box::new(HttpSource::new(location))
        } else {
            Box::new(FileSource::new(location))
        }
    }
}
