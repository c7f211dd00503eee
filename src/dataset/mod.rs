//! Salary Dataset
//!
//! Raw record types, the fetch boundary, and the aggregations built on top.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   bytes   ┌───────────────┐  Vec<SalaryRecord>  ┌──────────────┐
//! │  DataSource  │ ────────► │ parse_records │ ──────────────────► │  aggregate   │
//! │ (file, http) │           │ (shape check) │                     │ (pure fns)   │
//! └──────────────┘           └───────────────┘                     └──────────────┘
//! ```

pub mod aggregate;
pub mod error;
pub mod source;
pub mod types;

pub use aggregate::{count_job_titles, summarize_by_year, RunningMean};
pub use error::{DataFetchError, FetchResult};
pub use source::{parse_records, DataSource, StaticSource};
pub use types::{JobTitleCount, SalaryRecord, YearSummary};

#[cfg(feature = "server")]
pub use source::{from_location, FileSource, HttpSource};
