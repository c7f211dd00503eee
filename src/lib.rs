//! # Salary Dashboard
//!
//! Yearly salary aggregates with a sortable table, a job-title drill-down and
//! a companion line chart.
//!
//! ## Features
//!
//! - **Single fetch**: the dataset is loaded once, from a file or a URL
//! - **Checked boundary**: the payload must be an array of well-formed records
//! - **Pure aggregation**: per-year job counts and incrementally computed
//!   average salaries, per-year job-title counts
//! - **Presenters**: sortable yearly table, paginated job-title table, time
//!   series chart
//!
//! ## Modules
//!
//! - [`dataset`]: Record types, data sources and aggregation
//! - [`presenter`]: Table and chart view models
//! - [`dashboard`]: Load state and event handling
//! - [`config`]: Configuration loading (requires `server`)
//! - [`api`]: Static file server with Axum (requires `server`)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use salary_dashboard::{Dashboard, DashboardEvent, FileSource};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut dashboard = Dashboard::default();
//!     dashboard.load(&FileSource::new("data/salaries.json")).await;
//!
//!     for summary in dashboard.summaries() {
//!         println!("{}: {} jobs", summary.year, summary.number_of_jobs);
//!     }
//!
//!     // Drill into a year
//!     dashboard.dispatch(DashboardEvent::RowActivated(2023));
//!     println!("{} job titles", dashboard.job_counts().len());
//! }
//! ```

pub mod dashboard;
pub mod dataset;
pub mod presenter;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;

// Re-export top-level types for convenience
pub use dataset::{
    count_job_titles, parse_records, summarize_by_year, DataFetchError, DataSource, FetchResult,
    JobTitleCount, RunningMean, SalaryRecord, StaticSource, YearSummary,
};

#[cfg(feature = "server")]
pub use dataset::{from_location, FileSource, HttpSource};

pub use presenter::{
    format_usd, JobTitleTable, Pagination, SortDirection, SortState, TimeSeries, YearColumn,
    YearTable, DEFAULT_PAGE_SIZE,
};

pub use dashboard::{Dashboard, DashboardEvent, LoadState};

#[cfg(feature = "server")]
pub use api::{build_router, serve, ApiError, AppState};

#[cfg(feature = "server")]
pub use config::{
    ApiConfig, Config, ConfigError, DashboardConfig, DatasetConfig, LoadReport, LoggingConfig,
};
