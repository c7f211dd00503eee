//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod alert;
pub mod chart;
pub mod job_table;
pub mod loading;
pub mod summary_table;

pub use alert::ErrorAlert;
pub use chart::Chart;
pub use job_table::JobTitleTable;
pub use loading::Loading;
pub use summary_table::SummaryTable;
