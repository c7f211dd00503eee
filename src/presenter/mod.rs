//! Presenters
//!
//! Framework-independent view models for the dashboard. The CLI renders them
//! as text; the frontend renders the same models as HTML tables and a canvas
//! chart.

pub mod chart;
pub mod format;
pub mod table;

pub use chart::{ChartPoint, TimeSeries};
pub use format::{format_count, format_usd};
pub use table::{
    job_table_title, JobTitleTable, Pagination, SortDirection, SortState, YearColumn, YearTable,
    DEFAULT_PAGE_SIZE, JOB_TABLE_COLUMNS, YEAR_TABLE_TITLE,
};
