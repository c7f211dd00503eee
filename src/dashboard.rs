//! Dashboard State
//!
//! The composition root: fetch → aggregate → presenters, plus the UI state
//! (load state, selected year, table sort and pagination).
//!
//! ```text
//!            fetch ok
//! Loading ─────────────► Ready ──(RowActivated / PageChanged / SortChanged)──► Ready
//!    │
//!    │ fetch failed
//!    └─────────────────► Error (terminal)
//! ```
//!
//! Records are written once when the fetch resolves and are read-only after
//! that. Summaries are computed once on entering `Ready`; job-title counts are
//! recomputed from the held records on every selection.

use serde::{Deserialize, Serialize};

use crate::dataset::{
    count_job_titles, summarize_by_year, DataSource, FetchResult, JobTitleCount, SalaryRecord,
    YearSummary,
};
use crate::presenter::{
    JobTitleTable, Pagination, SortState, TimeSeries, YearColumn, YearTable, DEFAULT_PAGE_SIZE,
};

/// Where the dashboard is in its lifecycle
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum LoadState {
    Loading,
    Ready,
    /// Terminal; there is no retry path
    Error(String),
}

/// User interactions the dashboard reacts to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum DashboardEvent {
    /// A yearly row was clicked
    RowActivated(i32),
    /// Job-title table page or page size changed
    PageChanged {
        page: usize,
        page_size: Option<usize>,
    },
    /// A yearly column header was clicked
    SortChanged(YearColumn),
}

/// Single dashboard instance
#[derive(Debug, Clone)]
pub struct Dashboard {
    state: LoadState,
    records: Vec<SalaryRecord>,
    year_table: YearTable,
    chart: TimeSeries,
    selected_year: Option<i32>,
    job_table: JobTitleTable,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Dashboard {
    /// Create a dashboard in the `Loading` state
    pub fn new(page_size: usize) -> Self {
        Self {
            state: LoadState::Loading,
            records: Vec::new(),
            year_table: YearTable::default(),
            chart: TimeSeries::default(),
            selected_year: None,
            job_table: JobTitleTable::new(page_size),
        }
    }

    /// Fetch the records from `source` and resolve the load state
    pub async fn load(&mut self, source: &dyn DataSource) -> &LoadState {
        tracing::info!("Loading salary data from {}", source.describe());
        let result = source.fetch_records().await;
        self.resolve(result);
        &self.state
    }

    /// Apply the outcome of a fetch performed elsewhere.
    ///
    /// Only the first resolution counts; later calls are ignored.
    pub fn resolve(&mut self, result: FetchResult<Vec<SalaryRecord>>) {
        if self.state != LoadState::Loading {
            tracing::warn!("Ignoring fetch result, dashboard already resolved");
            return;
        }

        match result {
            Ok(records) => {
                let summaries = summarize_by_year(&records);
                tracing::info!(
                    "Loaded {} records across {} years",
                    records.len(),
                    summaries.len()
                );

                self.chart = TimeSeries::from_summaries(&summaries);
                self.year_table = YearTable::new(summaries);
                self.records = records;
                self.state = LoadState::Ready;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load salary data");
                self.state = LoadState::Error(e.to_string());
            }
        }
    }

    /// Handle a user event. Returns `false` when the event was ignored
    /// because the dashboard isn't ready.
    pub fn dispatch(&mut self, event: DashboardEvent) -> bool {
        if self.state != LoadState::Ready {
            tracing::debug!(?event, "Ignoring event, dashboard not ready");
            return false;
        }

        match event {
            DashboardEvent::RowActivated(year) => self.select_year(year),
            DashboardEvent::PageChanged { page, page_size } => {
                let p = self.job_table.set_page(page, page_size);
                tracing::debug!(page = p.current, page_size = p.page_size, "Page changed");
            }
            DashboardEvent::SortChanged(column) => {
                let sort = self.year_table.toggle_sort(column);
                tracing::debug!(column = ?sort.column, direction = ?sort.direction, "Sort changed");
            }
        }

        true
    }

    fn select_year(&mut self, year: i32) {
        let counts = count_job_titles(&self.records, year);
        tracing::info!("Selected year {} ({} job titles)", year, counts.len());

        self.selected_year = Some(year);
        self.job_table.set_rows(counts);
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    /// Error message when the fetch failed
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Raw records (empty until ready)
    pub fn records(&self) -> &[SalaryRecord] {
        &self.records
    }

    /// Yearly summaries in display order
    pub fn summaries(&self) -> Vec<YearSummary> {
        self.year_table.rows()
    }

    pub fn year_table(&self) -> &YearTable {
        &self.year_table
    }

    pub fn sort(&self) -> Option<SortState> {
        self.year_table.sort()
    }

    pub fn chart(&self) -> &TimeSeries {
        &self.chart
    }

    pub fn selected_year(&self) -> Option<i32> {
        self.selected_year
    }

    pub fn job_table(&self) -> &JobTitleTable {
        &self.job_table
    }

    /// All job-title counts of the selected year
    pub fn job_counts(&self) -> &[JobTitleCount] {
        self.job_table.rows()
    }

    pub fn pagination(&self) -> Pagination {
        self.job_table.pagination()
    }
}
