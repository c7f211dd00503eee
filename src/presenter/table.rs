//! Table Presenters
//!
//! Two tables make up the dashboard:
//!
//! - [`YearTable`]: one row per [`YearSummary`], sortable by any column,
//!   emits [`DashboardEvent::RowActivated`] when a row is activated.
//! - [`JobTitleTable`]: the [`JobTitleCount`] rows of the selected year,
//!   paginated.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dashboard::DashboardEvent;
use crate::dataset::{JobTitleCount, YearSummary};

/// Page size used when none (or zero) is given
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Title of the yearly table
pub const YEAR_TABLE_TITLE: &str = "Main Table";

/// Title of the job-title table for a given year
pub fn job_table_title(year: i32) -> String {
    format!("Job Titles in {}", year)
}

/// Column headers of the job-title table
pub const JOB_TABLE_COLUMNS: [&str; 2] = ["Job Title", "Count"];

// ============================================
// YEARLY TABLE
// ============================================

/// Sortable columns of the yearly table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearColumn {
    Year,
    NumberOfJobs,
    AverageSalary,
}

impl YearColumn {
    pub const ALL: [YearColumn; 3] = [
        YearColumn::Year,
        YearColumn::NumberOfJobs,
        YearColumn::AverageSalary,
    ];

    /// Column header
    pub fn title(&self) -> &'static str {
        match self {
            YearColumn::Year => "Year",
            YearColumn::NumberOfJobs => "Number of Jobs",
            YearColumn::AverageSalary => "Average Salary",
        }
    }

    fn compare(&self, a: &YearSummary, b: &YearSummary) -> Ordering {
        match self {
            YearColumn::Year => a.year.cmp(&b.year),
            YearColumn::NumberOfJobs => a.number_of_jobs.cmp(&b.number_of_jobs),
            YearColumn::AverageSalary => a.average_salary.total_cmp(&b.average_salary),
        }
    }
}

impl FromStr for YearColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "year" => Ok(YearColumn::Year),
            "jobs" | "number_of_jobs" | "numberofjobs" => Ok(YearColumn::NumberOfJobs),
            "salary" | "average_salary" | "averagesalary" => Ok(YearColumn::AverageSalary),
            other => Err(format!(
                "Unknown column: {}. Use: year, jobs, salary",
                other
            )),
        }
    }
}

impl fmt::Display for YearColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Arrow shown next to the active column header
    pub fn indicator(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Active sort of the yearly table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: YearColumn,
    pub direction: SortDirection,
}

/// Yearly summary table.
///
/// Rows are kept in the order they were given; sorting is applied on read so
/// that equal keys always fall back to that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YearTable {
    rows: Vec<YearSummary>,
    sort: Option<SortState>,
}

impl YearTable {
    pub fn new(rows: Vec<YearSummary>) -> Self {
        Self { rows, sort: None }
    }

    /// Sort by `column`: a new column starts ascending, the active column
    /// flips direction.
    pub fn toggle_sort(&mut self, column: YearColumn) -> SortState {
        let direction = match self.sort {
            Some(current) if current.column == column => current.direction.flipped(),
            _ => SortDirection::Ascending,
        };

        let state = SortState { column, direction };
        self.sort = Some(state);
        state
    }

    pub fn set_sort(&mut self, column: YearColumn, direction: SortDirection) {
        self.sort = Some(SortState { column, direction });
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    /// Rows in display order
    pub fn rows(&self) -> Vec<YearSummary> {
        let mut rows = self.rows.clone();

        if let Some(SortState { column, direction }) = self.sort {
            // sort_by is stable; reversing the comparator (not the output)
            // keeps ties in source order for descending sorts as well
            match direction {
                SortDirection::Ascending => rows.sort_by(|a, b| column.compare(a, b)),
                SortDirection::Descending => rows.sort_by(|a, b| column.compare(b, a)),
            }
        }

        rows
    }

    /// Activate the row at `index` in display order
    pub fn activate(&self, index: usize) -> Option<DashboardEvent> {
        self.rows()
            .get(index)
            .map(|row| DashboardEvent::RowActivated(row.year))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ============================================
// JOB-TITLE TABLE
// ============================================

/// Pagination state, 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current: usize,
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Paginated job-title counts of the selected year
#[derive(Debug, Clone, PartialEq)]
pub struct JobTitleTable {
    rows: Vec<JobTitleCount>,
    pagination: Pagination,
    default_page_size: usize,
}

impl Default for JobTitleTable {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl JobTitleTable {
    /// Create an empty table; a zero page size falls back to
    /// [`DEFAULT_PAGE_SIZE`]
    pub fn new(page_size: usize) -> Self {
        let page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };

        Self {
            rows: Vec::new(),
            pagination: Pagination {
                current: 1,
                page_size,
            },
            default_page_size: page_size,
        }
    }

    /// Replace the rows. Pagination is left as is; an out-of-range page is
    /// clamped when reading.
    pub fn set_rows(&mut self, rows: Vec<JobTitleCount>) {
        self.rows = rows;
    }

    /// Apply a page change. A missing or zero size means the default size.
    pub fn set_page(&mut self, page: usize, page_size: Option<usize>) -> Pagination {
        let page_size = match page_size {
            Some(size) if size > 0 => size,
            _ => self.default_page_size,
        };

        self.pagination = Pagination {
            current: page.max(1),
            page_size,
        };
        self.pagination
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn rows(&self) -> &[JobTitleCount] {
        &self.rows
    }

    pub fn total(&self) -> usize {
        self.rows.len()
    }

    /// Number of pages, at least 1
    pub fn page_count(&self) -> usize {
        self.total().div_ceil(self.pagination.page_size).max(1)
    }

    /// Current page after clamping to the available pages
    pub fn current_page(&self) -> usize {
        self.pagination.current.min(self.page_count())
    }

    /// Rows visible on the current page
    pub fn page_rows(&self) -> &[JobTitleCount] {
        let size = self.pagination.page_size;
        let start = (self.current_page() - 1) * size;
        let end = (start + size).min(self.rows.len());

        if start >= end {
            &[]
        } else {
            &self.rows[start..end]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(year: i32, jobs: u64, avg: f64) -> YearSummary {
        YearSummary {
            year,
            number_of_jobs: jobs,
            average_salary: avg,
        }
    }

    fn years(rows: &[YearSummary]) -> Vec<i32> {
        rows.iter().map(|r| r.year).collect()
    }

    fn titles(count: usize) -> Vec<JobTitleCount> {
        (0..count)
            .map(|i| JobTitleCount::new(format!("Title {}", i), 1))
            .collect()
    }

    #[test]
    fn test_unsorted_keeps_source_order() {
        let table = YearTable::new(vec![summary(2022, 1, 1.0), summary(2020, 2, 2.0)]);
        assert_eq!(years(&table.rows()), vec![2022, 2020]);
        assert!(table.sort().is_none());
    }

    #[test]
    fn test_toggle_sort_flips_direction() {
        let mut table = YearTable::new(vec![
            summary(2021, 5, 10.0),
            summary(2023, 1, 30.0),
            summary(2022, 3, 20.0),
        ]);

        let state = table.toggle_sort(YearColumn::Year);
        assert_eq!(state.direction, SortDirection::Ascending);
        assert_eq!(years(&table.rows()), vec![2021, 2022, 2023]);

        let state = table.toggle_sort(YearColumn::Year);
        assert_eq!(state.direction, SortDirection::Descending);
        assert_eq!(years(&table.rows()), vec![2023, 2022, 2021]);

        // Switching column starts ascending again
        let state = table.toggle_sort(YearColumn::NumberOfJobs);
        assert_eq!(state.direction, SortDirection::Ascending);
        assert_eq!(years(&table.rows()), vec![2023, 2022, 2021]);

        table.toggle_sort(YearColumn::AverageSalary);
        assert_eq!(years(&table.rows()), vec![2021, 2022, 2023]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let mut table = YearTable::new(vec![
            summary(2024, 2, 100.0),
            summary(2020, 1, 100.0),
            summary(2022, 2, 100.0),
            summary(2021, 1, 100.0),
        ]);

        table.set_sort(YearColumn::NumberOfJobs, SortDirection::Ascending);
        assert_eq!(years(&table.rows()), vec![2020, 2021, 2024, 2022]);

        table.set_sort(YearColumn::NumberOfJobs, SortDirection::Descending);
        assert_eq!(years(&table.rows()), vec![2024, 2022, 2020, 2021]);

        table.set_sort(YearColumn::AverageSalary, SortDirection::Descending);
        assert_eq!(years(&table.rows()), vec![2024, 2020, 2022, 2021]);
    }

    #[test]
    fn test_activate_uses_display_order() {
        let mut table = YearTable::new(vec![summary(2020, 1, 1.0), summary(2021, 1, 1.0)]);
        table.set_sort(YearColumn::Year, SortDirection::Descending);

        assert_eq!(table.activate(0), Some(DashboardEvent::RowActivated(2021)));
        assert_eq!(table.activate(1), Some(DashboardEvent::RowActivated(2020)));
        assert_eq!(table.activate(2), None);
    }

    #[test]
    fn test_column_from_str() {
        assert_eq!("year".parse::<YearColumn>(), Ok(YearColumn::Year));
        assert_eq!("Jobs".parse::<YearColumn>(), Ok(YearColumn::NumberOfJobs));
        assert_eq!("salary".parse::<YearColumn>(), Ok(YearColumn::AverageSalary));
        assert!("title".parse::<YearColumn>().is_err());
    }

    #[test]
    fn test_pagination_defaults() {
        let mut table = JobTitleTable::default();
        table.set_rows(titles(25));

        assert_eq!(table.pagination(), Pagination::default());
        assert_eq!(table.page_count(), 3);
        assert_eq!(table.page_rows().len(), 10);
        assert_eq!(table.page_rows()[0].job_title, "Title 0");
    }

    #[test]
    fn test_pagination_last_page_is_partial() {
        let mut table = JobTitleTable::new(10);
        table.set_rows(titles(25));

        table.set_page(3, Some(10));
        assert_eq!(table.page_rows().len(), 5);
        assert_eq!(table.page_rows()[0].job_title, "Title 20");
    }

    #[test]
    fn test_set_page_falls_back_to_default_size() {
        let mut table = JobTitleTable::new(5);
        table.set_rows(titles(12));

        let p = table.set_page(2, None);
        assert_eq!(p, Pagination { current: 2, page_size: 5 });

        let p = table.set_page(0, Some(0));
        assert_eq!(p, Pagination { current: 1, page_size: 5 });

        let p = table.set_page(1, Some(20));
        assert_eq!(p.page_size, 20);
        assert_eq!(table.page_rows().len(), 12);
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let mut table = JobTitleTable::new(10);
        table.set_rows(titles(30));
        table.set_page(3, None);

        // A year with fewer titles keeps the page but shows the last one
        table.set_rows(titles(4));
        assert_eq!(table.pagination().current, 3);
        assert_eq!(table.current_page(), 1);
        assert_eq!(table.page_rows().len(), 4);
    }

    #[test]
    fn test_empty_job_table() {
        let table = JobTitleTable::new(0);
        assert_eq!(table.pagination().page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(table.total(), 0);
        assert_eq!(table.page_count(), 1);
        assert!(table.page_rows().is_empty());
    }
}
