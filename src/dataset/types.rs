//! Dataset types
//!
//! Raw salary records as fetched, and the aggregates derived from them.

use serde::{Deserialize, Serialize};

/// A single observed salary entry.
///
/// Records are immutable once fetched. Fields other than the three below are
/// ignored when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRecord {
    /// Year the salary was paid
    pub work_year: i32,
    /// Job title as it appears in the source
    pub job_title: String,
    /// Salary converted to USD
    pub salary_in_usd: f64,
}

impl SalaryRecord {
    /// Create a new record
    pub fn new(work_year: i32, job_title: impl Into<String>, salary_in_usd: f64) -> Self {
        Self {
            work_year,
            job_title: job_title.into(),
            salary_in_usd,
        }
    }
}

/// Per-year aggregate shown in the main table and the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearSummary {
    pub year: i32,
    /// Always >= 1
    pub number_of_jobs: u64,
    /// Arithmetic mean of `salary_in_usd` over the year's records
    pub average_salary: f64,
}

/// Occurrences of one job title within a single year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobTitleCount {
    pub job_title: String,
    pub count: u64,
}

impl JobTitleCount {
    pub fn new(job_title: impl Into<String>, count: u64) -> Self {
        Self {
            job_title: job_title.into(),
            count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_ignores_extra_fields() {
        let json = r#"{
            "work_year": 2023,
            "experience_level": "SE",
            "job_title": "Data Scientist",
            "salary": 160000,
            "salary_currency": "USD",
            "salary_in_usd": 160000
        }"#;

        let record: SalaryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, SalaryRecord::new(2023, "Data Scientist", 160000.0));
    }

    #[test]
    fn test_summary_uses_camel_case() {
        let summary = YearSummary {
            year: 2021,
            number_of_jobs: 2,
            average_salary: 150.0,
        };

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["year"], 2021);
        assert_eq!(value["numberOfJobs"], 2);
        assert_eq!(value["averageSalary"], 150.0);
    }
}
