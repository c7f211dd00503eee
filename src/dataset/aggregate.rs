//! Aggregation
//!
//! Pure functions turning raw records into the yearly summaries and the
//! per-year job-title counts. Nothing here fails: well-shaped input always
//! produces a (possibly empty) result.

use std::collections::{BTreeMap, HashMap};

use super::types::{JobTitleCount, SalaryRecord, YearSummary};

/// Incrementally maintained count and mean.
///
/// Uses `mean += (x - mean) / n` rather than sum-then-divide so large
/// datasets don't accumulate a huge intermediate sum.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunningMean {
    count: u64,
    mean: f64,
}

impl RunningMean {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one value into the mean
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        self.mean += (value - self.mean) / self.count as f64;
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Mean of all pushed values, 0.0 when nothing was pushed
    pub fn mean(&self) -> f64 {
        self.mean
    }
}

/// Group records by `work_year` and compute job count and average salary.
///
/// Returns one summary per distinct year, ascending by year.
pub fn summarize_by_year(records: &[SalaryRecord]) -> Vec<YearSummary> {
    let mut by_year: BTreeMap<i32, RunningMean> = BTreeMap::new();

    for record in records {
        by_year
            .entry(record.work_year)
            .or_default()
            .push(record.salary_in_usd);
    }

    by_year
        .into_iter()
        .map(|(year, acc)| YearSummary {
            year,
            number_of_jobs: acc.count(),
            average_salary: acc.mean(),
        })
        .collect()
}

/// Count job titles among the records of a single year.
///
/// Titles are listed in order of first appearance. A year with no records
/// yields an empty list.
pub fn count_job_titles(records: &[SalaryRecord], year: i32) -> Vec<JobTitleCount> {
    let mut counts: Vec<JobTitleCount> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for record in records.iter().filter(|r| r.work_year == year) {
        match positions.get(record.job_title.as_str()) {
            Some(&idx) => counts[idx].count += 1,
            None => {
                positions.insert(record.job_title.as_str(), counts.len());
                counts.push(JobTitleCount::new(record.job_title.clone(), 1));
            }
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn scenario() -> Vec<SalaryRecord> {
        vec![
            SalaryRecord::new(2021, "A", 100.0),
            SalaryRecord::new(2021, "B", 200.0),
            SalaryRecord::new(2022, "A", 300.0),
        ]
    }

    fn naive_mean(records: &[SalaryRecord], year: i32) -> f64 {
        let values: Vec<f64> = records
            .iter()
            .filter(|r| r.work_year == year)
            .map(|r| r.salary_in_usd)
            .collect();
        values.iter().sum::<f64>() / values.len() as f64
    }

    /// Deterministic pseudo-random dataset spread over a few years
    fn generated(count: usize) -> Vec<SalaryRecord> {
        let titles = ["Data Scientist", "ML Engineer", "Data Analyst", "Research Scientist"];
        let mut seed: u64 = 0x2545_F491_4F6C_DD1D;

        (0..count)
            .map(|i| {
                seed ^= seed << 13;
                seed ^= seed >> 7;
                seed ^= seed << 17;
                let salary = 30_000.0 + (seed % 250_000) as f64 + 0.25 * (i % 4) as f64;
                SalaryRecord::new(2020 + (seed % 5) as i32, titles[i % titles.len()], salary)
            })
            .collect()
    }

    #[test]
    fn test_running_mean() {
        let mut acc = RunningMean::new();
        assert_eq!(acc.count(), 0);
        assert_eq!(acc.mean(), 0.0);

        for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
            acc.push(value);
        }

        assert_eq!(acc.count(), 5);
        assert!((acc.mean() - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_summarize_scenario() {
        let summaries = summarize_by_year(&scenario());

        assert_eq!(
            summaries,
            vec![
                YearSummary {
                    year: 2021,
                    number_of_jobs: 2,
                    average_salary: 150.0,
                },
                YearSummary {
                    year: 2022,
                    number_of_jobs: 1,
                    average_salary: 300.0,
                },
            ]
        );
    }

    #[test]
    fn test_summarize_empty() {
        assert!(summarize_by_year(&[]).is_empty());
    }

    #[test]
    fn test_job_counts_sum_to_record_count() {
        let records = generated(1_000);
        let summaries = summarize_by_year(&records);

        let total: u64 = summaries.iter().map(|s| s.number_of_jobs).sum();
        assert_eq!(total, records.len() as u64);
        assert!(summaries.iter().all(|s| s.number_of_jobs >= 1));
    }

    #[test]
    fn test_average_matches_mean_in_any_order() {
        let records = generated(500);
        let mut reversed = records.clone();
        reversed.reverse();

        let forward = summarize_by_year(&records);
        let backward = summarize_by_year(&reversed);
        assert_eq!(forward.len(), backward.len());

        for (a, b) in forward.iter().zip(&backward) {
            assert_eq!(a.year, b.year);
            assert_eq!(a.number_of_jobs, b.number_of_jobs);

            let expected = naive_mean(&records, a.year);
            assert!((a.average_salary - expected).abs() / expected < TOLERANCE);
            assert!((b.average_salary - expected).abs() / expected < TOLERANCE);
        }
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let records = generated(200);
        assert_eq!(summarize_by_year(&records), summarize_by_year(&records));
    }

    #[test]
    fn test_count_job_titles_scenario() {
        let counts = count_job_titles(&scenario(), 2021);
        assert_eq!(
            counts,
            vec![JobTitleCount::new("A", 1), JobTitleCount::new("B", 1)]
        );
    }

    #[test]
    fn test_count_job_titles_groups_repeats_in_first_seen_order() {
        let records = vec![
            SalaryRecord::new(2023, "ML Engineer", 1.0),
            SalaryRecord::new(2023, "Data Scientist", 1.0),
            SalaryRecord::new(2022, "ML Engineer", 1.0),
            SalaryRecord::new(2023, "ML Engineer", 1.0),
            SalaryRecord::new(2023, "ML Engineer", 1.0),
        ];

        let counts = count_job_titles(&records, 2023);
        assert_eq!(
            counts,
            vec![
                JobTitleCount::new("ML Engineer", 3),
                JobTitleCount::new("Data Scientist", 1),
            ]
        );
    }

    #[test]
    fn test_count_job_titles_absent_year() {
        assert!(count_job_titles(&scenario(), 1999).is_empty());
        assert!(count_job_titles(&[], 2021).is_empty());
    }
}
