//! Chart Presenter
//!
//! Turns the yearly summaries into a single line series: one point per year,
//! x = year, y = number of jobs. The input is always re-sorted, callers may
//! pass summaries in any order.

use serde::Serialize;

use crate::dataset::YearSummary;

/// Legend label of the series
pub const SERIES_LABEL: &str = "Number of Jobs";

/// Line colour
pub const BORDER_COLOR: &str = "#2f4b7c";

/// Point/area colour
pub const FILL_COLOR: &str = "#ffa600";

const POINT_GLYPH: char = '●';
const LINE_GLYPH: char = '·';

/// One plotted point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub year: i32,
    pub jobs: u64,
}

/// Number of jobs per year, ascending by year
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimeSeries {
    points: Vec<ChartPoint>,
}

impl TimeSeries {
    /// Build the series. Years are sorted ascending and deduplicated, the
    /// first summary of a repeated year wins.
    pub fn from_summaries(summaries: &[YearSummary]) -> Self {
        let mut points: Vec<ChartPoint> = summaries
            .iter()
            .map(|s| ChartPoint {
                year: s.year,
                jobs: s.number_of_jobs,
            })
            .collect();

        points.sort_by_key(|p| p.year);
        points.dedup_by_key(|p| p.year);

        Self { points }
    }

    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    /// x-axis labels
    pub fn labels(&self) -> Vec<i32> {
        self.points.iter().map(|p| p.year).collect()
    }

    /// y values
    pub fn values(&self) -> Vec<u64> {
        self.points.iter().map(|p| p.jobs).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Chart title spanning the plotted years
    pub fn title(&self) -> String {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if first.year != last.year => {
                format!("{} from {} to {}", SERIES_LABEL, first.year, last.year)
            }
            (Some(only), _) => format!("{} in {}", SERIES_LABEL, only.year),
            _ => SERIES_LABEL.to_string(),
        }
    }

    /// Smallest and largest y value
    pub fn value_range(&self) -> Option<(u64, u64)> {
        let min = self.points.iter().map(|p| p.jobs).min()?;
        let max = self.points.iter().map(|p| p.jobs).max()?;
        Some((min, max))
    }

    /// Render the series as a text plot `width` columns wide and `height`
    /// rows tall (axes and labels not included).
    pub fn render_ascii(&self, width: usize, height: usize) -> String {
        let width = width.max(2);
        let height = height.max(2);

        let mut out = String::new();
        out.push_str(&self.title());
        out.push('\n');

        let (min, max) = match self.value_range() {
            Some(range) => range,
            None => {
                out.push_str("No data\n");
                return out;
            }
        };

        let n = self.points.len();
        let column = |i: usize| if n == 1 { 0 } else { i * (width - 1) / (n - 1) };
        let level = |jobs: u64| -> f64 {
            if max == min {
                (height - 1) as f64 / 2.0
            } else {
                (jobs - min) as f64 / (max - min) as f64 * (height - 1) as f64
            }
        };
        let row = |lvl: f64| height - 1 - (lvl.round() as usize).min(height - 1);

        let mut grid = vec![vec![' '; width]; height];

        for (i, pair) in self.points.windows(2).enumerate() {
            let (x0, x1) = (column(i), column(i + 1));
            let (y0, y1) = (level(pair[0].jobs), level(pair[1].jobs));
            for x in x0..=x1 {
                let t = if x1 == x0 {
                    0.0
                } else {
                    (x - x0) as f64 / (x1 - x0) as f64
                };
                grid[row(y0 + t * (y1 - y0))][x] = LINE_GLYPH;
            }
        }

        for (i, point) in self.points.iter().enumerate() {
            grid[row(level(point.jobs))][column(i)] = POINT_GLYPH;
        }

        let max_label = max.to_string();
        let min_label = min.to_string();
        let label_width = max_label.len().max(min_label.len());

        for (r, cells) in grid.iter().enumerate() {
            let label = if r == 0 {
                max_label.as_str()
            } else if r == height - 1 {
                min_label.as_str()
            } else {
                ""
            };
            let line: String = cells.iter().collect();
            out.push_str(&format!("{:>w$} │{}\n", label, line.trim_end(), w = label_width));
        }

        out.push_str(&format!("{:>w$} └{}\n", "", "─".repeat(width), w = label_width));

        // Year labels, skipped where they would overlap the previous one
        let mut axis = vec![' '; width + 4];
        let mut next_free = 0;
        for (i, point) in self.points.iter().enumerate() {
            let text = point.year.to_string();
            let start = column(i);
            if start < next_free || start + text.len() > axis.len() {
                continue;
            }
            for (offset, ch) in text.chars().enumerate() {
                axis[start + offset] = ch;
            }
            next_free = start + text.len() + 1;
        }
        let axis: String = axis.into_iter().collect();
        out.push_str(&format!("{:>w$}  {}\n", "", axis.trim_end(), w = label_width));

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(year: i32, jobs: u64) -> YearSummary {
        YearSummary {
            year,
            number_of_jobs: jobs,
            average_salary: 0.0,
        }
    }

    #[test]
    fn test_series_is_sorted_by_year() {
        let series = TimeSeries::from_summaries(&[
            summary(2023, 30),
            summary(2020, 5),
            summary(2022, 20),
            summary(2021, 10),
        ]);

        assert_eq!(series.labels(), vec![2020, 2021, 2022, 2023]);
        assert_eq!(series.values(), vec![5, 10, 20, 30]);
    }

    #[test]
    fn test_series_deduplicates_years() {
        let series = TimeSeries::from_summaries(&[
            summary(2022, 7),
            summary(2021, 1),
            summary(2022, 99),
        ]);

        assert_eq!(series.labels(), vec![2021, 2022]);
        assert_eq!(series.values(), vec![1, 7]);
    }

    #[test]
    fn test_title() {
        assert_eq!(TimeSeries::default().title(), "Number of Jobs");
        assert_eq!(
            TimeSeries::from_summaries(&[summary(2024, 1)]).title(),
            "Number of Jobs in 2024"
        );
        assert_eq!(
            TimeSeries::from_summaries(&[summary(2024, 1), summary(2020, 1)]).title(),
            "Number of Jobs from 2020 to 2024"
        );
    }

    #[test]
    fn test_render_ascii() {
        let series = TimeSeries::from_summaries(&[
            summary(2020, 75),
            summary(2021, 230),
            summary(2022, 1664),
            summary(2023, 8523),
            summary(2024, 6000),
        ]);

        let plot = series.render_ascii(40, 8);

        assert!(plot.starts_with("Number of Jobs from 2020 to 2024\n"));
        assert_eq!(plot.matches(POINT_GLYPH).count(), 5);
        assert!(plot.contains("8523"));
        assert!(plot.contains("2020"));
        assert!(plot.contains("2024"));
    }

    #[test]
    fn test_render_ascii_flat_and_empty() {
        let flat = TimeSeries::from_summaries(&[summary(2020, 3), summary(2021, 3)]);
        assert_eq!(flat.render_ascii(10, 4).matches(POINT_GLYPH).count(), 2);

        let empty = TimeSeries::default().render_ascii(10, 4);
        assert!(empty.contains("No data"));
    }
}
