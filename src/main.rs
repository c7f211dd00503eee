//! Salary Dashboard CLI
//!
//! Terminal rendering of the dashboard:
//! - Yearly summary table (sortable) with its chart
//! - Job titles of a selected year (paginated)
//! - Number-of-jobs chart
//! - Default config generation

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use salary_dashboard::config::{generate_default_config, Config, LoadReport};
use salary_dashboard::presenter::{
    format_count, format_usd, job_table_title, JOB_TABLE_COLUMNS, YEAR_TABLE_TITLE,
};
use salary_dashboard::{from_location, Dashboard, DashboardEvent, YearColumn};

#[derive(Parser)]
#[command(name = "salary-dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Yearly salary aggregates with job-title drill-down")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/salary-dashboard/config.toml or ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Dataset location, file path or URL (overrides config)
    #[arg(short, long, global = true)]
    pub source: Option<String>,

    /// Output format (table, json, csv)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the yearly summary table and chart
    Summary {
        /// Sort column (year, jobs, salary)
        #[arg(long)]
        sort: Option<String>,
        /// Sort descending
        #[arg(long)]
        desc: bool,
    },

    /// Show job-title counts for a year
    Jobs {
        /// Year to drill into
        year: i32,
        /// Page number (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,
        /// Rows per page (default: from config)
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Draw the number-of-jobs chart
    Chart {
        /// Plot width in columns
        #[arg(long, default_value = "60")]
        width: usize,
        /// Plot height in rows
        #[arg(long, default_value = "12")]
        height: usize,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, report) = match &cli.config {
        Some(path) => (Config::load_with_env(path)?, LoadReport::from_file(path)),
        None => Config::load_default(),
    };
    if let Some(source) = cli.source {
        config.dataset.source = source;
    }
    config.logging.init();
    report.log();

    let format = OutputFormat::parse(&cli.format)?;

    match cli.command {
        Commands::Config { output } => write_config(output.as_ref())?,

        Commands::Summary { sort, desc } => {
            let mut dashboard = load_dashboard(&config).await?;

            let column = match sort {
                Some(column) => Some(column.parse::<YearColumn>().map_err(anyhow::Error::msg)?),
                None if desc => Some(YearColumn::Year),
                None => None,
            };
            if let Some(column) = column {
                dashboard.dispatch(DashboardEvent::SortChanged(column));
                if desc {
                    dashboard.dispatch(DashboardEvent::SortChanged(column));
                }
            }

            print_summary(&dashboard, format)?;
            if format == OutputFormat::Table && !dashboard.chart().is_empty() {
                println!();
                print!("{}", dashboard.chart().render_ascii(60, 12));
            }
        }

        Commands::Jobs {
            year,
            page,
            page_size,
        } => {
            let mut dashboard = load_dashboard(&config).await?;
            dashboard.dispatch(DashboardEvent::RowActivated(year));
            dashboard.dispatch(DashboardEvent::PageChanged {
                page,
                page_size: page_size.or(Some(config.dashboard.page_size)),
            });

            print_jobs(&dashboard, format)?;
        }

        Commands::Chart { width, height } => {
            let dashboard = load_dashboard(&config).await?;
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(dashboard.chart())?);
                }
                _ => print!("{}", dashboard.chart().render_ascii(width, height)),
            }
        }
    }

    Ok(())
}

/// Fetch the configured dataset once and bring the dashboard to `Ready`
async fn load_dashboard(config: &Config) -> anyhow::Result<Dashboard> {
    let mut dashboard = Dashboard::new(config.dashboard.page_size);
    let source = from_location(&config.dataset.source);
    dashboard.load(source.as_ref()).await;

    if let Some(message) = dashboard.error() {
        bail!("Failed to load salary data from {}: {}", source.describe(), message);
    }
    Ok(dashboard)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    fn parse(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => bail!("Invalid output format: {}. Use: table, json, csv", other),
        }
    }
}

fn write_config(output: Option<&PathBuf>) -> anyhow::Result<()> {
    let config = generate_default_config();

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &config)
                .with_context(|| format!("Failed to write config to {:?}", path))?;
            println!("Config written to {:?}", path);
        }
        None => print!("{}", config),
    }

    Ok(())
}

fn print_summary(dashboard: &Dashboard, format: OutputFormat) -> anyhow::Result<()> {
    let rows = dashboard.summaries();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            writer.write_record(["year", "numberOfJobs", "averageSalary"])?;
            for row in &rows {
                writer.write_record([
                    row.year.to_string(),
                    row.number_of_jobs.to_string(),
                    format!("{:.2}", row.average_salary),
                ])?;
            }
            writer.flush()?;
        }
        OutputFormat::Table => {
            if rows.is_empty() {
                println!("No salary records");
                return Ok(());
            }

            println!("{}", YEAR_TABLE_TITLE);
            println!();

            let headers: Vec<String> = YearColumn::ALL
                .iter()
                .map(|column| match dashboard.sort() {
                    Some(sort) if sort.column == *column => {
                        format!("{} {}", column.title(), sort.direction.indicator())
                    }
                    _ => column.title().to_string(),
                })
                .collect();

            println!("{:<8} | {:<16} | {:>18}", headers[0], headers[1], headers[2]);
            println!("{}", "-".repeat(48));

            for row in &rows {
                println!(
                    "{:<8} | {:<16} | {:>18}",
                    row.year,
                    format_count(row.number_of_jobs),
                    format_usd(row.average_salary)
                );
            }
        }
    }

    Ok(())
}

fn print_jobs(dashboard: &Dashboard, format: OutputFormat) -> anyhow::Result<()> {
    let table = dashboard.job_table();
    let rows = table.page_rows();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(rows)?);
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            writer.write_record(["job_title", "count"])?;
            for row in rows {
                writer.write_record([row.job_title.clone(), row.count.to_string()])?;
            }
            writer.flush()?;
        }
        OutputFormat::Table => {
            let year = match dashboard.selected_year() {
                Some(year) => year,
                None => return Ok(()),
            };

            println!("{}", job_table_title(year));
            println!();

            if rows.is_empty() {
                println!("No job titles recorded in {}", year);
                return Ok(());
            }

            let title_width = rows
                .iter()
                .map(|r| r.job_title.chars().count())
                .max()
                .unwrap_or(0)
                .max(JOB_TABLE_COLUMNS[0].len());

            let mut out = std::io::stdout().lock();
            writeln!(
                out,
                "{:<w$} | {:>6}",
                JOB_TABLE_COLUMNS[0],
                JOB_TABLE_COLUMNS[1],
                w = title_width
            )?;
            writeln!(out, "{}", "-".repeat(title_width + 9))?;
            for row in rows {
                writeln!(out, "{:<w$} | {:>6}", row.job_title, row.count, w = title_width)?;
            }
            writeln!(out)?;
            writeln!(
                out,
                "Page {} of {} ({} job titles)",
                table.current_page(),
                table.page_count(),
                table.total()
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(source: &std::path::Path) -> Config {
        let mut config = Config::default();
        config.dataset.source = source.to_string_lossy().to_string();
        config
    }

    #[tokio::test]
    async fn test_load_dashboard_ready() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("salaries.json");
        std::fs::write(
            &path,
            r#"[{"work_year": 2022, "job_title": "Data Engineer", "salary_in_usd": 120000}]"#,
        )
        .unwrap();

        let dashboard = load_dashboard(&config_for(&path)).await.unwrap();
        assert_eq!(dashboard.summaries().len(), 1);
        assert_eq!(dashboard.summaries()[0].year, 2022);
    }

    #[tokio::test]
    async fn test_load_dashboard_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = load_dashboard(&config_for(&path)).await.unwrap_err();
        assert!(err.to_string().starts_with("Failed to load salary data from"));
    }

    #[test]
    fn test_output_format() {
        assert_eq!(OutputFormat::parse("CSV").unwrap(), OutputFormat::Csv);
        assert!(OutputFormat::parse("xml").is_err());
    }
}
