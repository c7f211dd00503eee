//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::presenter::DEFAULT_PAGE_SIZE;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the salary dataset lives
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    /// File path or http(s) URL of the JSON dataset
    #[serde(default = "default_source")]
    pub source: String,
}

fn default_source() -> String {
    "data/salaries.json".to_string()
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
        }
    }
}

/// Table presentation settings
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Rows per page of the job-title table
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

/// Static API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory with the built frontend (index.html, wasm, js)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8082
}

fn default_static_dir() -> String {
    "dashboard-ui/dist".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Initialise the global tracing subscriber.
    ///
    /// `RUST_LOG` wins over the configured level.
    pub fn init(&self) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "salary_dashboard={},tower_http={}",
                self.level, self.level
            ))
        });

        let registry = tracing_subscriber::registry().with(filter);

        if self.format == "json" {
            registry.with(tracing_subscriber::fmt::layer().json()).init();
        } else {
            registry
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment.
    ///
    /// Nothing is logged here; tracing is usually not set up yet, so call
    /// [`LoadReport::log`] once it is.
    pub fn load_default() -> (Self, LoadReport) {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("salary-dashboard").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// First candidate that exists and parses wins; broken ones are reported
    fn load_first(paths: &[PathBuf]) -> (Self, LoadReport) {
        let mut report = LoadReport::default();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    report.loaded_from = Some(path.clone());
                    return (config, report);
                }
                Err(e) => report.skipped.push(e),
            }
        }

        (Self::from_env(), report)
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from a lookup function keyed by variable name
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Dataset overrides
        if let Some(source) = lookup("SALARY_DASHBOARD_SOURCE") {
            self.dataset.source = source;
        }

        // Dashboard overrides
        if let Some(size) = lookup("SALARY_DASHBOARD_PAGE_SIZE") {
            if let Ok(s) = size.parse() {
                self.dashboard.page_size = s;
            }
        }

        // API overrides
        if let Some(host) = lookup("SALARY_DASHBOARD_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = lookup("SALARY_DASHBOARD_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }
        if let Some(dir) = lookup("SALARY_DASHBOARD_STATIC_DIR") {
            self.api.static_dir = dir;
        }

        // Logging overrides
        if let Some(level) = lookup("SALARY_DASHBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("SALARY_DASHBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Where [`Config::load_default`] found its settings
#[derive(Debug, Default)]
pub struct LoadReport {
    /// File the config came from; `None` means defaults plus environment
    pub loaded_from: Option<PathBuf>,
    /// Config files that exist but could not be loaded
    pub skipped: Vec<ConfigError>,
}

impl LoadReport {
    /// Report for a config file given explicitly
    pub fn from_file(path: &Path) -> Self {
        Self {
            loaded_from: Some(path.to_path_buf()),
            skipped: Vec::new(),
        }
    }

    pub fn log(&self) {
        for error in &self.skipped {
            tracing::warn!("Ignoring config file: {}", error);
        }

        match &self.loaded_from {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Salary Dashboard Configuration
#
# Environment variables override these settings:
# - SALARY_DASHBOARD_SOURCE
# - SALARY_DASHBOARD_PAGE_SIZE
# - SALARY_DASHBOARD_API_HOST
# - SALARY_DASHBOARD_API_PORT
# - SALARY_DASHBOARD_STATIC_DIR
# - SALARY_DASHBOARD_LOG_LEVEL
# - SALARY_DASHBOARD_LOG_FORMAT

[dataset]
# JSON dataset: a file path or an http(s) URL
source = "data/salaries.json"

[dashboard]
# Rows per page of the job-title table
page_size = 10

[api]
# Static server host
host = "0.0.0.0"

# Static server port
port = 8082

# Built frontend served for every non-API path
static_dir = "dashboard-ui/dist"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.dataset.source, "data/salaries.json");
        assert_eq!(config.dashboard.page_size, 10);
        assert_eq!(config.api.port, 8082);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = Config::parse(&generate_default_config()).unwrap();
        let defaults = Config::default();

        assert_eq!(config.dataset.source, defaults.dataset.source);
        assert_eq!(config.dashboard.page_size, defaults.dashboard.page_size);
        assert_eq!(config.api.host, defaults.api.host);
        assert_eq!(config.api.static_dir, defaults.api.static_dir);
        assert_eq!(config.logging.level, defaults.logging.level);
    }

    #[test]
    fn test_partial_config() {
        let config = Config::parse(
            r#"
            [dataset]
            source = "https://example.com/salaries.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.dataset.source, "https://example.com/salaries.json");
        assert_eq!(config.dashboard.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dashboard]\npage_size = 25").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.dashboard.page_size, 25);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dashboard\npage_size = ").unwrap();
        let err = Config::load(file.path()).unwrap_err();
        match err {
            ConfigError::Parse { path, .. } => assert_eq!(path, file.path()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_first_reports_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "[dashboard\npage_size = ").unwrap();
        let good = dir.path().join("good.toml");
        std::fs::write(&good, "[dataset]\nsource = \"/srv/good.json\"").unwrap();
        let missing = dir.path().join("missing.toml");

        let (config, report) = Config::load_first(&[missing, broken.clone(), good.clone()]);

        assert_eq!(config.dataset.source, "/srv/good.json");
        assert_eq!(report.loaded_from, Some(good));
        assert_eq!(report.skipped.len(), 1);
        assert!(matches!(
            &report.skipped[0],
            ConfigError::Parse { path, .. } if *path == broken
        ));
    }

    #[test]
    fn test_load_first_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "not = [toml").unwrap();

        let (config, report) = Config::load_first(&[broken]);

        assert_eq!(config.dashboard.page_size, DEFAULT_PAGE_SIZE);
        assert!(report.loaded_from.is_none());
        assert_eq!(report.skipped.len(), 1);
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("SALARY_DASHBOARD_SOURCE", "/srv/salaries.json"),
            ("SALARY_DASHBOARD_PAGE_SIZE", "50"),
            ("SALARY_DASHBOARD_API_PORT", "not-a-port"),
            ("SALARY_DASHBOARD_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.dataset.source, "/srv/salaries.json");
        assert_eq!(config.dashboard.page_size, 50);
        assert_eq!(config.api.port, 8082);
        assert_eq!(config.logging.format, "json");
    }
}
