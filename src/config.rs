//! Layered dashboard configuration.
//!
//! Values are resolved from built-in defaults, then an optional TOML file
//! (`dashboard.toml` in the working directory, or the file given with
//! `--config`), then `DASHBOARD_*` environment variables. Command-line flags
//! are applied on top by the CLI.
use crate::error::Result;
use crate::utils::constants::{
    DEFAULT_CHART_HEIGHT, DEFAULT_CHART_OUTPUT, DEFAULT_CHART_WIDTH, DEFAULT_CITIES,
    DEFAULT_CONFIG_FILE, DEFAULT_DATA_PATH, DEFAULT_END_DATE, DEFAULT_START_DATE, ENV_PREFIX,
};
use crate::utils::dates::parse_date;
use chrono::NaiveDate;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// CSV file with the daily temperatures
    pub data_path: PathBuf,

    /// Where the comparison chart is written
    pub chart_output: PathBuf,

    pub chart_width: u32,
    pub chart_height: u32,

    /// Cities selected before any interaction
    pub default_cities: Vec<String>,

    pub default_start: NaiveDate,
    pub default_end: NaiveDate,
}

impl DashboardConfig {
    /// Resolve configuration; `config_file` must exist when given
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("data_path", DEFAULT_DATA_PATH)?
            .set_default("chart_output", DEFAULT_CHART_OUTPUT)?
            .set_default("chart_width", i64::from(DEFAULT_CHART_WIDTH))?
            .set_default("chart_height", i64::from(DEFAULT_CHART_HEIGHT))?
            .set_default("default_cities", DEFAULT_CITIES.to_vec())?
            .set_default("default_start", DEFAULT_START_DATE)?
            .set_default("default_end", DEFAULT_END_DATE)?;

        builder = match config_file {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("default_cities"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn log_config(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  data_path      : {}", self.data_path.display());
        tracing::debug!("  chart_output   : {}", self.chart_output.display());
        tracing::debug!("  chart_size     : {}x{}", self.chart_width, self.chart_height);
        tracing::debug!("  default_cities : {}", self.default_cities.join(", "));
        tracing::debug!("  default_range  : {} to {}", self.default_start, self.default_end);
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            chart_output: PathBuf::from(DEFAULT_CHART_OUTPUT),
            chart_width: DEFAULT_CHART_WIDTH,
            chart_height: DEFAULT_CHART_HEIGHT,
            default_cities: DEFAULT_CITIES.iter().map(|c| c.to_string()).collect(),
            default_start: parse_date(DEFAULT_START_DATE).unwrap_or_default(),
            default_end: parse_date(DEFAULT_END_DATE).unwrap_or_default(),
        }
    }
}
