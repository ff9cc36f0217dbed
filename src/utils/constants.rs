/// CSV column names
pub const COLUMN_CITY: &str = "City";
pub const COLUMN_DATE: &str = "Date";
pub const COLUMN_FAHRENHEIT: &str = "AvgTemperatureFahrenheit";

/// File names
pub const DEFAULT_DATA_PATH: &str = "data/cities_temperatures.csv";
pub const DEFAULT_CHART_OUTPUT: &str = "output/temperatures.svg";
pub const DEFAULT_CONFIG_FILE: &str = "dashboard.toml";

/// Environment variable prefix for configuration overrides (DASHBOARD_DATA_PATH, ...)
pub const ENV_PREFIX: &str = "DASHBOARD";

/// Selection defaults
pub const MAX_SELECTED_CITIES: usize = 4;
pub const DEFAULT_CITIES: [&str; 2] = ["Buenos Aires", "Dakar"];
pub const DEFAULT_START_DATE: &str = "2009-01-01";
pub const DEFAULT_END_DATE: &str = "2018-12-31";

/// Chart defaults
pub const DEFAULT_CHART_WIDTH: u32 = 1500;
pub const DEFAULT_CHART_HEIGHT: u32 = 500;
pub const CHART_X_LABEL: &str = "Date";
pub const CHART_Y_LABEL: &str = "Average Temperature in Celsius";

/// Sidebar text shown on every page
pub const SIDEBAR_DESCRIPTION: &str = "Interactive project to load a dataset with information about the \
daily temperatures of 10 cities around the world, extract some insights and display them on a chart.";
pub const SIDEBAR_SOURCE: &str = "Data extracted from: https://www.kaggle.com/datasets/sudalairajkumar/\
daily-temperature-of-major-cities (with some cleaning and modifications).";
