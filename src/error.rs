use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Data file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Parse error on line {line}: invalid {column} value '{value}'")]
    Parse {
        line: u64,
        column: String,
        value: String,
    },

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Dataset is empty: summary statistics are undefined")]
    EmptyDataset,

    #[error("At most {max} cities can be selected")]
    TooManyCities { max: usize },

    #[error("Unknown city: {0}")]
    UnknownCity(String),

    #[error("Invalid date: '{0}'")]
    InvalidDate(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Chart rendering error: {0}")]
    Chart(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DashboardError {
    /// Errors raised at the input boundary; the page stays up and shows them.
    pub fn is_input_rejection(&self) -> bool {
        matches!(
            self,
            DashboardError::TooManyCities { .. }
                | DashboardError::UnknownCity(_)
                | DashboardError::InvalidDate(_)
                | DashboardError::InvalidCommand(_)
        )
    }
}
