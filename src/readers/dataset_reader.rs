use crate::error::{DashboardError, Result};
use crate::models::{Dataset, TemperatureRecord};
use crate::utils::constants::{COLUMN_CITY, COLUMN_DATE, COLUMN_FAHRENHEIT};
use crate::utils::dates::parse_date;
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::time::Instant;
use validator::Validate;

const REQUIRED_COLUMNS: [&str; 3] = [COLUMN_CITY, COLUMN_DATE, COLUMN_FAHRENHEIT];

/// One CSV row before type conversion; extra columns are ignored
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "AvgTemperatureFahrenheit")]
    fahrenheit: String,
}

pub struct DatasetReader;

impl DatasetReader {
    pub fn new() -> Self {
        Self
    }

    /// Read the full dataset from a CSV file
    pub fn read_dataset(&self, path: &Path) -> Result<Dataset> {
        if !path.exists() {
            return Err(DashboardError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let started = Instant::now();
        let file = File::open(path)?;
        let dataset = self.read_from(BufReader::new(file))?;

        tracing::info!(
            path = %path.display(),
            records = dataset.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Loaded temperature dataset"
        );

        Ok(dataset)
    }

    /// Read a dataset from any CSV source; every row must parse
    pub fn read_from<R: Read>(&self, source: R) -> Result<Dataset> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(source);

        let headers = reader.headers()?.clone();
        Self::check_columns(&headers)?;

        let mut records = Vec::new();
        for row_result in reader.records() {
            let row = row_result?;
            let line = row.position().map(|p| p.line()).unwrap_or(0);
            let raw: RawRow = row.deserialize(Some(&headers))?;
            records.push(self.parse_row(raw, line)?);
        }

        tracing::debug!("Parsed {} rows", records.len());
        Ok(Dataset::new(records))
    }

    fn check_columns(headers: &StringRecord) -> Result<()> {
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DashboardError::MissingColumn(column.to_string()));
            }
        }
        Ok(())
    }

    /// Convert a raw row into a typed record
    fn parse_row(&self, raw: RawRow, line: u64) -> Result<TemperatureRecord> {
        let date = parse_date(&raw.date).map_err(|_| DashboardError::Parse {
            line,
            column: COLUMN_DATE.to_string(),
            value: raw.date.clone(),
        })?;

        let fahrenheit = raw
            .fahrenheit
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| DashboardError::Parse {
                line,
                column: COLUMN_FAHRENHEIT.to_string(),
                value: raw.fahrenheit.clone(),
            })?;

        let record = TemperatureRecord::new(raw.city, date, fahrenheit);
        record.validate()?;

        Ok(record)
    }
}

impl Default for DatasetReader {
    fn default() -> Self {
        Self::new()
    }
}
