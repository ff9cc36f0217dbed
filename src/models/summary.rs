use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A global temperature extreme and the record it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureExtreme {
    pub value: f64,
    pub city: String,
    pub date: NaiveDate,
    /// Position of the source record in the dataset
    pub row: usize,
}

impl TemperatureExtreme {
    /// e.g. `-3.4°C (Moscow on 2010-01-26)`
    pub fn describe(&self) -> String {
        format!("{:.1}°C ({} on {})", self.value, self.city, self.date)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_records: usize,
    /// Distinct cities in order of first appearance
    pub unique_cities: Vec<String>,
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
    pub min_temp: TemperatureExtreme,
    pub max_temp: TemperatureExtreme,
}

impl SummaryStats {
    pub fn summary(&self) -> String {
        format!(
            "Cities: {} ({})\n\
            Date Range: {} to {}\n\
            Records: {} total\n\
            Min Temperature: {}\n\
            Max Temperature: {}",
            self.unique_cities.len(),
            self.unique_cities.join(", "),
            self.min_date,
            self.max_date,
            self.total_records,
            self.min_temp.describe(),
            self.max_temp.describe(),
        )
    }
}
