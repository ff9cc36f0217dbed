use crate::error::{DashboardError, Result};
use crate::models::{Dataset, SummaryStats, TemperatureExtreme, TemperatureRecord};
use std::collections::HashSet;

/// Computes the headline figures shown in the summary section
pub struct SummaryExtractor;

impl SummaryExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, dataset: &Dataset) -> Result<SummaryStats> {
        let records = dataset.records();
        let first = records.first().ok_or(DashboardError::EmptyDataset)?;

        let mut seen = HashSet::new();
        let mut unique_cities = Vec::new();
        let mut min_date = first.date;
        let mut max_date = first.date;
        let mut min_row = 0;
        let mut max_row = 0;
        let mut min_temp = first.celsius();
        let mut max_temp = first.celsius();

        for (row, record) in records.iter().enumerate() {
            if seen.insert(record.city.as_str()) {
                unique_cities.push(record.city.clone());
            }

            if record.date < min_date {
                min_date = record.date;
            }
            if record.date > max_date {
                max_date = record.date;
            }

            // Strict comparisons keep the earliest row on ties
            let celsius = record.celsius();
            if celsius < min_temp {
                min_temp = celsius;
                min_row = row;
            }
            if celsius > max_temp {
                max_temp = celsius;
                max_row = row;
            }
        }

        Ok(SummaryStats {
            total_records: records.len(),
            unique_cities,
            min_date,
            max_date,
            min_temp: Self::extreme(records, min_row),
            max_temp: Self::extreme(records, max_row),
        })
    }

    fn extreme(records: &[TemperatureRecord], row: usize) -> TemperatureExtreme {
        let record = &records[row];
        TemperatureExtreme {
            value: record.celsius(),
            city: record.city.clone(),
            date: record.date,
            row,
        }
    }
}

impl Default for SummaryExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorthand for `SummaryExtractor::new().extract(dataset)`
pub fn extract_summary(dataset: &Dataset) -> Result<SummaryStats> {
    SummaryExtractor::new().extract(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::derive_celsius;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn record(city: &str, day: u32, fahrenheit: f64) -> TemperatureRecord {
        TemperatureRecord::new(
            city.to_string(),
            NaiveDate::from_ymd_opt(2010, 3, day).unwrap(),
            fahrenheit,
        )
    }

    #[test]
    fn test_unique_cities_in_first_seen_order() {
        let dataset = Dataset::new(vec![
            record("Lima", 1, 60.0),
            record("Dakar", 1, 80.0),
            record("Lima", 2, 61.0),
            record("Abidjan", 1, 82.0),
            record("Dakar", 2, 79.0),
        ]);

        let stats = extract_summary(&derive_celsius(&dataset)).unwrap();
        assert_eq!(stats.unique_cities, vec!["Lima", "Dakar", "Abidjan"]);
        assert_eq!(stats.total_records, 5);
    }

    #[test]
    fn test_date_bounds_and_extremes() {
        let dataset = derive_celsius(&Dataset::new(vec![
            record("Lima", 5, 60.0),
            record("Moscow", 2, 14.0),
            record("Dakar", 9, 95.0),
            record("Lima", 3, 62.0),
        ]));

        let stats = extract_summary(&dataset).unwrap();

        assert_eq!(stats.min_date, NaiveDate::from_ymd_opt(2010, 3, 2).unwrap());
        assert_eq!(stats.max_date, NaiveDate::from_ymd_opt(2010, 3, 9).unwrap());
        assert_eq!(stats.min_temp.city, "Moscow");
        assert_eq!(stats.min_temp.value, -10.0);
        assert_eq!(stats.max_temp.city, "Dakar");
        assert_eq!(stats.max_temp.value, 35.0);

        for r in &dataset {
            assert!(stats.min_temp.value <= r.celsius());
            assert!(r.celsius() <= stats.max_temp.value);
        }
    }

    #[test]
    fn test_ties_go_to_first_row() {
        let dataset = derive_celsius(&Dataset::new(vec![
            record("Lima", 1, 70.0),
            record("Dakar", 1, 50.0),
            record("Abidjan", 1, 90.0),
            record("Madrid", 1, 50.0),
            record("Bangkok", 1, 90.0),
        ]));

        let stats = extract_summary(&dataset).unwrap();

        assert_eq!(stats.min_temp.city, "Dakar");
        assert_eq!(stats.min_temp.row, 1);
        assert_eq!(stats.max_temp.city, "Abidjan");
        assert_eq!(stats.max_temp.row, 2);
    }

    #[test]
    fn test_single_record() {
        let dataset = derive_celsius(&Dataset::new(vec![record("Lima", 1, 32.0)]));
        let stats = extract_summary(&dataset).unwrap();

        assert_eq!(stats.min_temp, stats.max_temp);
        assert_eq!(stats.min_temp.value, 0.0);
        assert_eq!(stats.min_date, stats.max_date);
    }

    #[test]
    fn test_empty_dataset() {
        let result = extract_summary(&Dataset::default());
        assert!(matches!(result, Err(DashboardError::EmptyDataset)));
    }
}
