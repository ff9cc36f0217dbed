use crate::models::{Dataset, TemperatureRecord};

/// Return a copy of the dataset with the Celsius column filled in.
///
/// Existing Celsius values are overwritten, so running this again on its own
/// output yields the same dataset.
pub fn derive_celsius(dataset: &Dataset) -> Dataset {
    dataset
        .iter()
        .map(TemperatureRecord::with_derived_celsius)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn dataset() -> Dataset {
        let date = NaiveDate::from_ymd_opt(2009, 1, 1).unwrap();
        Dataset::new(vec![
            TemperatureRecord::new("Buenos Aires".to_string(), date, 50.0),
            TemperatureRecord::new("Dakar".to_string(), date, 86.0),
            TemperatureRecord::new("Moscow".to_string(), date, 1.3),
        ])
    }

    #[test]
    fn test_celsius_matches_formula() {
        let derived = derive_celsius(&dataset());

        assert!(derived.has_celsius());
        for record in &derived {
            let expected = (record.avg_temperature_fahrenheit - 32.0) * 5.0 / 9.0;
            let actual = record.derived_celsius().unwrap();
            assert!((actual - expected).abs() < 1e-9);
        }
        assert_eq!(derived.records()[0].derived_celsius(), Some(10.0));
        assert_eq!(derived.records()[1].derived_celsius(), Some(30.0));
    }

    #[test]
    fn test_derive_is_idempotent_and_pure() {
        let original = dataset();
        let once = derive_celsius(&original);
        let twice = derive_celsius(&once);

        assert_eq!(once, twice);
        assert!(!original.has_celsius());
    }

    #[test]
    fn test_derived_values_track_changed_readings() {
        let derived = derive_celsius(&dataset());
        let mut records = derived.records().to_vec();
        records[0].avg_temperature_fahrenheit = 212.0;

        let rederived = derive_celsius(&Dataset::new(records));
        assert_eq!(rederived.records()[0].derived_celsius(), Some(100.0));
    }
}
