use chrono::NaiveDate;
use serde::Serialize;
use validator::Validate;

/// Convert a Fahrenheit reading to Celsius
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct TemperatureRecord {
    #[validate(length(min = 1))]
    pub city: String,

    pub date: NaiveDate,

    pub avg_temperature_fahrenheit: f64,

    /// Derived column, filled in by `processors::derive_celsius`
    avg_temperature_celsius: Option<f64>,
}

impl TemperatureRecord {
    pub fn new(city: String, date: NaiveDate, avg_temperature_fahrenheit: f64) -> Self {
        Self {
            city,
            date,
            avg_temperature_fahrenheit,
            avg_temperature_celsius: None,
        }
    }

    /// Celsius value of this record.
    ///
    /// Falls back to converting the Fahrenheit reading when the derived
    /// column has not been added yet, so the value always satisfies
    /// `(F - 32) * 5 / 9`.
    pub fn celsius(&self) -> f64 {
        self.avg_temperature_celsius
            .unwrap_or_else(|| fahrenheit_to_celsius(self.avg_temperature_fahrenheit))
    }

    /// Copy of this record with the Celsius column computed from Fahrenheit
    pub fn with_derived_celsius(&self) -> Self {
        Self {
            avg_temperature_celsius: Some(fahrenheit_to_celsius(self.avg_temperature_fahrenheit)),
            ..self.clone()
        }
    }

    /// The derived column, `None` until `derive_celsius` has run
    pub fn derived_celsius(&self) -> Option<f64> {
        self.avg_temperature_celsius
    }

    pub fn is_derived(&self) -> bool {
        self.avg_temperature_celsius.is_some()
    }

    pub fn is_within(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.date && self.date <= end
    }
}

/// All temperature records of a data file, in file order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    records: Vec<TemperatureRecord>,
}

impl Dataset {
    pub fn new(records: Vec<TemperatureRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[TemperatureRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TemperatureRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True once the Celsius column has been derived for every record
    pub fn has_celsius(&self) -> bool {
        !self.records.is_empty() && self.records.iter().all(TemperatureRecord::is_derived)
    }
}

impl FromIterator<TemperatureRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = TemperatureRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a TemperatureRecord;
    type IntoIter = std::slice::Iter<'a, TemperatureRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fahrenheit_to_celsius() {
        assert_eq!(fahrenheit_to_celsius(32.0), 0.0);
        assert_eq!(fahrenheit_to_celsius(50.0), 10.0);
        assert_eq!(fahrenheit_to_celsius(86.0), 30.0);
        assert_eq!(fahrenheit_to_celsius(-40.0), -40.0);
    }

    #[test]
    fn test_record_validation() {
        let date = NaiveDate::from_ymd_opt(2009, 1, 1).unwrap();

        let valid = TemperatureRecord::new("Dakar".to_string(), date, 86.0);
        assert!(valid.validate().is_ok());

        let invalid = TemperatureRecord::new(String::new(), date, 86.0);
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_celsius_without_derived_column() {
        let date = NaiveDate::from_ymd_opt(2009, 1, 1).unwrap();
        let record = TemperatureRecord::new("Buenos Aires".to_string(), date, 50.0);

        assert!(!record.is_derived());
        assert_eq!(record.derived_celsius(), None);
        assert_eq!(record.celsius(), 10.0);
    }

    #[test]
    fn test_derived_celsius_follows_fahrenheit() {
        let date = NaiveDate::from_ymd_opt(2009, 1, 1).unwrap();
        let record = TemperatureRecord::new("Dakar".to_string(), date, 86.0).with_derived_celsius();

        assert!(record.is_derived());
        assert_eq!(record.derived_celsius(), Some(30.0));
        assert_eq!(record.celsius(), 30.0);
    }

    #[test]
    fn test_is_within_is_inclusive() {
        let day = |d| NaiveDate::from_ymd_opt(2009, 1, d).unwrap();
        let record = TemperatureRecord::new("Dakar".to_string(), day(5), 80.0);

        assert!(record.is_within(day(5), day(5)));
        assert!(record.is_within(day(1), day(5)));
        assert!(record.is_within(day(5), day(9)));
        assert!(!record.is_within(day(6), day(9)));
        assert!(!record.is_within(day(9), day(1)));
    }
}
