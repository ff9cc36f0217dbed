use crate::models::{Dataset, FilterSelection};
use chrono::NaiveDate;
use serde::Serialize;

/// Daily Celsius readings for one city, sorted by date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CitySeries {
    pub city: String,
    pub points: Vec<(NaiveDate, f64)>,
}

impl CitySeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Per-city series in selection order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilteredSeries {
    series: Vec<CitySeries>,
}

impl FilteredSeries {
    pub fn get(&self, city: &str) -> Option<&CitySeries> {
        self.series.iter().find(|s| s.city == city)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CitySeries> {
        self.series.iter()
    }

    /// Number of cities, including those with no points in range
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn total_points(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    /// Lowest and highest Celsius value across every series
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .flat_map(|s| s.points.iter().map(|&(_, value)| value))
            .fold(None, |range, value| match range {
                None => Some((value, value)),
                Some((low, high)) => Some((low.min(value), high.max(value))),
            })
    }
}

/// Slice the dataset down to the selected cities and date range.
///
/// Both ends of the range are inclusive. An inverted range is not corrected;
/// every city then gets an empty series.
pub fn filter_series(dataset: &Dataset, selection: &FilterSelection) -> FilteredSeries {
    let series = selection
        .cities()
        .iter()
        .map(|city| {
            let mut points: Vec<(NaiveDate, f64)> = dataset
                .iter()
                .filter(|r| &r.city == city && r.is_within(selection.start_date, selection.end_date))
                .map(|r| (r.date, r.celsius()))
                .collect();
            points.sort_by_key(|&(date, _)| date);

            CitySeries {
                city: city.clone(),
                points,
            }
        })
        .collect();

    FilteredSeries { series }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TemperatureRecord;
    use crate::processors::derive_celsius;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dataset() -> Dataset {
        let rows = [
            ("Buenos Aires", date(2009, 1, 3), 59.0),
            ("Buenos Aires", date(2009, 1, 1), 50.0),
            ("Dakar", date(2009, 1, 1), 86.0),
            ("Buenos Aires", date(2009, 1, 2), 68.0),
            ("Dakar", date(2009, 1, 2), 77.0),
            ("Lima", date(2009, 1, 1), 64.4),
        ];
        derive_celsius(
            &rows
                .iter()
                .map(|(city, d, f)| TemperatureRecord::new(city.to_string(), *d, *f))
                .collect::<Dataset>(),
        )
    }

    fn selection(cities: &[&str], start: NaiveDate, end: NaiveDate) -> FilterSelection {
        let available = vec![
            "Buenos Aires".to_string(),
            "Dakar".to_string(),
            "Lima".to_string(),
        ];
        let mut selection = FilterSelection::new(start, end);
        for city in cities {
            selection.select_city(city, &available).unwrap();
        }
        selection
    }

    #[test]
    fn test_single_day_scenario() {
        let day = date(2009, 1, 1);
        let filtered = filter_series(&dataset(), &selection(&["Buenos Aires", "Dakar"], day, day));

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered.get("Buenos Aires").unwrap().points, vec![(day, 10.0)]);
        assert_eq!(filtered.get("Dakar").unwrap().points, vec![(day, 30.0)]);
        assert!(filtered.get("Lima").is_none());
    }

    #[test]
    fn test_series_sorted_by_date() {
        let filtered = filter_series(
            &dataset(),
            &selection(&["Buenos Aires"], date(2009, 1, 1), date(2009, 1, 31)),
        );

        let dates: Vec<NaiveDate> = filtered
            .get("Buenos Aires")
            .unwrap()
            .points
            .iter()
            .map(|&(d, _)| d)
            .collect();
        assert_eq!(dates, vec![date(2009, 1, 1), date(2009, 1, 2), date(2009, 1, 3)]);
    }

    #[test]
    fn test_selection_order_is_kept() {
        let filtered = filter_series(
            &dataset(),
            &selection(&["Lima", "Dakar", "Buenos Aires"], date(2009, 1, 1), date(2009, 1, 2)),
        );

        let cities: Vec<&str> = filtered.iter().map(|s| s.city.as_str()).collect();
        assert_eq!(cities, vec!["Lima", "Dakar", "Buenos Aires"]);
        assert_eq!(filtered.total_points(), 5);
    }

    #[test]
    fn test_inverted_range_yields_empty_series() {
        let filtered = filter_series(
            &dataset(),
            &selection(&["Buenos Aires", "Dakar"], date(2009, 1, 3), date(2009, 1, 1)),
        );

        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(CitySeries::is_empty));
        assert_eq!(filtered.value_range(), None);
    }

    #[test]
    fn test_no_cities_selected() {
        let filtered = filter_series(&dataset(), &selection(&[], date(2009, 1, 1), date(2009, 1, 3)));
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_value_range() {
        let filtered = filter_series(
            &dataset(),
            &selection(&["Buenos Aires", "Dakar"], date(2009, 1, 1), date(2009, 1, 2)),
        );
        assert_eq!(filtered.value_range(), Some((10.0, 30.0)));
    }
}
