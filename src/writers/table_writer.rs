use crate::models::Dataset;

/// Renders the raw dataset as a fixed-width text table
pub struct TableWriter;

impl TableWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, dataset: &Dataset) -> String {
        let city_width = dataset
            .iter()
            .map(|r| r.city.chars().count())
            .max()
            .unwrap_or(0)
            .max("City".len());
        let with_celsius = dataset.has_celsius();

        let mut out = format!(
            "{:>6}  {:<city_width$}  {:<10}  {:>8}",
            "#", "City", "Date", "Avg °F"
        );
        if with_celsius {
            out.push_str(&format!("  {:>8}", "Avg °C"));
        }
        out.push('\n');

        for (row, record) in dataset.iter().enumerate() {
            out.push_str(&format!(
                "{:>6}  {:<city_width$}  {:<10}  {:>8.1}",
                row, record.city, record.date, record.avg_temperature_fahrenheit
            ));
            if with_celsius {
                out.push_str(&format!("  {:>8.1}", record.celsius()));
            }
            out.push('\n');
        }

        out.push_str(&format!("{} rows", dataset.len()));
        out
    }
}

impl Default for TableWriter {
    fn default() -> Self {
        Self::new()
    }
}
