pub mod selection;
pub mod summary;
pub mod temperature;

pub use selection::FilterSelection;
pub use summary::{SummaryStats, TemperatureExtreme};
pub use temperature::{fahrenheit_to_celsius, Dataset, TemperatureRecord};
