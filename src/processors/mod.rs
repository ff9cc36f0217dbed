pub mod celsius;
pub mod filter;
pub mod summary_extractor;

pub use celsius::derive_celsius;
pub use filter::{filter_series, CitySeries, FilteredSeries};
pub use summary_extractor::{extract_summary, SummaryExtractor};
