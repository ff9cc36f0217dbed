pub mod cache;
pub mod dataset_reader;

pub use cache::{global_cache, load_dataset, DatasetCache, DatasetSource};
pub use dataset_reader::DatasetReader;
