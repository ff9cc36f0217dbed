pub mod constants;
pub mod dates;
pub mod progress;

pub use constants::*;
pub use dates::parse_date;
pub use progress::ProgressReporter;
