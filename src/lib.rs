pub mod convert;
pub mod error;
pub mod filter;
pub mod load;
pub mod menu;
pub mod stats;
pub mod structs;
pub mod transform;

// Re-export public API
pub use convert::{celsius_to_fahrenheit, convert_unit, fahrenheit_to_celsius};
pub use error::{Result, ViewerError};
pub use filter::FilterResult;
pub use load::{load_reports, read_reports};
pub use stats::{Statistics, compute_statistics};
pub use structs::{Report, SimpleLogger, TemperatureUnit};
pub use transform::convert_all;
