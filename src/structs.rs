use log::{Log, Metadata, Record as LogRecord};
use std::fmt;

/// Simple logger implementation
pub struct SimpleLogger;

impl Log for SimpleLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &LogRecord) {
        println!("[{}] {}", record.level(), record.args());
    }

    fn flush(&self) {}
}

/// One weather observation record.
///
/// Reports are immutable values: unit conversion produces a new `Report`
/// rather than mutating in place. The temperature is always an integer in
/// the unit named by `unit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub date: String,
    pub location: String,
    pub temperature: i32,
    pub condition: String,
    pub unit: TemperatureUnit,
}

/// Temperature unit tag carried by every report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Degree symbol used in table and statistics output.
    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemperatureUnit::Celsius => write!(f, "Celsius"),
            TemperatureUnit::Fahrenheit => write!(f, "Fahrenheit"),
        }
    }
}
