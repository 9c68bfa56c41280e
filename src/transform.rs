use crate::convert::convert_unit;
use crate::structs::{Report, TemperatureUnit};
use log::debug;

/// Converts every report in the collection to `target`.
///
/// Produces a new collection of the same length and order; reports already
/// in the target unit are carried over unchanged. This is the only
/// operation whose result replaces the menu loop's working collection.
pub fn convert_all(reports: &[Report], target: TemperatureUnit) -> Vec<Report> {
    debug!("Converting {} reports to {}", reports.len(), target);
    reports.iter().map(|r| convert_unit(r, target)).collect()
}
