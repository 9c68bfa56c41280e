use crate::structs::{Report, TemperatureUnit};

/// Derived aggregate over a report collection.
///
/// Recomputed on demand, never cached; `Empty` distinguishes "no data" from
/// a populated summary.
#[derive(Debug, Clone, PartialEq)]
pub enum Statistics {
    Empty,
    Populated {
        average: f64,
        hottest: Report,
        coldest: Report,
        conditions: Vec<String>,
        condition_count: usize,
        dominant_unit: TemperatureUnit,
    },
}

/// Arithmetic mean of the temperatures; 0.0 for an empty slice.
pub fn average(temperatures: &[i32]) -> f64 {
    if temperatures.is_empty() {
        return 0.0;
    }
    temperatures.iter().map(|&t| f64::from(t)).sum::<f64>() / temperatures.len() as f64
}

/// Finds the hottest and coldest report, in that order.
///
/// Ties go to the first occurrence in iteration order, so the scan is
/// deterministic. Returns `None` only for an empty collection.
pub fn find_extremes(reports: &[Report]) -> Option<(&Report, &Report)> {
    let first = reports.first()?;
    let mut hottest = first;
    let mut coldest = first;
    for report in &reports[1..] {
        if report.temperature > hottest.temperature {
            hottest = report;
        }
        if report.temperature < coldest.temperature {
            coldest = report;
        }
    }
    Some((hottest, coldest))
}

/// Distinct condition strings in ascending lexicographic order.
pub fn unique_conditions(reports: &[Report]) -> Vec<String> {
    let mut conditions: Vec<String> = reports.iter().map(|r| r.condition.clone()).collect();
    conditions.sort();
    conditions.dedup();
    conditions
}

/// The unit appearing most frequently across the collection.
///
/// On a tie the unit of the first report wins; counting the two variants
/// directly avoids any frequency-map iteration-order ambiguity. An empty
/// collection defaults to Celsius.
pub fn dominant_unit(reports: &[Report]) -> TemperatureUnit {
    let Some(first) = reports.first() else {
        return TemperatureUnit::Celsius;
    };
    let celsius = reports
        .iter()
        .filter(|r| r.unit == TemperatureUnit::Celsius)
        .count();
    let fahrenheit = reports.len() - celsius;
    if celsius > fahrenheit {
        TemperatureUnit::Celsius
    } else if fahrenheit > celsius {
        TemperatureUnit::Fahrenheit
    } else {
        first.unit
    }
}

/// Computes the full summary for a report collection.
pub fn compute_statistics(reports: &[Report]) -> Statistics {
    let Some((hottest, coldest)) = find_extremes(reports) else {
        return Statistics::Empty;
    };
    let temperatures: Vec<i32> = reports.iter().map(|r| r.temperature).collect();
    let conditions = unique_conditions(reports);
    let condition_count = conditions.len();
    Statistics::Populated {
        average: average(&temperatures),
        hottest: hottest.clone(),
        coldest: coldest.clone(),
        conditions,
        condition_count,
        dominant_unit: dominant_unit(reports),
    }
}
