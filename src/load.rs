use crate::error::{Result, ViewerError};
use crate::structs::{Report, TemperatureUnit};
use csv::{ReaderBuilder, StringRecord};
use log::{debug, warn};
use serde::Deserialize;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Raw shape of one input row: `date,location,temperature,condition`.
///
/// The temperature is kept as a string here so that a non-integer value can
/// be reported and skipped per line instead of failing the whole read.
#[derive(Debug, Deserialize)]
struct RawRow(String, String, String, String);

/// Loads weather reports from a CSV file.
///
/// The file is plain text, one record per line, four comma-separated fields
/// `date,location,temperature,condition`, no header row. Fields are taken
/// verbatim (no quoting, no whitespace trimming) and the unit defaults to
/// Celsius.
///
/// # Arguments
///
/// * `path` - Path to the input file
///
/// # Returns
///
/// Returns `(reports, skipped)` where `skipped` counts malformed lines that
/// were dropped. A missing file is not an error: it yields an empty
/// collection so the viewer starts with no data.
///
/// # Errors
///
/// Returns `ViewerError` only for I/O failures other than a missing file.
pub fn load_reports(path: &Path) -> Result<(Vec<Report>, usize)> {
    debug!("Reading report file: {}", path.display());
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("Report file not found: {}", path.display());
            return Ok((Vec::new(), 0));
        }
        Err(e) => return Err(e.into()),
    };
    read_reports(file)
}

/// Parses weather reports from any byte source.
///
/// Malformed lines (wrong field count or non-integer temperature) are
/// skipped with a warning rather than aborting the load; the number of
/// skipped lines is returned alongside the parsed reports.
pub fn read_reports<R: Read>(reader: R) -> Result<(Vec<Report>, usize)> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::None)
        .from_reader(reader);

    let mut reports = Vec::new();
    let mut skipped = 0;
    for (idx, result) in rdr.records().enumerate() {
        let record = result?;
        match parse_record(&record, idx as u64 + 1) {
            Ok(report) => reports.push(report),
            Err(e) => {
                warn!("Skipping {}", e);
                skipped += 1;
            }
        }
    }

    debug!("Parsed {} reports ({} lines skipped)", reports.len(), skipped);
    Ok((reports, skipped))
}

/// Converts one raw record into a `Report`.
///
/// Fails with a `Parse` error when the record does not have exactly four
/// fields or the temperature field is not an integer.
fn parse_record(record: &StringRecord, line: u64) -> Result<Report> {
    if record.len() != 4 {
        return Err(ViewerError::Parse {
            line,
            message: format!("expected 4 fields, found {}", record.len()),
        });
    }
    let RawRow(date, location, temperature, condition) =
        record.deserialize(None).map_err(|e| ViewerError::Parse {
            line,
            message: e.to_string(),
        })?;
    let temperature = temperature.parse::<i32>().map_err(|e| ViewerError::Parse {
        line,
        message: format!("invalid temperature '{}': {}", temperature, e),
    })?;
    Ok(Report {
        date,
        location,
        temperature,
        condition,
        unit: TemperatureUnit::Celsius,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_well_formed_line() {
        let (reports, skipped) = read_reports("2024-01-01,Montreal,-5,Snow\n".as_bytes()).unwrap();
        assert_eq!(skipped, 0);
        assert_eq!(
            reports,
            vec![Report {
                date: "2024-01-01".to_string(),
                location: "Montreal".to_string(),
                temperature: -5,
                condition: "Snow".to_string(),
                unit: TemperatureUnit::Celsius,
            }]
        );
    }

    #[test]
    fn fields_are_not_trimmed() {
        let (reports, _) = read_reports("2024-01-01, Montreal ,7,Sunny\n".as_bytes()).unwrap();
        assert_eq!(reports[0].location, " Montreal ");
    }

    #[test]
    fn skips_non_integer_temperature() {
        let input = "2024-01-01,Montreal,-5,Snow\n2024-01-02,Toronto,cold,Snow\n";
        let (reports, skipped) = read_reports(input.as_bytes()).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(skipped, 1);
        assert_eq!(reports[0].location, "Montreal");
    }

    #[test]
    fn skips_wrong_field_count() {
        let input =
            "2024-01-01,Montreal,-5\n2024-01-02,Toronto,3,Rain,extra\n2024-01-03,Quebec,0,Cloudy\n";
        let (reports, skipped) = read_reports(input.as_bytes()).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(skipped, 2);
        assert_eq!(reports[0].location, "Quebec");
    }

    #[test]
    fn missing_file_yields_empty_collection() {
        let (reports, skipped) = load_reports(Path::new("definitely/not/a/real/file.csv")).unwrap();
        assert!(reports.is_empty());
        assert_eq!(skipped, 0);
    }
}
