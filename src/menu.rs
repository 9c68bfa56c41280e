use crate::error::Result;
use crate::filter::{self, FilterResult};
use crate::stats::{self, Statistics};
use crate::structs::{Report, TemperatureUnit};
use crate::transform;
use log::debug;
use std::io::{BufRead, Error, ErrorKind, Write};

/// Runs the interactive menu loop until the user picks "Save and exit".
///
/// The working collection is owned by the loop and passed back out at the
/// end; the transform option is the only one that replaces it. Input and
/// output are generic so the loop can be driven from tests as easily as
/// from stdin/stdout.
///
/// # Errors
///
/// Returns `ViewerError::Io` if the input source is closed (EOF) or a write
/// fails. Invalid choices and non-integer input are handled in place by
/// re-prompting and never surface as errors.
pub fn run<R: BufRead, W: Write>(
    mut reports: Vec<Report>,
    input: &mut R,
    out: &mut W,
) -> Result<Vec<Report>> {
    loop {
        print_menu(out)?;
        match read_int(input, out, "Enter choice: ")? {
            1 => view(out, &reports)?,
            2 => reports = transform_menu(reports, input, out)?,
            3 => filter_menu(&reports, input, out)?,
            4 => show_statistics(out, &reports)?,
            5 => {
                writeln!(out, "Saving is not implemented; exiting without writing changes.")?;
                debug!("Exiting menu loop with {} reports", reports.len());
                return Ok(reports);
            }
            other => {
                debug!("Rejected menu choice {}", other);
                writeln!(out, "Invalid choice. Please pick a number from 1 to 5.")?;
            }
        }
    }
}

fn print_menu<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Weather Report Viewer ===")?;
    writeln!(out, "1. View reports")?;
    writeln!(out, "2. Convert units")?;
    writeln!(out, "3. Filter reports")?;
    writeln!(out, "4. Show statistics")?;
    writeln!(out, "5. Save and exit")?;
    Ok(())
}

/// Prompts until the user supplies a valid integer.
///
/// Iterative by design so repeated bad input cannot grow the stack. EOF on
/// the input source is surfaced as an error instead of spinning forever.
fn read_int<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<i32> {
    loop {
        let line = read_line(input, out, prompt)?;
        match line.trim().parse::<i32>() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(out, "Invalid input. Please enter a whole number.")?,
        }
    }
}

/// Prompts once and returns the line without its trailing newline.
///
/// No other trimming is done; condition matching is exact.
fn read_line<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<String> {
    write!(out, "{}", prompt)?;
    out.flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(Error::new(ErrorKind::UnexpectedEof, "input closed").into());
    }
    while buf.ends_with('\n') || buf.ends_with('\r') {
        buf.pop();
    }
    Ok(buf)
}

fn view<W: Write>(out: &mut W, reports: &[Report]) -> Result<()> {
    if reports.is_empty() {
        writeln!(out, "No reports loaded.")?;
        return Ok(());
    }
    print_table(out, reports)
}

fn print_table<W: Write>(out: &mut W, reports: &[Report]) -> Result<()> {
    writeln!(
        out,
        "{:<12} {:<16} {:>8}  {}",
        "Date", "Location", "Temp", "Condition"
    )?;
    for report in reports {
        writeln!(
            out,
            "{:<12} {:<16} {:>8}  {}",
            report.date,
            report.location,
            format!("{}{}", report.temperature, report.unit.symbol()),
            report.condition
        )?;
    }
    Ok(())
}

fn transform_menu<R: BufRead, W: Write>(
    reports: Vec<Report>,
    input: &mut R,
    out: &mut W,
) -> Result<Vec<Report>> {
    writeln!(out, "Convert all reports to:")?;
    writeln!(out, "1. Celsius")?;
    writeln!(out, "2. Fahrenheit")?;
    let target = loop {
        match read_int(input, out, "Enter choice: ")? {
            1 => break TemperatureUnit::Celsius,
            2 => break TemperatureUnit::Fahrenheit,
            _ => writeln!(out, "Invalid choice. Please pick 1 or 2.")?,
        }
    };
    let converted = transform::convert_all(&reports, target);
    writeln!(out, "Converted {} reports to {}.", converted.len(), target)?;
    Ok(converted)
}

fn filter_menu<R: BufRead, W: Write>(
    reports: &[Report],
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Filter by:")?;
    writeln!(out, "1. Condition")?;
    writeln!(out, "2. Temperature range")?;
    let result = match read_int(input, out, "Enter choice: ")? {
        1 => {
            let condition = read_line(input, out, "Enter condition: ")?;
            filter::by_condition(reports, &condition)
        }
        2 => {
            // Raw temperatures are compared as stored; tell the user which
            // unit dominates the collection before they type bounds.
            let unit = stats::dominant_unit(reports);
            writeln!(out, "Temperatures are compared as stored (dominant unit: {}).", unit.symbol())?;
            let min = read_int(input, out, "Minimum temperature: ")?;
            let max = read_int(input, out, "Maximum temperature: ")?;
            filter::by_temperature_range(reports, min, max)
        }
        _ => {
            writeln!(out, "Invalid choice.")?;
            return Ok(());
        }
    };
    match result {
        FilterResult::NoData => writeln!(out, "No reports loaded.")?,
        FilterResult::Filtered(matched) if matched.is_empty() => {
            writeln!(out, "No reports matched the filter.")?;
        }
        FilterResult::Filtered(matched) => {
            writeln!(out, "{} matching reports:", matched.len())?;
            print_table(out, &matched)?;
        }
    }
    Ok(())
}

fn show_statistics<W: Write>(out: &mut W, reports: &[Report]) -> Result<()> {
    match stats::compute_statistics(reports) {
        Statistics::Empty => writeln!(out, "No reports loaded.")?,
        Statistics::Populated {
            average,
            hottest,
            coldest,
            conditions,
            condition_count,
            dominant_unit,
        } => {
            writeln!(out, "Reports: {}", reports.len())?;
            writeln!(out, "Average temperature: {:.1}", average)?;
            writeln!(
                out,
                "Hottest: {} {} {}{} ({})",
                hottest.date,
                hottest.location,
                hottest.temperature,
                hottest.unit.symbol(),
                hottest.condition
            )?;
            writeln!(
                out,
                "Coldest: {} {} {}{} ({})",
                coldest.date,
                coldest.location,
                coldest.temperature,
                coldest.unit.symbol(),
                coldest.condition
            )?;
            writeln!(out, "Conditions ({}): {}", condition_count, conditions.join(", "))?;
            writeln!(out, "Dominant unit: {}", dominant_unit)?;
        }
    }
    Ok(())
}
