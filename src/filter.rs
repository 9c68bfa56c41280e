use crate::structs::Report;

/// Outcome of a filter pass.
///
/// `NoData` signals that there was nothing to filter in the first place;
/// `Filtered` carries the matching subsequence, which may legitimately be
/// empty.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterResult {
    NoData,
    Filtered(Vec<Report>),
}

/// Selects reports whose condition equals `condition` exactly
/// (case-sensitive), preserving original relative order.
pub fn by_condition(reports: &[Report], condition: &str) -> FilterResult {
    filter(reports, |r| r.condition == condition)
}

/// Selects reports whose temperature lies in `min..=max` (both ends
/// inclusive).
///
/// The comparison uses each report's raw stored temperature in whatever
/// unit it currently holds; the caller is responsible for telling the user
/// which unit that implies.
pub fn by_temperature_range(reports: &[Report], min: i32, max: i32) -> FilterResult {
    filter(reports, |r| min <= r.temperature && r.temperature <= max)
}

fn filter<P: Fn(&Report) -> bool>(reports: &[Report], predicate: P) -> FilterResult {
    if reports.is_empty() {
        return FilterResult::NoData;
    }
    FilterResult::Filtered(reports.iter().filter(|r| predicate(r)).cloned().collect())
}
