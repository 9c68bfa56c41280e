use crate::structs::{Report, TemperatureUnit};

/// Converts a Celsius temperature to Fahrenheit (°F = °C × 9/5 + 32).
///
/// Rounds to the nearest integer with `f64::round`, i.e. ties away from
/// zero.
pub fn celsius_to_fahrenheit(c: i32) -> i32 {
    (c as f64 * 9.0 / 5.0 + 32.0).round() as i32
}

/// Converts a Fahrenheit temperature to Celsius (°C = (°F − 32) × 5/9).
///
/// Rounds to the nearest integer with `f64::round`, i.e. ties away from
/// zero. The subtraction happens in `f64` so `i32::MIN` input cannot
/// overflow.
pub fn fahrenheit_to_celsius(f: i32) -> i32 {
    ((f as f64 - 32.0) * 5.0 / 9.0).round() as i32
}

/// Produces a copy of `report` expressed in `target`.
///
/// A report already in the target unit comes back as an identity clone.
pub fn convert_unit(report: &Report, target: TemperatureUnit) -> Report {
    if report.unit == target {
        return report.clone();
    }
    let temperature = match target {
        TemperatureUnit::Fahrenheit => celsius_to_fahrenheit(report.temperature),
        TemperatureUnit::Celsius => fahrenheit_to_celsius(report.temperature),
    };
    Report {
        temperature,
        unit: target,
        ..report.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(temperature: i32, unit: TemperatureUnit) -> Report {
        Report {
            date: "2024-01-01".to_string(),
            location: "Montreal".to_string(),
            temperature,
            condition: "Snow".to_string(),
            unit,
        }
    }

    #[test]
    fn known_conversion_points() {
        assert_eq!(celsius_to_fahrenheit(0), 32);
        assert_eq!(celsius_to_fahrenheit(100), 212);
        assert_eq!(celsius_to_fahrenheit(-40), -40);
        assert_eq!(fahrenheit_to_celsius(32), 0);
        assert_eq!(fahrenheit_to_celsius(212), 100);
        assert_eq!(fahrenheit_to_celsius(-40), -40);
    }

    #[test]
    fn extreme_inputs_do_not_panic() {
        // The parser accepts any i32, so the converters must too. The
        // float cast saturates where the true result leaves i32 range.
        assert_eq!(fahrenheit_to_celsius(i32::MIN), -1_193_046_489);
        assert_eq!(fahrenheit_to_celsius(i32::MAX), 1_193_046_453);
        assert_eq!(celsius_to_fahrenheit(i32::MIN), i32::MIN);
        assert_eq!(celsius_to_fahrenheit(i32::MAX), i32::MAX);
    }

    #[test]
    fn round_trip_within_one_degree() {
        for c in -100..=70 {
            let back = fahrenheit_to_celsius(celsius_to_fahrenheit(c));
            assert!((back - c).abs() <= 1, "{} round-tripped to {}", c, back);
        }
    }

    #[test]
    fn convert_unit_is_identity_for_same_unit() {
        let r = report(-5, TemperatureUnit::Celsius);
        assert_eq!(convert_unit(&r, TemperatureUnit::Celsius), r);
    }

    #[test]
    fn convert_unit_swaps_tag_and_temperature() {
        let r = report(10, TemperatureUnit::Celsius);
        let converted = convert_unit(&r, TemperatureUnit::Fahrenheit);
        assert_eq!(converted.temperature, 50);
        assert_eq!(converted.unit, TemperatureUnit::Fahrenheit);
        assert_eq!(converted.location, r.location);
        // source is untouched
        assert_eq!(r.temperature, 10);
        assert_eq!(r.unit, TemperatureUnit::Celsius);
    }
}
