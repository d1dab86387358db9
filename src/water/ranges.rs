//! Plausibility bounds for core readings.
//!
//! Advisory only. Results are logged and reported but never change the
//! analysis.

use std::ops::RangeInclusive;

use super::models::{ParsedParameterValues, Parameter};

const PH_BOUNDS: RangeInclusive<f64> = 7.0..=9.0;
const SALINITY_BOUNDS: RangeInclusive<f64> = 1.015..=1.030;
const TEMPERATURE_BOUNDS: RangeInclusive<f64> = 65.0..=90.0;

fn out_of_bounds(value: f64, bounds: &RangeInclusive<f64>) -> bool {
    // NaN is reported by the analyzers, not here
    !value.is_nan() && !bounds.contains(&value)
}

/// Collect warnings for readings outside real-world bounds.
pub fn check_ranges(parsed: &ParsedParameterValues) -> Vec<String> {
    let checks = [
        (Parameter::Ph, parsed.ph, PH_BOUNDS),
        (Parameter::Salinity, parsed.salinity, SALINITY_BOUNDS),
        (Parameter::Temperature, parsed.temperature, TEMPERATURE_BOUNDS),
    ];

    let mut warnings = Vec::new();
    for (parameter, value, bounds) in checks {
        if out_of_bounds(value, &bounds) {
            let warning = format!(
                "{} value {} is outside the expected range ({}-{})",
                parameter.label(),
                value,
                bounds.start(),
                bounds.end()
            );
            tracing::warn!(parameter = %parameter, value, "{}", warning);
            warnings.push(warning);
        }
    }
    warnings
}
