//! Text form input to numeric readings.

use super::models::{ParsedParameterValues, WaterParameterValues};

/// Parse a reading, `None` when blank, unreadable or non-finite.
fn parse_reading(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Required readings have no fallback and become NaN.
fn required(raw: &str) -> f64 {
    parse_reading(raw).unwrap_or(f64::NAN)
}

/// Optional readings default to 0.0 ("not measured").
fn optional(raw: &str) -> f64 {
    parse_reading(raw).unwrap_or(0.0)
}

/// Convert raw form values to numbers. Never fails.
pub fn parse_parameters(values: &WaterParameterValues) -> ParsedParameterValues {
    ParsedParameterValues {
        ph: required(&values.ph),
        salinity: required(&values.salinity),
        temperature: required(&values.temperature),
        ammonia: optional(&values.ammonia),
        nitrite: optional(&values.nitrite),
        nitrate: optional(&values.nitrate),
        alkalinity: optional(&values.alkalinity),
        calcium: optional(&values.calcium),
        magnesium: optional(&values.magnesium),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(ph: &str, ammonia: &str) -> WaterParameterValues {
        WaterParameterValues {
            ph: ph.to_string(),
            salinity: "1.025".to_string(),
            temperature: " 78 ".to_string(),
            ammonia: ammonia.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_parses_numbers_and_trims() {
        let parsed = parse_parameters(&form("8.2", "0.25"));
        assert_eq!(parsed.ph, 8.2);
        assert_eq!(parsed.salinity, 1.025);
        assert_eq!(parsed.temperature, 78.0);
        assert_eq!(parsed.ammonia, 0.25);
    }

    #[test]
    fn test_blank_required_is_nan() {
        let parsed = parse_parameters(&form("", "0"));
        assert!(parsed.ph.is_nan());
    }

    #[test]
    fn test_garbage_required_is_nan() {
        let parsed = parse_parameters(&form("eight", "0"));
        assert!(parsed.ph.is_nan());
    }

    #[test]
    fn test_optional_defaults_to_zero() {
        let parsed = parse_parameters(&form("8.2", "n/a"));
        assert_eq!(parsed.ammonia, 0.0);
        assert_eq!(parsed.nitrite, 0.0);
        assert_eq!(parsed.magnesium, 0.0);
    }

    #[test]
    fn test_non_finite_rejected() {
        let parsed = parse_parameters(&form("inf", "NaN"));
        assert!(parsed.ph.is_nan());
        assert_eq!(parsed.ammonia, 0.0);
    }
}
