//! Ordering of insights for display.

use super::models::{Parameter, ParameterInsight};

/// Importance of each parameter when severities tie.
pub const PARAMETER_ORDER: [Parameter; 9] = [
    Parameter::Ammonia,
    Parameter::Nitrite,
    Parameter::Ph,
    Parameter::Salinity,
    Parameter::Temperature,
    Parameter::Nitrate,
    Parameter::Alkalinity,
    Parameter::Calcium,
    Parameter::Magnesium,
];

/// Position in [`PARAMETER_ORDER`]; unlisted parameters rank last.
fn parameter_rank(parameter: Parameter) -> usize {
    PARAMETER_ORDER
        .iter()
        .position(|p| *p == parameter)
        .unwrap_or(usize::MAX)
}

/// Sort by severity (critical first), then by parameter importance.
///
/// The sort is stable, so re-sorting an ordered list is a no-op.
pub fn prioritize(mut insights: Vec<ParameterInsight>) -> Vec<ParameterInsight> {
    insights.sort_by_key(|i| (i.status.rank(), parameter_rank(i.parameter)));
    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::water::models::InsightStatus;

    fn insight(parameter: Parameter, status: InsightStatus) -> ParameterInsight {
        ParameterInsight::new(parameter, 0.0, status, parameter.label().to_string())
    }

    fn shuffled() -> Vec<ParameterInsight> {
        vec![
            insight(Parameter::Magnesium, InsightStatus::Good),
            insight(Parameter::Temperature, InsightStatus::Warning),
            insight(Parameter::Nitrate, InsightStatus::Critical),
            insight(Parameter::Ph, InsightStatus::Good),
            insight(Parameter::Salinity, InsightStatus::InsufficientData),
            insight(Parameter::Calcium, InsightStatus::Warning),
            insight(Parameter::Ammonia, InsightStatus::Critical),
        ]
    }

    #[test]
    fn test_severity_then_parameter_order() {
        let sorted = prioritize(shuffled());
        let order: Vec<Parameter> = sorted.iter().map(|i| i.parameter).collect();
        assert_eq!(
            order,
            vec![
                Parameter::Ammonia,
                Parameter::Nitrate,
                Parameter::Temperature,
                Parameter::Calcium,
                Parameter::Salinity,
                Parameter::Ph,
                Parameter::Magnesium,
            ]
        );
    }

    #[test]
    fn test_critical_before_warning_before_good() {
        let sorted = prioritize(shuffled());
        let ranks: Vec<u8> = sorted.iter().map(|i| i.status.rank()).collect();
        assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_idempotent() {
        let once = prioritize(shuffled());
        let twice = prioritize(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_every_parameter_is_ranked() {
        for (idx, parameter) in PARAMETER_ORDER.iter().enumerate() {
            assert_eq!(parameter_rank(*parameter), idx);
        }
    }
}
