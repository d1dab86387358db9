//! One-line health headline for a water test.

use super::models::{HealthLevel, HealthSummary, InsightStatus, ParameterInsight};

pub fn summarize(insights: &[ParameterInsight]) -> HealthSummary {
    let count = |status: InsightStatus| insights.iter().filter(|i| i.status == status).count();
    let critical_count = count(InsightStatus::Critical);
    let warning_count = count(InsightStatus::Warning);
    let insufficient_count = count(InsightStatus::InsufficientData);

    let (level, headline) = if critical_count > 0 {
        (
            HealthLevel::Critical,
            format!("CRITICAL: {} parameter(s) need immediate attention", critical_count),
        )
    } else if warning_count > 2 {
        (
            HealthLevel::Caution,
            format!("CAUTION: {} parameters are outside ideal ranges", warning_count),
        )
    } else if warning_count >= 1 {
        (
            HealthLevel::Attention,
            format!("ATTENTION: {} parameter(s) need monitoring", warning_count),
        )
    } else if insufficient_count >= 1 {
        (
            HealthLevel::Incomplete,
            format!("INCOMPLETE: {} required parameter(s) missing", insufficient_count),
        )
    } else {
        (
            HealthLevel::Healthy,
            "HEALTHY: All tested parameters are within ideal ranges".to_string(),
        )
    };

    HealthSummary {
        level,
        headline,
        critical_count,
        warning_count,
        insufficient_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::water::models::Parameter;

    fn with(statuses: &[InsightStatus]) -> Vec<ParameterInsight> {
        statuses
            .iter()
            .map(|s| ParameterInsight::new(Parameter::Ph, 8.0, *s, String::new()))
            .collect()
    }

    #[test]
    fn test_empty_is_healthy() {
        let summary = summarize(&[]);
        assert_eq!(summary.level, HealthLevel::Healthy);
        assert!(summary.headline.starts_with("HEALTHY"));
    }

    #[test]
    fn test_any_critical_wins() {
        use InsightStatus::*;
        let summary = summarize(&with(&[Warning, Warning, Warning, Critical, Critical]));
        assert_eq!(summary.level, HealthLevel::Critical);
        assert_eq!(summary.headline, "CRITICAL: 2 parameter(s) need immediate attention");
        assert_eq!(summary.warning_count, 3);
    }

    #[test]
    fn test_warning_count_thresholds() {
        use InsightStatus::*;
        assert_eq!(summarize(&with(&[Warning, Good])).level, HealthLevel::Attention);
        assert_eq!(summarize(&with(&[Warning, Warning])).level, HealthLevel::Attention);
        assert_eq!(
            summarize(&with(&[Warning, Warning, Warning])).level,
            HealthLevel::Caution
        );
    }

    #[test]
    fn test_missing_data_is_incomplete() {
        use InsightStatus::*;
        let summary = summarize(&with(&[InsufficientData, Good]));
        assert_eq!(summary.level, HealthLevel::Incomplete);
        assert_eq!(summary.insufficient_count, 1);
        assert_eq!(summarize(&with(&[InsufficientData, Warning])).level, HealthLevel::Attention);
    }
}
