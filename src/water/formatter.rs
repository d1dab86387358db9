//! Single-string report stored with the water test.

use super::models::{HealthSummary, InsightStatus, ParameterInsight};

pub const MAX_ISSUES: usize = 3;
pub const MAX_GOOD: usize = 5;
pub const MAX_RECOMMENDATIONS: usize = 4;
pub const RECOMMENDATIONS_HEADER: &str = "💡 Recommendations:";
pub const DELIMITER: &str = "\n";

fn prefix(status: InsightStatus) -> &'static str {
    match status {
        InsightStatus::Critical => "🚨",
        InsightStatus::Warning => "⚠️",
        InsightStatus::InsufficientData => "❔",
        InsightStatus::Good => "✅",
    }
}

/// Build the report from prioritized insights.
///
/// `recommendations` must already be in display order (analyzer advice,
/// then tank advice).
pub fn format_report(
    summary: &HealthSummary,
    insights: &[ParameterInsight],
    recommendations: &[String],
) -> String {
    let mut lines = vec![summary.headline.clone()];

    lines.extend(
        insights
            .iter()
            .filter(|i| i.status.is_issue())
            .take(MAX_ISSUES)
            .map(|i| format!("{} {}", prefix(i.status), i.message)),
    );

    lines.extend(
        insights
            .iter()
            .filter(|i| i.status == InsightStatus::Good)
            .take(MAX_GOOD)
            .map(|i| format!("{} {}", prefix(i.status), i.message)),
    );

    lines.push(RECOMMENDATIONS_HEADER.to_string());
    lines.extend(
        recommendations
            .iter()
            .take(MAX_RECOMMENDATIONS)
            .map(|r| format!("• {}", r)),
    );

    lines.join(DELIMITER)
}
