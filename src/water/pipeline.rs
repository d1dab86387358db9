//! End-to-end water test analysis.

use thiserror::Error;

use super::analyzers::{
    analyze_nitrogen_cycle, analyze_ph, analyze_reef_chemistry, analyze_salinity,
    analyze_temperature, insufficient_data,
};
use super::formatter::format_report;
use super::models::{
    AnalysisOptions, Parameter, ParameterInsight, ParsedParameterValues, TankSnapshot,
    WaterAnalysis, WaterParameterValues,
};
use super::parser::parse_parameters;
use super::prioritizer::prioritize;
use super::ranges::check_ranges;
use super::recommender::tank_recommendations;
use super::summary::summarize;

/// Reasons an analysis is rejected as a whole.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("tank size must be a non-negative number of gallons, got {0}")]
    InvalidTankSize(f64),
}

fn validate_tank(tank: Option<&TankSnapshot>) -> Result<(), AnalysisError> {
    match tank {
        Some(t) if !t.size_gallons.is_finite() || t.size_gallons < 0.0 => {
            Err(AnalysisError::InvalidTankSize(t.size_gallons))
        }
        _ => Ok(()),
    }
}

/// Run a required-reading analyzer, or report the reading as missing.
fn required(
    parameter: Parameter,
    value: f64,
    options: AnalysisOptions,
    analyzer: fn(f64) -> ParameterInsight,
) -> ParameterInsight {
    if value.is_nan() && !options.legacy_nan_fallthrough {
        insufficient_data(parameter)
    } else {
        analyzer(value)
    }
}

fn analyze_core(parsed: &ParsedParameterValues, options: AnalysisOptions) -> Vec<ParameterInsight> {
    vec![
        required(Parameter::Ph, parsed.ph, options, analyze_ph),
        required(Parameter::Salinity, parsed.salinity, options, analyze_salinity),
        required(Parameter::Temperature, parsed.temperature, options, analyze_temperature),
    ]
}

/// Analyze one water test.
///
/// Either returns a complete result or fails before producing anything.
pub fn analyze(
    values: &WaterParameterValues,
    tank: Option<&TankSnapshot>,
    options: AnalysisOptions,
) -> Result<WaterAnalysis, AnalysisError> {
    validate_tank(tank)?;

    let parsed = parse_parameters(values);
    let range_warnings = check_ranges(&parsed);

    let mut insights = analyze_core(&parsed, options);
    insights.extend(analyze_nitrogen_cycle(&parsed));
    insights.extend(analyze_reef_chemistry(&parsed));
    let insights = prioritize(insights);

    let mut recommendations: Vec<String> = Vec::new();
    let advice = insights
        .iter()
        .filter_map(|i| i.recommendation.clone())
        .chain(tank_recommendations(tank));
    for line in advice {
        // missing readings share one retest line
        if !recommendations.contains(&line) {
            recommendations.push(line);
        }
    }

    let summary = summarize(&insights);
    let report = format_report(&summary, &insights, &recommendations);

    tracing::debug!(
        tank = tank.and_then(|t| t.name.as_deref()).unwrap_or("-"),
        insights = insights.len(),
        critical = summary.critical_count,
        warnings = summary.warning_count,
        "water test analyzed"
    );

    Ok(WaterAnalysis {
        parsed,
        range_warnings,
        insights,
        summary,
        recommendations,
        report,
    })
}
