//! Data types for water-parameter analysis.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Raw water test as typed into the form. Every field is free text.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct WaterParameterValues {
    pub ph: String,
    /// Specific gravity
    pub salinity: String,
    /// Degrees Fahrenheit
    pub temperature: String,
    pub ammonia: String,
    pub nitrite: String,
    pub nitrate: String,
    /// dKH
    #[serde(alias = "kh")]
    pub alkalinity: String,
    pub calcium: String,
    pub magnesium: String,
}

/// Numeric form of [`WaterParameterValues`].
///
/// pH, salinity and temperature are NaN when blank or unreadable.
/// The remaining fields are 0.0 in that case, meaning "not measured".
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParsedParameterValues {
    pub ph: f64,
    pub salinity: f64,
    pub temperature: f64,
    pub ammonia: f64,
    pub nitrite: f64,
    pub nitrate: f64,
    pub alkalinity: f64,
    pub calcium: f64,
    pub magnesium: f64,
}

/// A tested water parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    Ph,
    Salinity,
    Temperature,
    Ammonia,
    Nitrite,
    Nitrate,
    Alkalinity,
    Calcium,
    Magnesium,
}

impl Parameter {
    /// Human readable name used in messages
    pub fn label(self) -> &'static str {
        match self {
            Self::Ph => "pH",
            Self::Salinity => "Salinity",
            Self::Temperature => "Temperature",
            Self::Ammonia => "Ammonia",
            Self::Nitrite => "Nitrite",
            Self::Nitrate => "Nitrate",
            Self::Alkalinity => "Alkalinity",
            Self::Calcium => "Calcium",
            Self::Magnesium => "Magnesium",
        }
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Severity of a single parameter reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightStatus {
    Critical,
    Warning,
    /// Required reading was blank or unreadable
    InsufficientData,
    Good,
}

impl InsightStatus {
    /// Sort rank, lower sorts first.
    pub fn rank(self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::Warning => 1,
            Self::InsufficientData => 2,
            Self::Good => 3,
        }
    }

    pub fn is_issue(self) -> bool {
        !matches!(self, Self::Good)
    }
}

/// Outcome of analyzing one parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterInsight {
    pub parameter: Parameter,
    pub value: f64,
    pub status: InsightStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

impl ParameterInsight {
    pub fn new(parameter: Parameter, value: f64, status: InsightStatus, message: String) -> Self {
        Self {
            parameter,
            value,
            status,
            message,
            recommendation: None,
        }
    }

    pub fn recommend(mut self, recommendation: &str) -> Self {
        self.recommendation = Some(recommendation.to_string());
        self
    }
}

/// Livestock care requirement tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum CareLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
    #[serde(other)]
    Unknown,
}

impl CareLevel {
    pub fn is_high_maintenance(self) -> bool {
        matches!(self, Self::Advanced | Self::Expert)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Livestock {
    pub name: String,
    #[serde(default)]
    pub care_level: Option<CareLevel>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Equipment {
    pub name: String,
}

/// Point-in-time, read-only view of the tank the test was taken from.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TankSnapshot {
    #[serde(default)]
    pub name: Option<String>,
    pub size_gallons: f64,
    #[serde(default)]
    pub livestock: Vec<Livestock>,
    #[serde(default)]
    pub equipment: Vec<Equipment>,
}

/// Overall health classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthLevel {
    Critical,
    Caution,
    Attention,
    Incomplete,
    Healthy,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthSummary {
    pub level: HealthLevel,
    pub headline: String,
    pub critical_count: usize,
    pub warning_count: usize,
    pub insufficient_count: usize,
}

/// Switches for [`super::pipeline::analyze`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisOptions {
    /// Let unreadable pH/salinity/temperature fall through every threshold
    /// check, which reports them as good. Kept for parity with stored reports.
    pub legacy_nan_fallthrough: bool,
}

/// Full result of one analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct WaterAnalysis {
    pub parsed: ParsedParameterValues,
    pub range_warnings: Vec<String>,
    /// Prioritized, most severe first
    pub insights: Vec<ParameterInsight>,
    pub summary: HealthSummary,
    /// Analyzer recommendations followed by tank-context recommendations
    pub recommendations: Vec<String>,
    /// Display string stored alongside the water test
    pub report: String,
}

/// Request payload for water test analysis.
#[derive(Debug, Deserialize, Serialize)]
pub struct AnalyzeRequest {
    pub parameters: WaterParameterValues,
    #[serde(default)]
    pub tank: Option<TankSnapshot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tank_id: Option<Uuid>,
    #[serde(default)]
    pub legacy_nan_fallthrough: bool,
}

/// Response payload from water test analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    /// Tool identifier
    pub tool: &'static str,
    /// Tool version
    pub tool_version: &'static str,
    /// SHA256 hash of input
    pub input_hash: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tank_id: Option<Uuid>,

    /// Parsed numeric readings, persisted by the caller with the test
    pub readings: ParsedParameterValues,
    pub summary: HealthSummary,
    pub insights: Vec<ParameterInsight>,
    pub recommendations: Vec<String>,

    /// Out-of-bounds readings (advisory)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub range_warnings: Vec<String>,

    /// Formatted report
    pub report: String,
}
