//! Water-parameter analysis module.
//!
//! Turns a hand-entered reef water test into prioritized insights, a health
//! headline and a display report, exposed as HTTP endpoints for the main
//! aquarium app.

mod analyzers;
mod formatter;
mod models;
mod parser;
mod pipeline;
mod prioritizer;
mod ranges;
mod recommender;
mod routes;
mod summary;

pub use models::AnalyzeResponse;
pub use pipeline::AnalysisError;
pub use routes::router;

pub const TOOL: &str = "water-insights-analyze";
pub const TOOL_VERSION: &str = "0.1.0";
