//! HTTP route handlers for water analysis API.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    routing::{get, post},
    Router,
};
use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::AppState;

use super::models::{AnalysisOptions, AnalyzeRequest, AnalyzeResponse};
use super::pipeline;
use super::{TOOL, TOOL_VERSION};

/// Compute SHA256 hash of input string.
fn sha256_hex(s: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(s.as_bytes());
    let digest = hasher.finalize();
    format!("sha256:{}", hex::encode(digest))
}

/// Create the water router with all endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/analyze", post(analyze))
}

/// Health check for the analysis engine.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "water-analyzer",
        "version": TOOL_VERSION
    }))
}

/// Analyze a water test and return insights plus the display report.
async fn analyze(
    State(state): State<AppState>,
    payload: std::result::Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>> {
    let Json(request) = payload?;

    // Serialize request for input hash
    let input_json = serde_json::to_string(&request)?;
    let input_hash = sha256_hex(&input_json);

    if let Some(cached) = state.cache.get_analysis(&input_hash).await {
        return Ok(Json(cached.as_ref().clone()));
    }

    let options = AnalysisOptions {
        legacy_nan_fallthrough: request.legacy_nan_fallthrough,
    };
    let analysis = pipeline::analyze(&request.parameters, request.tank.as_ref(), options)
        .inspect_err(|e| tracing::warn!("Rejected water test {}: {}", input_hash, e))?;

    let response = AnalyzeResponse {
        tool: TOOL,
        tool_version: TOOL_VERSION,
        input_hash,
        test_date: request.test_date,
        tank_id: request.tank_id,
        readings: analysis.parsed,
        summary: analysis.summary,
        insights: analysis.insights,
        recommendations: analysis.recommendations,
        range_warnings: analysis.range_warnings,
        report: analysis.report,
    };

    state.cache.put_analysis(Arc::new(response.clone())).await;

    Ok(Json(response))
}
