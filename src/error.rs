//! Service-level errors and their HTTP mapping.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

use crate::water::{AnalysisError, TOOL, TOOL_VERSION};

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),

    #[error("failed to serialize request: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            AppError::Analysis(e) => (StatusCode::BAD_REQUEST, "invalid_input", e.to_string()),
            AppError::InvalidBody(rejection) => {
                (rejection.status(), "invalid_body", rejection.body_text())
            }
            AppError::Serialization(e) => {
                tracing::error!("Analysis failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "analysis_failed",
                    "Analysis failed, please retry".to_string(),
                )
            }
        };

        (
            status,
            Json(serde_json::json!({
                "error": error_type,
                "message": message,
                "tool": TOOL,
                "tool_version": TOOL_VERSION
            })),
        )
            .into_response()
    }
}
