use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::PipelineError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

pub fn error_response(status: StatusCode, detail: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            detail: detail.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for PipelineError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            PipelineError::Transcription(e) => (
                StatusCode::SERVICE_UNAVAILABLE,
                format!("Speech recognition service error: {}", e),
            ),
            PipelineError::Conversion(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Audio conversion failed: {}", e),
            ),
            PipelineError::Translation(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Translation failed: {}", e),
            ),
            PipelineError::Workspace(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Processing failed: {}", e),
            ),
            PipelineError::Internal(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Processing failed: {}", e),
            ),
        };
        error_response(status, detail)
    }
}
