use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::ports::LlmClient;
use crate::domain::{AudioUpload, TargetLanguage};
use crate::infrastructure::observability::preview_text;
use crate::presentation::state::AppState;

use super::error_response::error_response;

const FILE_FIELD: &str = "file";
const TARGET_LANGUAGE_FIELD: &str = "target_language";

#[derive(Debug, Deserialize)]
pub struct TranscribeParams {
    pub target_language: Option<String>,
}

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub success: bool,
    pub transcription: String,
    pub translation: String,
}

struct TranscribeForm {
    upload: Option<AudioUpload>,
    target_language: Option<String>,
}

#[tracing::instrument(skip(state, query, multipart))]
pub async fn transcribe_handler<L>(
    State(state): State<AppState<L>>,
    query: Result<Query<TranscribeParams>, QueryRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response
where
    L: LlmClient + ?Sized + 'static,
{
    let params = match query {
        Ok(Query(params)) => params,
        Err(e) => {
            tracing::warn!(error = %e, "Invalid transcribe query string");
            return error_response(e.status(), e.body_text());
        }
    };

    let mut multipart = match multipart {
        Ok(m) => m,
        Err(e) => {
            tracing::warn!(error = %e, "Transcribe request without multipart body");
            return error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Expected a multipart form with a '{}' field: {}", FILE_FIELD, e),
            );
        }
    };

    let form = match read_form(&mut multipart).await {
        Ok(form) => form,
        Err(response) => return response,
    };

    let Some(upload) = form.upload else {
        tracing::warn!("Transcribe request with no file");
        return error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("Field '{}' is required", FILE_FIELD),
        );
    };

    if upload.is_empty() {
        tracing::warn!(filename = %upload.filename, "Uploaded file is empty");
        return error_response(StatusCode::BAD_REQUEST, "Uploaded file is empty");
    }

    let target_language = match params.target_language.or(form.target_language) {
        Some(raw) => match raw.parse::<TargetLanguage>() {
            Ok(language) => language,
            Err(e) => {
                tracing::warn!(target_language = %raw, "Invalid target language");
                return error_response(StatusCode::BAD_REQUEST, e);
            }
        },
        None => TargetLanguage::default(),
    };

    tracing::debug!(
        filename = %upload.filename,
        content_type = ?upload.content_type,
        bytes = upload.size_bytes(),
        format = ?upload.format(),
        "Processing audio upload"
    );

    match state
        .transcription_service
        .process(upload, &target_language)
        .await
    {
        Ok(outcome) => {
            tracing::info!(
                transcription = %preview_text(&outcome.transcription),
                translation = %preview_text(&outcome.translation),
                target_language = %target_language,
                "Transcription request completed"
            );
            (
                StatusCode::OK,
                Json(TranscribeResponse {
                    success: true,
                    transcription: outcome.transcription,
                    translation: outcome.translation,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Transcription request failed");
            e.into_response()
        }
    }
}

async fn read_form(multipart: &mut Multipart) -> Result<TranscribeForm, Response> {
    let mut form = TranscribeForm {
        upload: None,
        target_language: None,
    };

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return Err(error_response(
                    e.status(),
                    format!("Failed to read multipart: {}", e.body_text()),
                ));
            }
        };

        match field.name() {
            Some(FILE_FIELD) => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let content_type = field.content_type().map(str::to_string);
                let data = field.bytes().await.map_err(|e| {
                    tracing::error!(error = %e, "Failed to read file bytes");
                    error_response(e.status(), format!("Failed to read file: {}", e.body_text()))
                })?;
                form.upload = Some(AudioUpload::new(filename, content_type, data.to_vec()));
            }
            Some(TARGET_LANGUAGE_FIELD) => {
                let value = field.text().await.map_err(|e| {
                    error_response(
                        e.status(),
                        format!("Failed to read target_language: {}", e.body_text()),
                    )
                })?;
                form.target_language = Some(value);
            }
            other => {
                tracing::debug!(field = ?other, "Ignoring unknown multipart field");
            }
        }
    }

    Ok(form)
}
