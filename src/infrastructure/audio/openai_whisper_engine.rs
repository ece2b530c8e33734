use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "whisper-1";

/// Speech recognition through an OpenAI-compatible `/audio/transcriptions`
/// endpoint. Works against self-hosted Whisper servers as well.
pub struct OpenAiWhisperEngine {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
    language: Option<String>,
}

impl OpenAiWhisperEngine {
    pub fn new(
        client: Client,
        api_key: String,
        base_url: Option<String>,
        model: Option<String>,
        language: Option<String>,
    ) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            client,
            endpoint: format!("{}/audio/transcriptions", base_url.trim_end_matches('/')),
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            // Whisper takes ISO-639-1, so `en-US` is sent as `en`.
            language: language
                .as_deref()
                .and_then(|code| code.split(['-', '_']).next())
                .filter(|primary| !primary.is_empty())
                .map(str::to_lowercase),
        }
    }

    fn form(&self, wav_data: &[u8]) -> Result<Form, TranscriptionError> {
        let file = Part::bytes(wav_data.to_vec())
            .file_name("audio.wav")
            .mime_str("audio/wav")
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("mime: {}", e)))?;

        let form = Form::new()
            .text("model", self.model.clone())
            .text("response_format", "text")
            .part("file", file);

        Ok(match &self.language {
            Some(language) => form.text("language", language.clone()),
            None => form,
        })
    }
}

async fn ensure_success(response: Response) -> Result<Response, TranscriptionError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());
    Err(TranscriptionError::ApiRequestFailed(format!(
        "status {}: {}",
        status, body
    )))
}

#[async_trait]
impl TranscriptionEngine for OpenAiWhisperEngine {
    async fn transcribe(&self, wav_data: &[u8]) -> Result<String, TranscriptionError> {
        tracing::debug!(
            model = %self.model,
            language = ?self.language,
            bytes = wav_data.len(),
            "Sending audio to Whisper endpoint"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .multipart(self.form(wav_data)?)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {}", e)))?;

        let text = ensure_success(response)
            .await?
            .text()
            .await
            .map_err(|e| TranscriptionError::InvalidResponse(format!("body: {}", e)))?;

        match text.trim() {
            "" => Err(TranscriptionError::NotUnderstood),
            transcript => {
                tracing::info!(chars = transcript.len(), "Whisper transcription completed");
                Ok(transcript.to_string())
            }
        }
    }
}
