use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

const DEFAULT_BASE_URL: &str = "https://speech.googleapis.com/v1";

/// Google Cloud Speech-to-Text `speech:recognize` adapter. Encoding and
/// sample rate are left unset so the service reads them from the WAV header.
pub struct GoogleSpeechEngine {
    client: Client,
    endpoint: String,
    api_key: String,
    language_code: String,
}

impl GoogleSpeechEngine {
    pub fn new(
        client: Client,
        api_key: String,
        base_url: Option<String>,
        language_code: String,
    ) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            client,
            endpoint: format!("{}/speech:recognize", base_url.trim_end_matches('/')),
            api_key,
            language_code,
        }
    }
}

#[derive(Serialize)]
struct RecognizeRequest<'a> {
    config: RecognitionConfig<'a>,
    audio: RecognitionAudio,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognitionConfig<'a> {
    language_code: &'a str,
    enable_automatic_punctuation: bool,
}

#[derive(Serialize)]
struct RecognitionAudio {
    content: String,
}

#[derive(Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    results: Vec<RecognitionResult>,
}

#[derive(Deserialize)]
struct RecognitionResult {
    #[serde(default)]
    alternatives: Vec<RecognitionAlternative>,
}

#[derive(Deserialize)]
struct RecognitionAlternative {
    #[serde(default)]
    transcript: String,
}

#[async_trait]
impl TranscriptionEngine for GoogleSpeechEngine {
    async fn transcribe(&self, wav_data: &[u8]) -> Result<String, TranscriptionError> {
        let body = RecognizeRequest {
            config: RecognitionConfig {
                language_code: &self.language_code,
                enable_automatic_punctuation: true,
            },
            audio: RecognitionAudio {
                content: STANDARD.encode(wav_data),
            },
        };

        tracing::debug!(
            language = %self.language_code,
            bytes = wav_data.len(),
            "Sending audio to Google Speech-to-Text"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let result: RecognizeResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::InvalidResponse(format!("parse response: {}", e)))?;

        let transcript = result
            .results
            .iter()
            .filter_map(|r| r.alternatives.first())
            .map(|a| a.transcript.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if transcript.is_empty() {
            return Err(TranscriptionError::NotUnderstood);
        }

        tracing::info!(
            chars = transcript.len(),
            "Google Speech-to-Text transcription completed"
        );

        Ok(transcript)
    }
}
