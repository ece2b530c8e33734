use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::TranscriptionEngine;
use crate::infrastructure::build_http_client;
use crate::presentation::config::{SpeechProvider, SpeechSettings};

use super::google_speech_engine::GoogleSpeechEngine;
use super::openai_whisper_engine::OpenAiWhisperEngine;

#[derive(Debug, thiserror::Error)]
pub enum EngineFactoryError {
    #[error("api_key is required for the {0} speech provider")]
    MissingApiKey(&'static str),
    #[error("http client initialization failed: {0}")]
    HttpClient(#[from] reqwest::Error),
}

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    /// `fallback_api_key` is used when the speech section carries no key of
    /// its own; Google Speech and Gemini normally share one project key.
    pub fn create(
        settings: &SpeechSettings,
        fallback_api_key: &str,
    ) -> Result<Arc<dyn TranscriptionEngine>, EngineFactoryError> {
        let client = build_http_client(Duration::from_secs(settings.request_timeout_secs))?;

        match settings.provider {
            SpeechProvider::Google => {
                let api_key = settings
                    .api_key
                    .clone()
                    .unwrap_or_else(|| fallback_api_key.to_string());
                tracing::info!(language = %settings.language_code, "Using Google Speech-to-Text");
                Ok(Arc::new(GoogleSpeechEngine::new(
                    client,
                    api_key,
                    settings.base_url.clone(),
                    settings.language_code.clone(),
                )))
            }
            SpeechProvider::OpenAi => {
                let api_key = settings
                    .api_key
                    .clone()
                    .ok_or(EngineFactoryError::MissingApiKey("openai"))?;
                tracing::info!(model = ?settings.model, "Using OpenAI Whisper transcription");
                Ok(Arc::new(OpenAiWhisperEngine::new(
                    client,
                    api_key,
                    settings.base_url.clone(),
                    settings.model.clone(),
                    Some(settings.language_code.clone()),
                )))
            }
        }
    }
}
