use async_trait::async_trait;

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    /// Transcribes WAV bytes. A reply without recognizable speech is
    /// [`TranscriptionError::NotUnderstood`], never an empty string.
    async fn transcribe(&self, wav_data: &[u8]) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("speech could not be understood")]
    NotUnderstood,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
