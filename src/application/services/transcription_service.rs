use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;

use hound::{SampleFormat, WavReader};

use crate::application::ports::{
    AudioConversionError, AudioConverter, LlmClient, LlmClientError, TranscriptionEngine,
    TranscriptionError,
};
use crate::domain::{AudioUpload, TargetLanguage, Transcript, TranscriptionOutcome};

use super::audio_workspace::AudioWorkspace;

const CONVERTED_FILE_NAME: &str = "converted.wav";

pub struct TranscriptionService<L>
where
    L: LlmClient + ?Sized,
{
    converter: Arc<dyn AudioConverter>,
    engine: Arc<dyn TranscriptionEngine>,
    llm_client: Arc<L>,
    scratch_root: PathBuf,
    unrecognized_placeholder: String,
}

impl<L> TranscriptionService<L>
where
    L: LlmClient + ?Sized,
{
    pub fn new(
        converter: Arc<dyn AudioConverter>,
        engine: Arc<dyn TranscriptionEngine>,
        llm_client: Arc<L>,
        scratch_root: PathBuf,
        unrecognized_placeholder: String,
    ) -> Self {
        Self {
            converter,
            engine,
            llm_client,
            scratch_root,
            unrecognized_placeholder,
        }
    }

    #[tracing::instrument(
        skip(self, upload, target_language),
        fields(
            upload_id = %upload.id.as_uuid(),
            filename = %upload.filename,
            bytes = upload.data.len(),
            target_language = %target_language,
        )
    )]
    pub async fn process(
        &self,
        upload: AudioUpload,
        target_language: &TargetLanguage,
    ) -> Result<TranscriptionOutcome, PipelineError> {
        let format = upload.format();
        let needs_conversion = !format.is_wav() || !is_engine_ready_wav(&upload.data)?;
        let workspace = AudioWorkspace::create(&self.scratch_root, upload.id)?;

        let upload_path = workspace.file(&format!("upload.{}", format.extension()));
        tokio::fs::write(&upload_path, &upload.data).await?;
        drop(upload);

        let wav_path = if needs_conversion {
            tracing::debug!(format = ?format, "Upload is not mono 16-bit WAV, converting");
            self.convert(upload_path, workspace.file(CONVERTED_FILE_NAME))
                .await?
        } else {
            upload_path
        };

        let wav_data = tokio::fs::read(&wav_path).await?;
        let transcript = self.transcribe(&wav_data).await?;
        let transcription = transcript.text(&self.unrecognized_placeholder).to_string();

        let translation = self
            .llm_client
            .generate(&translation_prompt(&transcription, target_language))
            .await?;

        tracing::info!(
            inconclusive = transcript.is_inconclusive(),
            transcript_chars = transcription.len(),
            translation_chars = translation.len(),
            "Audio transcribed and translated"
        );

        Ok(TranscriptionOutcome {
            transcript,
            transcription,
            translation,
        })
    }

    async fn convert(&self, source: PathBuf, target: PathBuf) -> Result<PathBuf, PipelineError> {
        let converter = Arc::clone(&self.converter);
        let output = target.clone();

        tokio::task::spawn_blocking(move || converter.convert_to_wav(&source, &output))
            .await
            .map_err(|e| PipelineError::Internal(format!("conversion task: {}", e)))??;

        Ok(target)
    }

    async fn transcribe(&self, wav_data: &[u8]) -> Result<Transcript, PipelineError> {
        match self.engine.transcribe(wav_data).await {
            Ok(text) => Ok(Transcript::Recognized(text)),
            Err(TranscriptionError::NotUnderstood) => {
                tracing::warn!("Speech service could not understand the audio");
                Ok(Transcript::Inconclusive)
            }
            Err(e) => Err(PipelineError::Transcription(e)),
        }
    }
}

/// Speech engines read the WAV header and accept only single-channel
/// 16-bit integer PCM; every other layout goes through the converter.
fn is_engine_ready_wav(data: &[u8]) -> Result<bool, AudioConversionError> {
    let spec = WavReader::new(Cursor::new(data))
        .map_err(|e| AudioConversionError::DecodingFailed(format!("invalid WAV: {}", e)))?
        .spec();

    Ok(spec.channels == 1 && spec.bits_per_sample == 16 && spec.sample_format == SampleFormat::Int)
}

pub fn translation_prompt(text: &str, target_language: &TargetLanguage) -> String {
    format!("Translate this into {}: {}", target_language, text)
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("audio conversion: {0}")]
    Conversion(#[from] AudioConversionError),
    #[error("transcription service: {0}")]
    Transcription(#[from] TranscriptionError),
    #[error("translation: {0}")]
    Translation(#[from] LlmClientError),
    #[error("scratch storage: {0}")]
    Workspace(#[from] std::io::Error),
    #[error("{0}")]
    Internal(String),
}
