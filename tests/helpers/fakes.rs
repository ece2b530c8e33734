use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use vocal_api::application::ports::{
    AudioConversionError, AudioConverter, LlmClient, LlmClientError, TranscriptionEngine,
    TranscriptionError,
};

pub const CONVERTED_MARKER: &[u8] = b"converted speech";

pub enum ConverterBehavior {
    WriteMarker,
    Fail,
}

pub struct FakeConverter {
    behavior: ConverterBehavior,
    calls: AtomicUsize,
}

impl FakeConverter {
    pub fn new(behavior: ConverterBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AudioConverter for FakeConverter {
    fn convert_to_wav(&self, source: &Path, target: &Path) -> Result<(), AudioConversionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert!(source.exists(), "source upload must exist during conversion");
        match self.behavior {
            ConverterBehavior::WriteMarker => {
                std::fs::write(target, CONVERTED_MARKER)
                    .map_err(|e| AudioConversionError::EncodingFailed(e.to_string()))
            }
            ConverterBehavior::Fail => Err(AudioConversionError::DecodingFailed(
                "corrupt stream".to_string(),
            )),
        }
    }
}

pub enum EngineBehavior {
    /// Returns the text carried by a [`super::speech_wav`] payload, or the
    /// raw bytes as text for anything else.
    Echo,
    NotUnderstood,
    Unavailable,
}

pub struct FakeEngine {
    behavior: EngineBehavior,
    received: Mutex<Vec<Vec<u8>>>,
}

impl FakeEngine {
    pub fn new(behavior: EngineBehavior) -> Self {
        Self {
            behavior,
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn received(&self) -> Vec<Vec<u8>> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl TranscriptionEngine for FakeEngine {
    async fn transcribe(&self, wav_data: &[u8]) -> Result<String, TranscriptionError> {
        self.received.lock().unwrap().push(wav_data.to_vec());
        tokio::time::sleep(Duration::from_millis(5)).await;
        match self.behavior {
            EngineBehavior::Echo => Ok(super::decode_speech_wav(wav_data)
                .unwrap_or_else(|| String::from_utf8_lossy(wav_data).into_owned())),
            EngineBehavior::NotUnderstood => Err(TranscriptionError::NotUnderstood),
            EngineBehavior::Unavailable => Err(TranscriptionError::ApiRequestFailed(
                "connection refused".to_string(),
            )),
        }
    }
}

pub enum LlmBehavior {
    /// Returns `translated[<prompt>]`.
    Echo,
    Fail,
}

pub struct FakeLlmClient {
    behavior: LlmBehavior,
    prompts: Mutex<Vec<String>>,
}

impl FakeLlmClient {
    pub fn new(behavior: LlmBehavior) -> Self {
        Self {
            behavior,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl LlmClient for FakeLlmClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmClientError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.behavior {
            LlmBehavior::Echo => Ok(format!("translated[{}]", prompt)),
            LlmBehavior::Fail => Err(LlmClientError::ApiRequestFailed(
                "status 500: internal".to_string(),
            )),
        }
    }
}
