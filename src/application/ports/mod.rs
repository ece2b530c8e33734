mod audio_converter;
mod llm_client;
mod transcription_engine;

pub use audio_converter::{AudioConversionError, AudioConverter};
pub use llm_client::{LlmClient, LlmClientError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
