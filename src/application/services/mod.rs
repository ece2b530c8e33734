mod audio_workspace;
mod transcription_service;

pub use audio_workspace::AudioWorkspace;
pub use transcription_service::{PipelineError, TranscriptionService, translation_prompt};
