mod audio_upload;
mod target_language;
mod transcript;

pub use audio_upload::{AudioFormat, AudioUpload, UploadId};
pub use target_language::{DEFAULT_TARGET_LANGUAGE, TargetLanguage};
pub use transcript::{Transcript, TranscriptionOutcome};
