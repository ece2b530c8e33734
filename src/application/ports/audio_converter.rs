use std::path::Path;

/// Re-encodes an audio file into the WAV layout the speech engines accept.
pub trait AudioConverter: Send + Sync {
    fn convert_to_wav(&self, source: &Path, target: &Path) -> Result<(), AudioConversionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioConversionError {
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
    #[error("audio encoding failed: {0}")]
    EncodingFailed(String),
    #[error("converter unavailable: {0}")]
    Unavailable(String),
}
