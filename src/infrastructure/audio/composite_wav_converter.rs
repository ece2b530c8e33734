use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{AudioConversionError, AudioConverter};

/// Tries each converter in order until one produces a WAV file. Used to put
/// the in-process symphonia path first and keep ffmpeg for codecs it lacks
/// (Opus in Ogg or WebM).
pub struct CompositeWavConverter {
    converters: Vec<(&'static str, Arc<dyn AudioConverter>)>,
}

impl CompositeWavConverter {
    pub fn new(converters: Vec<(&'static str, Arc<dyn AudioConverter>)>) -> Self {
        Self { converters }
    }
}

impl AudioConverter for CompositeWavConverter {
    fn convert_to_wav(&self, source: &Path, target: &Path) -> Result<(), AudioConversionError> {
        let mut last_error = None;

        for (name, converter) in &self.converters {
            match converter.convert_to_wav(source, target) {
                Ok(()) => {
                    tracing::debug!(converter = *name, "Audio conversion succeeded");
                    return Ok(());
                }
                Err(e) => {
                    tracing::warn!(converter = *name, error = %e, "Audio converter failed, trying next");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            AudioConversionError::Unavailable("no audio converter configured".to_string())
        }))
    }
}
