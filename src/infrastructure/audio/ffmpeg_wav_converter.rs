use std::path::Path;
use std::process::Command;

use crate::application::ports::{AudioConversionError, AudioConverter};

use super::audio_decoder::TARGET_SAMPLE_RATE;

const FFMPEG_BINARY: &str = "ffmpeg";

/// Converter backed by the `ffmpeg` binary; handles containers symphonia
/// cannot, such as WebM/Opus browser recordings.
pub struct FfmpegWavConverter;

impl AudioConverter for FfmpegWavConverter {
    fn convert_to_wav(&self, source: &Path, target: &Path) -> Result<(), AudioConversionError> {
        let sample_rate = TARGET_SAMPLE_RATE.to_string();

        let output = Command::new(FFMPEG_BINARY)
            .arg("-nostdin")
            .args(["-hide_banner", "-loglevel", "error", "-y", "-i"])
            .arg(source)
            .args(["-ac", "1", "-ar", &sample_rate, "-c:a", "pcm_s16le", "-f", "wav"])
            .arg(target)
            .output()
            .map_err(|e| AudioConversionError::Unavailable(format!("spawn ffmpeg: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AudioConversionError::DecodingFailed(format!(
                "ffmpeg exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        tracing::debug!(target = %target.display(), "Audio converted to WAV via ffmpeg");

        Ok(())
    }
}

/// Verifies the `ffmpeg` binary is on `PATH`.
pub fn check_ffmpeg_binary() -> Result<(), AudioConversionError> {
    let output = Command::new(FFMPEG_BINARY)
        .arg("-version")
        .output()
        .map_err(|e| AudioConversionError::Unavailable(format!("ffmpeg not found: {}", e)))?;

    if !output.status.success() {
        return Err(AudioConversionError::Unavailable(format!(
            "ffmpeg -version exited with {}",
            output.status
        )));
    }

    Ok(())
}
