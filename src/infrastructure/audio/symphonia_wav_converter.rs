use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::application::ports::{AudioConversionError, AudioConverter};

use super::audio_decoder::{TARGET_SAMPLE_RATE, decode_file_to_pcm};

/// Pure-Rust converter: symphonia decode, rubato resample, hound encode.
pub struct SymphoniaWavConverter;

impl AudioConverter for SymphoniaWavConverter {
    fn convert_to_wav(&self, source: &Path, target: &Path) -> Result<(), AudioConversionError> {
        let pcm = decode_file_to_pcm(source)?;

        let spec = WavSpec {
            channels: 1,
            sample_rate: TARGET_SAMPLE_RATE,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };

        let mut writer = WavWriter::create(target, spec)
            .map_err(|e| AudioConversionError::EncodingFailed(format!("create: {}", e)))?;

        for sample in pcm {
            let scaled = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
            writer
                .write_sample(scaled)
                .map_err(|e| AudioConversionError::EncodingFailed(format!("write: {}", e)))?;
        }

        writer
            .finalize()
            .map_err(|e| AudioConversionError::EncodingFailed(format!("finalize: {}", e)))?;

        tracing::debug!(target = %target.display(), "Audio converted to WAV");

        Ok(())
    }
}
