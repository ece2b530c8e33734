use std::sync::Arc;

use crate::application::ports::{AudioConversionError, AudioConverter};
use crate::presentation::config::ConverterProvider;

use super::composite_wav_converter::CompositeWavConverter;
use super::ffmpeg_wav_converter::{FfmpegWavConverter, check_ffmpeg_binary};
use super::symphonia_wav_converter::SymphoniaWavConverter;

pub struct AudioConverterFactory;

impl AudioConverterFactory {
    pub fn create(
        provider: ConverterProvider,
    ) -> Result<Arc<dyn AudioConverter>, AudioConversionError> {
        match provider {
            ConverterProvider::Auto => match check_ffmpeg_binary() {
                Ok(()) => {
                    tracing::info!("Using symphonia audio converter with ffmpeg fallback");
                    let symphonia: Arc<dyn AudioConverter> = Arc::new(SymphoniaWavConverter);
                    let ffmpeg: Arc<dyn AudioConverter> = Arc::new(FfmpegWavConverter);
                    Ok(Arc::new(CompositeWavConverter::new(vec![
                        ("symphonia", symphonia),
                        ("ffmpeg", ffmpeg),
                    ])))
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "ffmpeg not available, Opus and WebM uploads cannot be converted"
                    );
                    Ok(Arc::new(SymphoniaWavConverter))
                }
            },
            ConverterProvider::Symphonia => {
                tracing::info!("Using symphonia audio converter");
                Ok(Arc::new(SymphoniaWavConverter))
            }
            ConverterProvider::Ffmpeg => {
                check_ffmpeg_binary()?;
                tracing::info!("Using ffmpeg audio converter");
                Ok(Arc::new(FfmpegWavConverter))
            }
        }
    }
}
