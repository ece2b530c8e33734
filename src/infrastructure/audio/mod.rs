pub mod audio_decoder;
mod audio_converter_factory;
mod composite_wav_converter;
mod ffmpeg_wav_converter;
mod google_speech_engine;
mod openai_whisper_engine;
mod symphonia_wav_converter;
mod transcription_engine_factory;

pub use audio_converter_factory::AudioConverterFactory;
pub use composite_wav_converter::CompositeWavConverter;
pub use ffmpeg_wav_converter::{FfmpegWavConverter, check_ffmpeg_binary};
pub use google_speech_engine::GoogleSpeechEngine;
pub use openai_whisper_engine::OpenAiWhisperEngine;
pub use symphonia_wav_converter::SymphoniaWavConverter;
pub use transcription_engine_factory::{EngineFactoryError, TranscriptionEngineFactory};
