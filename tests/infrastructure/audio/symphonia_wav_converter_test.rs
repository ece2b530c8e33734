use tempfile::TempDir;

use vocal_api::application::ports::{AudioConversionError, AudioConverter};
use vocal_api::infrastructure::audio::SymphoniaWavConverter;
use vocal_api::infrastructure::audio::audio_decoder::decode_file_to_pcm;

use crate::helpers::write_wav;

#[test]
fn given_44khz_stereo_wav_when_converting_then_writes_16khz_mono_pcm16() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("input.wav");
    let target = dir.path().join("converted.wav");
    write_wav(&source, 44_100, 2, 4_410);

    SymphoniaWavConverter
        .convert_to_wav(&source, &target)
        .unwrap();

    let reader = hound::WavReader::open(&target).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.sample_rate, 16_000);
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.bits_per_sample, 16);
    let frames = reader.duration() as usize;
    assert!(frames > 0);
    assert!(frames < 4_410, "output should be fewer frames than 44.1kHz input");
}

#[test]
fn given_16khz_mono_wav_when_decoding_then_sample_count_is_preserved() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("input.wav");
    write_wav(&source, 16_000, 1, 1_600);

    let pcm = decode_file_to_pcm(&source).unwrap();

    assert_eq!(pcm.len(), 1_600);
}

#[test]
fn given_garbage_bytes_when_converting_then_returns_error() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("upload.mp3");
    let target = dir.path().join("converted.wav");
    std::fs::write(&source, vec![0x13u8; 256]).unwrap();

    let result = SymphoniaWavConverter.convert_to_wav(&source, &target);

    assert!(result.is_err());
}

#[test]
fn given_empty_file_when_converting_then_returns_error() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("upload.bin");
    let target = dir.path().join("converted.wav");
    std::fs::write(&source, b"").unwrap();

    let result = SymphoniaWavConverter.convert_to_wav(&source, &target);

    assert!(result.is_err());
}

#[test]
fn given_missing_source_when_converting_then_returns_decoding_error() {
    let dir = TempDir::new().unwrap();

    let result = SymphoniaWavConverter
        .convert_to_wav(&dir.path().join("absent.mp3"), &dir.path().join("out.wav"));

    assert!(matches!(
        result,
        Err(AudioConversionError::DecodingFailed(_))
    ));
}

#[test]
fn given_flac_stereo_fixture_when_converting_then_writes_16khz_mono_pcm16() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("tone.flac");
    std::fs::copy(crate::helpers::fixture_path("tone_44k_stereo.flac"), &source).unwrap();
    let target = dir.path().join("converted.wav");

    SymphoniaWavConverter
        .convert_to_wav(&source, &target)
        .unwrap();

    let mut reader = hound::WavReader::open(&target).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.sample_rate, 16_000);
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.bits_per_sample, 16);
    // 4410 frames at 44.1kHz is 100ms, which is 1600 frames at 16kHz.
    assert_eq!(reader.duration(), 1_600);
    let peak = reader
        .samples::<i16>()
        .map(|s| s.unwrap().unsigned_abs())
        .max()
        .unwrap();
    assert!(peak > 1_000, "decoded tone should not be silent, peak {}", peak);
}
