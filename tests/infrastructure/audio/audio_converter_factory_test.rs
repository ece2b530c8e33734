use tempfile::TempDir;

use vocal_api::infrastructure::audio::AudioConverterFactory;
use vocal_api::presentation::ConverterProvider;

use crate::helpers::write_wav;

#[test]
fn given_symphonia_provider_when_creating_then_converter_handles_wav() {
    let converter = AudioConverterFactory::create(ConverterProvider::Symphonia).unwrap();
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("in.wav");
    let target = dir.path().join("out.wav");
    write_wav(&source, 22_050, 1, 2_205);

    converter.convert_to_wav(&source, &target).unwrap();

    assert!(target.exists());
}

#[test]
fn given_auto_provider_when_creating_then_converter_handles_flac() {
    let converter = AudioConverterFactory::create(ConverterProvider::Auto).unwrap();
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("in.flac");
    std::fs::copy(crate::helpers::fixture_path("tone_44k_stereo.flac"), &source).unwrap();
    let target = dir.path().join("out.wav");

    converter.convert_to_wav(&source, &target).unwrap();

    let reader = hound::WavReader::open(&target).unwrap();
    assert_eq!(reader.spec().sample_rate, 16_000);
    assert_eq!(reader.spec().channels, 1);
}
