use vocal_api::infrastructure::audio::{EngineFactoryError, TranscriptionEngineFactory};
use vocal_api::presentation::{SpeechProvider, SpeechSettings};

fn speech_settings(provider: SpeechProvider, api_key: Option<&str>) -> SpeechSettings {
    SpeechSettings {
        provider,
        language_code: "en-US".to_string(),
        base_url: None,
        model: None,
        api_key: api_key.map(str::to_string),
        request_timeout_secs: 5,
    }
}

#[test]
fn given_google_provider_without_own_key_when_creating_then_uses_shared_key() {
    let result = TranscriptionEngineFactory::create(
        &speech_settings(SpeechProvider::Google, None),
        "shared-key",
    );

    assert!(result.is_ok());
}

#[test]
fn given_openai_provider_without_key_when_creating_then_returns_missing_key() {
    let result = TranscriptionEngineFactory::create(
        &speech_settings(SpeechProvider::OpenAi, None),
        "shared-key",
    );

    assert!(matches!(
        result,
        Err(EngineFactoryError::MissingApiKey("openai"))
    ));
}

#[test]
fn given_openai_provider_with_key_when_creating_then_succeeds() {
    let result = TranscriptionEngineFactory::create(
        &speech_settings(SpeechProvider::OpenAi, Some("sk-test")),
        "shared-key",
    );

    assert!(result.is_ok());
}
