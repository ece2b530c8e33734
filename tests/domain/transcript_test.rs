use vocal_api::domain::Transcript;

#[test]
fn given_recognized_transcript_when_rendering_then_returns_recognized_text() {
    let transcript = Transcript::Recognized("hello".to_string());

    assert_eq!(transcript.text("placeholder"), "hello");
    assert!(!transcript.is_inconclusive());
}

#[test]
fn given_inconclusive_transcript_when_rendering_then_returns_placeholder() {
    let transcript = Transcript::Inconclusive;

    assert_eq!(transcript.text("placeholder"), "placeholder");
    assert!(transcript.is_inconclusive());
}
