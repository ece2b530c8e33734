/// What the speech service made of an upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transcript {
    Recognized(String),
    /// The service answered but found no intelligible speech.
    Inconclusive,
}

impl Transcript {
    pub fn text<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self {
            Transcript::Recognized(text) => text,
            Transcript::Inconclusive => placeholder,
        }
    }

    pub fn is_inconclusive(&self) -> bool {
        matches!(self, Transcript::Inconclusive)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionOutcome {
    pub transcript: Transcript,
    pub transcription: String,
    pub translation: String,
}
