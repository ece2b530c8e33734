use std::fmt;
use std::str::FromStr;

pub const DEFAULT_TARGET_LANGUAGE: &str = "fr";

const MAX_LANGUAGE_LENGTH: usize = 35;

/// Language code handed to the translation prompt, e.g. `fr` or `pt-BR`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetLanguage(String);

impl TargetLanguage {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TargetLanguage {
    fn default() -> Self {
        Self(DEFAULT_TARGET_LANGUAGE.to_string())
    }
}

impl FromStr for TargetLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Target language must not be empty".to_string());
        }
        if trimmed.len() > MAX_LANGUAGE_LENGTH {
            return Err(format!(
                "Target language is too long: {} chars (max {})",
                trimmed.len(),
                MAX_LANGUAGE_LENGTH
            ));
        }
        if !trimmed
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return Err(format!("Invalid target language: {}", trimmed));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
