use std::collections::HashMap;
use std::path::PathBuf;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";
pub const HOST_VAR: &str = "HOST";
pub const PORT_VAR: &str = "PORT";

const DEFAULT_ALLOWED_ORIGINS: [&str; 2] =
    ["http://localhost:5173", "https://multilingualvoice.vercel.app"];
const DEFAULT_PLACEHOLDER: &str = "Désolé, je n'ai pas pu comprendre l'audio.";
const DEFAULT_MAX_UPLOAD_BYTES: u64 = 25 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub google: GoogleSettings,
    pub translation: TranslationSettings,
    pub speech: SpeechSettings,
    pub audio: AudioSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
}

#[derive(Clone, Deserialize)]
pub struct GoogleSettings {
    #[serde(default)]
    pub api_key: String,
}

impl std::fmt::Debug for GoogleSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleSettings")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslationSettings {
    pub model: String,
    pub base_url: Option<String>,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeechProvider {
    Google,
    #[serde(rename = "openai")]
    OpenAi,
}

#[derive(Clone, Deserialize)]
pub struct SpeechSettings {
    pub provider: SpeechProvider,
    pub language_code: String,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub request_timeout_secs: u64,
}

impl std::fmt::Debug for SpeechSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechSettings")
            .field("provider", &self.provider)
            .field("language_code", &self.language_code)
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConverterProvider {
    /// symphonia first, ffmpeg as fallback when the binary is installed.
    Auto,
    Symphonia,
    Ffmpeg,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AudioSettings {
    pub converter: ConverterProvider,
    pub scratch_dir: Option<String>,
    pub max_upload_bytes: u64,
    pub unrecognized_placeholder: String,
}

impl AudioSettings {
    pub fn scratch_root(&self) -> PathBuf {
        self.scratch_dir
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(std::env::temp_dir)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("GOOGLE_API_KEY is required")]
    MissingApiKey,
    #[error("invalid setting {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl Settings {
    /// Loads settings from the process environment.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        Self::from_sources(environment, std::env::vars().collect())
    }

    /// Layers defaults, the optional `appsettings.{env}` file, `APP__`
    /// variables and finally the plain `HOST`/`PORT`/`GOOGLE_API_KEY`.
    pub fn from_sources(
        environment: Environment,
        vars: HashMap<String, String>,
    ) -> Result<Self, SettingsError> {
        let host = vars.get(HOST_VAR).cloned();
        let port = vars.get(PORT_VAR).cloned();
        let api_key = vars.get(API_KEY_VAR).cloned();

        let configuration = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("server.allowed_origins", DEFAULT_ALLOWED_ORIGINS.to_vec())?
            .set_default("translation.model", "gemini-1.5-flash")?
            .set_default("translation.request_timeout_secs", 60)?
            .set_default("speech.provider", "google")?
            .set_default("speech.language_code", "en-US")?
            .set_default("speech.request_timeout_secs", 60)?
            .set_default("audio.converter", "auto")?
            .set_default("audio.max_upload_bytes", DEFAULT_MAX_UPLOAD_BYTES)?
            .set_default("audio.unrecognized_placeholder", DEFAULT_PLACEHOLDER)?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(" ")
                    .with_list_parse_key("server.allowed_origins")
                    .try_parsing(true)
                    .source(Some(vars)),
            )
            .set_override_option("server.host", host)?
            .set_override_option("server.port", port)?
            .set_override_option("google.api_key", api_key)?
            .build()?;

        let settings: Settings = configuration.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.google.api_key.trim().is_empty() {
            return Err(SettingsError::MissingApiKey);
        }
        if self.audio.unrecognized_placeholder.trim().is_empty() {
            return Err(SettingsError::Invalid {
                field: "audio.unrecognized_placeholder",
                reason: "must not be empty".to_string(),
            });
        }
        if self.audio.max_upload_bytes == 0 {
            return Err(SettingsError::Invalid {
                field: "audio.max_upload_bytes",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.speech.provider == SpeechProvider::OpenAi && self.speech.api_key.is_none() {
            return Err(SettingsError::Invalid {
                field: "speech.api_key",
                reason: "required for the openai provider".to_string(),
            });
        }
        Ok(())
    }
}
