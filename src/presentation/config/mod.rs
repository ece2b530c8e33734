mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    API_KEY_VAR, AudioSettings, ConverterProvider, GoogleSettings, HOST_VAR, PORT_VAR,
    ServerSettings, Settings, SettingsError, SpeechProvider, SpeechSettings, TranslationSettings,
};
