pub mod config;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::{
    ConverterProvider, Environment, Settings, SettingsError, SpeechProvider, SpeechSettings,
};
pub use router::create_router;
pub use state::{AppState, HttpConfig};
