use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::application::services::TranscriptionService;
use crate::presentation::config::Settings;

const DEFAULT_ALLOWED_ORIGINS: [&str; 2] =
    ["http://localhost:5173", "https://multilingualvoice.vercel.app"];
const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// HTTP-surface knobs consumed by the router.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub allowed_origins: Vec<String>,
    pub max_upload_bytes: usize,
}

impl HttpConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            allowed_origins: settings.server.allowed_origins.clone(),
            max_upload_bytes: usize::try_from(settings.audio.max_upload_bytes)
                .unwrap_or(usize::MAX),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|o| o.to_string())
                .collect(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

pub struct AppState<L>
where
    L: LlmClient + ?Sized,
{
    pub transcription_service: Arc<TranscriptionService<L>>,
    pub http: HttpConfig,
}

impl<L> Clone for AppState<L>
where
    L: LlmClient + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            transcription_service: Arc::clone(&self.transcription_service),
            http: self.http.clone(),
        }
    }
}
