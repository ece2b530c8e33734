mod error_response;
mod health;
mod transcribe;

pub use error_response::{ErrorResponse, error_response};
pub use health::{HealthResponse, SERVICE_NAME, health_handler};
pub use transcribe::{TranscribeParams, TranscribeResponse, transcribe_handler};
