use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use vocal_api::application::services::TranscriptionService;
use vocal_api::infrastructure::audio::{AudioConverterFactory, TranscriptionEngineFactory};
use vocal_api::infrastructure::build_http_client;
use vocal_api::infrastructure::llm::GeminiClient;
use vocal_api::infrastructure::observability::{TracingConfig, init_tracing};
use vocal_api::presentation::{AppState, Environment, HttpConfig, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    init_tracing(&TracingConfig::for_environment(environment))?;

    let settings = Settings::load(environment).inspect_err(|e| {
        tracing::error!(error = %e, "Invalid configuration, refusing to start");
    })?;
    tracing::info!(
        environment = %environment,
        settings_file = %environment.settings_file(),
        "Starting vocal-api"
    );
    tracing::debug!(speech = ?settings.speech, audio = ?settings.audio, "Settings loaded");

    let converter = AudioConverterFactory::create(settings.audio.converter)
        .context("Failed to initialize audio converter")?;
    let engine = TranscriptionEngineFactory::create(&settings.speech, &settings.google.api_key)
        .context("Failed to initialize speech engine")?;

    let llm_client = Arc::new(GeminiClient::new(
        build_http_client(Duration::from_secs(
            settings.translation.request_timeout_secs,
        ))?,
        settings.google.api_key.clone(),
        settings.translation.base_url.clone(),
        settings.translation.model.clone(),
    ));
    tracing::info!(model = %settings.translation.model, "Gemini translation client configured");

    let transcription_service = Arc::new(TranscriptionService::new(
        converter,
        engine,
        llm_client,
        settings.audio.scratch_root(),
        settings.audio.unrecognized_placeholder.clone(),
    ));

    let state = AppState {
        transcription_service,
        http: HttpConfig::from_settings(&settings),
    };

    let router = create_router(state);

    let listener = TcpListener::bind((settings.server.host.as_str(), settings.server.port))
        .await
        .with_context(|| {
            format!(
                "Failed to bind {}:{}",
                settings.server.host, settings.server.port
            )
        })?;
    tracing::info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
