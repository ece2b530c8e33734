use std::collections::HashMap;

use axum::extract::{Path, Query};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use vocal_api::application::ports::{LlmClient, LlmClientError};
use vocal_api::infrastructure::llm::GeminiClient;

use crate::helpers::{start_mock_server, unreachable_base_url};

const MODEL: &str = "gemini-1.5-flash";

async fn start_fixed_server(
    status: u16,
    body: &'static str,
) -> (String, tokio::sync::oneshot::Sender<()>) {
    let app = Router::new().route(
        "/v1beta/models/{action}",
        post(move || async move {
            let status = axum::http::StatusCode::from_u16(status).unwrap();
            (
                status,
                [(axum::http::header::CONTENT_TYPE, "application/json")],
                body,
            )
                .into_response()
        }),
    );
    start_mock_server(app).await
}

fn client(base_url: &str) -> GeminiClient {
    GeminiClient::new(
        reqwest::Client::new(),
        "gemini-key".to_string(),
        Some(format!("{}/v1beta", base_url)),
        MODEL.to_string(),
    )
}

#[tokio::test]
async fn given_candidate_with_parts_when_generating_then_concatenates_text() {
    let body = r#"{"candidates": [{"content": {"parts": [{"text": "Bonjour "}, {"text": "le monde\n"}], "role": "model"}}]}"#;
    let (base_url, shutdown_tx) = start_fixed_server(200, body).await;

    let result = client(&base_url).generate("Translate this into fr: hello world").await;

    assert_eq!(result.unwrap(), "Bonjour le monde");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_rate_limit_status_when_generating_then_returns_rate_limited() {
    let (base_url, shutdown_tx) =
        start_fixed_server(429, r#"{"error": {"status": "RESOURCE_EXHAUSTED"}}"#).await;

    let result = client(&base_url).generate("prompt").await;

    assert!(matches!(result, Err(LlmClientError::RateLimited)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_server_error_when_generating_then_returns_api_error() {
    let (base_url, shutdown_tx) =
        start_fixed_server(500, r#"{"error": {"message": "internal"}}"#).await;

    let result = client(&base_url).generate("prompt").await;

    match result {
        Err(LlmClientError::ApiRequestFailed(msg)) => assert!(msg.contains("500")),
        other => panic!("expected ApiRequestFailed, got {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_no_candidates_when_generating_then_returns_invalid_response() {
    let (base_url, shutdown_tx) = start_fixed_server(200, r#"{"candidates": []}"#).await;

    let result = client(&base_url).generate("prompt").await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_blocked_candidate_without_content_when_generating_then_returns_invalid_response()
{
    let (base_url, shutdown_tx) =
        start_fixed_server(200, r#"{"candidates": [{"finishReason": "SAFETY"}]}"#).await;

    let result = client(&base_url).generate("prompt").await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unreachable_service_when_generating_then_returns_api_error() {
    let base_url = unreachable_base_url().await;

    let result = client(&base_url).generate("prompt").await;

    assert!(matches!(result, Err(LlmClientError::ApiRequestFailed(_))));
}

#[tokio::test]
async fn given_prompt_when_generating_then_sends_model_key_and_prompt_text() {
    let app = Router::new().route(
        "/v1beta/models/{action}",
        post(
            |Path(action): Path<String>,
             Query(query): Query<HashMap<String, String>>,
             Json(body): Json<serde_json::Value>| async move {
                let echoed = format!(
                    "{}|{}|{}",
                    action,
                    query.get("key").cloned().unwrap_or_default(),
                    body["contents"][0]["parts"][0]["text"]
                        .as_str()
                        .unwrap_or_default()
                );
                Json(serde_json::json!({
                    "candidates": [{"content": {"parts": [{"text": echoed}]}}]
                }))
            },
        ),
    );
    let (base_url, shutdown_tx) = start_mock_server(app).await;

    let result = client(&base_url)
        .generate("Translate this into es: good morning")
        .await;

    assert_eq!(
        result.unwrap(),
        "gemini-1.5-flash:generateContent|gemini-key|Translate this into es: good morning"
    );
    shutdown_tx.send(()).ok();
}
