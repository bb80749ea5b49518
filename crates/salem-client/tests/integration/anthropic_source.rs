//! Anthropic fact source against a local server.

use crate::common::{OneShotServer, config_for, shakshuka};
use salem_client::service::{FALLBACK_FACT, NO_TEXT_FACT};
use salem_client::{AnthropicFactSource, CultureConfig, CultureService, FactOrigin, FactSource};
use std::sync::Arc;

#[tokio::test]
async fn test_request_shape_and_text_reply() {
    let server = OneShotServer::start(
        200,
        r#"{"id": "msg_1", "type": "message", "content": [{"type": "text", "text": "Shakshuka means 'mixture'."}]}"#,
    )
    .await;

    let source = AnthropicFactSource::new(config_for(&server.endpoint)).unwrap();
    let fact = source.fetch_fact(&shakshuka()).await.unwrap();
    assert_eq!(fact.as_deref(), Some("Shakshuka means 'mixture'."));

    let request = server.request().await;
    assert_eq!(request.request_line, "POST /v1/messages HTTP/1.1");
    assert_eq!(request.header("x-api-key"), Some("sk-test-key"));
    assert_eq!(request.header("anthropic-version"), Some("2023-06-01"));
    assert_eq!(request.header("content-type"), Some("application/json"));

    let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(body["model"], "claude-sonnet-4-20250514");
    assert_eq!(body["max_tokens"], 300);
    assert_eq!(
        body["messages"][0]["content"],
        "Share a brief cultural fact about the dish \"Shakshuka\" from North African cuisine. Keep it to 2-3 sentences."
    );
}

#[tokio::test]
async fn test_reply_without_text_block() {
    let server = OneShotServer::start(200, r#"{"content": []}"#).await;
    let source = Arc::new(AnthropicFactSource::new(config_for(&server.endpoint)).unwrap());

    let fact = CultureService::new(source).fact_for(&shakshuka()).await;
    assert_eq!(fact.text, NO_TEXT_FACT);
    assert_eq!(fact.origin, FactOrigin::NoText);
    server.request().await;
}

const AUTH_ERROR_BODY: &str =
    r#"{"type": "error", "error": {"type": "authentication_error", "message": "invalid x-api-key"}}"#;

#[tokio::test]
async fn test_api_error_body_has_no_text() {
    let server = OneShotServer::start(401, AUTH_ERROR_BODY).await;
    let source = Arc::new(AnthropicFactSource::new(config_for(&server.endpoint)).unwrap());

    assert_eq!(source.fetch_fact(&shakshuka()).await.unwrap(), None);
    server.request().await;
}

#[tokio::test]
async fn test_api_error_body_maps_to_no_text_fact() {
    let server = OneShotServer::start(401, AUTH_ERROR_BODY).await;
    let source = Arc::new(AnthropicFactSource::new(config_for(&server.endpoint)).unwrap());

    let fact = CultureService::new(source).fact_for(&shakshuka()).await;
    assert_eq!(fact.text, NO_TEXT_FACT);
    assert_eq!(fact.origin, FactOrigin::NoText);
    server.request().await;
}

#[tokio::test]
async fn test_missing_key_still_sends_request() {
    let server = OneShotServer::start(401, AUTH_ERROR_BODY).await;
    let config = CultureConfig {
        api_key: None,
        ..config_for(&server.endpoint)
    };
    let source = Arc::new(AnthropicFactSource::new(config).unwrap());

    let fact = CultureService::new(source).fact_for(&shakshuka()).await;
    assert_eq!(fact.origin, FactOrigin::NoText);

    let request = server.request().await;
    assert_eq!(request.header("x-api-key"), None);
    assert_eq!(request.header("anthropic-version"), Some("2023-06-01"));
}

#[tokio::test]
async fn test_error_status_without_json_falls_back() {
    let server = OneShotServer::start(502, "upstream unavailable").await;
    let source = Arc::new(AnthropicFactSource::new(config_for(&server.endpoint)).unwrap());

    let fact = CultureService::new(source).fact_for(&shakshuka()).await;
    assert_eq!(fact.text, FALLBACK_FACT);
    assert_eq!(fact.origin, FactOrigin::Fallback);
    server.request().await;
}

#[tokio::test]
async fn test_service_fallback_on_malformed_body() {
    let server = OneShotServer::start(200, "not json").await;
    let source = Arc::new(AnthropicFactSource::new(config_for(&server.endpoint)).unwrap());

    let fact = CultureService::new(source).fact_for(&shakshuka()).await;
    assert_eq!(fact.text, FALLBACK_FACT);
    assert_eq!(fact.origin, FactOrigin::Fallback);
    server.request().await;
}
