//! Integration tests for the Gemini adapter
//!
//! Each test points a `GeminiClient` at a wiremock server and checks how
//! upstream behaviour maps to domain results.

use std::time::Duration;

use picscribe_domain::{DescriptionError, DescriptionGenerator, GenerationRequest};
use picscribe_gemini::{GeminiClient, GeminiConfig};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL_PATH: &str = "/models/test-model:generateContent";

fn config_for(server: &MockServer) -> GeminiConfig {
    GeminiConfig {
        api_key: Some("test-key".to_string()),
        base_url: server.uri(),
        model: "test-model".to_string(),
        timeout: Duration::from_secs(5),
    }
}

fn request() -> GenerationRequest {
    GenerationRequest::new("AAAA", "image/png").expect("valid request")
}

fn text_response(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }], "role": "model" },
            "finishReason": "STOP"
        }]
    })
}

#[tokio::test]
async fn test_generate_sends_prompt_and_inline_image() {
    let mock_server = MockServer::start().await;

    let expected_body = serde_json::json!({
        "contents": [{
            "parts": [
                { "text": "Describe this." },
                { "inlineData": { "mimeType": "image/png", "data": "AAAA" } }
            ]
        }]
    });

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(query_param("key", "test-key"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response("a cat")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = GeminiClient::new(config_for(&mock_server));
    let text = client.generate(&request(), "Describe this.").await;

    assert_eq!(text.unwrap(), "a cat");
}

#[tokio::test]
async fn test_generate_returns_raw_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response("  <b>raw</b>  ")))
        .mount(&mock_server)
        .await;

    let client = GeminiClient::new(config_for(&mock_server));
    let text = client.generate(&request(), "prompt").await.unwrap();

    // Sanitizing is the service's job, not the adapter's
    assert_eq!(text, "  <b>raw</b>  ");
}

#[tokio::test]
async fn test_error_status_is_upstream_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = GeminiClient::new(config_for(&mock_server));
    let err = client.generate(&request(), "prompt").await.unwrap_err();

    assert!(matches!(err, DescriptionError::UpstreamFailure(_)));
    assert_eq!(err.to_string(), "Failed to generate description");
}

#[tokio::test]
async fn test_missing_text_is_empty_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "candidates": [{ "finishReason": "SAFETY" }] })),
        )
        .mount(&mock_server)
        .await;

    let client = GeminiClient::new(config_for(&mock_server));
    let err = client.generate(&request(), "prompt").await.unwrap_err();

    assert_eq!(err, DescriptionError::EmptyResult);
}

#[tokio::test]
async fn test_malformed_body_is_upstream_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = GeminiClient::new(config_for(&mock_server));
    let err = client.generate(&request(), "prompt").await.unwrap_err();

    assert!(matches!(err, DescriptionError::UpstreamFailure(_)));
}

#[tokio::test]
async fn test_slow_upstream_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(text_response("too late"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let config = GeminiConfig {
        timeout: Duration::from_millis(100),
        ..config_for(&mock_server)
    };
    let client = GeminiClient::new(config);

    let started = std::time::Instant::now();
    let err = client.generate(&request(), "prompt").await.unwrap_err();

    assert_eq!(err, DescriptionError::Timeout);
    assert!(
        started.elapsed() < Duration::from_secs(2),
        "call should be abandoned at the deadline"
    );
}

#[tokio::test]
async fn test_missing_api_key_makes_no_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response("unused")))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = GeminiConfig {
        api_key: None,
        ..config_for(&mock_server)
    };
    let client = GeminiClient::new(config);
    let err = client.generate(&request(), "prompt").await.unwrap_err();

    assert_eq!(
        err,
        DescriptionError::Config("API key not configured on server".to_string())
    );
}

#[tokio::test]
async fn test_unreachable_upstream_is_upstream_failure() {
    // Nothing listens on port 1
    let config = GeminiConfig {
        api_key: Some("test-key".to_string()),
        base_url: "http://127.0.0.1:1".to_string(),
        model: "test-model".to_string(),
        timeout: Duration::from_secs(5),
    };
    let client = GeminiClient::new(config);
    let err = client.generate(&request(), "prompt").await.unwrap_err();

    match err {
        DescriptionError::UpstreamFailure(detail) => {
            assert!(!detail.contains("test-key"), "API key leaked: {detail}");
        }
        other => panic!("expected upstream failure, got {other:?}"),
    }
}
