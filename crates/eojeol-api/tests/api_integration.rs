//! API integration tests
//!
//! Verifies HTTP endpoint behavior through the Router. Uses a stub service
//! plus the real `MorphemeService` with a fixture analyzer, so no native
//! library is needed and the tests stay fast.

use std::sync::Arc;

use axum::{
  body::Body,
  http::{Request, StatusCode},
};
use tower::ServiceExt;

use eojeol::analyzer::Analyzer;
use eojeol::errors::AnalyzerError;
use eojeol::models::Token;
use eojeol_api::{
  api::{AppState, create_router},
  config::Config,
  service::{AnalyzeService, MorphemeService},
};

/// Fixture analyzer reproducing Kiwi's output for the test sentences.
struct FixtureAnalyzer;

impl Analyzer for FixtureAnalyzer {
  fn tokenize(&self, text: &str) -> Result<Vec<Token>, AnalyzerError> {
    let tokens = match text {
      "안녕하세요" => vec![
        Token::new("안녕", "NNG", 0, 0, 2),
        Token::new("하", "XSV", 0, 2, 1),
        Token::new("세요", "EF", 0, 3, 2),
      ],
      "안녕" => vec![Token::new("안녕", "IC", 0, 0, 2)],
      "반가워요" => vec![
        Token::new("반갑", "VA", 0, 0, 3),
        Token::new("어요", "EF", 0, 2, 2),
      ],
      _ => Vec::new(),
    };
    Ok(tokens)
  }
}

/// Analyzer that always fails, for 500-path tests.
struct FailingAnalyzer;

impl Analyzer for FailingAnalyzer {
  fn tokenize(&self, _text: &str) -> Result<Vec<Token>, AnalyzerError> {
    Err(AnalyzerError::Native {
      message: "simulated analyzer failure".to_string(),
    })
  }
}

/// Builds a test Router over the real service with the given analyzer.
fn test_app_with(analyzer: Arc<dyn Analyzer>) -> axum::Router {
  let config = Config::default();
  let service: Arc<dyn AnalyzeService> = Arc::new(MorphemeService::new(analyzer));
  let state = AppState::new(config, service);
  create_router(state)
}

fn test_app() -> axum::Router {
  test_app_with(Arc::new(FixtureAnalyzer))
}

async fn post_json(app: axum::Router, uri: &str, payload: serde_json::Value) -> (StatusCode, serde_json::Value) {
  let response = app
    .oneshot(
      Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap(),
    )
    .await
    .expect("request should succeed");

  let status = response.status();
  let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read body");
  let json = if body_bytes.is_empty() {
    serde_json::Value::Null
  } else {
    serde_json::from_slice(&body_bytes).expect("body should be valid json")
  };

  (status, json)
}

// ============================================================================
// Health check
// ============================================================================

#[tokio::test]
async fn health_check_returns_fixed_payload() {
  let app = test_app();

  let response = app
    .oneshot(Request::builder().method("GET").uri("/health").body(Body::empty()).unwrap())
    .await
    .expect("request should succeed");

  assert_eq!(response.status(), StatusCode::OK);

  let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read body");
  let json: serde_json::Value =
    serde_json::from_slice(&body_bytes).expect("body should be valid json");

  assert_eq!(json["status"], "healthy");
  assert!(json["service"].is_string());
}

// ============================================================================
// Success paths
// ============================================================================

#[tokio::test]
async fn analyze_groups_single_word_sentence() {
  let (status, json) =
    post_json(test_app(), "/analyze", serde_json::json!({ "text": "안녕하세요" })).await;

  assert_eq!(status, StatusCode::OK);

  let words = json["words"].as_array().expect("words should be an array");
  assert_eq!(words.len(), 1);
  assert_eq!(words[0]["word"], "안녕하세요");

  let morphemes = words[0]["morphemes"].as_array().expect("morphemes array");
  assert_eq!(morphemes.len(), 3);
  assert_eq!(morphemes[0]["surface"], "안녕");
  assert_eq!(morphemes[0]["tag"], "NNG");
  assert_eq!(morphemes[0]["start"], 0);
  assert_eq!(morphemes[0]["end"], 2);
  assert_eq!(morphemes[2]["end"], 5);
}

#[tokio::test]
async fn analyze_with_no_tokens_returns_empty_words() {
  let (status, json) =
    post_json(test_app(), "/analyze", serde_json::json!({ "text": "unmapped" })).await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(json["words"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn batch_analyze_skips_blank_entries_in_order() {
  let (status, json) = post_json(
    test_app(),
    "/batch-analyze",
    serde_json::json!({ "texts": ["안녕", "   ", "반가워요"] }),
  )
  .await;

  assert_eq!(status, StatusCode::OK);

  let results = json["results"].as_array().expect("results should be an array");
  assert_eq!(results.len(), 2);
  assert_eq!(results[0]["text"], "안녕");
  assert_eq!(results[1]["text"], "반가워요");
  assert_eq!(results[1]["words"][0]["word"], "반가워요");
}

// ============================================================================
// Client errors
// ============================================================================

#[tokio::test]
async fn analyze_missing_text_field_returns_400() {
  let (status, json) = post_json(test_app(), "/analyze", serde_json::json!({})).await;

  // The Json extractor rejects the body before the handler runs
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(json["code"], "invalid_input");
  assert!(json["error"].is_string());
}

#[tokio::test]
async fn analyze_blank_text_returns_400() {
  let (status, json) =
    post_json(test_app(), "/analyze", serde_json::json!({ "text": "   " })).await;

  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(json["code"], "invalid_input");
  assert!(json["error"].is_string());
}

#[tokio::test]
async fn batch_analyze_missing_texts_returns_400() {
  let (status, json) = post_json(test_app(), "/batch-analyze", serde_json::json!({})).await;

  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(json["code"], "invalid_input");
}

#[tokio::test]
async fn batch_analyze_non_array_texts_returns_400() {
  let (status, json) =
    post_json(test_app(), "/batch-analyze", serde_json::json!({ "texts": "안녕" })).await;

  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(json["code"], "invalid_input");
}

#[tokio::test]
async fn batch_analyze_non_string_element_returns_400() {
  let (status, json) =
    post_json(test_app(), "/batch-analyze", serde_json::json!({ "texts": ["안녕", 42] })).await;

  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(json["code"], "invalid_input");
}

#[tokio::test]
async fn analyze_invalid_json_returns_400() {
  let app = test_app();

  let response = app
    .oneshot(
      Request::builder()
        .method("POST")
        .uri("/analyze")
        .header("content-type", "application/json")
        .body(Body::from("{ invalid json"))
        .unwrap(),
    )
    .await
    .expect("request should succeed");

  assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// Server errors
// ============================================================================

#[tokio::test]
async fn analyze_surfaces_analyzer_failure_as_500() {
  let app = test_app_with(Arc::new(FailingAnalyzer));

  let (status, json) = post_json(app, "/analyze", serde_json::json!({ "text": "안녕" })).await;

  assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
  assert_eq!(json["code"], "analyzer_error");
  assert!(
    json["error"].as_str().unwrap_or_default().contains("simulated analyzer failure"),
    "underlying message should be surfaced"
  );
}

#[tokio::test]
async fn batch_analyze_failure_aborts_whole_batch() {
  let app = test_app_with(Arc::new(FailingAnalyzer));

  let (status, json) = post_json(
    app,
    "/batch-analyze",
    serde_json::json!({ "texts": ["안녕", "반가워요"] }),
  )
  .await;

  assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
  assert_eq!(json["code"], "analyzer_error");
  // No partial results on failure
  assert!(json.get("results").is_none());
}
