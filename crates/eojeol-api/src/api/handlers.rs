//! HTTP handler definitions

use axum::{Json, extract::State};
use tracing::{debug, error, info};

use crate::config::SERVICE_NAME;
use crate::errors::ApiError;
use crate::models::{
  AnalyzeRequest, AnalyzeResponse, BatchAnalyzeRequest, BatchAnalyzeResponse, HealthResponse,
};

use super::extract::ApiJson;
use super::state::AppState;

/// POST /analyze endpoint
///
/// Runs morphological analysis on a single Korean text and returns the
/// result grouped into eojeol (word) units.
///
/// # Request Body
/// ```json
/// { "text": "분석할 문장" }
/// ```
///
/// # Response
/// - 200 OK: analysis succeeded
/// - 400 Bad Request: input error (missing or blank text, text too long)
/// - 500 Internal Server Error: analyzer failure
pub async fn post_analyze(
  State(state): State<AppState>,
  ApiJson(request): ApiJson<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
  debug!(text_len = request.text.len(), "analysis request received");

  // Analysis is CPU-bound; run under spawn_blocking so the async runtime is
  // never blocked mid-request.
  let service = state.service.clone();

  let response =
    tokio::task::spawn_blocking(move || service.analyze(request)).await.map_err(|e| {
      error!(error = %e, "spawn_blocking failed");
      ApiError::internal("failed to execute analysis task")
    })??;

  info!(word_count = response.words.len(), "analysis completed");

  Ok(Json(response))
}

/// POST /batch-analyze endpoint
///
/// Runs the same analysis pipeline over a sequence of texts. Blank entries
/// are skipped; remaining results preserve input order. A failure anywhere
/// aborts the whole batch.
///
/// # Request Body
/// ```json
/// { "texts": ["문장1", "문장2"] }
/// ```
///
/// # Response
/// - 200 OK: batch succeeded
/// - 400 Bad Request: texts missing or not an array of strings
/// - 500 Internal Server Error: analyzer failure
pub async fn post_batch_analyze(
  State(state): State<AppState>,
  ApiJson(request): ApiJson<BatchAnalyzeRequest>,
) -> Result<Json<BatchAnalyzeResponse>, ApiError> {
  debug!(input_count = request.texts.len(), "batch analysis request received");

  let service = state.service.clone();

  let response =
    tokio::task::spawn_blocking(move || service.analyze_batch(request)).await.map_err(|e| {
      error!(error = %e, "spawn_blocking failed");
      ApiError::internal("failed to execute analysis task")
    })??;

  info!(result_count = response.results.len(), "batch analysis completed");

  Ok(Json(response))
}

/// GET /health endpoint
///
/// Reports a fixed payload independent of analyzer state.
pub async fn get_health() -> Json<HealthResponse> {
  Json(HealthResponse {
    status: "healthy",
    service: SERVICE_NAME,
  })
}
