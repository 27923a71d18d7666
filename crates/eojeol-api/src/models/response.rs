//! Response model definitions

use serde::Serialize;

use eojeol::models::{Analysis, Word};

/// Single-text analysis response
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
  /// Word records, one per eojeol, in position order
  pub words: Vec<Word>,
}

/// Batch analysis response
#[derive(Debug, Serialize)]
pub struct BatchAnalyzeResponse {
  /// One entry per non-blank input text, in input order
  pub results: Vec<Analysis>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
  /// Fixed status value, `"healthy"`
  pub status: &'static str,
  /// Service name
  pub service: &'static str,
}
