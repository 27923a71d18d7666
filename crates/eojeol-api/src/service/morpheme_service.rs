//! Morphological analysis service.
//!
//! Validates requests, runs the analyzer, and regroups tokens into word
//! records. Both endpoints share the one grouping routine in the core crate;
//! the handlers never touch tokens directly.

use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use eojeol::analyzer::{Analyzer, KiwiAnalyzer};
use eojeol::grouper::group_words;
use eojeol::models::{Analysis, Word};

use crate::config::{Config, MAX_TEXT_LENGTH};
use crate::errors::{ApiError, Result};
use crate::models::{AnalyzeRequest, AnalyzeResponse, BatchAnalyzeRequest, BatchAnalyzeResponse};

/// Common interface for the analysis service.
///
/// Allows swapping the production implementation (`MorphemeService`) for
/// test stubs/mocks.
pub trait AnalyzeService: Send + Sync {
  /// Analyzes a single text.
  ///
  /// # Errors
  /// - Input error (blank text, length exceeded)
  /// - Analyzer failure
  fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse>;

  /// Analyzes a sequence of texts, skipping blank entries.
  ///
  /// # Errors
  /// - Input error (length exceeded)
  /// - Analyzer failure; partial results are discarded
  fn analyze_batch(&self, request: BatchAnalyzeRequest) -> Result<BatchAnalyzeResponse>;
}

/// Production analysis service backed by a shared analyzer instance.
pub struct MorphemeService {
  /// Analyzer handle, loaded once and reused across all requests
  analyzer: Arc<dyn Analyzer>,
}

impl MorphemeService {
  /// Creates a service around an already constructed analyzer.
  #[must_use]
  pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
    Self { analyzer }
  }

  /// Creates a service by loading the Kiwi analyzer from configuration.
  ///
  /// # Errors
  /// Returns a configuration error if the library or model cannot be loaded.
  pub fn from_config(config: &Config) -> Result<Self> {
    let analyzer = KiwiAnalyzer::new(&config.analyzer)
      .map_err(|e| ApiError::config(format!("failed to initialize the analyzer: {e}")))?;
    Ok(Self::new(Arc::new(analyzer)))
  }

  /// Runs the validate -> tokenize -> group pipeline for one text.
  fn analyze_text(&self, text: &str) -> Result<Vec<Word>> {
    let text_bytes = text.len();
    if text_bytes > MAX_TEXT_LENGTH {
      return Err(ApiError::text_too_long(text_bytes, MAX_TEXT_LENGTH));
    }

    let tokens = self.analyzer.tokenize(text)?;
    Ok(group_words(text, &tokens))
  }
}

impl AnalyzeService for MorphemeService {
  fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse> {
    // The single endpoint rejects blank input as a client error. The batch
    // endpoint skips blank entries instead; the asymmetry is the observed
    // contract and is kept deliberately.
    if request.text.trim().is_empty() {
      return Err(ApiError::invalid_input("text is blank"));
    }

    let start = Instant::now();
    let words = self.analyze_text(&request.text)?;

    info!(
      word_count = words.len(),
      elapsed_ms = start.elapsed().as_millis() as u64,
      "analysis completed"
    );

    Ok(AnalyzeResponse { words })
  }

  fn analyze_batch(&self, request: BatchAnalyzeRequest) -> Result<BatchAnalyzeResponse> {
    let start = Instant::now();
    let mut results = Vec::with_capacity(request.texts.len());

    for text in &request.texts {
      if text.trim().is_empty() {
        continue;
      }

      let words = self.analyze_text(text)?;
      results.push(Analysis {
        text: text.clone(),
        words,
      });
    }

    info!(
      input_count = request.texts.len(),
      result_count = results.len(),
      elapsed_ms = start.elapsed().as_millis() as u64,
      "batch analysis completed"
    );

    Ok(BatchAnalyzeResponse { results })
  }
}
