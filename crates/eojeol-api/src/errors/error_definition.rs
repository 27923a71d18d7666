//! API error definitions

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use eojeol::errors::{AnalyzerError, EojeolError};

/// Error category
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// Invalid input value
  InvalidInput,
  /// Text exceeds the maximum length
  TextTooLong,
  /// The analyzer failed during tokenization
  Analyzer,
  /// Internal error
  Internal,
  /// Configuration error
  Config,
}

impl ApiErrorKind {
  /// Stable error code for clients and logs
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::InvalidInput => "invalid_input",
      Self::TextTooLong => "text_too_long",
      Self::Analyzer => "analyzer_error",
      Self::Internal => "internal_error",
      Self::Config => "config_error",
    }
  }

  /// HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::InvalidInput | Self::TextTooLong => StatusCode::BAD_REQUEST,
      Self::Analyzer | Self::Internal | Self::Config => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// API error
#[derive(Debug, Error)]
pub enum ApiError {
  /// Invalid input value
  #[error("invalid input: {0}")]
  InvalidInput(String),

  /// Text exceeds the maximum length
  #[error("text too long: {0} bytes (maximum: {1} bytes)")]
  TextTooLong(usize, usize),

  /// The analyzer failed; the underlying message is surfaced to the caller
  #[error("analysis failed: {0}")]
  Analyzer(String),

  /// Internal error
  #[error("internal error: {0}")]
  Internal(String),

  /// Configuration error
  #[error("configuration error: {0}")]
  Config(String),
}

impl ApiError {
  /// Error category
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::InvalidInput(_) => ApiErrorKind::InvalidInput,
      Self::TextTooLong(_, _) => ApiErrorKind::TextTooLong,
      Self::Analyzer(_) => ApiErrorKind::Analyzer,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// Stable error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// Creates an invalid-input error
  #[must_use]
  pub fn invalid_input(message: impl Into<String>) -> Self {
    Self::InvalidInput(message.into())
  }

  /// Creates a text-too-long error
  #[must_use]
  pub fn text_too_long(actual: usize, max: usize) -> Self {
    Self::TextTooLong(actual, max)
  }

  /// Creates an analyzer error
  #[must_use]
  pub fn analyzer(message: impl Into<String>) -> Self {
    Self::Analyzer(message.into())
  }

  /// Creates an internal error
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// Creates a configuration error
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// JSON structure of an error response.
///
/// `error` carries the human-readable message; `code` is a stable
/// machine-readable category.
#[derive(Serialize)]
struct ErrorResponse {
  error: String,
  code: &'static str,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let body = ErrorResponse {
      error: self.to_string(),
      code: self.code(),
    };

    (status, Json(body)).into_response()
  }
}

/// Maps domain-layer errors to API-layer errors.
///
/// Analyzer input rejections become client errors; everything else is a
/// server fault.
impl From<EojeolError> for ApiError {
  fn from(err: EojeolError) -> Self {
    match err {
      EojeolError::Analyzer(AnalyzerError::InvalidInput { reason }) => {
        ApiError::invalid_input(reason)
      }
      EojeolError::Analyzer(analyzer_err) => ApiError::analyzer(analyzer_err.to_string()),
      EojeolError::Config(config_err) => ApiError::config(config_err.to_string()),
      // #[non_exhaustive] enum; map future variants conservatively
      _ => ApiError::internal(format!("unknown error: {err}")),
    }
  }
}

impl From<AnalyzerError> for ApiError {
  fn from(err: AnalyzerError) -> Self {
    EojeolError::from(err).into()
  }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ApiError>;
