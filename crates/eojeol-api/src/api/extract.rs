//! Request extraction

use axum::extract::FromRequest;
use axum::extract::rejection::JsonRejection;

use crate::errors::ApiError;

/// `Json` extractor whose rejection is an [`ApiError`].
///
/// Axum's stock `Json` rejects malformed bodies with 415/422 plain-text
/// responses; the API contract promises 400 with a JSON error body, so the
/// rejection is routed through [`ApiError`] instead.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    ApiError::invalid_input(rejection.body_text())
  }
}
