//! Router definitions

use axum::{
  Router,
  routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers::{get_health, post_analyze, post_batch_analyze};
use super::state::AppState;
use crate::errors::ApiError;

/// Creates the API router.
///
/// CORS is left permissive; the service fronts a mobile client that calls
/// it from a different origin.
///
/// # Arguments
/// * `state` - application state
///
/// # Returns
/// The configured Router
pub fn create_router(state: AppState) -> Router {
  Router::new()
    .route("/analyze", post(post_analyze))
    .route("/batch-analyze", post(post_batch_analyze))
    .route("/health", get(get_health))
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
    .with_state(state)
}

/// Starts the server.
///
/// # Arguments
/// * `state` - application state
///
/// # Errors
/// Returns an error if the server fails to start.
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = &state.config.bind_addr;
  let listener = tokio::net::TcpListener::bind(addr)
    .await
    .map_err(|e| ApiError::config(format!("failed to bind: {}", e)))?;

  tracing::info!("starting server: http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .await
    .map_err(|e| ApiError::internal(format!("server error: {}", e)))?;

  Ok(())
}
