//! eojeol-api server entry point

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use eojeol_api::ApiError;
use eojeol_api::api::AppState;
use eojeol_api::api::run_server;
use eojeol_api::config::Config;
use eojeol_api::service::MorphemeService;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // Initialize logging
  tracing_subscriber::registry().with(tracing_subscriber::fmt::layer()).init();

  // Load configuration
  let config = Config::from_env();
  tracing::info!(bind_addr = %config.bind_addr, "configuration loaded");

  // Initialize the analyzer service (loads the Kiwi library and model once)
  let service = Arc::new(MorphemeService::from_config(&config)?);
  tracing::info!("morphological analysis service initialized");

  // Create application state
  let state = AppState::new(config, service);

  // Start the server
  run_server(state).await
}
