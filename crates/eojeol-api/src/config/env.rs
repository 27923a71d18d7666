//! Config loading from environment variables

use eojeol::AnalyzerConfig;

use super::constants::DEFAULT_BIND_ADDR;

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:5000")
  pub bind_addr: String,
  /// Analyzer configuration (library and model locations)
  pub analyzer: AnalyzerConfig,
}

impl Config {
  /// Loads configuration from environment variables.
  ///
  /// - `EOJEOL_API_BIND_ADDR` - bind address, defaults to [`DEFAULT_BIND_ADDR`]
  /// - `KIWI_LIBRARY_PATH` / `KIWI_MODEL_PATH` - analyzer resources
  #[must_use]
  pub fn from_env() -> Self {
    let bind_addr =
      std::env::var("EOJEOL_API_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    Self {
      bind_addr,
      analyzer: AnalyzerConfig::from_env(),
    }
  }
}

impl Default for Config {
  fn default() -> Self {
    Self {
      bind_addr: DEFAULT_BIND_ADDR.to_string(),
      analyzer: AnalyzerConfig::default(),
    }
  }
}
