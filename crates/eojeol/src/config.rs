//! Analyzer configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::ConfigError;

/// Configuration for constructing a [`KiwiAnalyzer`](crate::analyzer::KiwiAnalyzer).
///
/// The native library and model are opaque runtime resources; this struct
/// only records where to find them. Unset paths fall back to the environment
/// (`KIWI_LIBRARY_PATH`, `KIWI_MODEL_PATH`) and platform candidates.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzerConfig {
  /// Explicit path to the Kiwi shared library (e.g. `libkiwi.so`)
  pub library_path: Option<PathBuf>,
  /// Explicit path to the Kiwi model directory
  pub model_path: Option<PathBuf>,
  /// Analyzer worker threads passed to `kiwi_init`; 0 lets Kiwi decide
  #[serde(default)]
  pub num_threads: i32,
}

impl AnalyzerConfig {
  /// Builds a config from the environment.
  ///
  /// Reads `KIWI_LIBRARY_PATH` and `KIWI_MODEL_PATH` when set; both may be
  /// omitted, in which case the analyzer probes platform default locations.
  #[must_use]
  pub fn from_env() -> Self {
    Self {
      library_path: std::env::var_os("KIWI_LIBRARY_PATH").map(PathBuf::from),
      model_path: std::env::var_os("KIWI_MODEL_PATH").map(PathBuf::from),
      num_threads: 0,
    }
  }

  /// Builder that sets the library path
  #[must_use]
  pub fn with_library_path(mut self, path: impl AsRef<Path>) -> Self {
    self.library_path = Some(path.as_ref().to_path_buf());
    self
  }

  /// Builder that sets the model path
  #[must_use]
  pub fn with_model_path(mut self, path: impl AsRef<Path>) -> Self {
    self.model_path = Some(path.as_ref().to_path_buf());
    self
  }

  /// Builder that sets the worker thread count
  #[must_use]
  pub fn with_num_threads(mut self, num_threads: i32) -> Self {
    self.num_threads = num_threads;
    self
  }

  /// Validates the configuration.
  ///
  /// # Errors
  /// - An explicitly configured library path does not exist
  /// - An explicitly configured model path does not exist
  /// - `num_threads` is negative
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.num_threads < 0 {
      return Err(ConfigError::InvalidNumThreads {
        actual: self.num_threads,
      });
    }

    if let Some(path) = &self.library_path
      && !path.exists()
    {
      return Err(ConfigError::LibraryPathNotFound { path: path.clone() });
    }

    if let Some(path) = &self.model_path
      && !path.exists()
    {
      return Err(ConfigError::ModelPathNotFound { path: path.clone() });
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_config_is_valid() {
    assert!(AnalyzerConfig::default().validate().is_ok());
  }

  #[test]
  fn negative_num_threads_is_rejected() {
    let config = AnalyzerConfig::default().with_num_threads(-2);
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidNumThreads { actual: -2 }));
  }

  #[test]
  fn missing_library_path_is_rejected() {
    let config = AnalyzerConfig::default().with_library_path("/nonexistent/libkiwi.so");
    assert!(matches!(
      config.validate().unwrap_err(),
      ConfigError::LibraryPathNotFound { .. }
    ));
  }

  #[test]
  fn missing_model_path_is_rejected() {
    let config = AnalyzerConfig::default().with_model_path("/nonexistent/kiwi-model");
    assert!(matches!(
      config.validate().unwrap_err(),
      ConfigError::ModelPathNotFound { .. }
    ));
  }

  #[test]
  fn builder_chains() {
    let config = AnalyzerConfig::default()
      .with_library_path("/tmp/libkiwi.so")
      .with_model_path("/tmp/model")
      .with_num_threads(4);

    assert_eq!(config.library_path.as_deref(), Some(Path::new("/tmp/libkiwi.so")));
    assert_eq!(config.model_path.as_deref(), Some(Path::new("/tmp/model")));
    assert_eq!(config.num_threads, 4);
  }
}
