//! Error definitions

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Configuration errors (AnalyzerConfig)
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// The configured library path does not point to an existing file
  #[error("analyzer library path does not exist: {path:?}")]
  LibraryPathNotFound {
    /// The configured path
    path: PathBuf,
  },

  /// The configured model path does not point to an existing directory
  #[error("analyzer model path does not exist: {path:?}")]
  ModelPathNotFound {
    /// The configured path
    path: PathBuf,
  },

  /// num_threads must be 0 (auto) or positive
  #[error("num_threads must be >= 0: actual={actual}")]
  InvalidNumThreads {
    /// The configured value
    actual: i32,
  },
}

/// Analyzer (Kiwi binding) errors
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum AnalyzerError {
  /// The dynamic library could not be loaded from any candidate path
  #[error("failed to load the Kiwi library: {reason}")]
  LibraryLoad {
    /// Load failure detail, including the paths that were tried
    reason: String,
  },

  /// A required symbol is missing from the loaded library
  #[error("Kiwi library is missing required symbol: {symbol}")]
  MissingSymbol {
    /// The unresolved symbol name
    symbol: String,
  },

  /// The native API reported an error or returned an invalid handle
  #[error("Kiwi analysis failed: {message}")]
  Native {
    /// Message read back from kiwi_error, or a call-site description
    message: String,
  },

  /// The input text could not be passed to the native API
  #[error("invalid input text: {reason}")]
  InvalidInput {
    /// Reason the input was rejected
    reason: String,
  },

  /// The native library returned text that is not valid UTF-8
  #[error("Kiwi returned invalid UTF-8 output")]
  InvalidOutput(#[source] Arc<std::str::Utf8Error>),
}

/// Umbrella error
/// Public APIs of this crate that can fail for more than one reason
/// return this error. Used as `EojeolResult<T>` = `Result<T, EojeolError>`.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum EojeolError {
  /// Analyzer errors
  #[error(transparent)]
  Analyzer(#[from] AnalyzerError),

  /// Configuration errors
  #[error(transparent)]
  Config(#[from] ConfigError),
}

/// Standard Result alias for the eojeol crate
pub type EojeolResult<T> = Result<T, EojeolError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn analyzer_error_displays_native_message() {
    let err = AnalyzerError::Native {
      message: "model file truncated".to_string(),
    };
    assert!(err.to_string().contains("model file truncated"));
  }

  #[test]
  fn umbrella_wraps_analyzer_error_transparently() {
    let err: EojeolError = AnalyzerError::MissingSymbol {
      symbol: "kiwi_init".to_string(),
    }
    .into();
    assert!(err.to_string().contains("kiwi_init"));
  }

  #[test]
  fn umbrella_wraps_config_error_transparently() {
    let err: EojeolError = ConfigError::InvalidNumThreads { actual: -1 }.into();
    assert!(err.to_string().contains("-1"));
  }
}
