//! Analyzer trait and the Kiwi-backed implementation.

use std::ffi::CString;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing::{debug, info};

use crate::config::AnalyzerConfig;
use crate::errors::{AnalyzerError, EojeolResult};
use crate::models::Token;

use super::native::{
  clear_native_error, cstr_to_string, native_error, KiwiAnalyzeOption, KiwiHandle, KiwiResHandle,
  LoadedLibrary,
};

/// Common interface for morphological analysis.
///
/// The HTTP service depends only on this trait, so tests can swap the
/// Kiwi-backed implementation for stubs.
pub trait Analyzer: Send + Sync {
  /// Tokenizes `text` into a position-ordered morpheme sequence.
  ///
  /// # Errors
  /// - The input cannot be passed to the analyzer
  /// - The native analysis call fails
  fn tokenize(&self, text: &str) -> Result<Vec<Token>, AnalyzerError>;
}

/// Morphological analyzer backed by the Kiwi shared library.
///
/// Loaded once at process start and shared across all requests. The C API's
/// thread safety is not guaranteed, so every native call is serialized
/// through an internal mutex (spare but safe; analysis itself is fast
/// compared to request turnaround).
pub struct KiwiAnalyzer {
  inner: Mutex<KiwiInstance>,
}

/// The raw handle plus the library that keeps its code mapped.
struct KiwiInstance {
  library: Arc<LoadedLibrary>,
  handle: KiwiHandle,
}

// The raw handle is only dereferenced by native calls made while the
// enclosing mutex is held.
unsafe impl Send for KiwiInstance {}

impl Drop for KiwiInstance {
  fn drop(&mut self) {
    unsafe { (self.library.api.kiwi_close)(self.handle) };
  }
}

impl KiwiAnalyzer {
  /// Initializes the analyzer.
  ///
  /// Opens the shared library (explicit path, `KIWI_LIBRARY_PATH`, or
  /// platform candidates, in that order) and builds a Kiwi instance from the
  /// configured model path, or Kiwi's own default when none is set.
  ///
  /// # Errors
  /// - Invalid configuration
  /// - The library cannot be loaded or lacks required symbols
  /// - `kiwi_init` fails (missing or corrupt model, usually)
  pub fn new(config: &AnalyzerConfig) -> EojeolResult<Self> {
    config.validate()?;

    let library = match &config.library_path {
      Some(path) => LoadedLibrary::open(path)?,
      None => open_default_library()?,
    };

    let model_path_c = config
      .model_path
      .as_ref()
      .map(|path| CString::new(path.to_string_lossy().into_owned()))
      .transpose()
      .map_err(|_| AnalyzerError::InvalidInput {
        reason: "model path contains an interior NUL byte".to_string(),
      })?;
    let model_path_ptr =
      model_path_c.as_ref().map_or(std::ptr::null(), |value| value.as_ptr());

    clear_native_error(&library.api);
    let handle =
      unsafe { (library.api.kiwi_init)(model_path_ptr, config.num_threads, 0) };
    if handle.is_null() {
      return Err(native_error(&library.api, "kiwi_init returned a null handle").into());
    }

    info!(
      model_path = ?config.model_path,
      num_threads = config.num_threads,
      "Kiwi analyzer initialized"
    );

    Ok(Self {
      inner: Mutex::new(KiwiInstance { library, handle }),
    })
  }

  /// Initializes the analyzer from environment configuration.
  ///
  /// # Errors
  /// Same as [`KiwiAnalyzer::new`].
  pub fn from_env() -> EojeolResult<Self> {
    Self::new(&AnalyzerConfig::from_env())
  }
}

impl Analyzer for KiwiAnalyzer {
  fn tokenize(&self, text: &str) -> Result<Vec<Token>, AnalyzerError> {
    let text_c = CString::new(text).map_err(|_| AnalyzerError::InvalidInput {
      reason: "text contains an interior NUL byte".to_string(),
    })?;

    let instance = self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let api = &instance.library.api;

    clear_native_error(api);
    let result_handle = unsafe {
      (api.kiwi_analyze)(
        instance.handle,
        text_c.as_ptr(),
        1,
        KiwiAnalyzeOption::standard(),
        std::ptr::null_mut(),
      )
    };
    if result_handle.is_null() {
      return Err(native_error(api, "kiwi_analyze returned a null handle"));
    }

    // Closes the result handle on every exit path below.
    let result = ResultGuard {
      library: &instance.library,
      handle: result_handle,
    };

    let candidate_count = unsafe { (api.kiwi_res_size)(result.handle) };
    if candidate_count < 1 {
      // No analysis candidate; an empty token stream is a valid result.
      return Ok(Vec::new());
    }

    // Only the best candidate (index 0) is consumed.
    let token_count = unsafe { (api.kiwi_res_word_num)(result.handle, 0) };
    if token_count < 0 {
      return Err(native_error(api, "kiwi_res_word_num returned an error"));
    }

    let mut tokens = Vec::with_capacity(token_count as usize);
    for j in 0..token_count {
      let form_ptr = unsafe { (api.kiwi_res_form)(result.handle, 0, j) };
      let tag_ptr = unsafe { (api.kiwi_res_tag)(result.handle, 0, j) };
      if form_ptr.is_null() || tag_ptr.is_null() {
        return Err(native_error(api, "kiwi_res_form/tag returned a null pointer"));
      }

      let surface = unsafe { cstr_to_string(form_ptr)? };
      let tag = unsafe { cstr_to_string(tag_ptr)? };

      let position = unsafe { (api.kiwi_res_position)(result.handle, 0, j) };
      let length = unsafe { (api.kiwi_res_length)(result.handle, 0, j) };
      let word_position = unsafe { (api.kiwi_res_word_position)(result.handle, 0, j) };
      if position < 0 || length < 0 || word_position < 0 {
        return Err(native_error(api, "kiwi_res_* returned an invalid index"));
      }

      tokens.push(Token {
        surface,
        tag,
        word_index: word_position as usize,
        start: position as usize,
        len: length as usize,
      });
    }

    debug!(text_len = text.len(), token_count = tokens.len(), "tokenized text");

    Ok(tokens)
  }
}

/// Closes a `kiwi_res_h` when dropped.
struct ResultGuard<'a> {
  library: &'a Arc<LoadedLibrary>,
  handle: KiwiResHandle,
}

impl Drop for ResultGuard<'_> {
  fn drop(&mut self) {
    unsafe { (self.library.api.kiwi_res_close)(self.handle) };
  }
}

/// Opens the library from `KIWI_LIBRARY_PATH` or platform default locations.
fn open_default_library() -> Result<Arc<LoadedLibrary>, AnalyzerError> {
  let mut tried = Vec::new();

  if let Some(path) = std::env::var_os("KIWI_LIBRARY_PATH") {
    let path = PathBuf::from(path);
    match LoadedLibrary::open(&path) {
      Ok(library) => return Ok(library),
      Err(error) => tried.push(format!("{}: {}", path.display(), error)),
    }
  }

  for candidate in default_library_candidates() {
    match LoadedLibrary::open(candidate) {
      Ok(library) => return Ok(library),
      Err(error) => tried.push(format!("{}: {}", candidate, error)),
    }
  }

  Err(AnalyzerError::LibraryLoad {
    reason: format!(
      "set KIWI_LIBRARY_PATH to the dynamic library path. tried: {}",
      tried.join(", ")
    ),
  })
}

/// Platform-specific default names and paths for the Kiwi shared library.
fn default_library_candidates() -> &'static [&'static str] {
  #[cfg(target_os = "linux")]
  {
    &["libkiwi.so", "/usr/local/lib/libkiwi.so", "/usr/lib/libkiwi.so"]
  }
  #[cfg(target_os = "macos")]
  {
    &["libkiwi.dylib", "/usr/local/lib/libkiwi.dylib", "/opt/homebrew/lib/libkiwi.dylib"]
  }
  #[cfg(not(any(target_os = "linux", target_os = "macos")))]
  {
    &["kiwi.dll"]
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn candidates_are_not_empty() {
    assert!(!default_library_candidates().is_empty());
  }

  #[test]
  fn analyzer_trait_is_object_safe() {
    struct NullAnalyzer;
    impl Analyzer for NullAnalyzer {
      fn tokenize(&self, _text: &str) -> Result<Vec<Token>, AnalyzerError> {
        Ok(Vec::new())
      }
    }

    let analyzer: Arc<dyn Analyzer> = Arc::new(NullAnalyzer);
    assert!(analyzer.tokenize("아무거나").unwrap().is_empty());
  }

  // Tests below need the native Kiwi library and model; opt-in with the
  // with_kiwi_tests feature.
  #[test]
  #[cfg_attr(not(feature = "with_kiwi_tests"), ignore)]
  fn kiwi_tokenize_returns_position_ordered_tokens() {
    let analyzer =
      KiwiAnalyzer::from_env().expect("failed to load Kiwi: check test environment");
    let tokens = analyzer.tokenize("안녕하세요 반가워요").expect("tokenize should succeed");

    assert!(!tokens.is_empty());
    for pair in tokens.windows(2) {
      assert!(pair[0].start <= pair[1].start);
      assert!(pair[0].word_index <= pair[1].word_index);
    }
  }

  #[test]
  #[cfg_attr(not(feature = "with_kiwi_tests"), ignore)]
  fn kiwi_tokenize_is_idempotent() {
    let analyzer =
      KiwiAnalyzer::from_env().expect("failed to load Kiwi: check test environment");
    let first = analyzer.tokenize("한국어 형태소 분석").expect("tokenize should succeed");
    let second = analyzer.tokenize("한국어 형태소 분석").expect("tokenize should succeed");
    assert_eq!(first, second);
  }
}
