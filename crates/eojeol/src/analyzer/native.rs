//! Raw binding to the Kiwi C API.
//!
//! The library is opened at runtime with `libloading`; nothing links against
//! Kiwi at build time. Symbols are resolved once into a plain function-pointer
//! table that stays valid as long as the `Library` it came from is alive.

use std::ffi::CStr;
use std::os::raw::{c_char, c_float, c_int, c_void};
use std::path::Path;
use std::sync::Arc;

use libloading::Library;

use crate::errors::AnalyzerError;

/// Opaque Kiwi instance handle (`kiwi_h`)
pub type KiwiHandle = *mut c_void;
/// Opaque analysis result handle (`kiwi_res_h`)
pub type KiwiResHandle = *mut c_void;
/// Opaque morpheme-set handle (`kiwi_morphset_h`), only ever passed as null
pub type KiwiMorphsetHandle = *mut c_void;
/// Opaque pre-tokenization handle (`kiwi_pretokenized_h`), only ever passed as null
pub type KiwiPretokenizedHandle = *mut c_void;

/// Match option: detect URLs as single tokens
pub const KIWI_MATCH_URL: c_int = 1;
/// Match option: detect email addresses as single tokens
pub const KIWI_MATCH_EMAIL: c_int = 2;
/// Match option: detect hashtags as single tokens
pub const KIWI_MATCH_HASHTAG: c_int = 4;
/// Match option: detect mentions as single tokens
pub const KIWI_MATCH_MENTION: c_int = 8;
/// Match option: detect serial numbers as single tokens
pub const KIWI_MATCH_SERIAL: c_int = 16;
/// All pattern matchers enabled; the default for analysis
pub const KIWI_MATCH_ALL: c_int =
  KIWI_MATCH_URL | KIWI_MATCH_EMAIL | KIWI_MATCH_HASHTAG | KIWI_MATCH_MENTION | KIWI_MATCH_SERIAL;

/// Analysis options passed by value to `kiwi_analyze`.
#[repr(C)]
pub struct KiwiAnalyzeOption {
  /// Bitmask of `KIWI_MATCH_*` flags
  pub match_options: c_int,
  /// Morphemes to exclude from analysis; null for none
  pub blocklist: KiwiMorphsetHandle,
  /// Non-zero to allow analyses that end mid-sentence
  pub open_ending: c_int,
  /// Bitmask of allowed dialects
  pub allowed_dialects: c_int,
  /// Cost penalty for dialect forms
  pub dialect_cost: c_float,
}

impl KiwiAnalyzeOption {
  /// Default analysis options: all matchers, no blocklist, standard dialect.
  #[must_use]
  pub fn standard() -> Self {
    Self {
      match_options: KIWI_MATCH_ALL,
      blocklist: std::ptr::null_mut(),
      open_ending: 0,
      allowed_dialects: 0,
      dialect_cost: 0.0,
    }
  }
}

/// Resolved Kiwi C API function table.
///
/// Only the subset this crate calls; the full API is much larger.
#[derive(Clone, Copy, Debug)]
pub struct KiwiApi {
  /// `kiwi_h kiwi_init(const char* model_path, int num_threads, int options)`
  pub kiwi_init: unsafe extern "C" fn(*const c_char, c_int, c_int) -> KiwiHandle,
  /// `int kiwi_close(kiwi_h)`
  pub kiwi_close: unsafe extern "C" fn(KiwiHandle) -> c_int,
  /// `kiwi_res_h kiwi_analyze(kiwi_h, const char* text, int top_n, kiwi_analyze_option_t, kiwi_pretokenized_h)`
  pub kiwi_analyze: unsafe extern "C" fn(
    KiwiHandle,
    *const c_char,
    c_int,
    KiwiAnalyzeOption,
    KiwiPretokenizedHandle,
  ) -> KiwiResHandle,
  /// `int kiwi_res_size(kiwi_res_h)` - number of analysis candidates
  pub kiwi_res_size: unsafe extern "C" fn(KiwiResHandle) -> c_int,
  /// `int kiwi_res_word_num(kiwi_res_h, int index)` - tokens in one candidate
  pub kiwi_res_word_num: unsafe extern "C" fn(KiwiResHandle, c_int) -> c_int,
  /// `const char* kiwi_res_form(kiwi_res_h, int index, int num)`
  pub kiwi_res_form: unsafe extern "C" fn(KiwiResHandle, c_int, c_int) -> *const c_char,
  /// `const char* kiwi_res_tag(kiwi_res_h, int index, int num)`
  pub kiwi_res_tag: unsafe extern "C" fn(KiwiResHandle, c_int, c_int) -> *const c_char,
  /// `int kiwi_res_position(kiwi_res_h, int index, int num)`
  pub kiwi_res_position: unsafe extern "C" fn(KiwiResHandle, c_int, c_int) -> c_int,
  /// `int kiwi_res_length(kiwi_res_h, int index, int num)`
  pub kiwi_res_length: unsafe extern "C" fn(KiwiResHandle, c_int, c_int) -> c_int,
  /// `int kiwi_res_word_position(kiwi_res_h, int index, int num)`
  pub kiwi_res_word_position: unsafe extern "C" fn(KiwiResHandle, c_int, c_int) -> c_int,
  /// `int kiwi_res_close(kiwi_res_h)`
  pub kiwi_res_close: unsafe extern "C" fn(KiwiResHandle) -> c_int,
  /// `const char* kiwi_error()`
  pub kiwi_error: unsafe extern "C" fn() -> *const c_char,
  /// `void kiwi_clear_error()`
  pub kiwi_clear_error: unsafe extern "C" fn(),
}

impl KiwiApi {
  /// Resolves the full function table from an opened library.
  ///
  /// # Errors
  /// `AnalyzerError::MissingSymbol` if any required symbol is absent.
  ///
  /// # Safety
  /// The resolved pointers are only valid while `library` stays loaded.
  unsafe fn resolve(library: &Library) -> Result<Self, AnalyzerError> {
    unsafe {
      Ok(Self {
        kiwi_init: symbol(library, b"kiwi_init\0")?,
        kiwi_close: symbol(library, b"kiwi_close\0")?,
        kiwi_analyze: symbol(library, b"kiwi_analyze\0")?,
        kiwi_res_size: symbol(library, b"kiwi_res_size\0")?,
        kiwi_res_word_num: symbol(library, b"kiwi_res_word_num\0")?,
        kiwi_res_form: symbol(library, b"kiwi_res_form\0")?,
        kiwi_res_tag: symbol(library, b"kiwi_res_tag\0")?,
        kiwi_res_position: symbol(library, b"kiwi_res_position\0")?,
        kiwi_res_length: symbol(library, b"kiwi_res_length\0")?,
        kiwi_res_word_position: symbol(library, b"kiwi_res_word_position\0")?,
        kiwi_res_close: symbol(library, b"kiwi_res_close\0")?,
        kiwi_error: symbol(library, b"kiwi_error\0")?,
        kiwi_clear_error: symbol(library, b"kiwi_clear_error\0")?,
      })
    }
  }
}

/// Resolves one symbol into a bare function pointer.
unsafe fn symbol<T: Copy>(library: &Library, name: &'static [u8]) -> Result<T, AnalyzerError> {
  unsafe {
    library.get::<T>(name).map(|symbol| *symbol).map_err(|_| AnalyzerError::MissingSymbol {
      symbol: String::from_utf8_lossy(&name[..name.len() - 1]).into_owned(),
    })
  }
}

/// An opened Kiwi library together with its resolved API table.
///
/// The `Library` field is never read after resolution but must outlive every
/// function pointer in `api`.
#[derive(Debug)]
pub struct LoadedLibrary {
  /// Resolved function table
  pub api: KiwiApi,
  _library: Library,
}

impl LoadedLibrary {
  /// Opens the shared library at `path` and resolves the API table.
  ///
  /// # Errors
  /// - `AnalyzerError::LibraryLoad` if the library cannot be opened
  /// - `AnalyzerError::MissingSymbol` if a required symbol is absent
  pub fn open(path: impl AsRef<Path>) -> Result<Arc<Self>, AnalyzerError> {
    let path = path.as_ref();
    let library =
      unsafe { Library::new(path) }.map_err(|source| AnalyzerError::LibraryLoad {
        reason: format!("{}: {}", path.display(), source),
      })?;

    let api = unsafe { KiwiApi::resolve(&library)? };

    Ok(Arc::new(Self {
      api,
      _library: library,
    }))
  }
}

/// Reads the last native error message, falling back to a call-site description.
pub fn native_error(api: &KiwiApi, fallback: &str) -> AnalyzerError {
  let message_ptr = unsafe { (api.kiwi_error)() };
  let message = if message_ptr.is_null() {
    fallback.to_string()
  } else {
    let raw = unsafe { CStr::from_ptr(message_ptr) }.to_string_lossy().into_owned();
    if raw.is_empty() { fallback.to_string() } else { raw }
  };
  unsafe { (api.kiwi_clear_error)() };

  AnalyzerError::Native { message }
}

/// Clears any stale native error state before an API call.
pub fn clear_native_error(api: &KiwiApi) {
  unsafe { (api.kiwi_clear_error)() };
}

/// Copies a native UTF-8 C string into an owned `String`.
///
/// # Errors
/// `AnalyzerError::InvalidOutput` if the bytes are not valid UTF-8.
///
/// # Safety
/// `ptr` must be a valid, NUL-terminated C string.
pub unsafe fn cstr_to_string(ptr: *const c_char) -> Result<String, AnalyzerError> {
  let cstr = unsafe { CStr::from_ptr(ptr) };
  cstr
    .to_str()
    .map(str::to_owned)
    .map_err(|source| AnalyzerError::InvalidOutput(Arc::new(source)))
}
