//! eojeol 형태소 분석 라이브러리
//!
//! Wraps the Kiwi morphological analyzer (consumed through its C API) and
//! regroups its flat token stream into eojeol (어절, whitespace-delimited
//! word) units.

/// Analyzer module - Analyzer trait and the Kiwi-backed implementation
pub mod analyzer;

/// Config module - AnalyzerConfig for library/model discovery
pub mod config;

/// Error module - AnalyzerError, EojeolError, EojeolResult
pub mod errors;

/// Grouper module - regroups position-ordered tokens into words
pub mod grouper;

/// Data model module - Token, Morpheme, Word, Analysis
pub mod models;

/// Re-exports
pub use analyzer::{Analyzer, KiwiAnalyzer};
pub use config::AnalyzerConfig;
pub use errors::{AnalyzerError, EojeolError, EojeolResult};
pub use grouper::group_words;
pub use models::{Analysis, Morpheme, Token, Word};
