//! analyzer module
pub mod kiwi_analyzer;
pub mod native;

/// Re-export
pub use kiwi_analyzer::{Analyzer, KiwiAnalyzer};
