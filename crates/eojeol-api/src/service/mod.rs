//! Service module

pub mod morpheme_service;

/// Re-export
pub use morpheme_service::{AnalyzeService, MorphemeService};
