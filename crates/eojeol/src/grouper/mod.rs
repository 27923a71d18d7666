//! grouper module
pub mod word_grouper;

/// Re-export
pub use word_grouper::group_words;
