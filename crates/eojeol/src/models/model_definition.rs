//! Data Model Definition

use serde::{Deserialize, Serialize};

/// One tagged morpheme occurrence as produced by the analyzer.
///
/// Offsets are char offsets into the source text. Kiwi reports positions in
/// UTF-16 code units, which coincide with char offsets for BMP text (all
/// Hangul); the adapter exposes them unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
  /// Surface form (string appearing in the original text)
  pub surface: String,
  /// Part-of-speech tag (opaque label from the analyzer, e.g. "NNG", "EF")
  pub tag: String,
  /// Index of the whitespace-delimited word this token belongs to.
  /// Equal consecutive values mark tokens of the same word; the sequence is
  /// monotonic but need not be contiguous.
  pub word_index: usize,
  /// Start char offset (inclusive)
  pub start: usize,
  /// Length in chars
  pub len: usize,
}

impl Token {
  /// Constructor for Token
  pub fn new(
    surface: impl Into<String>,
    tag: impl Into<String>,
    word_index: usize,
    start: usize,
    len: usize,
  ) -> Self {
    Self {
      surface: surface.into(),
      tag: tag.into(),
      word_index,
      start,
      len,
    }
  }

  /// End char offset (exclusive)
  #[must_use]
  pub fn end(&self) -> usize {
    self.start + self.len
  }
}

/// Wire form of one morpheme within a word record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Morpheme {
  /// Surface form
  pub surface: String,
  /// Part-of-speech tag
  pub tag: String,
  /// Start char offset (inclusive)
  pub start: usize,
  /// End char offset (exclusive)
  pub end: usize,
}

impl From<&Token> for Morpheme {
  fn from(token: &Token) -> Self {
    Self {
      surface: token.surface.clone(),
      tag: token.tag.clone(),
      start: token.start,
      end: token.end(),
    }
  }
}

/// One eojeol (whitespace-delimited word) with its morphemes.
///
/// Fully derived from the source text and token stream: `word` is the exact
/// substring spanning the first morpheme's start to the last morpheme's end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
  /// The original word substring
  pub word: String,
  /// Morphemes composing this word, in position order
  pub morphemes: Vec<Morpheme>,
}

/// Analysis result for one input text of a batch request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
  /// The original input text
  pub text: String,
  /// Word records for this text
  pub words: Vec<Word>,
}
