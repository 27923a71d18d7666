//! Regroups the analyzer's flat token stream into eojeol (word) units.
//!
//! Both the single and the batch endpoint run this same routine; it is the
//! only place that knows how word boundaries are reconstructed.

use tracing::debug;

use crate::models::{Morpheme, Token, Word};

/// Partitions a position-ordered token sequence into words.
///
/// Consecutive tokens sharing the same `word_index` form one word. For each
/// group the original word text is reconstructed as the substring of `text`
/// from the first token's start to the last token's end (char offsets).
///
/// Pure function of `(text, tokens)`; single forward pass, no backtracking.
/// An empty token slice yields an empty vector.
#[must_use]
pub fn group_words(text: &str, tokens: &[Token]) -> Vec<Word> {
  let mut words = Vec::new();
  // Lazily adopted on the first token, so the first real word index needs no
  // sentinel value of its own.
  let mut current_index: Option<usize> = None;
  let mut morphemes: Vec<Morpheme> = Vec::new();

  for token in tokens {
    if current_index != Some(token.word_index) {
      flush(text, &mut morphemes, &mut words);
      current_index = Some(token.word_index);
    }
    morphemes.push(Morpheme::from(token));
  }

  flush(text, &mut morphemes, &mut words);

  debug!(token_count = tokens.len(), word_count = words.len(), "grouped tokens into words");

  words
}

/// Completes the current word from the accumulated morphemes, if any.
fn flush(text: &str, morphemes: &mut Vec<Morpheme>, words: &mut Vec<Word>) {
  let (Some(first), Some(last)) = (morphemes.first(), morphemes.last()) else {
    return;
  };

  let word = substring_chars(text, first.start, last.end);
  words.push(Word {
    word,
    morphemes: std::mem::take(morphemes),
  });
}

/// Extracts `text[start..end]` measured in chars rather than bytes.
fn substring_chars(text: &str, start: usize, end: usize) -> String {
  text.chars().skip(start).take(end.saturating_sub(start)).collect()
}
