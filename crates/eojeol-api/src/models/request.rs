//! Request model definitions

use serde::Deserialize;

/// Single-text analysis request
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
  /// Text to analyze
  pub text: String,
}

/// Batch analysis request.
///
/// Typed as `Vec<String>`, so a missing field, a non-array value, or
/// non-string elements are all rejected by deserialization before any
/// handler logic runs.
#[derive(Debug, Deserialize)]
pub struct BatchAnalyzeRequest {
  /// Texts to analyze, in order
  pub texts: Vec<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserialize_valid_request() {
    let json = r#"{"text": "안녕하세요"}"#;
    let req: AnalyzeRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.text, "안녕하세요");
  }

  #[test]
  fn deserialize_blank_text_is_accepted_by_serde() {
    // Blank text passes deserialization; the service layer rejects it
    let json = r#"{"text": "   "}"#;
    let req: AnalyzeRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.text, "   ");
  }

  #[test]
  fn deserialize_missing_text_fails() {
    let json = r#"{"foo": "bar"}"#;
    assert!(serde_json::from_str::<AnalyzeRequest>(json).is_err());
  }

  #[test]
  fn deserialize_batch_request() {
    let json = r#"{"texts": ["안녕", "반가워요"]}"#;
    let req: BatchAnalyzeRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.texts.len(), 2);
  }

  #[test]
  fn deserialize_batch_rejects_non_array_texts() {
    let json = r#"{"texts": "안녕"}"#;
    assert!(serde_json::from_str::<BatchAnalyzeRequest>(json).is_err());
  }

  #[test]
  fn deserialize_batch_rejects_non_string_elements() {
    let json = r#"{"texts": ["안녕", 42]}"#;
    assert!(serde_json::from_str::<BatchAnalyzeRequest>(json).is_err());
  }
}
