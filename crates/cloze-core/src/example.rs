//! Structured input examples handed over by the data-loading layer.

use serde::{Deserialize, Serialize};

use crate::error::{ClozeError, Result};

/// A single labeled or unlabeled example.
///
/// Produced upstream by dataset readers and treated as read-only here.
/// `text_b` is the empty string for single-sentence tasks, and `label` is
/// `None` at inference time, so both deserialize leniently when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputExample {
    /// Primary text field. Always present.
    pub text_a: String,
    /// Secondary text field. Empty when the task has only one.
    #[serde(default)]
    pub text_b: String,
    /// Gold label, if known.
    #[serde(default)]
    pub label: Option<String>,
}

impl InputExample {
    /// Create an unlabeled example from its text fields.
    pub fn new(text_a: impl Into<String>, text_b: impl Into<String>) -> Self {
        Self {
            text_a: text_a.into(),
            text_b: text_b.into(),
            label: None,
        }
    }

    /// Attach a gold label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// `text_a`, or [`ClozeError::MalformedExample`] if it is empty.
    pub fn require_text_a(&self) -> Result<&str> {
        if self.text_a.is_empty() {
            return Err(ClozeError::MalformedExample {
                field: "text_a".to_string(),
            });
        }
        Ok(&self.text_a)
    }

    /// `text_b`, or [`ClozeError::MalformedExample`] if it is empty.
    ///
    /// Patterns that render both fields call this so a single-sentence
    /// example fails loudly instead of producing a silently degenerate
    /// template.
    pub fn require_text_b(&self) -> Result<&str> {
        if self.text_b.is_empty() {
            return Err(ClozeError::MalformedExample {
                field: "text_b".to_string(),
            });
        }
        Ok(&self.text_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_construction() {
        let example = InputExample::new("Giants win game", "").with_label("2");
        assert_eq!(example.text_a, "Giants win game");
        assert_eq!(example.text_b, "");
        assert_eq!(example.label.as_deref(), Some("2"));
    }

    #[test]
    fn test_require_fields() {
        let example = InputExample::new("a headline", "");
        assert_eq!(example.require_text_a().unwrap(), "a headline");
        assert_eq!(
            example.require_text_b(),
            Err(ClozeError::MalformedExample {
                field: "text_b".to_string(),
            })
        );
    }

    #[test]
    fn test_deserialize_with_missing_fields() {
        let example: InputExample = serde_json::from_str(r#"{"text_a": "only one sentence"}"#)
            .expect("failed to parse example");
        assert_eq!(example.text_a, "only one sentence");
        assert_eq!(example.text_b, "");
        assert!(example.label.is_none());
    }

    #[test]
    fn test_serde_round_trip() {
        let example = InputExample::new("premise.", "hypothesis.").with_label("entailment");
        let json = serde_json::to_string(&example).expect("failed to serialize example");
        let back: InputExample = serde_json::from_str(&json).expect("failed to parse example");
        assert_eq!(back, example);
    }
}
