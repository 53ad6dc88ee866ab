//! Label-to-token verbalizer tables.

use crate::error::{ClozeError, Result};

/// An ordered mapping from a task's label strings to the output tokens
/// that verbalize them.
///
/// Tables are authored as literal data inside each task and never loaded
/// from external files. Entries keep their authoring order, so label
/// listings and diagnostics are stable across runs.
#[derive(Debug, Clone)]
pub struct VerbalizerTable {
    task: &'static str,
    entries: Vec<(String, Vec<String>)>,
}

impl VerbalizerTable {
    /// Build a table for `task` from literal `(label, tokens)` rows.
    ///
    /// Each label should appear once; a duplicated label keeps its first
    /// row, matching the lookup order.
    pub fn new(task: &'static str, rows: &[(&str, &[&str])]) -> Self {
        let entries = rows
            .iter()
            .map(|(label, tokens)| {
                let tokens = tokens.iter().map(|token| token.to_string()).collect();
                (label.to_string(), tokens)
            })
            .collect();
        Self { task, entries }
    }

    /// The task this table belongs to.
    pub fn task(&self) -> &'static str {
        self.task
    }

    /// The tokens verbalizing `label`, in output order.
    ///
    /// # Errors
    ///
    /// [`ClozeError::UnknownLabel`] if `label` has no entry.
    pub fn verbalize(&self, label: &str) -> Result<Vec<String>> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == label)
            .map(|(_, tokens)| tokens.clone())
            .ok_or_else(|| ClozeError::UnknownLabel {
                task: self.task.to_string(),
                label: label.to_string(),
            })
    }

    /// The labels this table covers, in authoring order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    /// Check that every label in `declared` has an entry.
    ///
    /// Run this at startup against the label set the task's data reader
    /// emits, so a missing verbalization surfaces before training instead
    /// of on the first affected batch.
    ///
    /// # Errors
    ///
    /// [`ClozeError::UnknownLabel`] naming the first uncovered label.
    pub fn check_covers(&self, declared: &[&str]) -> Result<()> {
        for label in declared {
            if !self.entries.iter().any(|(entry, _)| entry == label) {
                return Err(ClozeError::UnknownLabel {
                    task: self.task.to_string(),
                    label: label.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Number of labels in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> VerbalizerTable {
        VerbalizerTable::new(
            "news",
            &[
                ("1", &["World"]),
                ("2", &["Sports"]),
                ("3", &["Business"]),
                ("4", &["Tech"]),
            ],
        )
    }

    #[test]
    fn test_verbalize_known_label() {
        assert_eq!(table().verbalize("2").unwrap(), vec!["Sports".to_string()]);
    }

    #[test]
    fn test_verbalize_unknown_label() {
        assert_eq!(
            table().verbalize("5"),
            Err(ClozeError::UnknownLabel {
                task: "news".to_string(),
                label: "5".to_string(),
            })
        );
    }

    #[test]
    fn test_multi_token_entry() {
        let table = VerbalizerTable::new("relations", &[("xAttr", &["PersonX", "is"])]);
        assert_eq!(
            table.verbalize("xAttr").unwrap(),
            vec!["PersonX".to_string(), "is".to_string()]
        );
    }

    #[test]
    fn test_labels_keep_authoring_order() {
        let table = table();
        let labels: Vec<&str> = table.labels().collect();
        assert_eq!(labels, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_check_covers() {
        assert!(table().check_covers(&["1", "2", "3", "4"]).is_ok());
        assert_eq!(
            table().check_covers(&["1", "5"]),
            Err(ClozeError::UnknownLabel {
                task: "news".to_string(),
                label: "5".to_string(),
            })
        );
    }
}
