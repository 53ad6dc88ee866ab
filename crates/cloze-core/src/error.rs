//! Error types for cloze operations.

use thiserror::Error;

/// Result type alias for cloze operations.
pub type Result<T> = std::result::Result<T, ClozeError>;

/// Error type shared by pattern application, verbalization, and the task
/// registry.
///
/// Every variant indicates a programming or configuration mistake rather
/// than a transient condition. Callers should treat all of them as
/// non-retryable: abort the run, or drop the offending example and log it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClozeError {
    /// A pattern id outside the range the task implements.
    #[error("task '{task}' has no pattern with id {pattern_id}")]
    UnsupportedPattern {
        /// Name of the task.
        task: String,
        /// The requested pattern id.
        pattern_id: usize,
    },

    /// An example is missing a field the selected pattern requires.
    #[error("example is missing required field '{field}'")]
    MalformedExample {
        /// Name of the missing field.
        field: String,
    },

    /// A label outside the task's verbalizer table.
    #[error("task '{task}' has no verbalization for label '{label}'")]
    UnknownLabel {
        /// Name of the task.
        task: String,
        /// The unmapped label.
        label: String,
    },

    /// A registry lookup for a task name that was never registered.
    #[error("no PVP registered for task '{task}'")]
    UnknownTask {
        /// The requested task name.
        task: String,
    },
}
