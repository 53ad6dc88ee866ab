//! The pattern-verbalizer pair contract.

use crate::error::Result;
use crate::example::InputExample;
use crate::pattern::FilledPattern;

/// A pattern-verbalizer pair (PVP): one task's cloze templates plus its
/// label-to-token mapping.
///
/// A PVP turns a classification task into a language-modeling task. Its
/// pattern renders an example as text with a mask placeholder, and its
/// verbalizer names the token(s) the model should predict in that slot
/// for each label.
///
/// Implementations are immutable after construction and `Send + Sync`, so
/// one instance can be shared across preprocessing workers without
/// synchronization. Both operations are pure functions of their arguments
/// and the configured pattern id: equal inputs produce equal outputs, in
/// any call order.
pub trait Pvp: Send + Sync {
    /// The stable name this task registers under.
    fn task_name(&self) -> &'static str;

    /// The template variant this instance renders.
    fn pattern_id(&self) -> usize;

    /// Number of implemented template variants. Valid pattern ids are
    /// `0..pattern_count()`, contiguous from zero.
    fn pattern_count(&self) -> usize;

    /// Whether [`verbalize`](Pvp::verbalize) may return more than one
    /// token per label. Drivers then reserve one mask slot per token or
    /// decode the span sequentially.
    fn is_multi_token(&self) -> bool {
        false
    }

    /// Render `example` through the configured template.
    ///
    /// # Errors
    ///
    /// [`ClozeError::UnsupportedPattern`] if the configured pattern id is
    /// outside `0..pattern_count()`, and
    /// [`ClozeError::MalformedExample`] if the template needs a field the
    /// example does not carry.
    ///
    /// [`ClozeError::UnsupportedPattern`]: crate::ClozeError::UnsupportedPattern
    /// [`ClozeError::MalformedExample`]: crate::ClozeError::MalformedExample
    fn get_parts(&self, example: &InputExample) -> Result<FilledPattern>;

    /// The token(s) the model should predict for `label`.
    ///
    /// # Errors
    ///
    /// [`ClozeError::UnknownLabel`] if `label` is outside the task's
    /// verbalizer table.
    ///
    /// [`ClozeError::UnknownLabel`]: crate::ClozeError::UnknownLabel
    fn verbalize(&self, label: &str) -> Result<Vec<String>>;
}
