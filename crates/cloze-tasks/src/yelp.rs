//! Review polarity classification.

use cloze_core::pattern::{literal, mask, shortenable};
use cloze_core::{ClozeError, FilledPattern, InputExample, Pvp, Result, VerbalizerTable};

/// Polarity PVP over a single review text in `text_a`.
///
/// Label `"1"` verbalizes to `bad` and `"2"` to `good`; `text_b` is
/// unused.
#[derive(Debug, Clone)]
pub struct YelpPolarityPvp {
    pattern_id: usize,
    verbalizer: VerbalizerTable,
}

impl YelpPolarityPvp {
    /// Name this task registers under.
    pub const TASK_NAME: &'static str = "yelp-polarity";

    /// Create the PVP for one of the four pattern variants.
    pub fn new(pattern_id: usize) -> Self {
        let verbalizer =
            VerbalizerTable::new(Self::TASK_NAME, &[("1", &["bad"]), ("2", &["good"])]);
        Self {
            pattern_id,
            verbalizer,
        }
    }
}

impl Pvp for YelpPolarityPvp {
    fn task_name(&self) -> &'static str {
        Self::TASK_NAME
    }

    fn pattern_id(&self) -> usize {
        self.pattern_id
    }

    fn pattern_count(&self) -> usize {
        4
    }

    fn get_parts(&self, example: &InputExample) -> Result<FilledPattern> {
        let review = shortenable(example.require_text_a()?);
        let pattern = match self.pattern_id {
            0 => FilledPattern::single(vec![literal("It was"), mask(), literal("."), review]),
            1 => FilledPattern::single(vec![
                review,
                literal(". All in all, it was"),
                mask(),
                literal("."),
            ]),
            2 => FilledPattern::new(vec![literal("Just"), mask(), literal("!")], vec![review]),
            3 => FilledPattern::new(
                vec![review],
                vec![literal("In summary, it was"), mask(), literal(".")],
            ),
            id => {
                return Err(ClozeError::UnsupportedPattern {
                    task: Self::TASK_NAME.to_string(),
                    pattern_id: id,
                });
            }
        };
        Ok(pattern)
    }

    fn verbalize(&self, label: &str) -> Result<Vec<String>> {
        self.verbalizer.verbalize(label)
    }
}
