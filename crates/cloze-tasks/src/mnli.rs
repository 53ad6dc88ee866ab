//! Natural language inference over a premise and hypothesis pair.

use cloze_core::pattern::{literal, mask, shortenable, strip_final_punctuation};
use cloze_core::{ClozeError, FilledPattern, InputExample, Pvp, Result, VerbalizerTable};

/// Entailment PVP over a premise (`text_a`) and hypothesis (`text_b`).
///
/// Both fields are required. Four patterns share two templates: patterns
/// 0 and 1 quote the sentences, 2 and 3 leave them bare. Even pattern
/// ids verbalize with Wrong / Right / Maybe, odd ids with No / Yes /
/// Maybe, so each template is trained with both word choices.
#[derive(Debug, Clone)]
pub struct MnliPvp {
    pattern_id: usize,
    judgment_words: VerbalizerTable,
    polar_words: VerbalizerTable,
}

impl MnliPvp {
    /// Name this task registers under.
    pub const TASK_NAME: &'static str = "mnli";

    /// Create the PVP for one of the four pattern variants.
    pub fn new(pattern_id: usize) -> Self {
        let judgment_words = VerbalizerTable::new(
            Self::TASK_NAME,
            &[
                ("contradiction", &["Wrong"]),
                ("entailment", &["Right"]),
                ("neutral", &["Maybe"]),
            ],
        );
        let polar_words = VerbalizerTable::new(
            Self::TASK_NAME,
            &[
                ("contradiction", &["No"]),
                ("entailment", &["Yes"]),
                ("neutral", &["Maybe"]),
            ],
        );
        Self {
            pattern_id,
            judgment_words,
            polar_words,
        }
    }
}

impl Pvp for MnliPvp {
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
        // Both sentences sit mid-template, so their own final punctuation
        // has to go.
        let premise = shortenable(strip_final_punctuation(example.require_text_a()?));
        let hypothesis = shortenable(strip_final_punctuation(example.require_text_b()?));
        let pattern = match self.pattern_id {
            0 | 1 => FilledPattern::new(
                vec![literal("\""), premise, literal("\" ?")],
                vec![mask(), literal(", \""), hypothesis, literal("\"")],
            ),
            2 | 3 => FilledPattern::new(
                vec![premise, literal("?")],
                vec![mask(), literal(","), hypothesis],
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
        if self.pattern_id % 2 == 0 {
            self.judgment_words.verbalize(label)
        } else {
            self.polar_words.verbalize(label)
        }
    }
}
