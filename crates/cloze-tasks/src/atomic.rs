//! Commonsense relation completion over event and consequence pairs.

use cloze_core::pattern::{literal, mask, shortenable, strip_final_punctuation};
use cloze_core::{ClozeError, FilledPattern, InputExample, Pvp, Result, VerbalizerTable};

/// Relation-completion PVP over an event (`text_a`) and its consequence
/// (`text_b`).
///
/// Labels are relation names like `xAttr` or `oEffect`, and each
/// verbalizes to a connecting phrase of several tokens, so this PVP is
/// multi-token: drivers must reserve one mask slot per verbalizer token
/// or decode the span sequentially. The consequence is quoted
/// mid-sentence, so its trailing punctuation is stripped.
#[derive(Debug, Clone)]
pub struct AtomicPvp {
    pattern_id: usize,
    verbalizer: VerbalizerTable,
}

impl AtomicPvp {
    /// Name this task registers under.
    pub const TASK_NAME: &'static str = "atomic";

    /// Create the PVP. A single pattern variant is implemented.
    pub fn new(pattern_id: usize) -> Self {
        let verbalizer = VerbalizerTable::new(
            Self::TASK_NAME,
            &[
                ("oEffect", &["The effect on others will be "]),
                ("oReact", &["As a result, others feel "]),
                ("oWant", &["After, others will want to "]),
                ("xAttr", &["PersonX is "]),
                ("xEffect", &["The effect on PersonX will be "]),
                ("xIntent", &["PersonX did this to "]),
                ("xNeed", &["Before, PersonX needs to "]),
                ("xReact", &["PersonX will be "]),
                ("xReason", &["PersonX did this because "]),
                ("xWant", &["After, PersonX will want to "]),
            ],
        );
        Self {
            pattern_id,
            verbalizer,
        }
    }
}

impl Pvp for AtomicPvp {
    fn task_name(&self) -> &'static str {
        Self::TASK_NAME
    }

    fn pattern_id(&self) -> usize {
        self.pattern_id
    }

    fn pattern_count(&self) -> usize {
        1
    }

    fn is_multi_token(&self) -> bool {
        true
    }

    fn get_parts(&self, example: &InputExample) -> Result<FilledPattern> {
        if self.pattern_id != 0 {
            return Err(ClozeError::UnsupportedPattern {
                task: Self::TASK_NAME.to_string(),
                pattern_id: self.pattern_id,
            });
        }
        let event = shortenable(example.require_text_a()?);
        let consequence = shortenable(strip_final_punctuation(example.require_text_b()?));
        Ok(FilledPattern::new(
            vec![literal("\""), event, literal("\";")],
            vec![mask(), literal("\""), consequence, literal("\"")],
        ))
    }

    fn verbalize(&self, label: &str) -> Result<Vec<String>> {
        self.verbalizer.verbalize(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloze_core::{PatternPart, TextSegment};

    fn example() -> InputExample {
        InputExample::new("PersonX arrives late", "tired.").with_label("xAttr")
    }

    #[test]
    fn test_pattern_shape_strips_consequence_punctuation() {
        let pattern = AtomicPvp::new(0)
            .get_parts(&example())
            .expect("get_parts failed");
        assert_eq!(
            pattern.part_a,
            vec![
                PatternPart::Literal("\"".to_string()),
                PatternPart::Segment(TextSegment::shortenable("PersonX arrives late")),
                PatternPart::Literal("\";".to_string()),
            ]
        );
        assert_eq!(
            pattern.part_b,
            vec![
                PatternPart::Mask,
                PatternPart::Literal("\"".to_string()),
                PatternPart::Segment(TextSegment::shortenable("tired")),
                PatternPart::Literal("\"".to_string()),
            ]
        );
        assert_eq!(pattern.mask_count(), 1);
    }

    #[test]
    fn test_multi_token_verbalization() {
        let pvp = AtomicPvp::new(0);
        assert!(pvp.is_multi_token());
        assert_eq!(
            pvp.verbalize("xAttr").unwrap(),
            vec!["PersonX is ".to_string()]
        );
        assert_eq!(
            pvp.verbalize("oReact").unwrap(),
            vec!["As a result, others feel ".to_string()]
        );
    }

    #[test]
    fn test_covers_all_ten_relations() {
        let pvp = AtomicPvp::new(0);
        for relation in [
            "oEffect", "oReact", "oWant", "xAttr", "xEffect", "xIntent", "xNeed", "xReact",
            "xReason", "xWant",
        ] {
            let tokens = pvp.verbalize(relation).expect("verbalize failed");
            assert!(!tokens.is_empty(), "relation {relation}");
        }
        assert!(matches!(
            pvp.verbalize("xOther"),
            Err(ClozeError::UnknownLabel { .. })
        ));
    }

    #[test]
    fn test_only_pattern_zero() {
        assert_eq!(
            AtomicPvp::new(1).get_parts(&example()),
            Err(ClozeError::UnsupportedPattern {
                task: "atomic".to_string(),
                pattern_id: 1,
            })
        );
    }

    #[test]
    fn test_requires_consequence() {
        let event_only = InputExample::new("PersonX arrives late", "");
        assert_eq!(
            AtomicPvp::new(0).get_parts(&event_only),
            Err(ClozeError::MalformedExample {
                field: "text_b".to_string(),
            })
        );
    }
}
