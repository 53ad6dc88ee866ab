//! News topic classification over a headline and body.

use cloze_core::pattern::{literal, mask, shortenable};
use cloze_core::{ClozeError, FilledPattern, InputExample, Pvp, Result, VerbalizerTable};

/// Topic-classification PVP for four-way news categorization.
///
/// `text_a` is the headline and `text_b` the article body; the body may
/// be empty. Labels `"1"` through `"4"` verbalize to World, Sports,
/// Business, and Tech.
#[derive(Debug, Clone)]
pub struct AgNewsPvp {
    pattern_id: usize,
    verbalizer: VerbalizerTable,
}

impl AgNewsPvp {
    /// Name this task registers under.
    pub const TASK_NAME: &'static str = "agnews";

    /// Create the PVP for one of the six pattern variants.
    pub fn new(pattern_id: usize) -> Self {
        let verbalizer = VerbalizerTable::new(
            Self::TASK_NAME,
            &[
                ("1", &["World"]),
                ("2", &["Sports"]),
                ("3", &["Business"]),
                ("4", &["Tech"]),
            ],
        );
        Self {
            pattern_id,
            verbalizer,
        }
    }
}

impl Pvp for AgNewsPvp {
    fn task_name(&self) -> &'static str {
        Self::TASK_NAME
    }

    fn pattern_id(&self) -> usize {
        self.pattern_id
    }

    fn pattern_count(&self) -> usize {
        6
    }

    fn get_parts(&self, example: &InputExample) -> Result<FilledPattern> {
        let headline = shortenable(example.require_text_a()?);
        let body = shortenable(example.text_b.as_str());
        let pattern = match self.pattern_id {
            0 => FilledPattern::single(vec![mask(), literal(":"), headline, body]),
            1 => FilledPattern::single(vec![mask(), literal("News:"), headline, body]),
            2 => FilledPattern::single(vec![headline, literal("("), mask(), literal(")"), body]),
            3 => FilledPattern::single(vec![headline, body, literal("("), mask(), literal(")")]),
            4 => FilledPattern::single(vec![
                literal("[ Category:"),
                mask(),
                literal("]"),
                headline,
                body,
            ]),
            5 => FilledPattern::single(vec![mask(), literal("-"), headline, body]),
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

#[cfg(test)]
mod tests {
    use super::*;
    use cloze_core::{PatternPart, TextSegment};

    fn example() -> InputExample {
        InputExample::new("Giants win game", "A great night for fans.").with_label("2")
    }

    #[test]
    fn test_pattern_zero_shape() {
        let pvp = AgNewsPvp::new(0);
        let pattern = pvp.get_parts(&example()).expect("get_parts failed");
        assert_eq!(
            pattern.part_a,
            vec![
                PatternPart::Mask,
                PatternPart::Literal(":".to_string()),
                PatternPart::Segment(TextSegment::shortenable("Giants win game")),
                PatternPart::Segment(TextSegment::shortenable("A great night for fans.")),
            ]
        );
        assert!(pattern.part_b.is_empty());
    }

    #[test]
    fn test_every_pattern_has_one_mask() {
        let example = example();
        for pattern_id in 0..AgNewsPvp::new(0).pattern_count() {
            let pattern = AgNewsPvp::new(pattern_id)
                .get_parts(&example)
                .expect("get_parts failed");
            assert_eq!(pattern.mask_count(), 1, "pattern {pattern_id}");
        }
    }

    #[test]
    fn test_unsupported_pattern_id() {
        let pvp = AgNewsPvp::new(6);
        assert_eq!(
            pvp.get_parts(&example()),
            Err(ClozeError::UnsupportedPattern {
                task: "agnews".to_string(),
                pattern_id: 6,
            })
        );
    }

    #[test]
    fn test_missing_headline() {
        let pvp = AgNewsPvp::new(0);
        let no_headline = InputExample::new("", "body only");
        assert_eq!(
            pvp.get_parts(&no_headline),
            Err(ClozeError::MalformedExample {
                field: "text_a".to_string(),
            })
        );
    }

    #[test]
    fn test_verbalizer() {
        let pvp = AgNewsPvp::new(0);
        assert_eq!(pvp.verbalize("1").unwrap(), vec!["World".to_string()]);
        assert_eq!(pvp.verbalize("2").unwrap(), vec!["Sports".to_string()]);
        assert_eq!(pvp.verbalize("3").unwrap(), vec!["Business".to_string()]);
        assert_eq!(pvp.verbalize("4").unwrap(), vec!["Tech".to_string()]);
        assert!(matches!(
            pvp.verbalize("5"),
            Err(ClozeError::UnknownLabel { .. })
        ));
        assert!(!pvp.is_multi_token());
    }
}
