//! Deterministic assembly of filled patterns into budgeted model inputs.
//!
//! [`Pvp::get_parts`](crate::Pvp::get_parts) produces typed parts; this
//! module is the driver-side stage that fits them into a token budget and
//! renders the final text. The tokenizer itself stays outside the crate:
//! everything the stage needs from it goes through [`TokenCounter`].

use crate::pattern::{FilledPattern, PatternPart};

/// Token counting and splitting, as seen by the assembly stage.
///
/// Implement this over the model's real tokenizer in the training driver.
/// [`WordCounter`] is a whitespace-word stand-in for tests and rough
/// budget estimates.
pub trait TokenCounter {
    /// Number of tokens in `text`.
    fn count(&self, text: &str) -> usize;

    /// The longest prefix of `text` spanning at most `max_tokens` tokens.
    fn prefix<'a>(&self, text: &'a str, max_tokens: usize) -> &'a str;
}

/// [`TokenCounter`] over whitespace-separated words.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordCounter;

impl TokenCounter for WordCounter {
    fn count(&self, text: &str) -> usize {
        text.split_whitespace().count()
    }

    fn prefix<'a>(&self, text: &'a str, max_tokens: usize) -> &'a str {
        if max_tokens == 0 {
            return "";
        }
        let mut seen = 0;
        let mut end = 0;
        let mut in_word = false;
        for (idx, ch) in text.char_indices() {
            if ch.is_whitespace() {
                in_word = false;
            } else {
                if !in_word {
                    in_word = true;
                    seen += 1;
                    if seen > max_tokens {
                        return &text[..end];
                    }
                }
                end = idx + ch.len_utf8();
            }
        }
        text
    }
}

/// The rendered output of [`SequenceAssembler::assemble`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledInput {
    /// Rendered first sequence.
    pub text_a: String,
    /// Rendered second sequence, `None` when the pattern has no part B.
    pub text_b: Option<String>,
    /// Tokens dropped from shortenable segments to meet the budget.
    pub removed: usize,
}

struct Slot<'a> {
    part: &'a PatternPart,
    remaining: usize,
    shortenable: bool,
    priority: u8,
    side_b: bool,
}

/// Fits a [`FilledPattern`] into a token budget and renders both sides.
///
/// Tokens are only ever dropped from shortenable segments; template
/// literals and the mask placeholder always survive. Truncation removes
/// one token at a time from a deterministically chosen victim: the
/// shortenable segment with the lowest priority, breaking ties toward the
/// segment with the most remaining tokens and then toward the later
/// segment in part-A-then-part-B order. The same pattern and budget
/// therefore always render the same text.
///
/// The mask placeholder is budgeted as a single token per slot. If the
/// budget cannot be met even with every shortenable segment emptied, the
/// input is rendered over-long and a warning is logged; refusing to
/// produce the example is the driver's call, not this stage's.
#[derive(Debug, Clone)]
pub struct SequenceAssembler {
    max_length: usize,
    mask_token: String,
    reserved: usize,
}

impl SequenceAssembler {
    /// Create an assembler with a token budget and the model's mask token.
    pub fn new(max_length: usize, mask_token: impl Into<String>) -> Self {
        Self {
            max_length,
            mask_token: mask_token.into(),
            reserved: 0,
        }
    }

    /// Reserve part of the budget for the special tokens the driver adds
    /// around the sequence (BOS, EOS, separators).
    #[must_use]
    pub fn with_reserved(mut self, reserved: usize) -> Self {
        self.reserved = reserved;
        self
    }

    /// The configured token budget.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Assemble `pattern`, truncating shortenable segments to fit.
    pub fn assemble<C: TokenCounter>(
        &self,
        pattern: &FilledPattern,
        counter: &C,
    ) -> AssembledInput {
        let mut slots: Vec<Slot> = Vec::with_capacity(pattern.part_a.len() + pattern.part_b.len());
        for (side_b, parts) in [(false, &pattern.part_a), (true, &pattern.part_b)] {
            for part in parts {
                slots.push(match part {
                    PatternPart::Literal(text) => Slot {
                        part,
                        remaining: counter.count(text),
                        shortenable: false,
                        priority: 0,
                        side_b,
                    },
                    PatternPart::Mask => Slot {
                        part,
                        remaining: 1,
                        shortenable: false,
                        priority: 0,
                        side_b,
                    },
                    PatternPart::Segment(segment) => Slot {
                        part,
                        remaining: counter.count(&segment.content),
                        shortenable: segment.shortenable,
                        priority: segment.priority,
                        side_b,
                    },
                });
            }
        }

        let total: usize = self.reserved + slots.iter().map(|slot| slot.remaining).sum::<usize>();
        let over = total.saturating_sub(self.max_length);

        let mut removed = 0;
        for _ in 0..over {
            let Some(victim) = pick_victim(&slots) else {
                break;
            };
            slots[victim].remaining -= 1;
            removed += 1;
        }
        if removed < over {
            tracing::warn!(
                tokens = total - removed,
                max_length = self.max_length,
                "sequence exceeds budget with all shortenable text removed"
            );
        }

        let text_b = if pattern.part_b.is_empty() {
            None
        } else {
            Some(self.render_side(&slots, true, counter))
        };
        AssembledInput {
            text_a: self.render_side(&slots, false, counter),
            text_b,
            removed,
        }
    }

    fn render_side<C: TokenCounter>(&self, slots: &[Slot], side_b: bool, counter: &C) -> String {
        let mut out = String::new();
        for slot in slots.iter().filter(|slot| slot.side_b == side_b) {
            let piece: &str = match slot.part {
                PatternPart::Literal(text) => text,
                PatternPart::Mask => &self.mask_token,
                PatternPart::Segment(segment) => counter.prefix(&segment.content, slot.remaining),
            };
            if piece.is_empty() {
                continue;
            }
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(piece);
        }
        out
    }
}

fn pick_victim(slots: &[Slot]) -> Option<usize> {
    let mut victim: Option<usize> = None;
    for (idx, slot) in slots.iter().enumerate() {
        if !slot.shortenable || slot.remaining == 0 {
            continue;
        }
        victim = match victim {
            None => Some(idx),
            Some(best) => {
                let best_slot = &slots[best];
                // `>=` on remaining settles the final tie toward the
                // later segment.
                if slot.priority < best_slot.priority
                    || (slot.priority == best_slot.priority
                        && slot.remaining >= best_slot.remaining)
                {
                    Some(idx)
                } else {
                    Some(best)
                }
            }
        };
    }
    victim
}
