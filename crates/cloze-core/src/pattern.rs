//! Typed pattern parts and the filled patterns built from them.
//!
//! A PVP renders an example into two ordered sequences of [`PatternPart`]s
//! instead of one flat string. Keeping template literals, raw input text,
//! and the mask placeholder as distinct values lets the assembly stage
//! truncate input text without ever touching the template, and lets the
//! driver locate the prediction slot without string matching.

/// A span of raw input text together with its truncation contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSegment {
    /// The text content.
    pub content: String,
    /// Whether the assembly stage may drop tokens from this segment.
    pub shortenable: bool,
    /// Truncation priority. Lower values lose tokens first.
    pub priority: u8,
}

impl TextSegment {
    /// A segment the assembly stage may truncate.
    pub fn shortenable(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            shortenable: true,
            priority: 0,
        }
    }

    /// A segment that must survive truncation intact.
    pub fn fixed(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            shortenable: false,
            priority: 0,
        }
    }

    /// Set the truncation priority. Higher-priority segments keep their
    /// tokens longer when the budget runs out.
    #[must_use]
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }
}

/// One element of a rendered pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternPart {
    /// Fixed template text. Never truncated.
    Literal(String),
    /// Raw input text carried by a [`TextSegment`].
    Segment(TextSegment),
    /// The slot where the model's prediction goes. A sentinel, not a
    /// string: drivers match on the variant rather than on a magic token.
    Mask,
}

impl PatternPart {
    /// Whether this part is the mask placeholder.
    pub fn is_mask(&self) -> bool {
        matches!(self, PatternPart::Mask)
    }
}

/// Fixed template text.
pub fn literal(text: impl Into<String>) -> PatternPart {
    PatternPart::Literal(text.into())
}

/// Input text the assembly stage may truncate.
pub fn shortenable(text: impl Into<String>) -> PatternPart {
    PatternPart::Segment(TextSegment::shortenable(text))
}

/// Input text that must survive truncation intact.
pub fn fixed(text: impl Into<String>) -> PatternPart {
    PatternPart::Segment(TextSegment::fixed(text))
}

/// The mask placeholder.
pub fn mask() -> PatternPart {
    PatternPart::Mask
}

/// Strip trailing ASCII punctuation from `text`.
///
/// Completion-style patterns quote an input fragment mid-sentence and add
/// their own punctuation, so the fragment's final `.` or `!` has to go.
pub fn strip_final_punctuation(text: &str) -> &str {
    text.trim_end_matches(|c: char| c.is_ascii_punctuation())
}

/// The two ordered part sequences produced by a PVP's pattern application.
///
/// `part_a` and `part_b` correspond to the two text sides of a
/// segment-pair model input. Single-sequence patterns leave `part_b`
/// empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilledPattern {
    /// Parts of the first sequence.
    pub part_a: Vec<PatternPart>,
    /// Parts of the second sequence. Empty for single-sequence patterns.
    pub part_b: Vec<PatternPart>,
}

impl FilledPattern {
    /// Create a two-sided filled pattern.
    pub fn new(part_a: Vec<PatternPart>, part_b: Vec<PatternPart>) -> Self {
        Self { part_a, part_b }
    }

    /// Create a single-sequence filled pattern.
    pub fn single(part_a: Vec<PatternPart>) -> Self {
        Self {
            part_a,
            part_b: Vec::new(),
        }
    }

    /// All parts in order, `part_a` before `part_b`.
    pub fn parts(&self) -> impl Iterator<Item = &PatternPart> {
        self.part_a.iter().chain(self.part_b.iter())
    }

    /// Number of mask placeholders across both sequences.
    ///
    /// Exactly one per predicted span: single-label PVPs produce one, and
    /// multi-token PVPs one per span.
    pub fn mask_count(&self) -> usize {
        self.parts().filter(|part| part.is_mask()).count()
    }
}
