//! Core pattern-verbalizer pair (PVP) types for cloze-style prompting.
//!
//! A PVP reformulates a classification task as a cloze question: its
//! pattern renders an example as text with a mask placeholder, and its
//! verbalizer maps each label to the token(s) a masked language model
//! should predict in that slot. This crate provides:
//!
//! - Typed input examples and pattern parts ([`InputExample`],
//!   [`pattern`])
//! - The [`Pvp`] trait binding pattern application to verbalization
//! - [`VerbalizerTable`] with startup coverage checks
//! - [`PvpRegistry`], an explicit task-name to PVP mapping
//! - Deterministic sequence assembly within a token budget
//!   ([`assemble`])
//!
//! Task definitions live in the `cloze-tasks` crate; tokenization and
//! the training loop stay with the driver.

#![warn(missing_docs)]

pub mod assemble;
mod error;
mod example;
pub mod pattern;
mod pvp;
mod registry;
mod verbalizer;

pub use error::{ClozeError, Result};
pub use example::InputExample;
pub use pattern::{FilledPattern, PatternPart, TextSegment};
pub use pvp::Pvp;
pub use registry::{PvpFactory, PvpRegistry};
pub use verbalizer::VerbalizerTable;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::assemble::{AssembledInput, SequenceAssembler, TokenCounter, WordCounter};
    pub use crate::error::{ClozeError, Result};
    pub use crate::example::InputExample;
    pub use crate::pattern::{FilledPattern, PatternPart, TextSegment};
    pub use crate::pvp::Pvp;
    pub use crate::registry::{PvpFactory, PvpRegistry};
    pub use crate::verbalizer::VerbalizerTable;
}
