//! Built-in pattern-verbalizer pairs for common classification tasks.
//!
//! One module per task. [`registry()`] returns a [`PvpRegistry`] with
//! every built-in registered; downstream crates add their own tasks on
//! top of it, or start from an empty registry if they want none of
//! these.

#![warn(missing_docs)]

mod agnews;
mod atomic;
mod mnli;
mod yelp;

pub use agnews::AgNewsPvp;
pub use atomic::AtomicPvp;
pub use mnli::MnliPvp;
pub use yelp::YelpPolarityPvp;

use cloze_core::PvpRegistry;

/// Build a registry populated with every built-in task.
///
/// Registering another PVP under one of the built-in names replaces it.
pub fn registry() -> PvpRegistry {
    let mut registry = PvpRegistry::new();
    registry.register(AgNewsPvp::TASK_NAME, |id| Box::new(AgNewsPvp::new(id)));
    registry.register(YelpPolarityPvp::TASK_NAME, |id| {
        Box::new(YelpPolarityPvp::new(id))
    });
    registry.register(MnliPvp::TASK_NAME, |id| Box::new(MnliPvp::new(id)));
    registry.register(AtomicPvp::TASK_NAME, |id| Box::new(AtomicPvp::new(id)));
    registry
}
