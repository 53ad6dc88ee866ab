//! Task-name to PVP resolution.

use std::collections::HashMap;

use crate::error::{ClozeError, Result};
use crate::pvp::Pvp;

/// Constructor for a task's PVP at a given pattern id.
pub type PvpFactory = fn(usize) -> Box<dyn Pvp>;

/// An explicit mapping from task names to PVP factories.
///
/// The registry is a plain value, not process-global state: build one at
/// startup, register every task the run needs, then hand it to the driver
/// by reference and only read from it. Factories carry no validation of
/// their own; a bad pattern id surfaces later from
/// [`Pvp::get_parts`](crate::Pvp::get_parts).
#[derive(Debug, Default)]
pub struct PvpRegistry {
    factories: HashMap<String, PvpFactory>,
}

impl PvpRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` under `task_name`.
    ///
    /// Registering a name twice replaces the earlier entry; the overwrite
    /// is logged because it usually means two tasks collided on a name.
    pub fn register(&mut self, task_name: impl Into<String>, factory: PvpFactory) {
        let task_name = task_name.into();
        if self.factories.insert(task_name.clone(), factory).is_some() {
            tracing::warn!(task = %task_name, "replacing registered PVP");
        }
    }

    /// The factory registered under `task_name`.
    ///
    /// # Errors
    ///
    /// [`ClozeError::UnknownTask`] if the name was never registered.
    pub fn lookup(&self, task_name: &str) -> Result<PvpFactory> {
        self.factories
            .get(task_name)
            .copied()
            .ok_or_else(|| ClozeError::UnknownTask {
                task: task_name.to_string(),
            })
    }

    /// Instantiate the PVP registered under `task_name` with `pattern_id`.
    ///
    /// # Errors
    ///
    /// [`ClozeError::UnknownTask`] if the name was never registered.
    pub fn instantiate(&self, task_name: &str, pattern_id: usize) -> Result<Box<dyn Pvp>> {
        Ok(self.lookup(task_name)?(pattern_id))
    }

    /// Registered task names, sorted.
    pub fn task_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered tasks.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether no tasks are registered.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}
