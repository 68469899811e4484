//! Deterministic task id interning.
//!
//! The graph algorithms index adjacency with dense integers instead of
//! hashing strings on every edge walk. Numbering follows the order names are
//! inserted, so callers that insert in sorted order get integer comparisons
//! that agree with task id comparisons everywhere downstream.

use rustc_hash::FxHashMap;

/// Interned task id. `u32` keeps adjacency lists compact.
pub type TaskId = u32;

/// Bidirectional mapping between task id strings and dense integers.
#[derive(Debug, Clone)]
pub struct TaskIndex {
    ids: FxHashMap<String, TaskId>,
    names: Vec<String>,
}

impl TaskIndex {
    /// Build an index over unique names, numbering them in iteration order.
    pub fn new<I>(names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut ids = FxHashMap::default();
        let mut stored = Vec::new();
        for name in names {
            let id = stored.len() as TaskId;
            ids.insert(name.clone(), id);
            stored.push(name);
        }
        Self { ids, names: stored }
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<TaskId> {
        self.ids.get(name).copied()
    }

    #[inline]
    pub fn name(&self, id: TaskId) -> Option<&str> {
        self.names.get(id as usize).map(|s| s.as_str())
    }

    /// All names in id order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
