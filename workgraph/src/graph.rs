//! Dependency graph construction and input validation.
//!
//! Turns a flat snapshot of task records into an edge structure the
//! scheduler can traverse. Edges run dependency to dependent, and only
//! between ids that exist in the snapshot: a reference to an unknown id is
//! recorded as a dangling diagnostic and never becomes a node or an edge.
//! Duplicate ids are the one fatal condition, since the snapshot is
//! ambiguous about which record is meant.

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::interner::{TaskId, TaskIndex};
use crate::models::{TaskRecord, TaskStatus};

/// Fatal errors detected while building a graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Two records in the snapshot share an id.
    #[error("duplicate task id: {0}")]
    DuplicateTaskId(String),
}

/// Directed dependency graph over one snapshot of task records.
///
/// Node ids are assigned in ascending task id order, so iterating nodes
/// `0..len` visits tasks in id order and every adjacency list is kept
/// ascending. Cycles are permitted here; the scheduler detects them.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    index: TaskIndex,
    statuses: Vec<TaskStatus>,
    /// Resolved dependencies (predecessors) per node, ascending.
    deps: Vec<Vec<TaskId>>,
    /// Resolved dependents (successors) per node, ascending.
    dependents: Vec<Vec<TaskId>>,
    /// (declaring node, unknown dependency id) pairs, ordered.
    dangling: Vec<(TaskId, String)>,
    /// Nodes that declared a dependency on themselves, ascending.
    self_deps: Vec<TaskId>,
}

impl DependencyGraph {
    /// Build a graph from one snapshot of records.
    ///
    /// A self-referential dependency is recorded as a diagnostic and
    /// skipped, leaving the task otherwise dependency-free. A dependency
    /// declared more than once by the same task counts once.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateTaskId`] when two records share an id.
    pub fn build(records: &[TaskRecord]) -> Result<Self, GraphError> {
        let mut seen: FxHashSet<&str> =
            FxHashSet::with_capacity_and_hasher(records.len(), Default::default());
        let mut ids: Vec<String> = Vec::with_capacity(records.len());
        for record in records {
            if !seen.insert(record.id.as_str()) {
                return Err(GraphError::DuplicateTaskId(record.id.clone()));
            }
            ids.push(record.id.clone());
        }
        // Interning sorted ids makes node order equal task id order.
        ids.sort_unstable();
        let index = TaskIndex::new(ids);

        let n = index.len();
        let mut statuses = vec![TaskStatus::default(); n];
        let mut deps: Vec<Vec<TaskId>> = vec![Vec::new(); n];
        let mut dependents: Vec<Vec<TaskId>> = vec![Vec::new(); n];
        let mut dangling: Vec<(TaskId, String)> = Vec::new();
        let mut self_deps: Vec<TaskId> = Vec::new();

        for record in records {
            let Some(node) = index.get(&record.id) else {
                continue;
            };
            statuses[node as usize] = record.status;

            let mut declared: FxHashSet<&str> = FxHashSet::default();
            for dep in &record.dependencies {
                if !declared.insert(dep.as_str()) {
                    continue;
                }
                if *dep == record.id {
                    self_deps.push(node);
                    continue;
                }
                match index.get(dep) {
                    Some(target) => {
                        deps[node as usize].push(target);
                        dependents[target as usize].push(node);
                    }
                    None => dangling.push((node, dep.clone())),
                }
            }
        }

        for list in &mut deps {
            list.sort_unstable();
        }
        for list in &mut dependents {
            list.sort_unstable();
        }
        dangling.sort();
        self_deps.sort_unstable();

        Ok(Self {
            index,
            statuses,
            deps,
            dependents,
            dangling,
            self_deps,
        })
    }

    /// Number of nodes, equal to the number of records.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// All task ids in node order (ascending).
    pub fn task_ids(&self) -> &[String] {
        self.index.names()
    }

    /// Node for a task id string.
    pub fn node(&self, task_id: &str) -> Option<TaskId> {
        self.index.get(task_id)
    }

    /// Task id string for a node.
    pub fn task_id(&self, node: TaskId) -> Option<&str> {
        self.index.name(node)
    }

    /// Declared status of a node's record.
    ///
    /// # Panics
    /// Panics if `node` is out of range.
    pub fn status(&self, node: TaskId) -> TaskStatus {
        self.statuses[node as usize]
    }

    /// Resolved dependencies of a node, ascending.
    ///
    /// # Panics
    /// Panics if `node` is out of range.
    pub fn deps(&self, node: TaskId) -> &[TaskId] {
        &self.deps[node as usize]
    }

    /// Resolved dependents of a node, ascending.
    ///
    /// # Panics
    /// Panics if `node` is out of range.
    pub fn dependents(&self, node: TaskId) -> &[TaskId] {
        &self.dependents[node as usize]
    }

    /// Dangling references as (declaring node, unknown id) pairs, ordered.
    pub fn dangling(&self) -> &[(TaskId, String)] {
        &self.dangling
    }

    /// Nodes that declared themselves as a dependency, ascending.
    pub fn self_dependencies(&self) -> &[TaskId] {
        &self.self_deps
    }
}
