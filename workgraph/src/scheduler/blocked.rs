//! Blocked-task detection.
//!
//! A task is blocked when at least one resolved dependency is not
//! `Completed`. The check runs directly against record status, independent
//! of leveling: a cyclic task with incomplete dependencies is reported here
//! as well, and the separate cyclic listing tells the two conditions apart.
//! Dangling references and self-references resolve to no edge, so they can
//! never block.

use crate::graph::DependencyGraph;
use crate::interner::TaskId;
use crate::models::TaskStatus;

/// All (task, incomplete dependency) pairs, ordered by task then dependency.
pub(crate) fn blocking_pairs(graph: &DependencyGraph) -> Vec<(TaskId, TaskId)> {
    let mut pairs = Vec::new();
    for node in 0..graph.len() as TaskId {
        for &dep in graph.deps(node) {
            if graph.status(dep) != TaskStatus::Completed {
                pairs.push((node, dep));
            }
        }
    }
    pairs
}
