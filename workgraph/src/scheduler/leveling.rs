//! Topological execution leveling.
//!
//! Kahn's algorithm generalized to batches: level 0 holds every node with no
//! resolved dependencies, and each later level holds the nodes whose
//! dependencies all sit in earlier levels. Tasks within one level have no
//! ordering constraints between them and could run in parallel. Nodes whose
//! in-degree never drains to zero lie on a dependency cycle, or depend on
//! one through every path, and are excluded from all levels.

use crate::graph::DependencyGraph;
use crate::interner::TaskId;

/// Result of the leveling pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Leveling {
    /// Execution levels; node ids ascending within each level.
    pub levels: Vec<Vec<TaskId>>,
    /// Nodes excluded from every level, ascending.
    pub cyclic: Vec<TaskId>,
}

pub(crate) fn execution_levels(graph: &DependencyGraph) -> Leveling {
    let n = graph.len();
    let mut in_degree: Vec<usize> = (0..n).map(|node| graph.deps(node as TaskId).len()).collect();

    // Node ids ascend with task ids, so scanning 0..n yields each level
    // already sorted.
    let mut current: Vec<TaskId> = (0..n as TaskId)
        .filter(|&node| in_degree[node as usize] == 0)
        .collect();

    let mut levels: Vec<Vec<TaskId>> = Vec::new();
    let mut placed = 0usize;

    while !current.is_empty() {
        let mut next: Vec<TaskId> = Vec::new();
        for &node in &current {
            for &dependent in graph.dependents(node) {
                let degree = &mut in_degree[dependent as usize];
                *degree -= 1;
                if *degree == 0 {
                    next.push(dependent);
                }
            }
        }
        next.sort_unstable();
        placed += current.len();
        levels.push(std::mem::replace(&mut current, next));
    }

    let cyclic: Vec<TaskId> = if placed == n {
        Vec::new()
    } else {
        (0..n as TaskId)
            .filter(|&node| in_degree[node as usize] > 0)
            .collect()
    };

    Leveling { levels, cyclic }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Priority, TaskRecord, TaskStatus};

    fn make_task(id: &str, deps: &[&str]) -> TaskRecord {
        TaskRecord::new(
            id,
            format!("task {}", id),
            Priority::P2,
            TaskStatus::Pending,
            deps.iter().map(|d| d.to_string()).collect(),
        )
    }

    fn level_names(graph: &DependencyGraph, leveling: &Leveling) -> Vec<Vec<String>> {
        leveling
            .levels
            .iter()
            .map(|level| {
                level
                    .iter()
                    .filter_map(|&node| graph.task_id(node))
                    .map(str::to_string)
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_chain_gets_one_task_per_level() {
        let records = vec![
            make_task("a", &[]),
            make_task("b", &["a"]),
            make_task("c", &["b"]),
        ];
        let graph = DependencyGraph::build(&records).unwrap();
        let leveling = execution_levels(&graph);
        assert_eq!(
            level_names(&graph, &leveling),
            vec![vec!["a"], vec!["b"], vec!["c"]]
        );
        assert!(leveling.cyclic.is_empty());
    }

    #[test]
    fn test_diamond() {
        let records = vec![
            make_task("root", &[]),
            make_task("left", &["root"]),
            make_task("right", &["root"]),
            make_task("join", &["left", "right"]),
        ];
        let graph = DependencyGraph::build(&records).unwrap();
        let leveling = execution_levels(&graph);
        assert_eq!(
            level_names(&graph, &leveling),
            vec![vec!["root"], vec!["left", "right"], vec!["join"]]
        );
    }

    #[test]
    fn test_independent_tasks_share_level_zero() {
        let records = vec![make_task("b", &[]), make_task("a", &[]), make_task("c", &[])];
        let graph = DependencyGraph::build(&records).unwrap();
        let leveling = execution_levels(&graph);
        assert_eq!(level_names(&graph, &leveling), vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn test_cycle_members_excluded_from_levels() {
        let records = vec![
            make_task("a", &["b"]),
            make_task("b", &["a"]),
            make_task("c", &[]),
        ];
        let graph = DependencyGraph::build(&records).unwrap();
        let leveling = execution_levels(&graph);
        assert_eq!(level_names(&graph, &leveling), vec![vec!["c"]]);
        let cyclic: Vec<&str> = leveling
            .cyclic
            .iter()
            .filter_map(|&node| graph.task_id(node))
            .collect();
        assert_eq!(cyclic, vec!["a", "b"]);
    }

    #[test]
    fn test_task_downstream_of_cycle_is_cyclic_too() {
        let records = vec![
            make_task("a", &["b"]),
            make_task("b", &["a"]),
            make_task("c", &["a"]),
        ];
        let graph = DependencyGraph::build(&records).unwrap();
        let leveling = execution_levels(&graph);
        assert!(leveling.levels.is_empty());
        assert_eq!(leveling.cyclic.len(), 3);
    }

    #[test]
    fn test_empty_graph() {
        let graph = DependencyGraph::build(&[]).unwrap();
        let leveling = execution_levels(&graph);
        assert!(leveling.levels.is_empty());
        assert!(leveling.cyclic.is_empty());
    }
}
