//! Plan assembly.
//!
//! Runs the three scheduling passes over one graph snapshot and converts
//! node ids back to task id strings. Scheduling never fails: cyclic nodes,
//! blocked tasks, and the builder's diagnostics are all data in the result.

use crate::graph::DependencyGraph;
use crate::interner::TaskId;

use super::blocked::blocking_pairs;
use super::critical::longest_chain;
use super::leveling::execution_levels;
use super::types::{BlockedTask, CriticalPath, DanglingDependency, PlanResult};

/// Compute the full execution plan for a built graph.
///
/// Output is deterministic: the same graph yields an equal [`PlanResult`],
/// and every sequence is ordered by task id.
pub fn plan_graph(graph: &DependencyGraph) -> PlanResult {
    let leveling = execution_levels(graph);
    let chain = longest_chain(graph, &leveling);
    let pairs = blocking_pairs(graph);

    let levels = leveling
        .levels
        .iter()
        .map(|level| names_of(graph, level))
        .collect();
    let cyclic = names_of(graph, &leveling.cyclic);
    let critical_path = CriticalPath {
        tasks: names_of(graph, &chain.critical),
        length: chain.length,
    };

    let blocked = pairs
        .into_iter()
        .filter_map(|(task, dep)| {
            let task_id = graph.task_id(task)?.to_string();
            let blocked_by = graph.task_id(dep)?.to_string();
            let reason = format!("dependency {} is {}", blocked_by, graph.status(dep));
            Some(BlockedTask {
                task_id,
                blocked_by,
                reason,
            })
        })
        .collect();

    let dangling = graph
        .dangling()
        .iter()
        .filter_map(|(task, dependency_id)| {
            Some(DanglingDependency {
                task_id: graph.task_id(*task)?.to_string(),
                dependency_id: dependency_id.clone(),
            })
        })
        .collect();

    let self_dependencies = names_of(graph, graph.self_dependencies());

    PlanResult {
        levels,
        critical_path,
        blocked,
        cyclic,
        dangling,
        self_dependencies,
    }
}

fn names_of(graph: &DependencyGraph, nodes: &[TaskId]) -> Vec<String> {
    nodes
        .iter()
        .filter_map(|&node| graph.task_id(node))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Priority, TaskRecord, TaskStatus};

    fn make_task(id: &str, status: TaskStatus, deps: &[&str]) -> TaskRecord {
        TaskRecord::new(
            id,
            format!("task {}", id),
            Priority::P2,
            status,
            deps.iter().map(|d| d.to_string()).collect(),
        )
    }

    fn plan_records(records: &[TaskRecord]) -> PlanResult {
        plan_graph(&DependencyGraph::build(records).unwrap())
    }

    #[test]
    fn test_plan_collects_all_sections() {
        let records = vec![
            make_task("done", TaskStatus::Completed, &[]),
            make_task("loop1", TaskStatus::Pending, &["loop2"]),
            make_task("loop2", TaskStatus::Pending, &["loop1"]),
            make_task("selfish", TaskStatus::Pending, &["selfish"]),
            make_task("waiting", TaskStatus::Pending, &["done", "stuck"]),
            make_task("stuck", TaskStatus::InProgress, &["ghost"]),
        ];
        let plan = plan_records(&records);

        // done and selfish have no resolved deps; stuck's only reference is
        // dangling, so it is dependency-free as well.
        assert_eq!(
            plan.levels,
            vec![vec!["done", "selfish", "stuck"], vec!["waiting"]]
        );
        assert_eq!(plan.cyclic, vec!["loop1", "loop2"]);
        assert_eq!(plan.self_dependencies, vec!["selfish"]);
        assert_eq!(plan.dangling.len(), 1);
        assert_eq!(plan.dangling[0].task_id, "stuck");
        assert_eq!(plan.dangling[0].dependency_id, "ghost");

        // waiting is blocked by stuck only; loop tasks block each other.
        let pairs: Vec<(&str, &str)> = plan
            .blocked
            .iter()
            .map(|b| (b.task_id.as_str(), b.blocked_by.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![("loop1", "loop2"), ("loop2", "loop1"), ("waiting", "stuck")]
        );
        assert!(!plan.is_clean());
    }

    #[test]
    fn test_blocked_reason_names_dependency_and_status() {
        let records = vec![
            make_task("dep", TaskStatus::InProgress, &[]),
            make_task("task", TaskStatus::Pending, &["dep"]),
        ];
        let plan = plan_records(&records);
        assert_eq!(plan.blocked.len(), 1);
        assert_eq!(plan.blocked[0].reason, "dependency dep is in progress");
    }

    #[test]
    fn test_critical_path_spans_levels() {
        let records = vec![
            make_task("a", TaskStatus::Pending, &[]),
            make_task("b", TaskStatus::Pending, &["a"]),
            make_task("c", TaskStatus::Pending, &["b"]),
            make_task("d", TaskStatus::Pending, &["c"]),
        ];
        let plan = plan_records(&records);
        assert_eq!(plan.levels.len(), 4);
        assert_eq!(plan.critical_path.length, 4);
        assert_eq!(plan.critical_path.tasks, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_self_dependent_task_is_in_level_zero() {
        let records = vec![make_task("solo", TaskStatus::Pending, &["solo"])];
        let plan = plan_records(&records);
        assert_eq!(plan.levels, vec![vec!["solo"]]);
        assert!(plan.blocked.is_empty());
        assert_eq!(plan.self_dependencies, vec!["solo"]);
    }

    #[test]
    fn test_completed_tasks_still_occupy_levels() {
        let records = vec![
            make_task("done", TaskStatus::Completed, &[]),
            make_task("next", TaskStatus::Pending, &["done"]),
        ];
        let plan = plan_records(&records);
        assert_eq!(plan.levels, vec![vec!["done"], vec!["next"]]);
        assert!(plan.is_clean());
    }

    #[test]
    fn test_empty_snapshot_plans_clean() {
        let plan = plan_records(&[]);
        assert!(plan.levels.is_empty());
        assert_eq!(plan.critical_path.length, 0);
        assert!(plan.critical_path.tasks.is_empty());
        assert!(plan.is_clean());
    }

    #[test]
    fn test_identical_snapshots_plan_identically() {
        let records = vec![
            make_task("b", TaskStatus::Pending, &[]),
            make_task("a", TaskStatus::Completed, &[]),
            make_task("c", TaskStatus::Pending, &["a", "b", "ghost"]),
            make_task("d", TaskStatus::Pending, &["c"]),
        ];
        let first = plan_records(&records);
        let second = plan_records(&records);
        assert_eq!(first, second);
    }

    #[test]
    fn test_input_order_does_not_change_the_plan() {
        let forward = vec![
            make_task("a", TaskStatus::Pending, &[]),
            make_task("b", TaskStatus::Pending, &["a"]),
            make_task("c", TaskStatus::Pending, &["a"]),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();
        assert_eq!(plan_records(&forward), plan_records(&reversed));
    }
}
