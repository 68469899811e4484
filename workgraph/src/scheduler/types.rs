//! Planning result types.
//!
//! Everything here is plain owned data keyed by task id strings, detached
//! from the graph it was computed from. Results derive `Eq` so callers can
//! compare plans across runs.

/// The longest dependency chain in the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriticalPath {
    /// Every task id on a chain of maximum length, ascending. Distinct
    /// chains tying for longest all contribute their members.
    pub tasks: Vec<String>,
    /// Tasks on the longest chain, endpoints included. Zero when the graph
    /// is empty or fully cyclic.
    pub length: usize,
}

/// One blocking relationship between a task and an incomplete dependency.
///
/// A task waiting on several incomplete dependencies appears once per
/// dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockedTask {
    pub task_id: String,
    /// The dependency that is not completed.
    pub blocked_by: String,
    /// Human-readable explanation for reports.
    pub reason: String,
}

/// A declared dependency that resolves to no task in the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingDependency {
    /// The task that declared the reference.
    pub task_id: String,
    /// The id that matched nothing.
    pub dependency_id: String,
}

/// Complete output of one planning pass.
///
/// Identical record snapshots produce identical plans; every sequence is
/// ordered by task id, with ties in multi-key listings broken by the
/// secondary id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanResult {
    /// Execution levels. Every dependency of a task in level `k` sits in a
    /// level before `k`; tasks within one level are mutually unordered.
    pub levels: Vec<Vec<String>>,
    pub critical_path: CriticalPath,
    /// All blocking pairs, ordered by (task id, blocking id).
    pub blocked: Vec<BlockedTask>,
    /// Tasks on a dependency cycle, or reachable only through one,
    /// ascending. These appear in no level.
    pub cyclic: Vec<String>,
    /// Dangling references, ordered by (task id, dependency id).
    pub dangling: Vec<DanglingDependency>,
    /// Tasks that declared a dependency on themselves, ascending.
    pub self_dependencies: Vec<String>,
}

impl PlanResult {
    /// True when the plan carries no diagnostics: nothing blocked, no
    /// cycles, no dangling or self references.
    pub fn is_clean(&self) -> bool {
        self.blocked.is_empty()
            && self.cyclic.is_empty()
            && self.dangling.is_empty()
            && self.self_dependencies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_clean() {
        let mut plan = PlanResult {
            levels: vec![vec!["a".to_string()]],
            critical_path: CriticalPath {
                tasks: vec!["a".to_string()],
                length: 1,
            },
            blocked: Vec::new(),
            cyclic: Vec::new(),
            dangling: Vec::new(),
            self_dependencies: Vec::new(),
        };
        assert!(plan.is_clean());

        plan.cyclic.push("a".to_string());
        assert!(!plan.is_clean());
    }
}
