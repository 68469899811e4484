//! Dependency-aware task planning and staleness caching.
//!
//! Two independent services over externally supplied data: a scheduler that
//! turns a snapshot of task records into execution levels, the critical
//! path, and blocked and cyclic diagnostics, and a cache whose entries
//! invalidate on elapsed time and on modification-time changes of the keyed
//! resource and its dependencies.
//!
//! The crate is a library with two narrow inbound seams: task records arrive
//! through [`TaskRecordProvider`] or plain slices, and time and modification
//! times through [`ResourceClock`]. Parsing, rendering, and transport live
//! in the hosting application.

pub mod cache;
pub mod config;
pub mod decompose;
pub mod graph;
pub mod interner;
pub mod logging;
pub mod models;
pub mod provider;
pub mod scheduler;

pub use cache::{
    CacheEntry, DependencySnapshot, ManualClock, ResourceClock, Staleness, StalenessCache,
    SystemClock,
};
pub use config::{CacheConfig, TtlPolicy};
pub use decompose::{decompose, subtask_names, TaskKind};
pub use graph::{DependencyGraph, GraphError};
pub use models::{Priority, TaskRecord, TaskStatus};
pub use provider::{InMemoryProvider, TaskRecordProvider};
pub use scheduler::{plan_graph, BlockedTask, CriticalPath, DanglingDependency, PlanResult};

/// Compute the execution plan for a snapshot of task records.
///
/// Builds the dependency graph and runs the scheduling passes over it.
/// Scheduling itself never fails: cyclic, blocked, dangling, and
/// self-dependency conditions come back as data in the result.
///
/// # Arguments
/// * `records` - Task record snapshot; ids must be unique
///
/// # Returns
/// * `Ok(PlanResult)` with levels, critical path, and diagnostics
///
/// # Errors
/// * `GraphError::DuplicateTaskId` if two records share an id
pub fn plan(records: &[TaskRecord]) -> Result<PlanResult, GraphError> {
    let graph = DependencyGraph::build(records)?;
    Ok(plan_graph(&graph))
}

/// Compute the execution plan for a provider's current snapshot.
///
/// Convenience over [`plan`] for callers holding a [`TaskRecordProvider`].
///
/// # Errors
/// * `GraphError::DuplicateTaskId` if two records share an id
pub fn plan_provider(provider: &dyn TaskRecordProvider) -> Result<PlanResult, GraphError> {
    plan(&provider.list_tasks())
}
