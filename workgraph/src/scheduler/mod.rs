//! Execution planning over a dependency graph.
//!
//! Three passes over one immutable snapshot:
//! - leveling: which tasks could run in parallel, and in what order
//! - longest chain: the critical path bounding total completion
//! - blocked detection: which tasks wait on incomplete dependencies

mod blocked;
mod critical;
mod leveling;
mod plan;
mod types;

pub use plan::plan_graph;
pub use types::{BlockedTask, CriticalPath, DanglingDependency, PlanResult};
