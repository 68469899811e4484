//! Core data model: task records and their enumerated attributes.

use std::fmt;

/// Task priority, `P0` most urgent.
///
/// The planner treats all records alike; priority exists for reporting and
/// for the staleness cache, where it scales entry lifetimes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Priority {
    P0,
    P1,
    #[default]
    P2,
    P3,
}

impl Priority {
    /// All priorities, most urgent first.
    pub const ALL: [Priority; 4] = [Priority::P0, Priority::P1, Priority::P2, Priority::P3];
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::P0 => "P0",
            Priority::P1 => "P1",
            Priority::P2 => "P2",
            Priority::P3 => "P3",
        };
        write!(f, "{}", label)
    }
}

/// Lifecycle status of a task as declared by the record store.
///
/// The scheduler only distinguishes `Completed` from everything else; the
/// remaining variants matter for reporting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Blocked,
    Completed,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in progress",
            TaskStatus::Blocked => "blocked",
            TaskStatus::Completed => "completed",
        };
        write!(f, "{}", label)
    }
}

/// One unit of work with declared dependencies.
///
/// Records arrive fully parsed; the id is opaque to the core and compared
/// only for equality and ordering. Declared dependencies may reference ids
/// that do not exist in the snapshot and may repeat; the graph builder
/// reports the former and collapses the latter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskRecord {
    /// Unique identifier within one snapshot.
    pub id: String,
    /// Free text, used only for reporting.
    pub description: String,
    pub priority: Priority,
    pub status: TaskStatus,
    /// Ids of tasks that must complete before this one starts.
    pub dependencies: Vec<String>,
}

impl TaskRecord {
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
        status: TaskStatus,
        dependencies: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            priority,
            status,
            dependencies,
        }
    }
}
