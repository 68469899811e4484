//! Task record providers.
//!
//! The record store is external. Markdown importers, databases, and HTTP
//! handlers live in the hosting application and hand the planner a typed
//! snapshot through this trait.

use crate::models::TaskRecord;

/// Source of task record snapshots.
///
/// Implementations resolve their own I/O; by the time records reach the
/// planner they are plain data. A snapshot is whatever the store currently
/// holds and may contain any of the conditions the planner diagnoses.
pub trait TaskRecordProvider {
    /// The current set of task records.
    fn list_tasks(&self) -> Vec<TaskRecord>;
}

/// Provider over a fixed in-memory record list.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    records: Vec<TaskRecord>,
}

impl InMemoryProvider {
    pub fn new(records: Vec<TaskRecord>) -> Self {
        Self { records }
    }
}

impl TaskRecordProvider for InMemoryProvider {
    fn list_tasks(&self) -> Vec<TaskRecord> {
        self.records.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Priority, TaskStatus};

    #[test]
    fn test_in_memory_provider_returns_records() {
        let records = vec![TaskRecord::new(
            "a",
            "task a",
            Priority::P2,
            TaskStatus::Pending,
            Vec::new(),
        )];
        let provider = InMemoryProvider::new(records.clone());
        assert_eq!(provider.list_tasks(), records);
        // Snapshots are independent copies.
        assert_eq!(provider.list_tasks(), records);
    }

    #[test]
    fn test_empty_provider() {
        let provider = InMemoryProvider::default();
        assert!(provider.list_tasks().is_empty());
    }
}
