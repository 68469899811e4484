//! Subtask templates for common task shapes.
//!
//! Breaking a task into steps follows a fixed four-step template per kind;
//! classifying the task is the caller's job. The planner then treats the
//! steps as ordinary records: each step depends on the previous one, so a
//! decomposed task forms a chain of consecutive execution levels.

use crate::models::{TaskRecord, TaskStatus};

/// Shape of work a task represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// Inspect something that already exists.
    Review,
    /// Fix a known problem.
    Remediation,
    /// Produce something new.
    Creation,
    /// Improve something that works.
    Optimization,
    /// Anything else.
    General,
}

/// Ordered step names for a task kind.
pub fn subtask_names(kind: TaskKind) -> &'static [&'static str] {
    match kind {
        TaskKind::Review => &[
            "prepare the checklist",
            "run the checks",
            "record the findings",
            "write the report",
        ],
        TaskKind::Remediation => &[
            "identify the problem",
            "draft a fix plan",
            "apply the fix",
            "verify the fix",
        ],
        TaskKind::Creation => &[
            "design the structure",
            "create the content",
            "review the quality",
            "finalize the document",
        ],
        TaskKind::Optimization => &[
            "analyze the current state",
            "draft an optimization plan",
            "apply the optimization",
            "verify the results",
        ],
        TaskKind::General => &[
            "analyze the requirements",
            "draft a plan",
            "execute the task",
            "verify the outcome",
        ],
    }
}

/// Expand a task into sequentially dependent subtask records.
///
/// Step ids are `{parent}.1` through `{parent}.4`. The first step inherits
/// the parent's declared dependencies; every later step depends on the step
/// before it. All steps inherit the parent's priority and start `Pending`.
/// What happens to the parent record is up to the caller.
pub fn decompose(parent: &TaskRecord, kind: TaskKind) -> Vec<TaskRecord> {
    let steps = subtask_names(kind);
    let mut records = Vec::with_capacity(steps.len());
    let mut previous: Option<String> = None;

    for (position, step) in steps.iter().enumerate() {
        let id = format!("{}.{}", parent.id, position + 1);
        let dependencies = match &previous {
            Some(prev) => vec![prev.clone()],
            None => parent.dependencies.clone(),
        };
        records.push(TaskRecord::new(
            id.clone(),
            (*step).to_string(),
            parent.priority,
            TaskStatus::Pending,
            dependencies,
        ));
        previous = Some(id);
    }

    records
}
