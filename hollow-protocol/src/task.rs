//! Task records and the dependency contract between them.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::TaskGraphError;

/// Unique identifier for a task.
pub type TaskId = String;

/// Progress of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

/// One tracked task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskState {
    pub id: TaskId,
    pub subject: String,
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default)]
    pub blocked_by: BTreeSet<TaskId>,
    #[serde(default)]
    pub blocks: BTreeSet<TaskId>,
}

impl TaskState {
    pub fn new(id: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            subject: subject.into(),
            status: TaskStatus::Pending,
            owner: None,
            blocked_by: BTreeSet::new(),
            blocks: BTreeSet::new(),
        }
    }

    /// Tasks from `all` that block this one and are not yet completed.
    pub fn open_blockers<'a>(&self, all: &'a [TaskState]) -> Vec<&'a TaskState> {
        all.iter()
            .filter(|t| self.blocked_by.contains(&t.id) && t.status != TaskStatus::Completed)
            .collect()
    }

    /// True when at least one blocker is still open.
    pub fn is_blocked(&self, all: &[TaskState]) -> bool {
        !self.open_blockers(all).is_empty()
    }
}

/// Checks that every `blockedBy`/`blocks` entry names another known task.
///
/// Reports the first violation in task order; `blockedBy` is checked before
/// `blocks`, each in id order.
pub fn validate_task_graph(tasks: &[TaskState]) -> Result<(), TaskGraphError> {
    let ids: HashSet<&str> = tasks.iter().map(|t| t.id.as_str()).collect();

    for task in tasks {
        for reference in task.blocked_by.iter().chain(task.blocks.iter()) {
            if *reference == task.id {
                return Err(TaskGraphError::SelfReference {
                    task: task.id.clone(),
                });
            }
            if !ids.contains(reference.as_str()) {
                return Err(TaskGraphError::UnknownTask {
                    task: task.id.clone(),
                    reference: reference.clone(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, blocked_by: &[&str]) -> TaskState {
        TaskState {
            blocked_by: blocked_by.iter().map(|s| s.to_string()).collect(),
            ..TaskState::new(id, format!("task {id}"))
        }
    }

    #[test]
    fn status_uses_snake_case_on_the_wire() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }

    #[test]
    fn task_decodes_dependency_sets() {
        let json = r#"{"id":"3","subject":"Wire up","status":"pending",
            "blockedBy":["1","2","1"],"blocks":["4"]}"#;
        let task: TaskState = serde_json::from_str(json).unwrap();

        assert_eq!(task.blocked_by.len(), 2);
        assert!(task.blocks.contains("4"));
        assert!(task.owner.is_none());
    }

    #[test]
    fn valid_graph_passes() {
        let mut first = task("1", &[]);
        first.blocks.insert("2".into());
        let tasks = vec![first, task("2", &["1"])];

        assert_eq!(validate_task_graph(&tasks), Ok(()));
    }

    #[test]
    fn self_reference_is_rejected() {
        let tasks = vec![task("1", &["1"])];

        assert_eq!(
            validate_task_graph(&tasks),
            Err(TaskGraphError::SelfReference { task: "1".into() })
        );
    }

    #[test]
    fn dangling_reference_is_rejected() {
        let tasks = vec![task("1", &[]), task("2", &["9"])];

        assert_eq!(
            validate_task_graph(&tasks),
            Err(TaskGraphError::UnknownTask {
                task: "2".into(),
                reference: "9".into()
            })
        );
    }

    #[test]
    fn completed_blockers_do_not_block() {
        let mut done = task("1", &[]);
        done.status = TaskStatus::Completed;
        let tasks = vec![done, task("2", &[]), task("3", &["1", "2"])];

        let blockers = tasks[2].open_blockers(&tasks);
        assert_eq!(blockers.len(), 1);
        assert_eq!(blockers[0].id, "2");
        assert!(tasks[2].is_blocked(&tasks));
        assert!(!tasks[1].is_blocked(&tasks));
    }
}
