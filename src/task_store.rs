use std::collections::HashSet;

use tracing::debug;

use crate::error::{DashboardError, Result};
use crate::task::{Status, Task};

const SAMPLE_TASKS: &str = include_str!("sample_tasks.json");

/// The member's assigned tasks, in insertion order. Built once per session
/// and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Decode the built-in DevCatalyst sample table.
    pub fn sample() -> Result<Self> {
        Self::from_json(SAMPLE_TASKS)
    }

    pub fn from_json(data: &str) -> Result<Self> {
        let tasks: Vec<Task> = serde_json::from_str(data)?;
        Self::from_tasks(tasks)
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Result<Self> {
        let mut seen = HashSet::new();
        for task in &tasks {
            if !seen.insert(task.id.as_str()) {
                return Err(DashboardError::DuplicateTaskId(task.id.clone()));
            }
            if task.assigned_date > task.due_date {
                debug!(id = %task.id, assigned = %task.assigned_date, due = %task.due_date,
                    "task assigned after its due date");
            }
        }
        debug!(count = tasks.len(), "task store built");
        Ok(Self { tasks })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get_tasks_by_status(&self, status: Status) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.status == status).collect()
    }
}
