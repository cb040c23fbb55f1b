//! Task-specific store operations

use crate::error::AssistantResult;
use crate::models::{RecordId, Task, TaskFilter};

use super::store::RecordStore;

/// Store of tasks backed by tasks.json
pub type TaskRepository = RecordStore<Task>;

impl RecordStore<Task> {
    /// Mark a task as completed
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no task has this id.
    pub fn mark_done(&mut self, id: RecordId) -> AssistantResult<Task> {
        self.modify(id, |task| task.done = true)
    }

    /// Tasks passing a status filter, in stored order
    pub fn list_by_status(&self, filter: TaskFilter) -> Vec<&Task> {
        self.list_where(|task| filter.matches(task))
    }
}
