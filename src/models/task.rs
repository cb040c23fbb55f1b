//! Task model
//!
//! Tasks carry a completion flag, a free-text priority and an optional due
//! date. The CSV exchange format renders the flag as a status label.

use serde::{Deserialize, Serialize};

use super::ids::RecordId;
use super::record::Record;
use crate::audit::EntityType;

/// Priority given to tasks that do not specify one
pub const DEFAULT_PRIORITY: &str = "Medium";

/// Status label of a completed task
pub const DONE_LABEL: &str = "Done";

/// Status label of an open task
pub const PENDING_LABEL: &str = "Not done";

fn default_priority() -> String {
    DEFAULT_PRIORITY.to_string()
}

/// A to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Task {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default = "default_priority")]
    pub priority: String,
    /// Due date as entered (`DD-MM-YYYY` by convention), stored as `null` when absent
    #[serde(default)]
    pub due_date: Option<String>,
}

impl Task {
    /// The status label shown for this task
    pub fn status_label(&self) -> &'static str {
        if self.done {
            DONE_LABEL
        } else {
            PENDING_LABEL
        }
    }

    /// The current fields of this task
    pub fn fields(&self) -> TaskFields {
        TaskFields {
            title: self.title.clone(),
            description: self.description.clone(),
            done: self.done,
            priority: self.priority.clone(),
            due_date: self.due_date.clone(),
        }
    }
}

/// Task fields without the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFields {
    pub title: String,
    pub description: String,
    pub done: bool,
    pub priority: String,
    pub due_date: Option<String>,
}

impl TaskFields {
    /// Fields for a new open task with the default priority and no due date
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            done: false,
            priority: default_priority(),
            due_date: None,
        }
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }
}

/// Status filter for task listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Done,
    Pending,
}

impl TaskFilter {
    /// Check whether a task passes this filter
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Done => task.done,
            TaskFilter::Pending => !task.done,
        }
    }
}

impl Record for Task {
    type Fields = TaskFields;

    const ENTITY_TYPE: EntityType = EntityType::Task;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_fields(id: RecordId, fields: TaskFields) -> Self {
        Self {
            id,
            title: fields.title,
            description: fields.description,
            done: fields.done,
            priority: fields.priority,
            due_date: fields.due_date,
        }
    }

    fn apply(&mut self, fields: TaskFields) {
        self.title = fields.title;
        self.description = fields.description;
        self.done = fields.done;
        self.priority = fields.priority;
        self.due_date = fields.due_date;
    }

    fn label(&self) -> String {
        self.title.clone()
    }
}
