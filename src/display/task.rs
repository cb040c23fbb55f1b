//! Task display formatting

use tabled::Tabled;

use super::{render_table, truncate};
use crate::models::Task;

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    title: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Due date")]
    due_date: String,
}

/// Format a list of tasks as a table
pub fn format_task_list(tasks: &[&Task]) -> String {
    let rows = tasks
        .iter()
        .map(|task| TaskRow {
            id: task.id.to_string(),
            title: task.title.clone(),
            description: truncate(&task.description, 40),
            status: task.status_label().to_string(),
            priority: task.priority.clone(),
            due_date: task.due_date.clone().unwrap_or_default(),
        })
        .collect();

    render_table(rows, "No tasks found.")
}

/// Format a single task in full
pub fn format_task_details(task: &Task) -> String {
    let mut output = format!("Task #{}: {}\n", task.id, task.title);
    output.push_str(&format!("Status:   {}\n", task.status_label()));
    output.push_str(&format!("Priority: {}\n", task.priority));
    if let Some(due) = &task.due_date {
        output.push_str(&format!("Due:      {}\n", due));
    }
    if !task.description.is_empty() {
        output.push_str(&format!("\n{}\n", task.description));
    }
    output
}
