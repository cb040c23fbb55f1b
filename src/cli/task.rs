//! Task CLI commands

use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

use crate::config::settings::Settings;
use crate::display::{format_task_details, format_task_list};
use crate::error::{AssistantError, AssistantResult};
use crate::models::{RecordId, Task, TaskFields, TaskFilter};
use crate::storage::Storage;

use super::{checked_date, export_collection, import_collection, warn_unaudited};

/// Status filter accepted by `task list`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    All,
    Done,
    Pending,
}

impl From<StatusArg> for TaskFilter {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::All => TaskFilter::All,
            StatusArg::Done => TaskFilter::Done,
            StatusArg::Pending => TaskFilter::Pending,
        }
    }
}

/// Task subcommands
#[derive(Subcommand)]
pub enum TaskCommands {
    /// Create a new task
    Add {
        /// Task name
        title: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Priority (defaults to the configured default priority)
        #[arg(short, long)]
        priority: Option<String>,
        /// Due date (DD-MM-YYYY)
        #[arg(long)]
        due: Option<String>,
    },
    /// List tasks
    List {
        /// Only show tasks with this status
        #[arg(short, long, value_enum, default_value = "all")]
        status: StatusArg,
    },
    /// Show a task in full
    Show {
        /// Task ID
        id: RecordId,
    },
    /// Edit a task
    Edit {
        /// Task ID
        id: RecordId,
        /// New name
        #[arg(short, long)]
        title: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New priority
        #[arg(short, long)]
        priority: Option<String>,
        /// New due date (DD-MM-YYYY)
        #[arg(long, conflicts_with = "no_due")]
        due: Option<String>,
        /// Remove the due date
        #[arg(long)]
        no_due: bool,
    },
    /// Mark a task as done
    Done {
        /// Task ID
        id: RecordId,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: RecordId,
    },
    /// Export tasks to CSV
    Export {
        /// Output file (defaults to tasks_export.csv in the export directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Import tasks from CSV
    Import {
        /// Path to CSV file
        file: PathBuf,
    },
}

/// Handle a task command
pub fn handle_task_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TaskCommands,
) -> AssistantResult<()> {
    match cmd {
        TaskCommands::Add {
            title,
            description,
            priority,
            due,
        } => {
            let mut fields = TaskFields::new(title, description)
                .with_priority(priority.unwrap_or_else(|| settings.default_priority.clone()));
            if let Some(due) = due {
                fields = fields.with_due_date(checked_date(due)?);
            }

            let mut tasks = storage.tasks()?;
            let task = tasks.create(fields)?;
            warn_unaudited(&mut tasks);
            println!("Created task #{}: {}", task.id, task.title);
            println!("  Priority: {}", task.priority);
            if let Some(due) = &task.due_date {
                println!("  Due: {}", due);
            }
        }

        TaskCommands::List { status } => {
            let tasks = storage.tasks()?;
            println!("{}", format_task_list(&tasks.list_by_status(status.into())));
        }

        TaskCommands::Show { id } => {
            let tasks = storage.tasks()?;
            let task = tasks
                .get(id)
                .ok_or_else(|| AssistantError::task_not_found(id.to_string()))?;
            print!("{}", format_task_details(task));
        }

        TaskCommands::Edit {
            id,
            title,
            description,
            priority,
            due,
            no_due,
        } => {
            let mut tasks = storage.tasks()?;
            let mut fields = tasks
                .get(id)
                .map(Task::fields)
                .ok_or_else(|| AssistantError::task_not_found(id.to_string()))?;

            if let Some(title) = title {
                fields.title = title;
            }
            if let Some(description) = description {
                fields.description = description;
            }
            if let Some(priority) = priority {
                fields.priority = priority;
            }
            if let Some(due) = due {
                fields.due_date = Some(checked_date(due)?);
            } else if no_due {
                fields.due_date = None;
            }

            let task = tasks.update(id, fields)?;

            warn_unaudited(&mut tasks);
            println!("Updated task #{}: {}", task.id, task.title);
        }

        TaskCommands::Done { id } => {
            let mut tasks = storage.tasks()?;
            let task = tasks.mark_done(id)?;
            warn_unaudited(&mut tasks);
            println!("Task #{} marked as done: {}", task.id, task.title);
        }

        TaskCommands::Delete { id } => {
            let mut tasks = storage.tasks()?;
            let task = tasks.delete(id)?;
            warn_unaudited(&mut tasks);
            println!("Deleted task #{}: {}", task.id, task.title);
        }

        TaskCommands::Export { output } => export_collection::<Task>(storage, settings, output)?,

        TaskCommands::Import { file } => import_collection::<Task>(storage, &file)?,
    }

    Ok(())
}
