use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use assistant::cli::{
    handle_contact_command, handle_finance_command, handle_history_command, handle_note_command,
    handle_task_command,
};
use assistant::config::paths::DATA_DIR_ENV;
use assistant::config::{paths::AssistantPaths, settings::Settings};
use assistant::storage::Storage;

#[derive(Parser)]
#[command(
    name = "assistant",
    version,
    about = "Local personal-data manager for notes, tasks, contacts and finances",
    long_about = "Assistant keeps notes, tasks, contacts and income/expense records \
                  in local JSON files, exchanges them with spreadsheets as CSV, and \
                  reports income, expenses and balance over a date range."
)]
struct Cli {
    /// Base directory for settings, data and exports
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Note management commands
    #[command(subcommand)]
    Note(assistant::cli::NoteCommands),

    /// Task management commands
    #[command(subcommand)]
    Task(assistant::cli::TaskCommands),

    /// Contact management commands
    #[command(subcommand)]
    Contact(assistant::cli::ContactCommands),

    /// Income and expense commands
    #[command(subcommand, alias = "fin")]
    Finance(assistant::cli::FinanceCommands),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => AssistantPaths::with_base_dir(dir),
        None => AssistantPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    let storage = Storage::new(paths.clone(), &settings)?;

    match cli.command {
        Some(Commands::Note(cmd)) => handle_note_command(&storage, &settings, cmd)?,
        Some(Commands::Task(cmd)) => handle_task_command(&storage, &settings, cmd)?,
        Some(Commands::Contact(cmd)) => handle_contact_command(&storage, &settings, cmd)?,
        Some(Commands::Finance(cmd)) => handle_finance_command(&storage, &settings, cmd)?,
        Some(Commands::History { count }) => handle_history_command(&storage, count)?,
        Some(Commands::Config) => {
            println!("Assistant Configuration");
            println!("=======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Export directory: {}", settings.export_dir(&paths).display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Audit enabled:    {}", settings.audit_enabled);
            println!("  Default priority: {}", settings.default_priority);
        }
        None => {
            println!("Assistant - notes, tasks, contacts and finances");
            println!();
            println!("Run 'assistant --help' for usage information.");
        }
    }

    Ok(())
}
