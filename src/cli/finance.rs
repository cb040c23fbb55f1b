//! Finance CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_finance_details, format_finance_list};
use crate::error::{AssistantError, AssistantResult};
use crate::models::dates::today;
use crate::models::{FinanceFields, FinanceRecord, Money, RecordId};
use crate::reports::generate_report;
use crate::storage::Storage;

use super::{checked_date, export_collection, import_collection, warn_unaudited};

/// Finance subcommands
#[derive(Subcommand)]
pub enum FinanceCommands {
    /// Record income (positive amount) or an expense (negative amount)
    Add {
        /// Amount, e.g. "1500" or "-40.50"
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category
        category: String,
        /// Date (DD-MM-YYYY, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Description
        #[arg(short = 'm', long, default_value = "")]
        description: String,
    },
    /// List all finance records
    List,
    /// Show a finance record
    Show {
        /// Record ID
        id: RecordId,
    },
    /// Edit a finance record
    Edit {
        /// Record ID
        id: RecordId,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New date (DD-MM-YYYY)
        #[arg(short, long)]
        date: Option<String>,
        /// New description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },
    /// Delete a finance record
    Delete {
        /// Record ID
        id: RecordId,
    },
    /// Income, expense and balance totals over an inclusive date range
    Report {
        /// First day (DD-MM-YYYY)
        start: String,
        /// Last day (DD-MM-YYYY)
        end: String,
        /// Directory for the report file (defaults to the export directory)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
    /// Export finance records to CSV
    Export {
        /// Output file (defaults to finance_export.csv in the export directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Import finance records from CSV
    Import {
        /// Path to CSV file
        file: PathBuf,
    },
}

/// Handle a finance command
pub fn handle_finance_command(
    storage: &Storage,
    settings: &Settings,
    cmd: FinanceCommands,
) -> AssistantResult<()> {
    match cmd {
        FinanceCommands::Add {
            amount,
            category,
            date,
            description,
        } => {
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(date) => checked_date(date)?,
                None => today(),
            };

            let mut finance = storage.finance()?;
            let record = finance.create(FinanceFields::new(amount, category, date, description))?;
            warn_unaudited(&mut finance);
            println!(
                "Created finance record #{}: {} {} on {}",
                record.id, record.amount, record.category, record.date
            );
        }

        FinanceCommands::List => {
            let finance = storage.finance()?;
            println!("{}", format_finance_list(finance.list()));
        }

        FinanceCommands::Show { id } => {
            let finance = storage.finance()?;
            let record = finance
                .get(id)
                .ok_or_else(|| AssistantError::finance_record_not_found(id.to_string()))?;
            print!("{}", format_finance_details(record));
        }

        FinanceCommands::Edit {
            id,
            amount,
            category,
            date,
            description,
        } => {
            let mut finance = storage.finance()?;
            let current = finance
                .get(id)
                .ok_or_else(|| AssistantError::finance_record_not_found(id.to_string()))?;

            let fields = FinanceFields::new(
                match amount {
                    Some(amount) => parse_amount(&amount)?,
                    None => current.amount,
                },
                category.unwrap_or_else(|| current.category.clone()),
                match date {
                    Some(date) => checked_date(date)?,
                    None => current.date.clone(),
                },
                description.unwrap_or_else(|| current.description.clone()),
            );
            let record = finance.update(id, fields)?;
            warn_unaudited(&mut finance);
            println!("Updated finance record #{}", record.id);
        }

        FinanceCommands::Delete { id } => {
            let mut finance = storage.finance()?;
            let record = finance.delete(id)?;
            warn_unaudited(&mut finance);
            println!("Deleted finance record #{}: {}", record.id, record.amount);
        }

        FinanceCommands::Report {
            start,
            end,
            output_dir,
        } => {
            let finance = storage.finance()?;
            let dir = output_dir.unwrap_or_else(|| settings.export_dir(storage.paths()));
            let (report, path) = generate_report(&finance, &start, &end, &dir)?;

            print!("{}", report.format_terminal());
            println!("Report saved to {}", path.display());
        }

        FinanceCommands::Export { output } => {
            export_collection::<FinanceRecord>(storage, settings, output)?
        }

        FinanceCommands::Import { file } => import_collection::<FinanceRecord>(storage, &file)?,
    }

    Ok(())
}

fn parse_amount(text: &str) -> AssistantResult<Money> {
    Money::parse(text).map_err(|e| AssistantError::Format(e.to_string()))
}
