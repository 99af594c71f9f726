//! Income CLI commands
//!
//! Implements CLI commands for the income sources of a month.

use clap::Subcommand;

use super::{parse_date_arg, today};
use crate::config::settings::Settings;
use crate::display::format_income_list;
use crate::error::LodgeResult;
use crate::models::{Amount, IncomeEntry, MonthKey};
use crate::services::EntryService;
use crate::storage::Storage;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Add an income source
    Add {
        /// Where the money comes from (e.g., "Salary")
        source: String,

        /// Amount received (e.g., "5000" or "5000.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Date received (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List income sources
    #[command(alias = "ls")]
    List,

    /// Change an income source
    Update {
        /// Income ID (or unique prefix)
        id: String,

        /// New source
        #[arg(short, long)]
        source: Option<String>,

        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,

        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Remove an income source
    #[command(alias = "rm")]
    Remove {
        /// Income ID (or unique prefix)
        id: String,
    },
}

/// Handle an income command
pub fn handle_income_command(
    storage: &Storage,
    settings: &Settings,
    month: &MonthKey,
    cmd: IncomeCommands,
) -> LodgeResult<()> {
    let service: EntryService<IncomeEntry> =
        EntryService::new(storage, settings.default_savings_goal);
    let symbol = &settings.currency_symbol;

    match cmd {
        IncomeCommands::Add {
            source,
            amount,
            date,
        } => {
            let date = parse_date_arg(date.as_deref())?.unwrap_or_else(today);
            let entry = IncomeEntry::new(source.trim(), Amount::parse(&amount), Some(date));
            let entry = service.add(month, entry)?;

            println!(
                "Added income {} for {}: {} ({}{})",
                entry.id, month, entry.source, symbol, entry.amount
            );
        }

        IncomeCommands::List => {
            println!("Income for {}", month);
            println!();
            let entries = service.list(month)?;
            println!("{}", format_income_list(&entries, symbol, &settings.date_format));
        }

        IncomeCommands::Update {
            id,
            source,
            amount,
            date,
        } => {
            let date = parse_date_arg(date.as_deref())?;
            let entry = service.update(month, &id, |e| {
                if let Some(source) = source {
                    e.source = source.trim().to_string();
                }
                if let Some(amount) = amount {
                    e.amount = Amount::parse(&amount);
                }
                if date.is_some() {
                    e.date = date;
                }
            })?;

            println!(
                "Updated income {}: {} ({}{})",
                entry.id, entry.source, symbol, entry.amount
            );
        }

        IncomeCommands::Remove { id } => {
            let entry = service.remove(month, &id)?;
            println!("Removed income {}: {}", entry.id, entry.source);
        }
    }

    Ok(())
}
