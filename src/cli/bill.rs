//! Bill CLI commands

use clap::Subcommand;

use super::parse_date_arg;
use crate::config::settings::Settings;
use crate::display::format_bill_list;
use crate::error::LodgeResult;
use crate::models::{Amount, BillEntry, MonthKey};
use crate::services::EntryService;
use crate::storage::Storage;

/// Bill subcommands
#[derive(Subcommand)]
pub enum BillCommands {
    /// Add a bill or subscription
    Add {
        /// Name of the bill (e.g., "Internet")
        name: String,

        /// Amount due
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Due date (YYYY-MM-DD)
        #[arg(short, long)]
        due: Option<String>,

        /// Mark as a one-time bill (bills are recurring by default)
        #[arg(long)]
        one_time: bool,
    },

    /// List bills
    #[command(alias = "ls")]
    List,

    /// Change a bill
    Update {
        /// Bill ID (or unique prefix)
        id: String,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,

        /// New due date (YYYY-MM-DD)
        #[arg(short, long)]
        due: Option<String>,

        /// Whether the bill recurs every month
        #[arg(short, long)]
        recurring: Option<bool>,
    },

    /// Remove a bill
    #[command(alias = "rm")]
    Remove {
        /// Bill ID (or unique prefix)
        id: String,
    },
}

/// Handle a bill command
pub fn handle_bill_command(
    storage: &Storage,
    settings: &Settings,
    month: &MonthKey,
    cmd: BillCommands,
) -> LodgeResult<()> {
    let service: EntryService<BillEntry> =
        EntryService::new(storage, settings.default_savings_goal);
    let symbol = &settings.currency_symbol;

    match cmd {
        BillCommands::Add {
            name,
            amount,
            due,
            one_time,
        } => {
            let due = parse_date_arg(due.as_deref())?;
            let mut entry = BillEntry::new(name.trim(), Amount::parse(&amount), due);
            entry.recurring = !one_time;
            let entry = service.add(month, entry)?;

            println!(
                "Added {} bill {} for {}: {} ({}{})",
                if entry.recurring { "recurring" } else { "one-time" },
                entry.id,
                month,
                entry.name,
                symbol,
                entry.amount
            );
        }

        BillCommands::List => {
            println!("Bills for {}", month);
            println!();
            let entries = service.list(month)?;
            println!("{}", format_bill_list(&entries, symbol, &settings.date_format));
        }

        BillCommands::Update {
            id,
            name,
            amount,
            due,
            recurring,
        } => {
            let due = parse_date_arg(due.as_deref())?;
            let entry = service.update(month, &id, |b| {
                if let Some(name) = name {
                    b.name = name.trim().to_string();
                }
                if let Some(amount) = amount {
                    b.amount = Amount::parse(&amount);
                }
                if due.is_some() {
                    b.due_date = due;
                }
                if let Some(recurring) = recurring {
                    b.recurring = recurring;
                }
            })?;

            println!(
                "Updated bill {}: {} ({}{})",
                entry.id, entry.name, symbol, entry.amount
            );
        }

        BillCommands::Remove { id } => {
            let entry = service.remove(month, &id)?;
            println!("Removed bill {}: {}", entry.id, entry.name);
        }
    }

    Ok(())
}
