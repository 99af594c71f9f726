//! Expense CLI commands

use clap::Subcommand;
use tracing::warn;

use super::{parse_date_arg, today};
use crate::config::settings::Settings;
use crate::display::format_expense_list;
use crate::error::LodgeResult;
use crate::models::{Amount, ExpenseEntry, MonthKey, EXPENSE_CATEGORIES};
use crate::services::EntryService;
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add an expense
    Add {
        /// What the money was spent on
        description: String,

        /// Amount spent
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Category (see `lodge expense categories`)
        #[arg(short, long, default_value = "")]
        category: String,

        /// Date spent (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List expenses
    #[command(alias = "ls")]
    List,

    /// Change an expense
    Update {
        /// Expense ID (or unique prefix)
        id: String,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,

        /// New category
        #[arg(short, long)]
        category: Option<String>,

        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Remove an expense
    #[command(alias = "rm")]
    Remove {
        /// Expense ID (or unique prefix)
        id: String,
    },

    /// Show the suggested expense categories
    Categories,
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    month: &MonthKey,
    cmd: ExpenseCommands,
) -> LodgeResult<()> {
    let service: EntryService<ExpenseEntry> =
        EntryService::new(storage, settings.default_savings_goal);
    let symbol = &settings.currency_symbol;

    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            category,
            date,
        } => {
            let date = parse_date_arg(date.as_deref())?.unwrap_or_else(today);
            let entry = ExpenseEntry::new(
                description.trim(),
                category.trim(),
                Amount::parse(&amount),
                Some(date),
            );
            if !entry.category.is_empty() && !entry.has_known_category() {
                warn!(category = %entry.category, "expense category is not one of the suggestions");
            }
            let entry = service.add(month, entry)?;

            println!(
                "Added expense {} for {}: {} ({}{})",
                entry.id, month, entry.description, symbol, entry.amount
            );
        }

        ExpenseCommands::List => {
            println!("Expenses for {}", month);
            println!();
            let entries = service.list(month)?;
            println!("{}", format_expense_list(&entries, symbol, &settings.date_format));
        }

        ExpenseCommands::Update {
            id,
            description,
            amount,
            category,
            date,
        } => {
            let date = parse_date_arg(date.as_deref())?;
            let entry = service.update(month, &id, |e| {
                if let Some(description) = description {
                    e.description = description.trim().to_string();
                }
                if let Some(amount) = amount {
                    e.amount = Amount::parse(&amount);
                }
                if let Some(category) = category {
                    e.category = category.trim().to_string();
                }
                if date.is_some() {
                    e.date = date;
                }
            })?;

            println!(
                "Updated expense {}: {} ({}{})",
                entry.id, entry.description, symbol, entry.amount
            );
        }

        ExpenseCommands::Remove { id } => {
            let entry = service.remove(month, &id)?;
            println!("Removed expense {}: {}", entry.id, entry.description);
        }

        ExpenseCommands::Categories => {
            println!("Suggested expense categories:");
            for category in EXPENSE_CATEGORIES {
                println!("  {}", category);
            }
        }
    }

    Ok(())
}
