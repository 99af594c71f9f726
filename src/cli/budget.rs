//! Budget CLI commands
//!
//! Implements CLI commands for the planned vs. actual budget rows of a month.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_budget;
use crate::display::report::{format_money, format_percentage};
use crate::error::{LodgeError, LodgeResult};
use crate::models::{Amount, MonthKey};
use crate::services::{BudgetService, MonthService};
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show planned vs. actual for every budget category
    Show,

    /// Set the planned and/or actual amount of a category
    Set {
        /// Budget category (e.g., "Food"; case-insensitive)
        category: String,

        /// Planned amount
        #[arg(short, long, allow_hyphen_values = true)]
        planned: Option<String>,

        /// Actual amount spent
        #[arg(short, long, allow_hyphen_values = true)]
        actual: Option<String>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    month: &MonthKey,
    cmd: BudgetCommands,
) -> LodgeResult<()> {
    let budget_service = BudgetService::new(storage, settings.default_savings_goal);
    let month_service = MonthService::new(storage, settings.default_savings_goal);
    let symbol = &settings.currency_symbol;

    match cmd {
        BudgetCommands::Show => {
            let metrics = month_service.metrics(month)?;
            println!("{}", format_budget(month, &metrics.budget, symbol));
        }

        BudgetCommands::Set {
            category,
            planned,
            actual,
        } => {
            if planned.is_none() && actual.is_none() {
                return Err(LodgeError::Validation(
                    "Nothing to set: pass --planned and/or --actual".into(),
                ));
            }

            if let Some(planned) = planned {
                budget_service.set_planned(month, &category, Amount::parse(&planned))?;
            }
            if let Some(actual) = actual {
                budget_service.set_actual(month, &category, Amount::parse(&actual))?;
            }

            let metrics = month_service.metrics(month)?;
            if let Some(row) = metrics
                .budget
                .categories
                .iter()
                .find(|c| c.category.eq_ignore_ascii_case(category.trim()))
            {
                println!(
                    "{} for {}: planned {}, actual {} ({} used)",
                    row.category,
                    month,
                    format_money(row.planned, symbol),
                    format_money(row.actual, symbol),
                    format_percentage(row.percent_used)
                );
            }
        }
    }

    Ok(())
}
