//! Debt CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_debt_list;
use crate::error::LodgeResult;
use crate::metrics::months_to_payoff;
use crate::models::{Amount, DebtEntry, MonthKey};
use crate::services::EntryService;
use crate::storage::Storage;

/// Debt subcommands
#[derive(Subcommand)]
pub enum DebtCommands {
    /// Add a debt
    Add {
        /// Name of the debt (e.g., "Visa")
        name: String,

        /// Outstanding balance
        #[arg(allow_hyphen_values = true)]
        balance: String,

        /// Monthly payment
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        payment: String,

        /// Annual interest rate in percent
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        rate: String,

        /// Due date, free text (e.g., "15th")
        #[arg(long, default_value = "")]
        due: String,
    },

    /// List debts with payoff estimates
    #[command(alias = "ls")]
    List,

    /// Change a debt
    Update {
        /// Debt ID (or unique prefix)
        id: String,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New balance
        #[arg(short, long, allow_hyphen_values = true)]
        balance: Option<String>,

        /// New monthly payment
        #[arg(short, long, allow_hyphen_values = true)]
        payment: Option<String>,

        /// New interest rate
        #[arg(short, long, allow_hyphen_values = true)]
        rate: Option<String>,

        /// New due date
        #[arg(long)]
        due: Option<String>,
    },

    /// Remove a debt
    #[command(alias = "rm")]
    Remove {
        /// Debt ID (or unique prefix)
        id: String,
    },
}

/// Handle a debt command
pub fn handle_debt_command(
    storage: &Storage,
    settings: &Settings,
    month: &MonthKey,
    cmd: DebtCommands,
) -> LodgeResult<()> {
    let service: EntryService<DebtEntry> =
        EntryService::new(storage, settings.default_savings_goal);
    let symbol = &settings.currency_symbol;

    match cmd {
        DebtCommands::Add {
            name,
            balance,
            payment,
            rate,
            due,
        } => {
            let mut entry =
                DebtEntry::new(name.trim(), Amount::parse(&balance), Amount::parse(&payment));
            entry.interest_rate = Amount::parse(&rate);
            entry.due_date = due.trim().to_string();
            let entry = service.add(month, entry)?;

            println!(
                "Added debt {} for {}: {} ({}{} balance)",
                entry.id, month, entry.name, symbol, entry.balance
            );
            print_payoff(&entry);
        }

        DebtCommands::List => {
            println!("Debts for {}", month);
            println!();
            println!("{}", format_debt_list(&service.list(month)?, symbol));
        }

        DebtCommands::Update {
            id,
            name,
            balance,
            payment,
            rate,
            due,
        } => {
            let entry = service.update(month, &id, |d| {
                if let Some(name) = name {
                    d.name = name.trim().to_string();
                }
                if let Some(balance) = balance {
                    d.balance = Amount::parse(&balance);
                }
                if let Some(payment) = payment {
                    d.monthly_payment = Amount::parse(&payment);
                }
                if let Some(rate) = rate {
                    d.interest_rate = Amount::parse(&rate);
                }
                if let Some(due) = due {
                    d.due_date = due.trim().to_string();
                }
            })?;

            println!("Updated debt {}: {}", entry.id, entry.name);
            print_payoff(&entry);
        }

        DebtCommands::Remove { id } => {
            let entry = service.remove(month, &id)?;
            println!("Removed debt {}: {}", entry.id, entry.name);
        }
    }

    Ok(())
}

fn print_payoff(debt: &DebtEntry) {
    if !debt.monthly_payment.is_positive() {
        println!("No monthly payment set, payoff time unknown.");
        return;
    }
    let months = months_to_payoff(debt.balance.value(), debt.monthly_payment.value());
    println!("Paid off in {} months at the current payment.", months);
}
