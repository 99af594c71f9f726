use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use lodge_cli::cli::{
    handle_analytics, handle_bill_command, handle_budget_command, handle_clear,
    handle_debt_command, handle_expense_command, handle_export, handle_history, handle_import,
    handle_income_command, handle_months, handle_overview, handle_savings_goal, BillCommands,
    BudgetCommands, DebtCommands, ExpenseCommands, ExportFormat, IncomeCommands,
};
use lodge_cli::config::{paths::LodgePaths, settings::Settings};
use lodge_cli::models::MonthKey;
use lodge_cli::storage::{LoadStatus, Storage};

/// Environment variable holding the log filter (e.g., "debug")
const LOG_ENV: &str = "LODGE_LOG";

#[derive(Parser)]
#[command(
    name = "lodge",
    version,
    about = "Monthly budgeting form with derived financial metrics",
    long_about = "Money Lodge keeps one budget form per calendar month: income, \
                  expenses, debts, bills and planned vs. actual spending. Totals, \
                  cash flow, ratios and payoff estimates are computed for you."
)]
struct Cli {
    /// Month to work on (YYYY-MM, "current", "last" or "next")
    #[arg(short, long, global = true, default_value = "current")]
    month: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show income, expenses, cash flow and savings for the month
    Overview,

    /// Income sources
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Expenses
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Debts and payoff estimates
    #[command(subcommand)]
    Debt(DebtCommands),

    /// Bills and subscriptions
    #[command(subcommand)]
    Bill(BillCommands),

    /// Planned vs. actual budget
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Set the savings goal (percent of income)
    SavingsGoal {
        /// Percentage of income to save (e.g., "20")
        percent: String,
    },

    /// Ratios, long-term targets and income distribution
    Analytics,

    /// List months with stored data
    Months,

    /// Show recent changes
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Export data
    Export {
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import months from a month data file
    Import {
        /// File to import
        file: PathBuf,
    },

    /// Delete all data of the month
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        force: bool,
    },

    /// Initialize data directories and settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    // Initialize paths and settings
    let paths = LodgePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let month = MonthKey::parse(&cli.month)?;
    debug!(base_dir = %paths.base_dir().display(), month = %month.storage_key(), "starting");

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    match storage.load_all()? {
        LoadStatus::Recovered(moved) => {
            eprintln!(
                "Warning: month data could not be read and was moved to {}. Starting empty.",
                moved.display()
            );
        }
        LoadStatus::Migrated => {
            eprintln!("Note: month data was upgraded to the current file format.");
        }
        LoadStatus::Fresh | LoadStatus::Loaded => {}
    }

    match cli.command {
        Some(Commands::Overview) => handle_overview(&storage, &settings, &month)?,
        Some(Commands::Income(cmd)) => handle_income_command(&storage, &settings, &month, cmd)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, &settings, &month, cmd)?,
        Some(Commands::Debt(cmd)) => handle_debt_command(&storage, &settings, &month, cmd)?,
        Some(Commands::Bill(cmd)) => handle_bill_command(&storage, &settings, &month, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, &settings, &month, cmd)?,
        Some(Commands::SavingsGoal { percent }) => {
            handle_savings_goal(&storage, &settings, &month, &percent)?
        }
        Some(Commands::Analytics) => handle_analytics(&storage, &settings, &month)?,
        Some(Commands::Months) => handle_months(&storage, &settings)?,
        Some(Commands::History { limit }) => handle_history(&storage, limit)?,
        Some(Commands::Export { format, output }) => {
            handle_export(&storage, &settings, &month, format, output)?
        }
        Some(Commands::Import { file }) => handle_import(&storage, &settings, &file)?,
        Some(Commands::Clear { force }) => handle_clear(&storage, &settings, &month, force)?,
        Some(Commands::Init) => {
            println!("Initializing Money Lodge at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            if !storage.months.path().exists() {
                storage.save_all()?;
            }
            println!("Initialization complete!");
            println!();
            println!("Start with 'lodge income add Salary 5000' and 'lodge overview'.");
        }
        Some(Commands::Config) => {
            println!("Money Lodge Configuration");
            println!("=========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Month data:       {}", paths.months_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:      {}", settings.currency_symbol);
            println!("  Default savings goal: {}%", settings.default_savings_goal.value());
            println!("  Date format:          {}", settings.date_format);
        }
        None => {
            println!("Money Lodge - monthly budgeting with derived metrics");
            println!();
            println!("Run 'lodge --help' for usage information.");
            println!("Run 'lodge overview' to see the current month.");
        }
    }

    Ok(())
}
