//! CLI commands for month reports
//!
//! Overview, analytics, savings goal, stored months and change history.

use crate::config::settings::Settings;
use crate::display::report::format_money;
use crate::display::{format_analytics, format_overview};
use crate::error::LodgeResult;
use crate::metrics::MonthMetrics;
use crate::models::{Amount, MonthKey};
use crate::services::MonthService;
use crate::storage::Storage;

/// Show the overview of a month
pub fn handle_overview(
    storage: &Storage,
    settings: &Settings,
    month: &MonthKey,
) -> LodgeResult<()> {
    let service = MonthService::new(storage, settings.default_savings_goal);
    let record = service.record(month)?;
    let metrics = service.metrics(month)?;

    print!(
        "{}",
        format_overview(month, &record, &metrics, &settings.currency_symbol)
    );
    Ok(())
}

/// Show ratios, targets and the income distribution of a month
pub fn handle_analytics(
    storage: &Storage,
    settings: &Settings,
    month: &MonthKey,
) -> LodgeResult<()> {
    let service = MonthService::new(storage, settings.default_savings_goal);
    let metrics = service.metrics(month)?;

    print!("{}", format_analytics(month, &metrics, &settings.currency_symbol));
    Ok(())
}

/// Set the savings goal percentage of a month
pub fn handle_savings_goal(
    storage: &Storage,
    settings: &Settings,
    month: &MonthKey,
    percent: &str,
) -> LodgeResult<()> {
    let service = MonthService::new(storage, settings.default_savings_goal);
    let goal = Amount::parse(percent);
    service.set_savings_goal(month, goal)?;
    let metrics = service.metrics(month)?;

    println!("Savings goal for {} set to {}%", month, goal.value());
    println!(
        "Recommended savings: {}{:.2} of {}{:.2} income",
        settings.currency_symbol,
        metrics.savings_amount,
        settings.currency_symbol,
        metrics.total_income
    );
    Ok(())
}

/// List every month with stored data
pub fn handle_months(storage: &Storage, settings: &Settings) -> LodgeResult<()> {
    let service = MonthService::new(storage, settings.default_savings_goal);
    let months = service.list_months()?;

    if months.is_empty() {
        println!("No months stored yet.");
        return Ok(());
    }

    println!("{:<16}  {:>7}  {:>14}", "Month", "Entries", "Net Cash Flow");
    println!("{:-<16}  {:->7}  {:->14}", "", "", "");
    for (key, record) in months {
        let metrics = MonthMetrics::compute(&record);
        println!(
            "{:<16}  {:>7}  {:>14}",
            key.to_string(),
            record.entry_count(),
            format_money(metrics.net_cash_flow, &settings.currency_symbol)
        );
    }
    Ok(())
}

/// Show the most recent audit log entries
pub fn handle_history(storage: &Storage, limit: usize) -> LodgeResult<()> {
    let entries = storage.audit().read_recent(limit)?;

    if entries.is_empty() {
        println!("No changes recorded yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
