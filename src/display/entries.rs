//! Line item tables
//!
//! Income, expenses, debts and bills rendered with `tabled`.

use std::fmt::Write;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::{format_money, truncate};
use crate::metrics::months_to_payoff;
use crate::models::lenient::DATE_FORMAT;
use crate::models::{BillEntry, DebtEntry, ExpenseEntry, IncomeEntry};

const NAME_WIDTH: usize = 30;

#[derive(Tabled)]
struct IncomeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Date")]
    date: String,
}

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Date")]
    date: String,
}

#[derive(Tabled)]
struct DebtRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Balance")]
    balance: String,
    #[tabled(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Payment")]
    payment: String,
    #[tabled(rename = "Due")]
    due: String,
    #[tabled(rename = "Payoff")]
    payoff: String,
}

#[derive(Tabled)]
struct BillRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Due")]
    due: String,
    #[tabled(rename = "Recurring")]
    recurring: String,
}

fn render<R: Tabled>(rows: Vec<R>, total_line: String) -> String {
    let table = Table::new(rows).with(Style::rounded()).to_string();
    format!("{}\n{}\n", table, total_line)
}

/// Dates in `date_format`, falling back to `YYYY-MM-DD` when the format
/// string has items chrono cannot render
fn date_text(date: Option<chrono::NaiveDate>, date_format: &str) -> String {
    let Some(date) = date else {
        return "-".to_string();
    };

    let mut text = String::new();
    if write!(text, "{}", date.format(date_format)).is_err() {
        text = date.format(DATE_FORMAT).to_string();
    }
    text
}

/// Format the income sources of a month
pub fn format_income_list(entries: &[IncomeEntry], symbol: &str, date_format: &str) -> String {
    if entries.is_empty() {
        return "No income sources recorded.".to_string();
    }

    let rows = entries
        .iter()
        .map(|e| IncomeRow {
            id: e.id.to_string(),
            source: truncate(&e.source, NAME_WIDTH),
            amount: format_money(e.amount.value(), symbol),
            date: date_text(e.date, date_format),
        })
        .collect();
    let total: f64 = entries.iter().map(|e| e.amount.value()).sum();

    render(rows, format!("Total income: {}", format_money(total, symbol)))
}

/// Format the expenses of a month
pub fn format_expense_list(
    entries: &[ExpenseEntry],
    symbol: &str,
    date_format: &str,
) -> String {
    if entries.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let rows = entries
        .iter()
        .map(|e| ExpenseRow {
            id: e.id.to_string(),
            description: truncate(&e.description, NAME_WIDTH),
            category: if e.category.is_empty() {
                "-".to_string()
            } else {
                e.category.clone()
            },
            amount: format_money(e.amount.value(), symbol),
            date: date_text(e.date, date_format),
        })
        .collect();
    let total: f64 = entries.iter().map(|e| e.amount.value()).sum();

    render(rows, format!("Total expenses: {}", format_money(total, symbol)))
}

/// Format the debts of a month with payoff estimates
pub fn format_debt_list(entries: &[DebtEntry], symbol: &str) -> String {
    if entries.is_empty() {
        return "No debts recorded.".to_string();
    }

    let rows = entries
        .iter()
        .map(|d| {
            let months = months_to_payoff(d.balance.value(), d.monthly_payment.value());
            DebtRow {
                id: d.id.to_string(),
                name: truncate(&d.name, NAME_WIDTH),
                balance: format_money(d.balance.value(), symbol),
                rate: format!("{:.2}%", d.interest_rate.value()),
                payment: format_money(d.monthly_payment.value(), symbol),
                due: if d.due_date.is_empty() {
                    "-".to_string()
                } else {
                    d.due_date.clone()
                },
                payoff: if months > 0 {
                    format!("{} months", months)
                } else {
                    "-".to_string()
                },
            }
        })
        .collect();
    let balance: f64 = entries.iter().map(|d| d.balance.value()).sum();
    let payments: f64 = entries.iter().map(|d| d.monthly_payment.value()).sum();

    render(
        rows,
        format!(
            "Total balance: {}   Monthly payments: {}",
            format_money(balance, symbol),
            format_money(payments, symbol)
        ),
    )
}

/// Format the bills of a month
pub fn format_bill_list(entries: &[BillEntry], symbol: &str, date_format: &str) -> String {
    if entries.is_empty() {
        return "No bills recorded.".to_string();
    }

    let rows = entries
        .iter()
        .map(|b| BillRow {
            id: b.id.to_string(),
            name: truncate(&b.name, NAME_WIDTH),
            amount: format_money(b.amount.value(), symbol),
            due: date_text(b.due_date, date_format),
            recurring: if b.recurring { "Yes" } else { "No" }.to_string(),
        })
        .collect();
    let total: f64 = entries.iter().map(|b| b.amount.value()).sum();

    render(rows, format!("Total bills: {}", format_money(total, symbol)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;
    use chrono::NaiveDate;

    const DATE: &str = "%Y-%m-%d";

    #[test]
    fn test_empty_lists() {
        assert_eq!(format_income_list(&[], "$", DATE), "No income sources recorded.");
        assert_eq!(format_bill_list(&[], "$", DATE), "No bills recorded.");
    }

    #[test]
    fn test_income_table() {
        let entry = IncomeEntry::new(
            "Salary",
            Amount::new(5000.0),
            NaiveDate::from_ymd_opt(2025, 10, 1),
        );
        let output = format_income_list(&[entry.clone()], "$", DATE);

        assert!(output.contains(&entry.id.to_string()));
        assert!(output.contains("Salary"));
        assert!(output.contains("2025-10-01"));
        assert!(output.contains("Total income: $5000.00"));
    }

    #[test]
    fn test_debt_table_shows_payoff() {
        let debts = vec![
            DebtEntry::new("Visa", Amount::new(1000.0), Amount::new(300.0)),
            DebtEntry::new("Loan", Amount::new(500.0), Amount::zero()),
        ];
        let output = format_debt_list(&debts, "$");

        assert!(output.contains("4 months"));
        assert!(output.contains("Monthly payments: $300.00"));
    }

    #[test]
    fn test_bill_table() {
        let due = NaiveDate::from_ymd_opt(2025, 10, 5);
        let mut bill = BillEntry::new("Gym", Amount::new(40.0), due);
        bill.recurring = false;
        let output = format_bill_list(&[bill], "€", "%d/%m/%Y");

        assert!(output.contains("€40.00"));
        assert!(output.contains("05/10/2025"));
        assert!(output.contains("No"));
    }

    #[test]
    fn test_unrenderable_date_format_falls_back() {
        let entry = IncomeEntry::new(
            "Salary",
            Amount::new(5000.0),
            NaiveDate::from_ymd_opt(2025, 10, 1),
        );
        let output = format_income_list(&[entry], "$", "%Q");

        assert!(output.contains("2025-10-01"));
        assert_eq!(date_text(None, "%Q"), "-");
    }
}
