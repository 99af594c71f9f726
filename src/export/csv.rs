//! CSV Export functionality
//!
//! Exports the line items of one month as spreadsheet rows.

use serde::Serialize;
use std::io::Write;

use crate::error::{LodgeError, LodgeResult};
use crate::models::lenient::DATE_FORMAT;
use crate::models::MonthRecord;

#[derive(Debug, Serialize)]
struct LineItemRow<'a> {
    kind: &'static str,
    id: String,
    name: &'a str,
    category: &'a str,
    amount: String,
    date: String,
}

fn date_text(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Export every line item of a month to CSV
///
/// Columns: kind, id, name, category, amount, date. Debts report their
/// monthly payment as the amount and their free-text due date as the date.
pub fn export_month_csv<W: Write>(record: &MonthRecord, writer: W) -> LodgeResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);
    let mut write = |row: LineItemRow<'_>| {
        csv_writer
            .serialize(row)
            .map_err(|e| LodgeError::Export(e.to_string()))
    };

    for income in &record.income {
        write(LineItemRow {
            kind: "income",
            id: income.id.to_string(),
            name: &income.source,
            category: "",
            amount: format!("{:.2}", income.amount.value()),
            date: date_text(income.date),
        })?;
    }

    for expense in &record.expenses {
        write(LineItemRow {
            kind: "expense",
            id: expense.id.to_string(),
            name: &expense.description,
            category: &expense.category,
            amount: format!("{:.2}", expense.amount.value()),
            date: date_text(expense.date),
        })?;
    }

    for debt in &record.debts {
        write(LineItemRow {
            kind: "debt",
            id: debt.id.to_string(),
            name: &debt.name,
            category: "",
            amount: format!("{:.2}", debt.monthly_payment.value()),
            date: debt.due_date.clone(),
        })?;
    }

    for bill in &record.bills {
        write(LineItemRow {
            kind: "bill",
            id: bill.id.to_string(),
            name: &bill.name,
            category: "",
            amount: format!("{:.2}", bill.amount.value()),
            date: date_text(bill.due_date),
        })?;
    }

    csv_writer
        .flush()
        .map_err(|e| LodgeError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, DebtEntry, ExpenseEntry, IncomeEntry};
    use chrono::NaiveDate;

    #[test]
    fn test_csv_export() {
        let mut record = MonthRecord::default();
        record.income.push(IncomeEntry::new(
            "Salary",
            Amount::new(5000.0),
            NaiveDate::from_ymd_opt(2025, 10, 1),
        ));
        record.expenses.push(ExpenseEntry::new(
            "Dinner, with friends",
            "Entertainment",
            Amount::new(85.5),
            None,
        ));
        let mut debt = DebtEntry::new("Visa", Amount::new(2000.0), Amount::new(200.0));
        debt.due_date = "15th".to_string();
        record.debts.push(debt);

        let mut output = Vec::new();
        export_month_csv(&record, &mut output).unwrap();
        let csv_string = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = csv_string.lines().collect();

        assert_eq!(lines[0], "kind,id,name,category,amount,date");
        assert!(lines[1].starts_with("income,inc-"));
        assert!(lines[1].ends_with("Salary,,5000.00,2025-10-01"));
        assert!(lines[2].contains("\"Dinner, with friends\",Entertainment,85.50,"));
        assert!(lines[3].ends_with("Visa,,200.00,15th"));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_empty_month_writes_nothing() {
        let mut output = Vec::new();
        export_month_csv(&MonthRecord::default(), &mut output).unwrap();
        assert!(output.is_empty());
    }
}
