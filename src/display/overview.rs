//! Month overview, analytics and budget views

use super::report::{
    dotted_line, double_separator, format_bar, format_header, format_money, format_money_colored,
    format_percentage, separator,
};
use crate::metrics::calculator::{EMERGENCY_FUND_MONTHS, FREEDOM_MULTIPLE};
use crate::metrics::{BudgetSummary, MonthMetrics, UsageStatus};
use crate::models::{MonthKey, MonthRecord};

const WIDTH: usize = 52;
const LABEL_WIDTH: usize = 32;
const CHART_BAR_WIDTH: usize = 20;

fn title(output: &mut String, text: &str) {
    output.push_str(&double_separator(WIDTH));
    output.push('\n');
    output.push_str(&format_header(text, WIDTH));
    output.push('\n');
    output.push_str(&double_separator(WIDTH));
    output.push('\n');
}

fn line(output: &mut String, label: &str, value: &str) {
    output.push_str(&dotted_line(label, value, LABEL_WIDTH));
    output.push('\n');
}

/// Format the overview of a month: headline totals, the cash-flow chain and
/// the savings calculator
pub fn format_overview(
    key: &MonthKey,
    record: &MonthRecord,
    metrics: &MonthMetrics,
    symbol: &str,
) -> String {
    let money = |v: f64| format_money(v, symbol);
    let mut output = String::new();

    title(&mut output, &format!("Overview: {}", key));

    line(&mut output, "Total Income", &money(metrics.total_income));
    line(&mut output, "Total Expenses", &money(metrics.total_expenses));
    line(
        &mut output,
        "Net Cash Flow",
        &format_money_colored(metrics.net_cash_flow, symbol),
    );
    line(&mut output, "Total Debt Balance", &money(metrics.total_debts));

    output.push_str("\nFinancial Breakdown\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');
    line(&mut output, "Total Income", &money(metrics.total_income));
    line(&mut output, "- Total Expenses", &money(-metrics.total_expenses));
    line(&mut output, "- Upcoming Bills", &money(-metrics.total_bills));
    line(
        &mut output,
        "- Debt Payments",
        &money(-metrics.monthly_debt_payments),
    );
    output.push_str(&separator(WIDTH));
    output.push('\n');
    line(
        &mut output,
        "Remaining",
        &format_money_colored(metrics.remaining_after_debts, symbol),
    );

    output.push_str("\nSavings Calculator\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');
    line(
        &mut output,
        &format!("Recommended Savings ({}%)", record.savings_goal.value()),
        &money(metrics.savings_amount),
    );
    line(
        &mut output,
        "Available After Savings",
        &money(metrics.remaining_after_savings),
    );
    line(
        &mut output,
        "Debt-to-Income Ratio",
        &format_percentage(metrics.debt_service_ratio),
    );

    if record.entry_count() == 0 {
        output.push_str("\nNo entries yet. Add some with `lodge income add`.\n");
    }

    output
}

/// Format ratios with their assessments, long-term targets and the income
/// distribution chart
pub fn format_analytics(key: &MonthKey, metrics: &MonthMetrics, symbol: &str) -> String {
    let money = |v: f64| format_money(v, symbol);
    let assessments = metrics.assessments();
    let mut output = String::new();

    title(&mut output, &format!("Analytics: {}", key));

    output.push_str("Financial Ratios & Metrics\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');
    for (label, value, assessment) in [
        ("Savings Rate", metrics.savings_rate, assessments.savings_rate),
        ("Expense Ratio", metrics.expense_ratio, assessments.expense_ratio),
        (
            "Debt Service Ratio",
            metrics.debt_service_ratio,
            assessments.debt_service_ratio,
        ),
    ] {
        line(
            &mut output,
            label,
            &format!("{:>7}  {}", format_percentage(value), assessment.message),
        );
    }

    line(
        &mut output,
        "Emergency Fund Goal",
        &format!(
            "{}  ({} months of expenses)",
            money(metrics.emergency_fund_goal),
            EMERGENCY_FUND_MONTHS
        ),
    );
    line(
        &mut output,
        "Financial Freedom Number",
        &format!(
            "{}  ({}x annual expenses)",
            money(metrics.financial_freedom_number),
            FREEDOM_MULTIPLE
        ),
    );
    line(
        &mut output,
        if metrics.is_surplus() {
            "Monthly Surplus"
        } else {
            "Monthly Deficit"
        },
        &format_money_colored(metrics.net_cash_flow, symbol),
    );

    output.push('\n');
    output.push_str(&format_chart(metrics, symbol));
    output
}

/// Format the income distribution chart as horizontal bars
pub fn format_chart(metrics: &MonthMetrics, symbol: &str) -> String {
    let mut output = String::from("Income Distribution\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');

    if metrics.chart.is_empty() {
        output.push_str("Add income and expenses to see your distribution chart\n");
        return output;
    }

    for slice in &metrics.chart {
        output.push_str(&format!(
            "{:<22} {} {}\n",
            slice.label(),
            format_bar(slice.share, 1.0, CHART_BAR_WIDTH),
            format_money(slice.value, symbol)
        ));
    }
    output
}

/// Format the budget planning table
pub fn format_budget(key: &MonthKey, budget: &BudgetSummary, symbol: &str) -> String {
    let money = |v: f64| format_money(v, symbol);
    let name_width = budget
        .categories
        .iter()
        .map(|c| c.category.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!("Budget Planning: {}\n\n", key));
    output.push_str(&format!(
        "{:<name_width$}  {:>12}  {:>12}  {:>16}  {:>7}\n",
        "Category",
        "Planned",
        "Actual",
        "Difference",
        "Used",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->12}  {:->12}  {:->16}  {:->7}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for row in &budget.categories {
        let difference = if row.difference >= 0.0 {
            format!("{} under", money(row.difference))
        } else {
            format!("{} over", money(-row.difference))
        };
        let marker = match row.status {
            UsageStatus::OnTrack => "",
            UsageStatus::Warning => " !",
            UsageStatus::Over => " !!",
        };

        output.push_str(&format!(
            "{:<name_width$}  {:>12}  {:>12}  {:>16}  {:>7}{}\n",
            row.category,
            money(row.planned),
            money(row.actual),
            difference,
            format_percentage(row.percent_used),
            marker,
            name_width = name_width,
        ));
    }

    output.push_str(&format!(
        "{:-<name_width$}  {:->12}  {:->12}  {:->16}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:<name_width$}  {:>12}  {:>12}  {:>16}\n",
        "TOTAL",
        money(budget.total_planned),
        money(budget.total_actual),
        money(budget.balance),
        name_width = name_width,
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, DebtEntry, ExpenseEntry, IncomeEntry};

    fn sample() -> (MonthKey, MonthRecord) {
        let mut record = MonthRecord::default();
        record
            .income
            .push(IncomeEntry::new("Salary", Amount::new(5000.0), None));
        record
            .expenses
            .push(ExpenseEntry::new("Groceries", "Food", Amount::new(1200.0), None));
        record
            .debts
            .push(DebtEntry::new("Visa", Amount::new(2000.0), Amount::new(200.0)));
        (MonthKey::from_calendar(2025, 10).unwrap(), record)
    }

    #[test]
    fn test_overview_contents() {
        let (key, record) = sample();
        let metrics = MonthMetrics::compute(&record);

        let output = format_overview(&key, &record, &metrics, "$");

        assert!(output.contains("Overview: October 2025"));
        assert!(output.contains("$5000.00"));
        assert!(output.contains("-$1200.00"));
        assert!(output.contains("Recommended Savings (20%)"));
        assert!(output.contains("4.0%"));
        assert!(!output.contains("No entries yet"));
    }

    #[test]
    fn test_analytics_contents() {
        let (key, record) = sample();
        let metrics = MonthMetrics::compute(&record);

        let output = format_analytics(&key, &metrics, "$");

        assert!(output.contains("72.0%  Excellent!"));
        assert!(output.contains("24.0%  Good control"));
        assert!(output.contains("Healthy"));
        assert!(output.contains("$7200.00"));
        assert!(output.contains("Monthly Surplus"));
        assert!(output.contains("Expenses: 24%"));
        assert!(output.contains("Remaining: 72%"));
    }

    #[test]
    fn test_empty_chart_placeholder() {
        let metrics = MonthMetrics::compute(&MonthRecord::default());

        assert!(format_chart(&metrics, "$").contains("Add income and expenses"));
    }

    #[test]
    fn test_budget_table() {
        let (key, mut record) = sample();
        let food = record.budget_category_mut("Food").unwrap();
        food.planned = Amount::new(400.0);
        food.actual = Amount::new(500.0);
        let metrics = MonthMetrics::compute(&record);

        let output = format_budget(&key, &metrics.budget, "$");

        assert!(output.contains("$100.00 over"));
        assert!(output.contains("125.0% !!"));
        assert!(output.contains("TOTAL"));
    }
}
