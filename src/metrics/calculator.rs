//! Derived financial metrics for one month
//!
//! [`MonthMetrics::compute`] turns a [`MonthRecord`] into every total, ratio
//! and chart bucket shown in the reports. It never fails and never mutates
//! its input: amounts were already coerced to numbers when the record was
//! built, and every division is guarded.

use serde::Serialize;

use super::assessment::{RatioAssessments, UsageStatus};
use super::chart::{chart_slices, ChartSlice};
use crate::models::{DebtId, MonthRecord};

/// Months of expenses an emergency fund should cover
pub const EMERGENCY_FUND_MONTHS: f64 = 6.0;

/// Annual expenses multiple for financial independence (the 4% rule)
pub const FREEDOM_MULTIPLE: f64 = 25.0;

/// Payoff estimate for one debt
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtPayoff {
    pub debt_id: DebtId,
    pub name: String,
    /// `ceil(balance / monthlyPayment)`, or 0 when no payment is set
    pub months_to_payoff: i64,
}

/// Planned vs. actual for one budget row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUsage {
    pub category: String,
    pub planned: f64,
    pub actual: f64,
    /// planned - actual; negative when overspent
    pub difference: f64,
    /// actual / planned * 100, or 0 when nothing was planned
    pub percent_used: f64,
    pub status: UsageStatus,
}

/// Budget rows with their totals
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    pub categories: Vec<CategoryUsage>,
    pub total_planned: f64,
    pub total_actual: f64,
    /// total_planned - total_actual
    pub balance: f64,
}

/// Every derived value for one month
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthMetrics {
    pub total_income: f64,
    pub total_expenses: f64,
    pub total_debts: f64,
    pub total_bills: f64,
    pub monthly_debt_payments: f64,

    pub savings_amount: f64,
    pub remaining_after_savings: f64,
    pub remaining_after_expenses: f64,
    pub remaining_after_bills: f64,
    pub remaining_after_debts: f64,
    pub net_cash_flow: f64,

    pub savings_rate: f64,
    pub expense_ratio: f64,
    pub debt_service_ratio: f64,

    pub emergency_fund_goal: f64,
    pub financial_freedom_number: f64,

    pub debt_payoffs: Vec<DebtPayoff>,
    pub budget: BudgetSummary,
    pub chart: Vec<ChartSlice>,
}

impl MonthMetrics {
    /// Compute every metric for a month
    pub fn compute(record: &MonthRecord) -> Self {
        let total_income: f64 = record.income.iter().map(|i| i.amount.value()).sum();
        let total_expenses: f64 = record.expenses.iter().map(|e| e.amount.value()).sum();
        let total_debts: f64 = record.debts.iter().map(|d| d.balance.value()).sum();
        let total_bills: f64 = record.bills.iter().map(|b| b.amount.value()).sum();
        let monthly_debt_payments: f64 =
            record.debts.iter().map(|d| d.monthly_payment.value()).sum();

        let savings_amount = total_income * record.savings_goal.value() / 100.0;
        let remaining_after_savings = total_income - savings_amount;
        let remaining_after_expenses = total_income - total_expenses;
        let remaining_after_bills = remaining_after_expenses - total_bills;
        let remaining_after_debts = remaining_after_bills - monthly_debt_payments;
        let net_cash_flow = total_income - total_expenses - total_bills - monthly_debt_payments;

        let debt_payoffs = record
            .debts
            .iter()
            .map(|debt| DebtPayoff {
                debt_id: debt.id,
                name: debt.name.clone(),
                months_to_payoff: months_to_payoff(
                    debt.balance.value(),
                    debt.monthly_payment.value(),
                ),
            })
            .collect();

        Self {
            total_income,
            total_expenses,
            total_debts,
            total_bills,
            monthly_debt_payments,
            savings_amount,
            remaining_after_savings,
            remaining_after_expenses,
            remaining_after_bills,
            remaining_after_debts,
            net_cash_flow,
            savings_rate: share_of_income(net_cash_flow, total_income),
            expense_ratio: share_of_income(total_expenses, total_income),
            debt_service_ratio: share_of_income(monthly_debt_payments, total_income),
            emergency_fund_goal: total_expenses * EMERGENCY_FUND_MONTHS,
            financial_freedom_number: total_expenses * 12.0 * FREEDOM_MULTIPLE,
            debt_payoffs,
            budget: budget_summary(record),
            chart: chart_slices(
                total_expenses,
                total_bills,
                monthly_debt_payments,
                net_cash_flow,
            ),
        }
    }

    /// Rate each ratio against its rule of thumb
    pub fn assessments(&self) -> RatioAssessments {
        RatioAssessments::from_ratios(
            self.savings_rate,
            self.expense_ratio,
            self.debt_service_ratio,
        )
    }

    /// Whether the month ends with money left over
    pub fn is_surplus(&self) -> bool {
        self.net_cash_flow >= 0.0
    }
}

/// Months needed to pay off a balance; 0 when the payment is not positive
pub fn months_to_payoff(balance: f64, monthly_payment: f64) -> i64 {
    if monthly_payment > 0.0 {
        (balance / monthly_payment).ceil() as i64
    } else {
        0
    }
}

fn share_of_income(part: f64, total_income: f64) -> f64 {
    if total_income == 0.0 {
        0.0
    } else {
        part / total_income * 100.0
    }
}

fn budget_summary(record: &MonthRecord) -> BudgetSummary {
    let categories: Vec<CategoryUsage> = record
        .budget_categories
        .iter()
        .map(|row| {
            let planned = row.planned.value();
            let actual = row.actual.value();
            let percent_used = if planned > 0.0 {
                actual / planned * 100.0
            } else {
                0.0
            };
            CategoryUsage {
                category: row.category.clone(),
                planned,
                actual,
                difference: planned - actual,
                percent_used,
                status: UsageStatus::from_percent_used(percent_used),
            }
        })
        .collect();

    let total_planned: f64 = categories.iter().map(|c| c.planned).sum();
    let total_actual: f64 = categories.iter().map(|c| c.actual).sum();

    BudgetSummary {
        categories,
        total_planned,
        total_actual,
        balance: total_planned - total_actual,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::chart::ChartBucket;
    use crate::models::{Amount, BillEntry, DebtEntry, ExpenseEntry, IncomeEntry};

    fn amount(v: f64) -> Amount {
        Amount::new(v)
    }

    fn sample_month() -> MonthRecord {
        let mut record = MonthRecord::default();
        record.income.push(IncomeEntry::new("Salary", amount(5000.0), None));
        record
            .expenses
            .push(ExpenseEntry::new("Groceries", "Food", amount(1200.0), None));
        record.bills.push(BillEntry::new("Internet", amount(300.0), None));
        record
            .debts
            .push(DebtEntry::new("Visa", amount(2000.0), amount(200.0)));
        record
    }

    #[test]
    fn test_empty_month_is_all_zero() {
        let metrics = MonthMetrics::compute(&MonthRecord::default());

        assert_eq!(metrics.total_income, 0.0);
        assert_eq!(metrics.total_expenses, 0.0);
        assert_eq!(metrics.total_debts, 0.0);
        assert_eq!(metrics.total_bills, 0.0);
        assert_eq!(metrics.monthly_debt_payments, 0.0);
        assert_eq!(metrics.net_cash_flow, 0.0);
        assert_eq!(metrics.savings_amount, 0.0);
        assert_eq!(metrics.savings_rate, 0.0);
        assert_eq!(metrics.expense_ratio, 0.0);
        assert_eq!(metrics.debt_service_ratio, 0.0);
        assert_eq!(metrics.emergency_fund_goal, 0.0);
        assert_eq!(metrics.financial_freedom_number, 0.0);
        assert!(metrics.chart.is_empty());
        assert!(metrics.debt_payoffs.is_empty());
        assert_eq!(metrics.budget.categories.len(), 7);
        assert!(metrics.budget.categories.iter().all(|c| c.percent_used == 0.0));
    }

    #[test]
    fn test_end_to_end_example() {
        let metrics = MonthMetrics::compute(&sample_month());

        assert_eq!(metrics.total_income, 5000.0);
        assert_eq!(metrics.total_expenses, 1200.0);
        assert_eq!(metrics.total_bills, 300.0);
        assert_eq!(metrics.total_debts, 2000.0);
        assert_eq!(metrics.monthly_debt_payments, 200.0);
        assert_eq!(metrics.net_cash_flow, 3300.0);
        assert_eq!(metrics.savings_amount, 1000.0);
        assert_eq!(metrics.remaining_after_savings, 4000.0);
        assert_eq!(metrics.remaining_after_expenses, 3800.0);
        assert_eq!(metrics.remaining_after_bills, 3500.0);
        assert_eq!(metrics.remaining_after_debts, 3300.0);
        assert_eq!(metrics.savings_rate, 66.0);
        assert_eq!(metrics.expense_ratio, 24.0);
        assert_eq!(metrics.debt_service_ratio, 4.0);
        assert_eq!(metrics.emergency_fund_goal, 7200.0);
        assert_eq!(metrics.financial_freedom_number, 360_000.0);
        assert_eq!(metrics.debt_payoffs[0].months_to_payoff, 10);
        assert!(metrics.is_surplus());
    }

    #[test]
    fn test_remaining_chain_matches_net_cash_flow_when_negative() {
        let mut record = sample_month();
        record
            .expenses
            .push(ExpenseEntry::new("Car repair", "Transportation", amount(6000.0), None));

        let m = MonthMetrics::compute(&record);

        assert_eq!(m.net_cash_flow, -2700.0);
        assert_eq!(m.remaining_after_debts, m.net_cash_flow);
        assert_eq!(
            m.net_cash_flow,
            m.total_income - m.total_expenses - m.total_bills - m.monthly_debt_payments
        );
        assert!(!m.is_surplus());
        assert!(m.chart.iter().all(|s| s.bucket != ChartBucket::Remaining));
    }

    #[test]
    fn test_increasing_outflows_decreases_net_cash_flow() {
        let base = MonthMetrics::compute(&sample_month()).net_cash_flow;

        let mut more_expense = sample_month();
        more_expense.expenses[0].amount = amount(1200.01);
        assert!(MonthMetrics::compute(&more_expense).net_cash_flow < base);

        let mut more_bill = sample_month();
        more_bill.bills[0].amount = amount(301.0);
        assert!(MonthMetrics::compute(&more_bill).net_cash_flow < base);

        let mut more_payment = sample_month();
        more_payment.debts[0].monthly_payment = amount(250.0);
        assert!(MonthMetrics::compute(&more_payment).net_cash_flow < base);
    }

    #[test]
    fn test_months_to_payoff() {
        assert_eq!(months_to_payoff(1000.0, 300.0), 4);
        assert_eq!(months_to_payoff(1000.0, 250.0), 4);
        assert_eq!(months_to_payoff(1000.0, 0.0), 0);
        assert_eq!(months_to_payoff(1000.0, -50.0), 0);
        assert_eq!(months_to_payoff(0.0, 100.0), 0);
    }

    #[test]
    fn test_debt_with_zero_payment_in_month() {
        let mut record = MonthRecord::default();
        record
            .debts
            .push(DebtEntry::new("Student loan", amount(12000.0), Amount::zero()));

        let metrics = MonthMetrics::compute(&record);

        assert_eq!(metrics.debt_payoffs[0].months_to_payoff, 0);
        assert_eq!(metrics.total_debts, 12000.0);
        assert_eq!(metrics.monthly_debt_payments, 0.0);
    }

    #[test]
    fn test_budget_usage() {
        let mut record = MonthRecord::default();
        let food = record.budget_category_mut("Food").unwrap();
        food.planned = amount(400.0);
        food.actual = amount(500.0);
        let housing = record.budget_category_mut("Housing").unwrap();
        housing.planned = amount(1500.0);
        housing.actual = amount(1200.0);
        record.budget_category_mut("Other").unwrap().actual = amount(30.0);

        let budget = MonthMetrics::compute(&record).budget;

        let food = &budget.categories[2];
        assert_eq!(food.difference, -100.0);
        assert_eq!(food.percent_used, 125.0);
        assert_eq!(food.status, UsageStatus::Over);

        let housing = &budget.categories[0];
        assert_eq!(housing.difference, 300.0);
        assert_eq!(housing.percent_used, 80.0);
        assert_eq!(housing.status, UsageStatus::OnTrack);

        let other = &budget.categories[6];
        assert_eq!(other.percent_used, 0.0);
        assert_eq!(other.difference, -30.0);

        assert_eq!(budget.total_planned, 1900.0);
        assert_eq!(budget.total_actual, 1730.0);
        assert_eq!(budget.balance, 170.0);
    }

    #[test]
    fn test_savings_goal_drives_savings_amount() {
        let mut record = sample_month();
        record.savings_goal = amount(35.0);

        let metrics = MonthMetrics::compute(&record);

        assert_eq!(metrics.savings_amount, 1750.0);
        assert_eq!(metrics.remaining_after_savings, 3250.0);
    }

    #[test]
    fn test_compute_is_idempotent_and_pure() {
        let record = sample_month();
        let snapshot = record.clone();

        let first = MonthMetrics::compute(&record);
        let second = MonthMetrics::compute(&record);

        assert_eq!(first, second);
        assert_eq!(record, snapshot);
    }

    #[test]
    fn test_lenient_amounts_from_blob() {
        let record: MonthRecord = serde_json::from_str(
            r#"{"income": [{"amount": "2500"}, {"amount": "oops"}, {"amount": null}, {}],
                "expenses": [{"amount": "100.5"}],
                "savingsGoal": "ten"}"#,
        )
        .unwrap();

        let metrics = MonthMetrics::compute(&record);

        assert_eq!(metrics.total_income, 2500.0);
        assert_eq!(metrics.total_expenses, 100.5);
        assert_eq!(metrics.savings_amount, 0.0);
    }
}
