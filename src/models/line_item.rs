//! Common interface of the four list-based entry types
//!
//! Lets the service layer add, update and remove income, expenses, debts
//! and bills through one code path, addressed by stable ID.

use serde::Serialize;
use std::fmt;

use super::bill::BillEntry;
use super::debt::DebtEntry;
use super::expense::ExpenseEntry;
use super::income::IncomeEntry;
use super::month::MonthRecord;
use crate::audit::EntityType;

/// A line item stored in one of a month's lists
pub trait LineItem: Clone + Serialize {
    /// The ID type of this entry
    type Id: Copy + Eq + fmt::Display;

    /// Human-readable kind ("Income", "Expense", ...)
    const KIND: &'static str;

    /// Audit entity type for changes to this kind
    const ENTITY: EntityType;

    /// Stable identifier
    fn id(&self) -> Self::Id;

    /// Short label for messages (source, description or name)
    fn label(&self) -> &str;

    /// Whether a user-supplied identifier refers to this entry
    fn matches(&self, identifier: &str) -> bool;

    /// The list this kind lives in
    fn entries(record: &MonthRecord) -> &Vec<Self>;

    /// The list this kind lives in, mutably
    fn entries_mut(record: &mut MonthRecord) -> &mut Vec<Self>;
}

macro_rules! impl_line_item {
    ($ty:ty, $id:ty, $kind:literal, $entity:expr, $label:ident, $list:ident) => {
        impl LineItem for $ty {
            type Id = $id;
            const KIND: &'static str = $kind;
            const ENTITY: EntityType = $entity;

            fn id(&self) -> Self::Id {
                self.id
            }

            fn label(&self) -> &str {
                &self.$label
            }

            fn matches(&self, identifier: &str) -> bool {
                self.id.matches(identifier)
            }

            fn entries(record: &MonthRecord) -> &Vec<Self> {
                &record.$list
            }

            fn entries_mut(record: &mut MonthRecord) -> &mut Vec<Self> {
                &mut record.$list
            }
        }
    };
}

impl_line_item!(IncomeEntry, super::ids::IncomeId, "Income", EntityType::Income, source, income);
impl_line_item!(
    ExpenseEntry,
    super::ids::ExpenseId,
    "Expense",
    EntityType::Expense,
    description,
    expenses
);
impl_line_item!(DebtEntry, super::ids::DebtId, "Debt", EntityType::Debt, name, debts);
impl_line_item!(BillEntry, super::ids::BillId, "Bill", EntityType::Bill, name, bills);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;

    fn push<E: LineItem>(record: &mut MonthRecord, entry: E) {
        E::entries_mut(record).push(entry);
    }

    #[test]
    fn test_generic_access_hits_the_right_list() {
        let mut record = MonthRecord::default();
        push(&mut record, IncomeEntry::new("Salary", Amount::new(5000.0), None));
        push(&mut record, BillEntry::new("Rent", Amount::new(1500.0), None));

        assert_eq!(IncomeEntry::entries(&record).len(), 1);
        assert_eq!(BillEntry::entries(&record).len(), 1);
        assert!(DebtEntry::entries(&record).is_empty());
        assert_eq!(BillEntry::entries(&record)[0].label(), "Rent");
    }

    #[test]
    fn test_matches_by_display_id() {
        let debt = DebtEntry::new("Visa", Amount::new(100.0), Amount::new(10.0));
        assert!(debt.matches(&debt.id().to_string()));
        assert_eq!(DebtEntry::KIND, "Debt");
    }
}
