//! Line item service
//!
//! One service for income, expenses, debts and bills. Entries are addressed
//! by their stable ID (or a unique prefix of it), never by list position.

use std::marker::PhantomData;

use tracing::debug;

use crate::error::{LodgeError, LodgeResult};
use crate::models::{Amount, LineItem, MonthKey, MonthRecord};
use crate::storage::Storage;

use super::MonthService;

/// Service for the line items of one kind
pub struct EntryService<'a, E: LineItem> {
    storage: &'a Storage,
    months: MonthService<'a>,
    _kind: PhantomData<E>,
}

impl<'a, E: LineItem> EntryService<'a, E> {
    /// Create a new entry service
    pub fn new(storage: &'a Storage, default_savings_goal: Amount) -> Self {
        Self {
            storage,
            months: MonthService::new(storage, default_savings_goal),
            _kind: PhantomData,
        }
    }

    /// All entries of this kind in a month, in insertion order
    pub fn list(&self, key: &MonthKey) -> LodgeResult<Vec<E>> {
        Ok(E::entries(&self.months.record(key)?).clone())
    }

    /// Find an entry by ID or unique ID prefix
    pub fn find(&self, key: &MonthKey, identifier: &str) -> LodgeResult<E> {
        let record = self.months.record(key)?;
        let index = position::<E>(&record, identifier)?;
        Ok(E::entries(&record)[index].clone())
    }

    /// Append an entry to the month
    pub fn add(&self, key: &MonthKey, entry: E) -> LodgeResult<E> {
        let mut record = self.months.record(key)?;
        E::entries_mut(&mut record).push(entry.clone());
        self.months.store(key, record)?;
        debug!(kind = E::KIND, id = %entry.id(), month = %key.storage_key(), "entry added");

        self.storage.log_create(
            E::ENTITY,
            entry.id().to_string(),
            key,
            Some(entry.label().to_string()),
            &entry,
        )?;

        Ok(entry)
    }

    /// Change one entry in place
    ///
    /// The entry keeps its ID and its position in the list.
    pub fn update<F>(&self, key: &MonthKey, identifier: &str, change: F) -> LodgeResult<E>
    where
        F: FnOnce(&mut E),
    {
        let mut record = self.months.record(key)?;
        let index = position::<E>(&record, identifier)?;

        let entries = E::entries_mut(&mut record);
        let before = entries[index].clone();
        change(&mut entries[index]);
        let after = entries[index].clone();

        self.months.store(key, record)?;
        debug!(kind = E::KIND, id = %after.id(), month = %key.storage_key(), "entry updated");

        self.storage.log_update(
            E::ENTITY,
            after.id().to_string(),
            key,
            Some(after.label().to_string()),
            &before,
            &after,
        )?;

        Ok(after)
    }

    /// Remove one entry
    pub fn remove(&self, key: &MonthKey, identifier: &str) -> LodgeResult<E> {
        let mut record = self.months.record(key)?;
        let index = position::<E>(&record, identifier)?;
        let removed = E::entries_mut(&mut record).remove(index);

        self.months.store(key, record)?;
        debug!(kind = E::KIND, id = %removed.id(), month = %key.storage_key(), "entry removed");

        self.storage.log_delete(
            E::ENTITY,
            removed.id().to_string(),
            key,
            Some(removed.label().to_string()),
            &removed,
        )?;

        Ok(removed)
    }
}

fn position<E: LineItem>(record: &MonthRecord, identifier: &str) -> LodgeResult<usize> {
    let matches: Vec<usize> = E::entries(record)
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.matches(identifier))
        .map(|(index, _)| index)
        .collect();

    match matches.as_slice() {
        [index] => Ok(*index),
        [] => Err(LodgeError::entry_not_found(E::KIND, identifier)),
        _ => Err(LodgeError::Validation(format!(
            "'{}' matches {} {} entries, use a longer ID",
            identifier,
            matches.len(),
            E::KIND.to_lowercase()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{EntityType, Operation};
    use crate::config::paths::LodgePaths;
    use crate::models::{BillEntry, DebtEntry, ExpenseEntry, IncomeEntry};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LodgePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn month() -> MonthKey {
        MonthKey::from_calendar(2025, 10).unwrap()
    }

    #[test]
    fn test_add_and_list() {
        let (_temp_dir, storage) = create_test_storage();
        let service: EntryService<IncomeEntry> = EntryService::new(&storage, Amount::new(20.0));

        service
            .add(&month(), IncomeEntry::new("Salary", Amount::new(5000.0), None))
            .unwrap();
        service
            .add(&month(), IncomeEntry::new("Freelance", Amount::new(750.0), None))
            .unwrap();

        let income = service.list(&month()).unwrap();
        assert_eq!(income.len(), 2);
        assert_eq!(income[0].source, "Salary");
        assert_eq!(income[1].source, "Freelance");

        let audit = storage.audit().read_all().unwrap();
        assert_eq!(audit.len(), 2);
        assert_eq!(audit[0].entity_type, EntityType::Income);
        assert_eq!(audit[0].operation, Operation::Create);
    }

    #[test]
    fn test_first_entry_seeds_month_with_default_goal() {
        let (_temp_dir, storage) = create_test_storage();
        let service: EntryService<BillEntry> = EntryService::new(&storage, Amount::new(35.0));

        service
            .add(&month(), BillEntry::new("Rent", Amount::new(1500.0), None))
            .unwrap();

        let stored = storage.months.get(&month()).unwrap().unwrap();
        assert_eq!(stored.savings_goal.value(), 35.0);
        assert_eq!(stored.budget_categories.len(), 7);
        assert_eq!(stored.bills.len(), 1);
    }

    #[test]
    fn test_update_by_id_survives_earlier_deletion() {
        let (_temp_dir, storage) = create_test_storage();
        let service: EntryService<ExpenseEntry> = EntryService::new(&storage, Amount::new(20.0));

        let first = service
            .add(
                &month(),
                ExpenseEntry::new("Rent", "Housing", Amount::new(1500.0), None),
            )
            .unwrap();
        let second = service
            .add(
                &month(),
                ExpenseEntry::new("Groceries", "Food", Amount::new(400.0), None),
            )
            .unwrap();

        service.remove(&month(), &first.id.to_string()).unwrap();
        let updated = service
            .update(&month(), &second.id.to_string(), |e| {
                e.amount = Amount::new(450.0)
            })
            .unwrap();

        assert_eq!(updated.id, second.id);
        let expenses = service.list(&month()).unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].description, "Groceries");
        assert_eq!(expenses[0].amount.value(), 450.0);
    }

    #[test]
    fn test_update_logs_diff() {
        let (_temp_dir, storage) = create_test_storage();
        let service: EntryService<BillEntry> = EntryService::new(&storage, Amount::new(20.0));
        let bill = service
            .add(&month(), BillEntry::new("Internet", Amount::new(60.0), None))
            .unwrap();

        service
            .update(&month(), &bill.id.to_string(), |b| b.recurring = false)
            .unwrap();

        let last = storage.audit().read_recent(1).unwrap();
        assert_eq!(last[0].operation, Operation::Update);
        assert_eq!(last[0].diff_summary.as_deref(), Some("recurring: true -> false"));
    }

    #[test]
    fn test_find_by_prefix() {
        let (_temp_dir, storage) = create_test_storage();
        let service: EntryService<DebtEntry> = EntryService::new(&storage, Amount::new(20.0));
        let debt = service
            .add(
                &month(),
                DebtEntry::new("Visa", Amount::new(2000.0), Amount::new(200.0)),
            )
            .unwrap();

        let prefix: String = debt.id.to_string().chars().take(7).collect();
        let found = service.find(&month(), &prefix).unwrap();
        assert_eq!(found.id, debt.id);
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let (_temp_dir, storage) = create_test_storage();
        let service: EntryService<IncomeEntry> = EntryService::new(&storage, Amount::new(20.0));
        service
            .add(&month(), IncomeEntry::new("Salary", Amount::new(100.0), None))
            .unwrap();

        let err = service.remove(&month(), "inc-zzzz").unwrap_err();
        assert!(err.is_not_found());

        let err = service.update(&month(), "", |_| {}).unwrap_err();
        assert!(err.is_not_found());

        assert_eq!(service.list(&month()).unwrap().len(), 1);
    }

    #[test]
    fn test_ambiguous_prefix_is_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service: EntryService<IncomeEntry> = EntryService::new(&storage, Amount::new(20.0));
        for _ in 0..40 {
            service
                .add(&month(), IncomeEntry::new("Side job", Amount::new(10.0), None))
                .unwrap();
        }

        // With 40 entries at least two share a leading hex digit
        let err = (0..16)
            .map(|d| format!("inc-{:x}", d))
            .find_map(|prefix| service.find(&month(), &prefix).err().filter(|e| e.is_validation()));
        assert!(err.is_some());
    }

    #[test]
    fn test_kinds_are_independent() {
        let (_temp_dir, storage) = create_test_storage();
        let bills: EntryService<BillEntry> = EntryService::new(&storage, Amount::new(20.0));
        let income: EntryService<IncomeEntry> = EntryService::new(&storage, Amount::new(20.0));

        bills
            .add(&month(), BillEntry::new("Rent", Amount::new(1500.0), None))
            .unwrap();

        assert!(income.list(&month()).unwrap().is_empty());
        assert_eq!(bills.list(&month()).unwrap().len(), 1);
        assert!(bills.list(&month().next()).unwrap().is_empty());
    }
}
