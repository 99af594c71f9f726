//! Budget service
//!
//! Sets planned and actual amounts on a month's budget rows. Rows are found
//! by label, ignoring case.

use tracing::debug;

use crate::audit::EntityType;
use crate::error::{LodgeError, LodgeResult};
use crate::models::{Amount, BudgetCategory, MonthKey};
use crate::storage::Storage;

use super::MonthService;

/// Service for budget rows
pub struct BudgetService<'a> {
    storage: &'a Storage,
    months: MonthService<'a>,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage, default_savings_goal: Amount) -> Self {
        Self {
            storage,
            months: MonthService::new(storage, default_savings_goal),
        }
    }

    /// The budget rows of a month, in display order
    pub fn categories(&self, key: &MonthKey) -> LodgeResult<Vec<BudgetCategory>> {
        Ok(self.months.record(key)?.budget_categories)
    }

    /// Set the planned amount of a row
    pub fn set_planned(
        &self,
        key: &MonthKey,
        category: &str,
        planned: Amount,
    ) -> LodgeResult<BudgetCategory> {
        self.update(key, category, |row| row.planned = planned)
    }

    /// Set the actual (spent) amount of a row
    pub fn set_actual(
        &self,
        key: &MonthKey,
        category: &str,
        actual: Amount,
    ) -> LodgeResult<BudgetCategory> {
        self.update(key, category, |row| row.actual = actual)
    }

    fn update<F>(&self, key: &MonthKey, category: &str, change: F) -> LodgeResult<BudgetCategory>
    where
        F: FnOnce(&mut BudgetCategory),
    {
        let mut record = self.months.record(key)?;
        let row = record
            .budget_category_mut(category)
            .ok_or_else(|| LodgeError::budget_category_not_found(category.trim()))?;

        let before = row.clone();
        change(row);
        let after = row.clone();

        self.months.store(key, record)?;
        debug!(category = %after.category, month = %key.storage_key(), "budget row updated");

        self.storage.log_update(
            EntityType::BudgetCategory,
            after.category.clone(),
            key,
            Some(after.category.clone()),
            &before,
            &after,
        )?;

        Ok(after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LodgePaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LodgePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_set_planned_and_actual() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage, Amount::new(20.0));
        let key = MonthKey::from_calendar(2025, 10).unwrap();

        service.set_planned(&key, "food", Amount::new(400.0)).unwrap();
        let row = service.set_actual(&key, "FOOD", Amount::new(380.0)).unwrap();

        assert_eq!(row.category, "Food");
        assert_eq!(row.planned.value(), 400.0);
        assert_eq!(row.actual.value(), 380.0);

        let rows = service.categories(&key).unwrap();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[2].actual.value(), 380.0);

        let audit = storage.audit().read_all().unwrap();
        assert_eq!(audit.len(), 2);
        assert_eq!(audit[0].entity_type, EntityType::BudgetCategory);
        assert_eq!(audit[1].diff_summary.as_deref(), Some("actual: 0.0 -> 380.0"));
    }

    #[test]
    fn test_unknown_category() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage, Amount::new(20.0));
        let key = MonthKey::from_calendar(2025, 10).unwrap();

        let err = service
            .set_planned(&key, "Vacation", Amount::new(100.0))
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(storage.months.get(&key).unwrap().is_none());
    }
}
