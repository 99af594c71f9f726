//! Month service
//!
//! Reads month records (seeding untouched months on the fly), computes their
//! metrics and manages month-level settings.

use tracing::{debug, info};

use crate::audit::EntityType;
use crate::error::{LodgeError, LodgeResult};
use crate::metrics::MonthMetrics;
use crate::models::{Amount, MonthKey, MonthRecord};
use crate::storage::Storage;

/// Service for whole-month operations
pub struct MonthService<'a> {
    storage: &'a Storage,
    default_savings_goal: Amount,
}

impl<'a> MonthService<'a> {
    /// Create a new month service; `default_savings_goal` seeds months that
    /// have never been stored
    pub fn new(storage: &'a Storage, default_savings_goal: Amount) -> Self {
        Self {
            storage,
            default_savings_goal,
        }
    }

    /// The record for a month
    ///
    /// A month with no stored data yields a freshly seeded record. Nothing is
    /// written until the record is changed.
    pub fn record(&self, key: &MonthKey) -> LodgeResult<MonthRecord> {
        Ok(self
            .storage
            .months
            .get(key)?
            .unwrap_or_else(|| MonthRecord::seeded(self.default_savings_goal)))
    }

    /// Replace the stored record of a month and write the month data
    pub fn store(&self, key: &MonthKey, record: MonthRecord) -> LodgeResult<()> {
        self.storage.months.upsert(*key, record)?;
        self.storage.months.save()
    }

    /// Derived metrics for a month
    pub fn metrics(&self, key: &MonthKey) -> LodgeResult<MonthMetrics> {
        Ok(MonthMetrics::compute(&self.record(key)?))
    }

    /// Whether anything has been stored for a month
    pub fn exists(&self, key: &MonthKey) -> LodgeResult<bool> {
        Ok(self.storage.months.get(key)?.is_some())
    }

    /// Set the savings goal percentage for a month
    pub fn set_savings_goal(&self, key: &MonthKey, goal: Amount) -> LodgeResult<MonthRecord> {
        let before = self.record(key)?;
        let mut after = before.clone();
        after.savings_goal = goal;

        self.store(key, after.clone())?;
        debug!(month = %key.storage_key(), goal = goal.value(), "savings goal set");

        self.storage.log_update(
            EntityType::Month,
            key.storage_key(),
            key,
            Some(key.to_string()),
            &before,
            &after,
        )?;

        Ok(after)
    }

    /// Every month with stored data, oldest first
    pub fn list_months(&self) -> LodgeResult<Vec<(MonthKey, MonthRecord)>> {
        self.storage.months.get_all()
    }

    /// Delete all data stored for a month
    pub fn clear_month(&self, key: &MonthKey) -> LodgeResult<MonthRecord> {
        let removed = self
            .storage
            .months
            .remove(key)?
            .ok_or_else(|| LodgeError::entry_not_found("Month", key.to_string()))?;
        self.storage.months.save()?;
        info!(month = %key.storage_key(), "month cleared");

        self.storage.log_delete(
            EntityType::Month,
            key.storage_key(),
            key,
            Some(key.to_string()),
            &removed,
        )?;

        Ok(removed)
    }

    /// Merge months from an exported or legacy blob; incoming months replace
    /// stored months with the same key
    pub fn import_blob(&self, contents: &str) -> LodgeResult<Vec<MonthKey>> {
        let imported = self.storage.months.merge_blob(contents)?;
        self.storage.months.save()?;
        info!(months = imported.len(), "imported month data");

        for key in &imported {
            if let Some(record) = self.storage.months.get(key)? {
                self.storage.log_create(
                    EntityType::Month,
                    key.storage_key(),
                    key,
                    Some(key.to_string()),
                    &record,
                )?;
            }
        }

        Ok(imported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::LodgePaths;
    use crate::models::IncomeEntry;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LodgePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn october() -> MonthKey {
        MonthKey::from_calendar(2025, 10).unwrap()
    }

    #[test]
    fn test_unknown_month_is_seeded_but_not_stored() {
        let (_temp_dir, storage) = create_test_storage();
        let service = MonthService::new(&storage, Amount::new(15.0));

        let record = service.record(&october()).unwrap();

        assert_eq!(record.savings_goal.value(), 15.0);
        assert_eq!(record.budget_categories.len(), 7);
        assert!(!service.exists(&october()).unwrap());
        assert!(service.list_months().unwrap().is_empty());
    }

    #[test]
    fn test_set_savings_goal_persists_and_audits() {
        let (temp_dir, storage) = create_test_storage();
        let service = MonthService::new(&storage, Amount::new(20.0));

        service.set_savings_goal(&october(), Amount::new(30.0)).unwrap();

        let paths = LodgePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut reopened = Storage::new(paths).unwrap();
        reopened.load_all().unwrap();
        let record = reopened.months.get(&october()).unwrap().unwrap();
        assert_eq!(record.savings_goal.value(), 30.0);

        let audit = storage.audit().read_all().unwrap();
        assert_eq!(audit.len(), 1);
        assert_eq!(audit[0].entity_type, EntityType::Month);
        assert_eq!(audit[0].diff_summary.as_deref(), Some("savingsGoal: 20.0 -> 30.0"));
    }

    #[test]
    fn test_metrics_for_stored_month() {
        let (_temp_dir, storage) = create_test_storage();
        let mut record = MonthRecord::default();
        record
            .income
            .push(IncomeEntry::new("Salary", Amount::new(4000.0), None));
        storage.months.upsert(october(), record).unwrap();

        let service = MonthService::new(&storage, Amount::new(20.0));
        let metrics = service.metrics(&october()).unwrap();

        assert_eq!(metrics.total_income, 4000.0);
        assert_eq!(metrics.savings_amount, 800.0);
    }

    #[test]
    fn test_clear_month() {
        let (_temp_dir, storage) = create_test_storage();
        let service = MonthService::new(&storage, Amount::new(20.0));
        service.set_savings_goal(&october(), Amount::new(25.0)).unwrap();

        service.clear_month(&october()).unwrap();

        assert!(!service.exists(&october()).unwrap());
        let last = storage.audit().read_recent(1).unwrap();
        assert_eq!(last[0].operation, Operation::Delete);

        let err = service.clear_month(&october()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_import_blob_merges_months() {
        let (_temp_dir, storage) = create_test_storage();
        let service = MonthService::new(&storage, Amount::new(20.0));
        service.set_savings_goal(&october(), Amount::new(25.0)).unwrap();

        let imported = service
            .import_blob(r#"{"2025-8": {"income": [{"source": "Salary", "amount": "3000"}]}}"#)
            .unwrap();

        assert_eq!(imported, vec![MonthKey::from_calendar(2025, 9).unwrap()]);
        let months = service.list_months().unwrap();
        assert_eq!(months.len(), 2);
        assert_eq!(months[0].1.income[0].amount.value(), 3000.0);
    }

    #[test]
    fn test_import_rejects_invalid_blob() {
        let (_temp_dir, storage) = create_test_storage();
        let service = MonthService::new(&storage, Amount::new(20.0));

        assert!(service.import_blob("not json").is_err());
        assert!(service.list_months().unwrap().is_empty());
    }
}
