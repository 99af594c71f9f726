//! Month record repository
//!
//! Every month record lives in one JSON blob (`data/months.json`). The
//! whole blob is read on load and written back on every save.
//!
//! On-disk format:
//!
//! ```json
//! { "schemaVersion": 1, "months": { "2025-9": { "income": [], ... } } }
//! ```
//!
//! A bare `{ "2025-9": {...} }` map (the unversioned layout) is accepted and
//! rewritten in the versioned layout. An unreadable blob is moved aside to
//! `months.json.corrupt` and the repository starts empty.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{LodgeError, LodgeResult};
use crate::models::{MonthKey, MonthRecord};

use super::file_io::{quarantine, write_json_atomic};

/// Current version of the months blob layout
pub const MONTHS_SCHEMA_VERSION: u32 = 1;

const LIST_FIELDS: [&str; 4] = ["income", "expenses", "debts", "bills"];

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MonthsFile<'a> {
    schema_version: u32,
    months: BTreeMap<String, &'a MonthRecord>,
}

/// What `load` found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// No blob yet
    Fresh,
    /// Blob read as-is
    Loaded,
    /// Blob read and rewritten (unversioned layout or entries without IDs)
    Migrated,
    /// Blob was unreadable and has been moved to the given path
    Recovered(PathBuf),
}

/// Parsed contents of a blob, before it replaces or merges into memory
struct ParsedBlob {
    months: BTreeMap<MonthKey, MonthRecord>,
    needs_rewrite: bool,
}

/// Repository for month records
pub struct MonthRepository {
    path: PathBuf,
    months: RwLock<BTreeMap<MonthKey, MonthRecord>>,
}

impl MonthRepository {
    /// Create a new repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            months: RwLock::new(BTreeMap::new()),
        }
    }

    /// Path of the blob on disk
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> LodgeResult<RwLockReadGuard<'_, BTreeMap<MonthKey, MonthRecord>>> {
        self.months
            .read()
            .map_err(|e| LodgeError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> LodgeResult<RwLockWriteGuard<'_, BTreeMap<MonthKey, MonthRecord>>> {
        self.months
            .write()
            .map_err(|e| LodgeError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load every month from disk, replacing what is in memory
    pub fn load(&self) -> LodgeResult<LoadStatus> {
        if !self.path.exists() {
            self.write()?.clear();
            return Ok(LoadStatus::Fresh);
        }

        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            LodgeError::Storage(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        let parsed = match parse_blob(&contents) {
            Ok(parsed) => parsed,
            Err(LodgeError::Json(reason)) => {
                let moved = quarantine(&self.path)?;
                warn!(
                    path = %self.path.display(),
                    moved_to = %moved.display(),
                    %reason,
                    "month data unreadable, starting empty"
                );
                self.write()?.clear();
                return Ok(LoadStatus::Recovered(moved));
            }
            Err(e) => return Err(e),
        };

        let count = parsed.months.len();
        *self.write()? = parsed.months;
        debug!(months = count, path = %self.path.display(), "loaded month data");

        if parsed.needs_rewrite {
            self.save()?;
            info!(months = count, "rewrote month data in the current layout");
            Ok(LoadStatus::Migrated)
        } else {
            Ok(LoadStatus::Loaded)
        }
    }

    /// Write every month to disk
    pub fn save(&self) -> LodgeResult<()> {
        let months = self.read()?;
        let file = MonthsFile {
            schema_version: MONTHS_SCHEMA_VERSION,
            months: months
                .iter()
                .map(|(key, record)| (key.storage_key(), record))
                .collect(),
        };
        write_json_atomic(&self.path, &file)
    }

    /// Get the record for a month, if one has been stored
    pub fn get(&self, key: &MonthKey) -> LodgeResult<Option<MonthRecord>> {
        Ok(self.read()?.get(key).cloned())
    }

    /// Insert or replace a month record
    pub fn upsert(&self, key: MonthKey, record: MonthRecord) -> LodgeResult<()> {
        self.write()?.insert(key, record);
        Ok(())
    }

    /// Remove a month record
    pub fn remove(&self, key: &MonthKey) -> LodgeResult<Option<MonthRecord>> {
        Ok(self.write()?.remove(key))
    }

    /// All stored month keys, oldest first
    pub fn keys(&self) -> LodgeResult<Vec<MonthKey>> {
        Ok(self.read()?.keys().copied().collect())
    }

    /// All stored months, oldest first
    pub fn get_all(&self) -> LodgeResult<Vec<(MonthKey, MonthRecord)>> {
        Ok(self
            .read()?
            .iter()
            .map(|(key, record)| (*key, record.clone()))
            .collect())
    }

    /// Merge months from blob text (either layout); incoming months replace
    /// stored ones with the same key. Returns the keys that were merged.
    ///
    /// Does not save.
    pub fn merge_blob(&self, contents: &str) -> LodgeResult<Vec<MonthKey>> {
        let parsed = parse_blob(contents)?;
        let keys: Vec<MonthKey> = parsed.months.keys().copied().collect();
        self.write()?.extend(parsed.months);
        Ok(keys)
    }
}

fn parse_blob(contents: &str) -> LodgeResult<ParsedBlob> {
    let value: Value = serde_json::from_str(contents)?;

    let Value::Object(mut root) = value else {
        return Err(LodgeError::Json("month data is not a JSON object".into()));
    };

    let (raw_months, legacy) = match root.remove("schemaVersion") {
        Some(version) => {
            let version = version
                .as_u64()
                .ok_or_else(|| LodgeError::Json("schemaVersion is not a number".into()))?;
            if version > u64::from(MONTHS_SCHEMA_VERSION) {
                return Err(LodgeError::Storage(format!(
                    "Month data uses schema version {}, this build understands up to {}",
                    version, MONTHS_SCHEMA_VERSION
                )));
            }
            match root.remove("months") {
                Some(Value::Object(months)) => (months, false),
                None => (serde_json::Map::new(), false),
                Some(_) => return Err(LodgeError::Json("months is not a JSON object".into())),
            }
        }
        None => (root, true),
    };

    let mut needs_rewrite = legacy;
    let mut months = BTreeMap::new();

    for (raw_key, raw_record) in raw_months {
        let key = MonthKey::from_storage_key(&raw_key)
            .map_err(|_| LodgeError::Json(format!("invalid month key '{}'", raw_key)))?;

        if !raw_record.is_object() {
            warn!(month = %raw_key, "month is not a JSON object, skipping it");
            needs_rewrite = true;
            continue;
        }

        needs_rewrite |= needs_normalizing(&raw_record);

        let record: MonthRecord = serde_json::from_value(raw_record)
            .map_err(|e| LodgeError::Json(format!("month '{}': {}", raw_key, e)))?;
        months.insert(key, record);
    }

    Ok(ParsedBlob {
        months,
        needs_rewrite,
    })
}

/// Whether reading `record` changes it: entries without a valid ID get a
/// generated one, and malformed lists or items are dropped. Such records
/// are written back so the generated IDs stay stable across runs.
fn needs_normalizing(record: &Value) -> bool {
    LIST_FIELDS.iter().any(|field| match record.get(field) {
        None => false,
        Some(Value::Array(items)) => !items.iter().all(has_valid_id),
        Some(_) => true,
    })
}

fn has_valid_id(item: &Value) -> bool {
    item.get("id")
        .and_then(Value::as_str)
        .is_some_and(|id| Uuid::parse_str(id).is_ok())
}
