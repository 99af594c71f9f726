//! Storage layer for Money Lodge
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation, plus the audit trail of every change.

pub mod file_io;
pub mod months;

pub use file_io::{quarantine, write_json_atomic};
pub use months::{LoadStatus, MonthRepository, MONTHS_SCHEMA_VERSION};

use serde::Serialize;

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType};
use crate::config::paths::LodgePaths;
use crate::error::LodgeError;
use crate::models::MonthKey;

/// Main storage coordinator: the month repository and the audit log
pub struct Storage {
    paths: LodgePaths,
    pub months: MonthRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: LodgePaths) -> Result<Self, LodgeError> {
        paths.ensure_directories()?;

        Ok(Self {
            months: MonthRepository::new(paths.months_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LodgePaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<LoadStatus, LodgeError> {
        self.months.load()
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), LodgeError> {
        self.months.save()
    }

    /// Record a creation in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        month: &MonthKey,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), LodgeError> {
        let entry = AuditEntry::create(
            entity_type,
            entity_id,
            month.storage_key(),
            entity_name,
            entity,
        );
        self.audit.log(&entry)
    }

    /// Record an update in the audit log, with a field diff
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        month: &MonthKey,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Result<(), LodgeError> {
        let diff = match (serde_json::to_value(before), serde_json::to_value(after)) {
            (Ok(b), Ok(a)) => generate_diff(&b, &a),
            _ => None,
        };
        let entry = AuditEntry::update(
            entity_type,
            entity_id,
            month.storage_key(),
            entity_name,
            before,
            after,
            diff,
        );
        self.audit.log(&entry)
    }

    /// Record a deletion in the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        month: &MonthKey,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), LodgeError> {
        let entry = AuditEntry::delete(
            entity_type,
            entity_id,
            month.storage_key(),
            entity_name,
            entity,
        );
        self.audit.log(&entry)
    }
}
