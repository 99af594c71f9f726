//! JSON Export functionality
//!
//! Exports every stored month, with its computed metrics, to JSON.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{LodgeError, LodgeResult};
use crate::metrics::MonthMetrics;
use crate::models::{MonthKey, MonthRecord};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export structure
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Every stored month, oldest first
    pub months: Vec<MonthExport>,
}

/// One month in an export
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthExport {
    /// Storage key (`"2025-9"` for October 2025)
    pub key: String,

    /// Human-readable month (`"October 2025"`)
    pub month: String,

    #[serde(flatten)]
    pub record: MonthRecord,

    pub metrics: MonthMetrics,
}

impl MonthExport {
    pub fn new(key: &MonthKey, record: MonthRecord) -> Self {
        Self {
            key: key.storage_key(),
            month: key.to_string(),
            metrics: MonthMetrics::compute(&record),
            record,
        }
    }
}

impl FullExport {
    /// Create a new full export from storage
    pub fn from_storage(storage: &Storage) -> LodgeResult<Self> {
        let months = storage
            .months
            .get_all()?
            .into_iter()
            .map(|(key, record)| MonthExport::new(&key, record))
            .collect();

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            months,
        })
    }

    /// Number of line items across all months
    pub fn entry_count(&self) -> usize {
        self.months.iter().map(|m| m.record.entry_count()).sum()
    }
}

/// Export the full database to JSON format
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> LodgeResult<()> {
    let export = FullExport::from_storage(storage)?;

    let written = if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    };
    written.map_err(|e| LodgeError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| LodgeError::Export(e.to_string()))?;
    Ok(())
}
