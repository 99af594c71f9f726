//! CLI commands that move whole months in and out of storage

use std::path::Path;

use crate::config::settings::Settings;
use crate::error::{LodgeError, LodgeResult};
use crate::models::MonthKey;
use crate::services::MonthService;
use crate::storage::Storage;

/// Handle the import command
///
/// Accepts both the versioned month file and the legacy bare map of
/// `"<year>-<month index>"` keys. Imported months replace stored ones.
pub fn handle_import(storage: &Storage, settings: &Settings, file: &Path) -> LodgeResult<()> {
    if !file.exists() {
        return Err(LodgeError::NotFound {
            entity_type: "File",
            identifier: file.display().to_string(),
        });
    }

    let contents = std::fs::read_to_string(file)
        .map_err(|e| LodgeError::Io(format!("Failed to read {}: {}", file.display(), e)))?;

    let service = MonthService::new(storage, settings.default_savings_goal);
    let imported = service.import_blob(&contents)?;

    if imported.is_empty() {
        println!("No months found in {}", file.display());
        return Ok(());
    }

    println!("Imported {} month(s) from {}:", imported.len(), file.display());
    for key in imported {
        println!("  {}", key);
    }
    Ok(())
}

/// Handle the clear command
pub fn handle_clear(
    storage: &Storage,
    settings: &Settings,
    month: &MonthKey,
    force: bool,
) -> LodgeResult<()> {
    if !force {
        return Err(LodgeError::Validation(format!(
            "Clearing {} deletes all of its entries; re-run with --force",
            month
        )));
    }

    let service = MonthService::new(storage, settings.default_savings_goal);
    let removed = service.clear_month(month)?;
    println!("Cleared {} ({} entries removed)", month, removed.entry_count());
    Ok(())
}
