//! YAML Export functionality
//!
//! Same content as the JSON export, in a human-readable format.

use std::io::Write;

use crate::error::{LodgeError, LodgeResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

/// Export the full database to YAML format
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> LodgeResult<()> {
    let export = FullExport::from_storage(storage)?;
    let export_err = |e: std::io::Error| LodgeError::Export(e.to_string());

    writeln!(writer, "# Money Lodge Export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer, "# Months: {}", export.months.len()).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| LodgeError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LodgePaths;
    use crate::models::{Amount, BillEntry, MonthKey, MonthRecord};
    use tempfile::TempDir;

    #[test]
    fn test_yaml_export() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LodgePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        let mut record = MonthRecord::default();
        record
            .bills
            .push(BillEntry::new("Streaming", Amount::new(15.99), None));
        storage
            .months
            .upsert(MonthKey::from_calendar(2025, 3).unwrap(), record)
            .unwrap();

        let mut output = Vec::new();
        export_full_yaml(&storage, &mut output).unwrap();
        let yaml = String::from_utf8(output).unwrap();

        assert!(yaml.starts_with("# Money Lodge Export"));
        assert!(yaml.contains("schemaVersion:"));
        assert!(yaml.contains("month: March 2025"));
        assert!(yaml.contains("Streaming"));
        assert!(yaml.contains("totalBills: 15.99"));
    }
}
