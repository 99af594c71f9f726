//! CLI command for data export
//!
//! JSON and YAML carry every stored month; CSV carries the line items of
//! the selected month.

use clap::ValueEnum;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::settings::Settings;
use crate::error::{LodgeError, LodgeResult};
use crate::export::{csv, json, yaml};
use crate::models::MonthKey;
use crate::services::MonthService;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (line items of the selected month)
    Csv,
    /// JSON format (every month with metrics)
    Json,
    /// YAML format (every month with metrics, human-readable)
    Yaml,
}

/// Handle the export command; writes to stdout when no output file is given
pub fn handle_export(
    storage: &Storage,
    settings: &Settings,
    month: &MonthKey,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> LodgeResult<()> {
    match &output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                LodgeError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(storage, settings, month, format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| LodgeError::Export(e.to_string()))?;

            match format {
                ExportFormat::Csv => {
                    println!("Line items for {} exported to: {}", month, path.display())
                }
                ExportFormat::Json | ExportFormat::Yaml => {
                    println!("All months exported to: {}", path.display())
                }
            }
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(storage, settings, month, format, &mut writer)?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    storage: &Storage,
    settings: &Settings,
    month: &MonthKey,
    format: ExportFormat,
    writer: &mut W,
) -> LodgeResult<()> {
    match format {
        ExportFormat::Csv => {
            let record = MonthService::new(storage, settings.default_savings_goal).record(month)?;
            csv::export_month_csv(&record, writer)
        }
        ExportFormat::Json => json::export_full_json(storage, writer, true),
        ExportFormat::Yaml => yaml::export_full_yaml(storage, writer),
    }
}
