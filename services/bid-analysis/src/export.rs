//! Output writers.
//!
//! A run produces three files next to each other: the full contract table,
//! the numeric feature table for training, and a JSON run summary.

use std::path::{Path, PathBuf};

use tendara_models::{ContractRecord, DatasetSummary, FeatureRow};
use tendara_utils::{TendaraError, TendaraResult};

pub const RAW_DATA_FILE: &str = "contracts_raw.csv";
pub const TRAINING_DATA_FILE: &str = "training_features.csv";
pub const SUMMARY_FILE: &str = "analysis_summary.json";

/// Locations of the three written outputs.
#[derive(Debug, Clone)]
pub struct ExportPaths {
    pub raw_data: PathBuf,
    pub training_data: PathBuf,
    pub summary: PathBuf,
}

/// Writes all three outputs into `output_dir`, creating it if needed.
pub fn export_all(records: &[ContractRecord], output_dir: &Path) -> TendaraResult<ExportPaths> {
    std::fs::create_dir_all(output_dir).map_err(|e| {
        TendaraError::export(format!("Failed to create {}: {}", output_dir.display(), e))
    })?;

    let paths = ExportPaths {
        raw_data: output_dir.join(RAW_DATA_FILE),
        training_data: output_dir.join(TRAINING_DATA_FILE),
        summary: output_dir.join(SUMMARY_FILE),
    };

    write_raw_csv(records, &paths.raw_data)?;
    write_feature_csv(records, &paths.training_data)?;
    write_summary_json(records, &paths.summary)?;

    Ok(paths)
}

/// Full contract records, one CSV row each. Headers come from the record
/// field names.
fn write_raw_csv(records: &[ContractRecord], path: &Path) -> TendaraResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush().map_err(|e| TendaraError::export(e.to_string()))?;
    Ok(())
}

/// Feature table with one-hot columns in fixed order; `risk_score` is the
/// last column.
fn write_feature_csv(records: &[ContractRecord], path: &Path) -> TendaraResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(FeatureRow::header())?;
    for record in records {
        writer.write_record(FeatureRow::from_record(record).values())?;
    }
    writer.flush().map_err(|e| TendaraError::export(e.to_string()))?;
    Ok(())
}

fn write_summary_json(records: &[ContractRecord], path: &Path) -> TendaraResult<()> {
    let summary = DatasetSummary::from_records(records);
    let json = serde_json::to_string_pretty(&summary)?;
    std::fs::write(path, json).map_err(|e| TendaraError::export(e.to_string()))?;
    Ok(())
}
