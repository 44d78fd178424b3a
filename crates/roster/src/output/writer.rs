//! Cleaned table persistence.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Result, RosterError};
use crate::schema::{EmployeeRecord, CLEANED_COLUMNS};

/// Shortest text that parses back to the same `f64`. Whole numbers drop
/// the trailing `.0`.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Cells of one record in `CLEANED_COLUMNS` order.
pub fn record_cells(record: &EmployeeRecord) -> [String; 7] {
    [
        record
            .employee_id
            .as_ref()
            .map(|id| id.to_string())
            .unwrap_or_default(),
        record.age.map(format_number).unwrap_or_default(),
        record.department.to_string(),
        record.years_experience.map(format_number).unwrap_or_default(),
        record.remote.map(|r| r.to_string()).unwrap_or_default(),
        record
            .hired_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        record.salary_usd.map(format_number).unwrap_or_default(),
    ]
}

/// Serialize records as CSV text with the cleaned header.
pub fn to_csv_bytes(records: &[EmployeeRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CLEANED_COLUMNS)?;
    for record in records {
        writer.write_record(record_cells(record))?;
    }
    writer
        .into_inner()
        .map_err(|e| RosterError::io(PathBuf::new(), e.into_error()))
}

/// Write the cleaned table to `path`.
///
/// The file is written next to its destination and renamed into place, so
/// an existing output is never left half-written. Parent directories are
/// created as needed.
pub fn write_cleaned(path: impl AsRef<Path>, records: &[EmployeeRecord]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| RosterError::io(parent, e))?;
        }
    }

    let bytes = to_csv_bytes(records)?;

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = PathBuf::from(tmp_name);

    fs::write(&tmp_path, &bytes).map_err(|e| RosterError::io(&tmp_path, e))?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(RosterError::io(path, e));
    }

    info!(path = %path.display(), rows = records.len(), "wrote cleaned table");
    Ok(())
}
