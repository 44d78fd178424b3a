//! Mapping of raw cells onto typed employee records.

mod fields;

pub use fields::{
    normalize_department, parse_hired_date, parse_number, parse_remote, parse_salary,
};

use tracing::debug;

use crate::error::Result;
use crate::input::DataTable;
use crate::schema::{EmployeeId, EmployeeRecord, RawRecord};
use crate::validation::validate_raw;

/// Normalize one raw row. Never fails.
pub fn normalize_record(raw: &RawRecord<'_>) -> EmployeeRecord {
    EmployeeRecord {
        employee_id: EmployeeId::parse(raw.employee_id),
        age: parse_number(raw.age),
        department: normalize_department(raw.department),
        years_experience: parse_number(raw.years_experience),
        remote: parse_remote(raw.remote),
        hired_date: parse_hired_date(raw.hired_date),
        salary_usd: parse_salary(raw.salary),
    }
}

/// Normalize every row of a raw table.
///
/// Fails only when required columns are absent, before any row is read.
pub fn normalize_table(table: &DataTable) -> Result<Vec<EmployeeRecord>> {
    let columns = validate_raw(table)?;

    let records: Vec<EmployeeRecord> = (0..table.row_count())
        .map(|row| normalize_record(&RawRecord::from_row(table, &columns, row)))
        .collect();

    debug!(
        rows = records.len(),
        missing_salary = records.iter().filter(|r| r.salary_usd.is_none()).count(),
        missing_hired_date = records.iter().filter(|r| r.hired_date.is_none()).count(),
        "normalized raw table"
    );

    Ok(records)
}
