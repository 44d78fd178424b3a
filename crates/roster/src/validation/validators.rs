//! Structural and invariant checks for raw and cleaned tables.

use std::collections::HashSet;

use tracing::debug;

use super::violation::Violation;
use crate::config::CleaningParams;
use crate::error::{Result, RosterError};
use crate::input::DataTable;
use crate::normalize::{parse_hired_date, parse_number};
use crate::schema::{
    missing_columns, CleanedColumns, Department, EmployeeId, EmployeeRecord, RawColumns,
    CLEANED_COLUMNS, REQUIRED_RAW_COLUMNS,
};

/// Everything an invariant check can look at.
struct CheckContext<'a> {
    records: &'a [EmployeeRecord],
    bounds: &'a CleaningParams,
    /// First remote cell that was not true, false or empty.
    invalid_remote: Option<&'a str>,
    /// First department cell that was not a canonical label.
    invalid_department: Option<&'a str>,
}

type Check = fn(&CheckContext<'_>) -> Option<Violation>;

/// Invariant checks, in reporting order.
const CHECKS: &[Check] = &[
    check_not_empty,
    check_salary_present,
    check_salary_positive,
    check_employee_id_present,
    check_employee_id_unique,
    check_hired_date,
    check_remote,
    check_age,
    check_experience,
    check_department,
];

/// Check that a raw table carries every required column.
///
/// Returns the located column positions so callers never look them up twice.
pub fn validate_raw(table: &DataTable) -> Result<RawColumns> {
    RawColumns::locate(table).ok_or_else(|| RosterError::Structural {
        table: "Raw",
        missing: missing_columns(table, &REQUIRED_RAW_COLUMNS),
    })
}

/// Check typed records against every cleaned-table invariant.
pub fn validate_records(records: &[EmployeeRecord], bounds: &CleaningParams) -> Result<()> {
    run_checks(&CheckContext {
        records,
        bounds,
        invalid_remote: None,
        invalid_department: None,
    })
}

/// Check a cleaned string table and decode it into typed records.
///
/// Cells that do not parse count as missing for the range checks.
pub fn validate_cleaned(
    table: &DataTable,
    bounds: &CleaningParams,
) -> Result<Vec<EmployeeRecord>> {
    let columns = CleanedColumns::locate(table).ok_or_else(|| RosterError::Structural {
        table: "Cleaned",
        missing: missing_columns(table, &CLEANED_COLUMNS),
    })?;

    let mut invalid_remote = None;
    let mut invalid_department = None;
    let mut records = Vec::with_capacity(table.row_count());

    for row in 0..table.row_count() {
        let cell = move |col: usize| table.get(row, col).unwrap_or("");

        let remote_cell = cell(columns.remote);
        let remote = decode_remote(remote_cell);
        if remote.is_err() && invalid_remote.is_none() {
            invalid_remote = Some(remote_cell);
        }

        let department_cell = cell(columns.department);
        let department = Department::from_label(department_cell);
        if department.is_none() && invalid_department.is_none() {
            invalid_department = Some(department_cell);
        }

        records.push(EmployeeRecord {
            employee_id: EmployeeId::parse(cell(columns.employee_id)),
            age: parse_number(cell(columns.age)),
            department: department.unwrap_or(Department::Other),
            years_experience: parse_number(cell(columns.years_experience)),
            remote: remote.unwrap_or(None),
            hired_date: parse_hired_date(cell(columns.hired_date)),
            salary_usd: parse_number(cell(columns.salary_usd)),
        });
    }

    run_checks(&CheckContext {
        records: &records,
        bounds,
        invalid_remote,
        invalid_department,
    })?;

    Ok(records)
}

fn run_checks(ctx: &CheckContext<'_>) -> Result<()> {
    for check in CHECKS {
        if let Some(violation) = check(ctx) {
            debug!(%violation, "cleaned table rejected");
            return Err(RosterError::Invariant(violation));
        }
    }
    debug!(rows = ctx.records.len(), "cleaned table passed validation");
    Ok(())
}

/// Remote cells written by the cleaner: `true`, `false` or empty.
fn decode_remote(cell: &str) -> std::result::Result<Option<bool>, ()> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else if trimmed.eq_ignore_ascii_case("true") {
        Ok(Some(true))
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(Some(false))
    } else {
        Err(())
    }
}

fn check_not_empty(ctx: &CheckContext<'_>) -> Option<Violation> {
    ctx.records.is_empty().then_some(Violation::Empty)
}

fn check_salary_present(ctx: &CheckContext<'_>) -> Option<Violation> {
    let count = ctx
        .records
        .iter()
        .filter(|r| r.salary_usd.is_none())
        .count();
    (count > 0).then_some(Violation::MissingSalary { count })
}

fn check_salary_positive(ctx: &CheckContext<'_>) -> Option<Violation> {
    ctx.records.iter().find_map(|r| match r.salary_usd {
        Some(value) if value <= 0.0 => Some(Violation::NonPositiveSalary {
            employee_id: r.id_label().to_string(),
            value,
        }),
        _ => None,
    })
}

fn check_employee_id_present(ctx: &CheckContext<'_>) -> Option<Violation> {
    let count = ctx
        .records
        .iter()
        .filter(|r| r.employee_id.is_none())
        .count();
    (count > 0).then_some(Violation::MissingEmployeeId { count })
}

fn check_employee_id_unique(ctx: &CheckContext<'_>) -> Option<Violation> {
    let mut seen = HashSet::new();
    ctx.records
        .iter()
        .filter_map(|r| r.employee_id.as_ref())
        .find(|id| !seen.insert(*id))
        .map(|id| Violation::DuplicateEmployeeId {
            employee_id: id.to_string(),
        })
}

fn check_hired_date(ctx: &CheckContext<'_>) -> Option<Violation> {
    let any_valid = ctx.records.iter().any(|r| r.hired_date.is_some());
    (!any_valid).then_some(Violation::NoValidHiredDate)
}

fn check_remote(ctx: &CheckContext<'_>) -> Option<Violation> {
    ctx.invalid_remote.map(|value| Violation::InvalidRemote {
        value: value.to_string(),
    })
}

fn check_age(ctx: &CheckContext<'_>) -> Option<Violation> {
    ctx.records.iter().find_map(|r| match r.age {
        Some(age) if ctx.bounds.age_in_range(age) => None,
        value => Some(Violation::InvalidAge {
            employee_id: r.id_label().to_string(),
            value,
        }),
    })
}

fn check_experience(ctx: &CheckContext<'_>) -> Option<Violation> {
    ctx.records.iter().find_map(|r| match r.years_experience {
        Some(years) if ctx.bounds.experience_in_range(years) => None,
        value => Some(Violation::InvalidExperience {
            employee_id: r.id_label().to_string(),
            value,
        }),
    })
}

fn check_department(ctx: &CheckContext<'_>) -> Option<Violation> {
    ctx.invalid_department
        .map(|value| Violation::InvalidDepartment {
            value: value.to_string(),
        })
}
