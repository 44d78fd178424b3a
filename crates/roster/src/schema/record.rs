//! Row-level record types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::table::RawColumns;
use super::types::{Department, EmployeeId};
use crate::input::DataTable;

/// One untyped row of the raw table, borrowed from the parsed cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecord<'a> {
    pub employee_id: &'a str,
    pub age: &'a str,
    pub department: &'a str,
    pub salary: &'a str,
    pub years_experience: &'a str,
    pub remote: &'a str,
    pub hired_date: &'a str,
}

impl<'a> RawRecord<'a> {
    /// Borrow row `row` of `table` through located column positions.
    pub fn from_row(table: &'a DataTable, columns: &RawColumns, row: usize) -> Self {
        let cell = |col: usize| table.get(row, col).unwrap_or("");
        Self {
            employee_id: cell(columns.employee_id),
            age: cell(columns.age),
            department: cell(columns.department),
            salary: cell(columns.salary),
            years_experience: cell(columns.years_experience),
            remote: cell(columns.remote),
            hired_date: cell(columns.hired_date),
        }
    }
}

/// A typed employee row.
///
/// Produced by normalization with every field optional except the
/// department; after cleaning, `age`, `years_experience` and (unless no
/// median existed) `salary_usd` are always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub employee_id: Option<EmployeeId>,
    pub age: Option<f64>,
    pub department: Department,
    pub years_experience: Option<f64>,
    pub remote: Option<bool>,
    pub hired_date: Option<NaiveDate>,
    pub salary_usd: Option<f64>,
}

impl EmployeeRecord {
    /// Identifier text for messages, `<missing>` when absent.
    pub fn id_label(&self) -> &str {
        self.employee_id
            .as_ref()
            .map(|id| id.as_str())
            .unwrap_or("<missing>")
    }
}
