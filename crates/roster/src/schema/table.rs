//! Required column sets for the raw and cleaned tables.

use crate::input::DataTable;

/// Columns every raw input must carry.
pub const REQUIRED_RAW_COLUMNS: [&str; 7] = [
    "employee_id",
    "age",
    "department",
    "salary",
    "years_experience",
    "remote",
    "hired_date",
];

/// Columns of the cleaned table, in output order.
pub const CLEANED_COLUMNS: [&str; 7] = [
    "employee_id",
    "age",
    "department",
    "years_experience",
    "remote",
    "hired_date",
    "salary_usd",
];

/// Required columns absent from `table`, sorted by name.
pub fn missing_columns(table: &DataTable, required: &[&str]) -> Vec<String> {
    let mut missing: Vec<String> = required
        .iter()
        .filter(|name| !table.has_column(name))
        .map(|name| name.to_string())
        .collect();
    missing.sort();
    missing
}

/// Positions of the raw columns within a table's header.
#[derive(Debug, Clone, Copy)]
pub struct RawColumns {
    pub employee_id: usize,
    pub age: usize,
    pub department: usize,
    pub salary: usize,
    pub years_experience: usize,
    pub remote: usize,
    pub hired_date: usize,
}

impl RawColumns {
    /// Locate every raw column. Returns `None` if any is absent.
    pub fn locate(table: &DataTable) -> Option<Self> {
        Some(Self {
            employee_id: table.column_index("employee_id")?,
            age: table.column_index("age")?,
            department: table.column_index("department")?,
            salary: table.column_index("salary")?,
            years_experience: table.column_index("years_experience")?,
            remote: table.column_index("remote")?,
            hired_date: table.column_index("hired_date")?,
        })
    }
}

/// Positions of the cleaned columns within a table's header.
#[derive(Debug, Clone, Copy)]
pub struct CleanedColumns {
    pub employee_id: usize,
    pub age: usize,
    pub department: usize,
    pub years_experience: usize,
    pub remote: usize,
    pub hired_date: usize,
    pub salary_usd: usize,
}

impl CleanedColumns {
    /// Locate every cleaned column. Returns `None` if any is absent.
    pub fn locate(table: &DataTable) -> Option<Self> {
        Some(Self {
            employee_id: table.column_index("employee_id")?,
            age: table.column_index("age")?,
            department: table.column_index("department")?,
            years_experience: table.column_index("years_experience")?,
            remote: table.column_index("remote")?,
            hired_date: table.column_index("hired_date")?,
            salary_usd: table.column_index("salary_usd")?,
        })
    }
}
