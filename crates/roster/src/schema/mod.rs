//! Column sets, value types and records for the employee tables.

mod record;
mod table;
mod types;

pub use record::{EmployeeRecord, RawRecord};
pub use table::{
    missing_columns, CleanedColumns, RawColumns, CLEANED_COLUMNS, REQUIRED_RAW_COLUMNS,
};
pub use types::{Department, EmployeeId};
