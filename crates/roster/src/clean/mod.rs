//! Row filtering, salary imputation and output ordering.

mod engine;
mod impute;
mod order;
mod report;

pub use engine::{Cleaner, CleaningOutcome};
pub use impute::{median, SalaryMedians, SalarySource};
pub use order::{compare_records, sort_records};
pub use report::{AuditAction, CleaningReport, RowAudit};
