//! Cleaning engine: filter, impute, order.

use tracing::{debug, info, warn};

use super::impute::{SalaryMedians, SalarySource};
use super::order::sort_records;
use super::report::{AuditAction, CleaningReport};
use crate::config::CleaningParams;
use crate::error::Result;
use crate::input::DataTable;
use crate::normalize::normalize_table;
use crate::schema::EmployeeRecord;

/// Cleaned records together with what the pass changed.
#[derive(Debug, Clone)]
pub struct CleaningOutcome {
    pub records: Vec<EmployeeRecord>,
    pub report: CleaningReport,
}

/// Engine that turns normalized records into the cleaned table.
pub struct Cleaner {
    params: CleaningParams,
}

impl Cleaner {
    /// Create a cleaner with default bounds.
    pub fn new() -> Self {
        Self::with_params(CleaningParams::default())
    }

    /// Create a cleaner with custom bounds.
    pub fn with_params(params: CleaningParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &CleaningParams {
        &self.params
    }

    /// Check the raw columns, normalize every row, then clean.
    pub fn clean_table(&self, table: &DataTable) -> Result<CleaningOutcome> {
        let records = normalize_table(table)?;
        Ok(self.clean_records(records))
    }

    /// Filter, impute and sort typed records.
    ///
    /// Never fails. Applying it to its own output changes nothing.
    pub fn clean_records(&self, records: Vec<EmployeeRecord>) -> CleaningOutcome {
        let mut report = CleaningReport::new(records.len());

        let mut records = self.filter(records, &mut report);
        report.rows_kept = records.len();

        impute_salaries(&mut records, &mut report);
        sort_records(&mut records);

        info!(
            rows_read = report.rows_read,
            rows_kept = report.rows_kept,
            salaries_imputed = report.salaries_imputed(),
            "cleaning pass complete"
        );

        CleaningOutcome { records, report }
    }

    /// Drop rows whose age, then experience, is missing or out of bounds.
    fn filter(
        &self,
        records: Vec<EmployeeRecord>,
        report: &mut CleaningReport,
    ) -> Vec<EmployeeRecord> {
        let age_ok: Vec<EmployeeRecord> = records
            .into_iter()
            .filter(|r| match r.age {
                Some(age) if self.params.age_in_range(age) => true,
                value => {
                    debug!(employee_id = r.id_label(), ?value, "dropping row: age");
                    report.record(r.id_label(), AuditAction::DroppedAge, value);
                    false
                }
            })
            .collect();

        age_ok
            .into_iter()
            .filter(|r| match r.years_experience {
                Some(years) if self.params.experience_in_range(years) => true,
                value => {
                    debug!(employee_id = r.id_label(), ?value, "dropping row: experience");
                    report.record(r.id_label(), AuditAction::DroppedExperience, value);
                    false
                }
            })
            .collect()
    }
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new()
    }
}

/// Fill missing salaries from medians over the surviving rows.
fn impute_salaries(records: &mut [EmployeeRecord], report: &mut CleaningReport) {
    let medians = SalaryMedians::compute(records);

    for record in records.iter_mut().filter(|r| r.salary_usd.is_none()) {
        match medians.resolve(record.department) {
            Some(source) => {
                let action = match source {
                    SalarySource::DepartmentMedian(_) => AuditAction::ImputedDepartmentMedian,
                    SalarySource::GlobalMedian(_) => AuditAction::ImputedGlobalMedian,
                };
                debug!(employee_id = record.id_label(), ?source, "imputing salary");
                record.salary_usd = Some(source.value());
                report.record(record.id_label(), action, Some(source.value()));
            }
            None => {
                warn!(
                    employee_id = record.id_label(),
                    "no salary median available; salary left missing"
                );
                report.record(record.id_label(), AuditAction::SalaryUnresolved, None);
            }
        }
    }
}
