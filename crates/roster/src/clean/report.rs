//! Summary of what a cleaning pass changed.

use serde::{Deserialize, Serialize};

use crate::input::SourceMetadata;

/// Type of change applied to a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// Row removed: age missing or out of bounds.
    DroppedAge,
    /// Row removed: years of experience missing or out of bounds.
    DroppedExperience,
    /// Missing salary filled with the department median.
    ImputedDepartmentMedian,
    /// Missing salary filled with the global median.
    ImputedGlobalMedian,
    /// Missing salary left unfilled; no median was defined.
    SalaryUnresolved,
}

/// Audit information for a single row change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowAudit {
    /// Identifier of the affected row (`<missing>` when absent).
    pub employee_id: String,
    /// What happened to the row.
    pub action: AuditAction,
    /// Offending or substituted value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

/// Result of a cleaning pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleaningReport {
    /// Input file, when the records came from disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceMetadata>,
    /// Rows entering the pass.
    pub rows_read: usize,
    /// Rows remaining after filtering.
    pub rows_kept: usize,
    /// Per-row changes, in the order they were made.
    pub audits: Vec<RowAudit>,
}

impl CleaningReport {
    /// Create an empty report for `rows_read` input rows.
    pub fn new(rows_read: usize) -> Self {
        Self {
            source: None,
            rows_read,
            rows_kept: rows_read,
            audits: Vec::new(),
        }
    }

    /// Record a change.
    pub fn record(
        &mut self,
        employee_id: impl Into<String>,
        action: AuditAction,
        value: Option<f64>,
    ) {
        self.audits.push(RowAudit {
            employee_id: employee_id.into(),
            action,
            value,
        });
    }

    /// Number of audits of the given kind.
    pub fn count(&self, action: AuditAction) -> usize {
        self.audits.iter().filter(|a| a.action == action).count()
    }

    pub fn rows_dropped(&self) -> usize {
        self.rows_read - self.rows_kept
    }

    pub fn salaries_imputed(&self) -> usize {
        self.count(AuditAction::ImputedDepartmentMedian)
            + self.count(AuditAction::ImputedGlobalMedian)
    }

    /// Returns true if the pass changed nothing.
    pub fn is_noop(&self) -> bool {
        self.audits.is_empty()
    }
}
