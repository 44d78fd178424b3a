//! Salary aggregates over the cleaned table.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::clean::median;
use crate::schema::{Department, EmployeeRecord};

/// Salary statistics for one department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentSalary {
    pub department: Department,
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

/// Average salary for remote or on-site employees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteSalary {
    pub remote: bool,
    pub count: usize,
    pub mean: f64,
}

/// Aggregates consumed by the insights document and the charts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalarySummary {
    /// Number of cleaned rows.
    pub rows: usize,
    /// Departments present, in label order.
    pub departments: Vec<Department>,
    /// Per-department statistics, highest mean first.
    pub by_department: Vec<DepartmentSalary>,
    /// On-site then remote; rows with unknown remote status are excluded.
    pub by_remote: Vec<RemoteSalary>,
}

impl SalarySummary {
    /// Aggregate cleaned records. Rows without a salary are skipped.
    pub fn from_records(records: &[EmployeeRecord]) -> Self {
        let mut departments: Vec<Department> = records.iter().map(|r| r.department).collect();
        departments.sort();
        departments.dedup();

        Self {
            rows: records.len(),
            departments,
            by_department: salary_by_department(records),
            by_remote: salary_by_remote(records),
        }
    }

    /// Department with the highest average salary.
    pub fn top_department(&self) -> Option<Department> {
        self.by_department.first().map(|d| d.department)
    }
}

/// Per-department salary statistics, ordered by mean descending.
pub fn salary_by_department(records: &[EmployeeRecord]) -> Vec<DepartmentSalary> {
    let mut groups: IndexMap<Department, Vec<f64>> = IndexMap::new();
    for record in records {
        if let Some(salary) = record.salary_usd {
            groups.entry(record.department).or_default().push(salary);
        }
    }

    let mut stats: Vec<DepartmentSalary> = groups
        .into_iter()
        .filter_map(|(department, mut salaries)| {
            let count = salaries.len();
            let mean = mean(&salaries)?;
            let median = median(&mut salaries)?;
            // median() sorted the slice
            let min = *salaries.first()?;
            let max = *salaries.last()?;
            Some(DepartmentSalary {
                department,
                count,
                mean,
                median,
                min,
                max,
            })
        })
        .collect();

    stats.sort_by(|a, b| {
        b.mean
            .total_cmp(&a.mean)
            .then_with(|| a.department.cmp(&b.department))
    });
    stats
}

/// Mean salary of on-site and remote employees, on-site first.
pub fn salary_by_remote(records: &[EmployeeRecord]) -> Vec<RemoteSalary> {
    [false, true]
        .into_iter()
        .filter_map(|remote| {
            let salaries: Vec<f64> = records
                .iter()
                .filter(|r| r.remote == Some(remote))
                .filter_map(|r| r.salary_usd)
                .collect();
            mean(&salaries).map(|mean| RemoteSalary {
                remote,
                count: salaries.len(),
                mean,
            })
        })
        .collect()
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Least-squares fit `y = slope * x + intercept`.
///
/// `None` when fewer than two points or when every x is equal.
pub fn linear_fit(points: &[(f64, f64)]) -> Option<(f64, f64)> {
    if points.len() < 2 {
        return None;
    }
    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p.1).sum::<f64>() / n;

    let var_x: f64 = points.iter().map(|p| (p.0 - mean_x).powi(2)).sum();
    if var_x == 0.0 {
        return None;
    }
    let cov: f64 = points
        .iter()
        .map(|p| (p.0 - mean_x) * (p.1 - mean_y))
        .sum();

    let slope = cov / var_x;
    Some((slope, mean_y - slope * mean_x))
}
