//! Median salary imputation.

use indexmap::IndexMap;

use crate::schema::{Department, EmployeeRecord};

/// Median of `values`; the mean of the two middle values for even counts.
pub fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}

/// Where an imputed salary came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SalarySource {
    DepartmentMedian(f64),
    GlobalMedian(f64),
}

impl SalarySource {
    pub fn value(&self) -> f64 {
        match *self {
            SalarySource::DepartmentMedian(v) | SalarySource::GlobalMedian(v) => v,
        }
    }
}

/// Salary medians over a set of records, ignoring missing salaries.
#[derive(Debug, Clone, Default)]
pub struct SalaryMedians {
    by_department: IndexMap<Department, f64>,
    global: Option<f64>,
}

impl SalaryMedians {
    /// Group known salaries by department in one pass, then take medians.
    pub fn compute(records: &[EmployeeRecord]) -> Self {
        let mut groups: IndexMap<Department, Vec<f64>> = IndexMap::new();
        let mut all = Vec::with_capacity(records.len());

        for record in records {
            if let Some(salary) = record.salary_usd {
                groups.entry(record.department).or_default().push(salary);
                all.push(salary);
            }
        }

        let by_department = groups
            .into_iter()
            .filter_map(|(dept, mut salaries)| median(&mut salaries).map(|m| (dept, m)))
            .collect();

        Self {
            by_department,
            global: median(&mut all),
        }
    }

    pub fn department(&self, department: Department) -> Option<f64> {
        self.by_department.get(&department).copied()
    }

    pub fn global(&self) -> Option<f64> {
        self.global
    }

    /// Department median, falling back to the global median.
    pub fn resolve(&self, department: Department) -> Option<SalarySource> {
        self.department(department)
            .map(SalarySource::DepartmentMedian)
            .or_else(|| self.global.map(SalarySource::GlobalMedian))
    }
}
