//! Reporting over the cleaned table: salary aggregates, a markdown
//! insights document and SVG charts.

mod figures;
mod insights;
mod stats;
mod svg;

pub use figures::{
    avg_salary_by_department_svg, histogram, render_figures, salary_distribution_svg,
    salary_vs_experience_svg, AVG_SALARY_BY_DEPARTMENT_FILE, SALARY_DISTRIBUTION_FILE,
    SALARY_VS_EXPERIENCE_FILE,
};
pub use insights::{render_insights, write_insights};
pub use stats::{
    linear_fit, mean, salary_by_department, salary_by_remote, DepartmentSalary, RemoteSalary,
    SalarySummary,
};
