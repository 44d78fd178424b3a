//! Chart rendering for the cleaned table.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::stats::{linear_fit, salary_by_department};
use super::svg::{tick_label, Chart, Scale, BAR_FILL, POINT_FILL, TREND_STROKE};
use crate::error::{Result, RosterError};
use crate::schema::EmployeeRecord;

/// Number of histogram bins.
const HISTOGRAM_BINS: usize = 10;

pub const SALARY_DISTRIBUTION_FILE: &str = "01_salary_distribution.svg";
pub const AVG_SALARY_BY_DEPARTMENT_FILE: &str = "02_avg_salary_by_department.svg";
pub const SALARY_VS_EXPERIENCE_FILE: &str = "03_salary_vs_experience.svg";

/// Equal-width bin counts over `[min, max]`; the last bin is closed.
pub fn histogram(values: &[f64], bins: usize) -> Vec<(f64, f64, usize)> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let (lo, hi) = if max > min { (min, max) } else { (min - 0.5, min + 0.5) };
    let width = (hi - lo) / bins as f64;

    let mut counts = vec![0usize; bins];
    for &value in values {
        let idx = (((value - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let start = lo + width * i as f64;
            (start, start + width, count)
        })
        .collect()
}

/// Histogram of `salary_usd`.
pub fn salary_distribution_svg(records: &[EmployeeRecord]) -> String {
    let salaries: Vec<f64> = records.iter().filter_map(|r| r.salary_usd).collect();
    let bins = histogram(&salaries, HISTOGRAM_BINS);

    let mut chart = Chart::new("Salary Distribution", "Salary (USD)", "Count");
    let max_count = bins.iter().map(|b| b.2).max().unwrap_or(0).max(1);
    let y = Scale::new((0.0, max_count as f64), Chart::y_range());
    chart.axes(&y);

    if let (Some(first), Some(last)) = (bins.first(), bins.last()) {
        let x = Scale::new((first.0, last.1), Chart::x_range());
        for &(start, end, count) in &bins {
            let top = y.map(count as f64);
            let left = x.map(start);
            chart.rect(left, top, x.map(end) - left - 1.0, y.map(0.0) - top, BAR_FILL);
        }
        chart.x_tick(x.map(first.0), &tick_label(first.0));
        chart.x_tick(x.map(last.1), &tick_label(last.1));
    }

    chart.finish()
}

/// Bar per department, ordered by average salary descending.
pub fn avg_salary_by_department_svg(records: &[EmployeeRecord]) -> String {
    let stats = salary_by_department(records);

    let mut chart = Chart::new(
        "Average Salary by Department",
        "Department",
        "Avg Salary (USD)",
    );
    let max_mean = stats.iter().map(|s| s.mean).fold(0.0, f64::max);
    let y = Scale::new((0.0, max_mean), Chart::y_range());
    chart.axes(&y);

    if !stats.is_empty() {
        let (x0, x1) = Chart::x_range();
        let slot = (x1 - x0) / stats.len() as f64;
        for (i, stat) in stats.iter().enumerate() {
            let left = x0 + slot * i as f64 + slot * 0.15;
            let top = y.map(stat.mean);
            chart.rect(left, top, slot * 0.7, y.map(0.0) - top, BAR_FILL);
            chart.x_tick(left + slot * 0.35, stat.department.as_str());
        }
    }

    chart.finish()
}

/// Salary against years of experience, with a least-squares trend line.
pub fn salary_vs_experience_svg(records: &[EmployeeRecord]) -> String {
    let points: Vec<(f64, f64)> = records
        .iter()
        .filter_map(|r| Some((r.years_experience?, r.salary_usd?)))
        .collect();

    let mut chart = Chart::new("Salary vs Experience", "Years of experience", "Salary (USD)");

    let (min_x, max_x) = bounds(points.iter().map(|p| p.0));
    let (min_y, max_y) = bounds(points.iter().map(|p| p.1));
    let x = Scale::new((min_x, max_x), Chart::x_range());
    let y = Scale::new((min_y.min(0.0), max_y), Chart::y_range());
    chart.axes(&y);

    for &(px, py) in &points {
        chart.circle(x.map(px), y.map(py), 4.0, POINT_FILL);
    }

    if let Some((slope, intercept)) = linear_fit(&points) {
        chart.line(
            x.map(min_x),
            y.map(slope * min_x + intercept),
            x.map(max_x),
            y.map(slope * max_x + intercept),
            TREND_STROKE,
            2.0,
        );
    }

    if !points.is_empty() {
        chart.x_tick(x.map(min_x), &tick_label(min_x));
        chart.x_tick(x.map(max_x), &tick_label(max_x));
    }

    chart.finish()
}

/// Render every chart into `dir`, returning the written paths.
pub fn render_figures(
    records: &[EmployeeRecord],
    dir: impl AsRef<Path>,
) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|e| RosterError::io(dir, e))?;

    let charts = [
        (SALARY_DISTRIBUTION_FILE, salary_distribution_svg(records)),
        (AVG_SALARY_BY_DEPARTMENT_FILE, avg_salary_by_department_svg(records)),
        (SALARY_VS_EXPERIENCE_FILE, salary_vs_experience_svg(records)),
    ];

    let mut written = Vec::with_capacity(charts.len());
    for (name, svg) in charts {
        let path = dir.join(name);
        fs::write(&path, svg).map_err(|e| RosterError::io(&path, e))?;
        written.push(path);
    }

    info!(dir = %dir.display(), count = written.len(), "wrote figures");
    Ok(written)
}

/// Min and max of `values`; a unit range when there are none.
fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if lo.is_finite() && hi.is_finite() {
        (lo, hi)
    } else {
        (0.0, 1.0)
    }
}
