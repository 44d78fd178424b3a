//! Minimal SVG canvas for the report charts.

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 400.0;
const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 60.0;
const Y_TICKS: usize = 5;

pub const BAR_FILL: &str = "#4c72b0";
pub const POINT_FILL: &str = "#4c72b0";
pub const TREND_STROKE: &str = "#dd8452";

/// Linear mapping from data values to pixel positions.
#[derive(Debug, Clone, Copy)]
pub struct Scale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl Scale {
    /// Degenerate domains are widened so every value still maps inside the range.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (lo, hi) = domain;
        let domain = if hi > lo { (lo, hi) } else { (lo - 0.5, lo + 0.5) };
        Self { domain, range }
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }
}

/// A chart canvas with a fixed plot area, axes and titles.
pub struct Chart {
    body: String,
}

impl Chart {
    /// Start a chart and draw its title and axis labels.
    pub fn new(title: &str, x_label: &str, y_label: &str) -> Self {
        let mut chart = Self {
            body: String::new(),
        };
        chart.push(format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = WIDTH,
            h = HEIGHT
        ));
        chart.push(format!(
            r#"<rect width="{}" height="{}" fill="white"/>"#,
            WIDTH, HEIGHT
        ));
        chart.text(WIDTH / 2.0, MARGIN_TOP / 2.0 + 6.0, title, "middle", 16);
        chart.text(WIDTH / 2.0, HEIGHT - 12.0, x_label, "middle", 12);
        chart.push(format!(
            r#"<text x="16" y="{y}" transform="rotate(-90 16 {y})" text-anchor="middle" font-family="sans-serif" font-size="12">{}</text>"#,
            escape(y_label),
            y = HEIGHT / 2.0
        ));
        chart
    }

    /// Append one element on its own line.
    fn push(&mut self, element: String) {
        self.body.push_str(&element);
        self.body.push('\n');
    }

    /// Horizontal pixel span of the plot area.
    pub fn x_range() -> (f64, f64) {
        (MARGIN_LEFT, WIDTH - MARGIN_RIGHT)
    }

    /// Vertical pixel span of the plot area, bottom to top.
    pub fn y_range() -> (f64, f64) {
        (HEIGHT - MARGIN_BOTTOM, MARGIN_TOP)
    }

    /// Draw both axes and evenly spaced y ticks.
    pub fn axes(&mut self, y: &Scale) {
        let (x0, x1) = Self::x_range();
        let (y0, y1) = Self::y_range();
        self.line(x0, y0, x1, y0, "black", 1.0);
        self.line(x0, y0, x0, y1, "black", 1.0);

        let (lo, hi) = y.domain();
        for i in 0..=Y_TICKS {
            let value = lo + (hi - lo) * i as f64 / Y_TICKS as f64;
            let py = y.map(value);
            self.line(x0 - 4.0, py, x0, py, "black", 1.0);
            self.text(x0 - 8.0, py + 4.0, &tick_label(value), "end", 10);
        }
    }

    /// Label placed under the x axis.
    pub fn x_tick(&mut self, x: f64, label: &str) {
        let (y0, _) = Self::y_range();
        self.text(x, y0 + 16.0, label, "middle", 10);
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: &str) {
        self.push(format!(
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"/>"#,
            x,
            y,
            width.max(0.0),
            height.max(0.0),
            fill
        ));
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str) {
        self.push(format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}" fill-opacity="0.7"/>"#,
            cx, cy, r, fill
        ));
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, width: f64) {
        self.push(format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}"/>"#,
            x1, y1, x2, y2, stroke, width
        ));
    }

    pub fn text(&mut self, x: f64, y: f64, content: &str, anchor: &str, size: u32) {
        self.push(format!(
            r#"<text x="{:.2}" y="{:.2}" text-anchor="{}" font-family="sans-serif" font-size="{}">{}</text>"#,
            x,
            y,
            anchor,
            size,
            escape(content)
        ));
    }

    /// Close the document.
    pub fn finish(mut self) -> String {
        self.body.push_str("</svg>\n");
        self.body
    }
}

/// Compact axis label: `85k` for thousands, plain numbers otherwise.
pub fn tick_label(value: f64) -> String {
    if value.abs() >= 1000.0 {
        format!("{:.0}k", value / 1000.0)
    } else if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
