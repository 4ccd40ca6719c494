//! Inline SVG sparklines.
//!
//! Output depends only on the inputs, so identical data renders to identical
//! markup.

use super::html::html_escape;

const PADDING: f64 = 4.0;
const STROKE_WIDTH: &str = "1.5";
const DASH_PATTERN: &str = "3,2";

pub const VIEWS_COLOR: &str = "#c95d2e";
pub const CLONES_COLOR: &str = "#d4a03c";
pub const STARS_COLOR: &str = "#e8b923";
pub const FORKS_COLOR: &str = "#8b5a2b";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sparkline {
    pub width: u32,
    pub height: u32,
    pub primary_color: String,
    pub secondary_color: String,
    /// Scale to the observed band instead of from zero.
    pub cumulative: bool,
}

impl Default for Sparkline {
    fn default() -> Self {
        Self {
            width: 120,
            height: 32,
            primary_color: VIEWS_COLOR.to_string(),
            secondary_color: CLONES_COLOR.to_string(),
            cumulative: false,
        }
    }
}

impl Sparkline {
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn colors(mut self, primary: &str, secondary: &str) -> Self {
        self.primary_color = primary.to_string();
        self.secondary_color = secondary.to_string();
        self
    }

    pub fn cumulative(mut self, cumulative: bool) -> Self {
        self.cumulative = cumulative;
        self
    }

    /// Draws `primary` solid and `secondary` (if any) dashed on a shared scale.
    pub fn render(&self, primary: &[i64], secondary: Option<&[i64]>) -> String {
        let secondary = secondary.unwrap_or_default();
        let (width, height) = (self.width, self.height);

        if primary.is_empty() && secondary.is_empty() {
            return format!(
                r##"<svg viewBox="0 0 {width} {height}" class="sparkline"><text x="{x}" y="{y}" text-anchor="middle" fill="#999" font-size="10">no data</text></svg>"##,
                x = width / 2,
                y = height / 2 + 4,
            );
        }

        let values = primary.iter().chain(secondary).copied();
        let (min, max) = values.fold((i64::MAX, i64::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)));

        if max == 0 {
            return format!(
                r##"<svg viewBox="0 0 {width} {height}" class="sparkline"><line x1="0" y1="{y}" x2="{width}" y2="{y}" stroke="#ddd" stroke-width="1"/></svg>"##,
                y = f64::from(height) - PADDING,
            );
        }

        let baseline = if self.cumulative { min } else { 0 };
        let scale = Scale {
            width: f64::from(width),
            height: f64::from(height),
            min: baseline,
            range: if max == baseline { 1 } else { max - baseline },
        };

        let mut svg = format!(r#"<svg viewBox="0 0 {width} {height}" class="sparkline">"#);
        if !primary.is_empty() {
            push_series(&mut svg, &scale, primary, &self.primary_color, None);
        }
        if !secondary.is_empty() {
            push_series(&mut svg, &scale, secondary, &self.secondary_color, Some(DASH_PATTERN));
        }
        svg.push_str("</svg>");
        svg
    }
}

struct Scale {
    width: f64,
    height: f64,
    min: i64,
    range: i64,
}

impl Scale {
    #[allow(clippy::cast_precision_loss)]
    fn point(&self, index: usize, len: usize, value: i64) -> (f64, f64) {
        let step = self.width / len.saturating_sub(1).max(1) as f64;
        let x = index as f64 * step;
        let fraction = (value - self.min) as f64 / self.range as f64;
        let y = self.height - PADDING - fraction * (self.height - 2.0 * PADDING);
        (x, y)
    }
}

fn push_series(svg: &mut String, scale: &Scale, series: &[i64], color: &str, dash: Option<&str>) {
    let color = html_escape(color);

    if let [only] = series {
        let (x, y) = scale.point(0, 1, *only);
        svg.push_str(&format!(
            r#"<circle cx="{x:.1}" cy="{y:.1}" r="1.5" fill="{color}"/>"#
        ));
        return;
    }

    let points = series
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let (x, y) = scale.point(i, series.len(), v);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ");

    let dash = dash
        .map(|pattern| format!(r#" stroke-dasharray="{pattern}""#))
        .unwrap_or_default();

    svg.push_str(&format!(
        r#"<polyline points="{points}" fill="none" stroke="{color}" stroke-width="{STROKE_WIDTH}"{dash} stroke-linecap="round" stroke-linejoin="round"/>"#
    ));
}
