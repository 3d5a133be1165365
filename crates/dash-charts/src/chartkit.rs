//! # chartkit
//!
//! Core chart primitives: scales, path generators, polar geometry, formatters.
//! Implements Strategy pattern for flexible scale and curve behaviors.

use std::f64::consts::PI;
use std::fmt::Write;

// ============================================================================
// STRATEGY PATTERN: Scale Trait
// ============================================================================

/// Strategy trait for scales (maps domain values to range values)
pub trait Scale: Send + Sync {
    /// Scale a value from domain to range
    fn scale(&self, value: f64) -> f64;
}

// ============================================================================
// LINEAR SCALE
// ============================================================================

/// Linear scale (D3-style continuous scale)
#[derive(Debug, Clone)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new() -> Self {
        Self {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
        }
    }

    pub fn domain(mut self, min: f64, max: f64) -> Self {
        self.domain = (min, max);
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = (min, max);
        self
    }

    /// Ticks on round numbers (1, 2, 5 times a power of ten)
    pub fn nice_ticks(&self, count: usize) -> Vec<f64> {
        let (min, max) = self.domain;
        let span = max - min;

        if span <= 0.0 || count == 0 || !span.is_finite() {
            return vec![min];
        }

        let step = nice_step(span / count as f64);
        let first = (min / step).ceil() * step;

        let mut ticks = Vec::new();
        let mut i = 0;
        loop {
            let tick = first + step * i as f64;
            if tick > max + step * 1e-9 {
                break;
            }
            // snap float noise like 0.30000000000000004, and -0 to 0
            ticks.push((tick / step).round() * step + 0.0);
            i += 1;
        }
        ticks
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        Self::new()
    }
}

impl Scale for LinearScale {
    fn scale(&self, value: f64) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;

        if (d_max - d_min).abs() < f64::EPSILON {
            return (r_min + r_max) / 2.0;
        }

        let normalized = (value - d_min) / (d_max - d_min);
        r_min + normalized * (r_max - r_min)
    }
}

fn nice_step(rough: f64) -> f64 {
    let magnitude = 10.0_f64.powf(rough.log10().floor());
    let residual = rough / magnitude;

    if residual <= 1.0 {
        magnitude
    } else if residual <= 2.0 {
        2.0 * magnitude
    } else if residual <= 5.0 {
        5.0 * magnitude
    } else {
        10.0 * magnitude
    }
}

/// Value-axis domain from data, widened to round numbers.
///
/// The domain always includes zero.
pub fn auto_domain(values: impl IntoIterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if min > max {
        return (0.0, 1.0);
    }

    let (min, max) = (min.min(0.0), max.max(0.0));
    if max <= min {
        return (min, min + 1.0);
    }

    let step = nice_step((max - min) / 5.0);
    ((min / step).floor() * step, (max / step).ceil() * step)
}

// ============================================================================
// BAND SCALE (categorical x positions for bars)
// ============================================================================

/// Band scale for categorical data
#[derive(Debug, Clone)]
pub struct BandScale {
    domain_count: usize,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
}

impl BandScale {
    pub fn new(count: usize) -> Self {
        Self {
            domain_count: count,
            range: (0.0, 1.0),
            padding_inner: 0.1,
            padding_outer: 0.1,
        }
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = (min, max);
        self
    }

    pub fn padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.clamp(0.0, 1.0);
        self.padding_outer = outer.clamp(0.0, 1.0);
        self
    }

    /// Step size (band + gap)
    pub fn step(&self) -> f64 {
        if self.domain_count == 0 {
            return 0.0;
        }

        let (r_min, r_max) = self.range;
        let n = self.domain_count as f64;
        (r_max - r_min) / (n - self.padding_inner + self.padding_outer * 2.0).max(1.0)
    }

    /// Width of each band
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding_inner)
    }

    /// Left edge of the band at `index`
    pub fn scale(&self, index: usize) -> f64 {
        if self.domain_count == 0 {
            return self.range.0;
        }

        let step = self.step();
        self.range.0 + self.padding_outer * step + index as f64 * step
    }
}

// ============================================================================
// POINT SCALE (categorical x positions for lines)
// ============================================================================

/// Evenly spaced points across the range, first and last on the edges
#[derive(Debug, Clone)]
pub struct PointScale {
    domain_count: usize,
    range: (f64, f64),
}

impl PointScale {
    pub fn new(count: usize) -> Self {
        Self {
            domain_count: count,
            range: (0.0, 1.0),
        }
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = (min, max);
        self
    }

    pub fn step(&self) -> f64 {
        if self.domain_count < 2 {
            return 0.0;
        }
        (self.range.1 - self.range.0) / (self.domain_count - 1) as f64
    }

    pub fn scale(&self, index: usize) -> f64 {
        if self.domain_count < 2 {
            return (self.range.0 + self.range.1) / 2.0;
        }
        self.range.0 + index as f64 * self.step()
    }
}

// ============================================================================
// STRATEGY PATTERN: Path Generator Trait
// ============================================================================

/// Strategy trait for path generation
pub trait PathGenerator: Send + Sync {
    fn generate(&self, points: &[(f64, f64)]) -> String;
}

/// Straight segments between points
#[derive(Debug, Clone, Default)]
pub struct LinePath;

impl PathGenerator for LinePath {
    fn generate(&self, points: &[(f64, f64)]) -> String {
        let Some((&(x, y), rest)) = points.split_first() else {
            return String::new();
        };

        let mut builder = PathBuilder::new().move_to(x, y);
        for &(x, y) in rest {
            builder = builder.line_to(x, y);
        }
        builder.build()
    }
}

/// Step path with the vertical jump halfway between points
#[derive(Debug, Clone, Default)]
pub struct StepPath;

impl PathGenerator for StepPath {
    fn generate(&self, points: &[(f64, f64)]) -> String {
        let Some(&(x, y)) = points.first() else {
            return String::new();
        };

        let mut builder = PathBuilder::new().move_to(x, y);

        for pair in points.windows(2) {
            let (x0, _) = pair[0];
            let (x1, y1) = pair[1];

            builder = builder
                .horizontal_to((x0 + x1) / 2.0)
                .vertical_to(y1)
                .horizontal_to(x1);
        }

        builder.build()
    }
}

/// Monotone cubic interpolation in x (never overshoots the data)
#[derive(Debug, Clone, Default)]
pub struct MonotonePath;

impl MonotonePath {
    fn tangents(points: &[(f64, f64)]) -> Vec<f64> {
        let n = points.len();
        let slopes: Vec<f64> = points
            .windows(2)
            .map(|p| {
                let h = p[1].0 - p[0].0;
                if h == 0.0 { 0.0 } else { (p[1].1 - p[0].1) / h }
            })
            .collect();

        let mut tangents = vec![0.0; n];
        tangents[0] = slopes[0];
        tangents[n - 1] = slopes[n - 2];

        for i in 1..n - 1 {
            let (s0, s1) = (slopes[i - 1], slopes[i]);
            if s0 * s1 <= 0.0 {
                continue;
            }
            let h0 = points[i].0 - points[i - 1].0;
            let h1 = points[i + 1].0 - points[i].0;
            let p = (s0 * h1 + s1 * h0) / (h0 + h1);
            tangents[i] = s0.signum() * s0.abs().min(s1.abs()).min(0.5 * p.abs()) * 2.0;
        }

        tangents
    }
}

impl PathGenerator for MonotonePath {
    fn generate(&self, points: &[(f64, f64)]) -> String {
        if points.len() < 3 {
            return LinePath.generate(points);
        }

        let tangents = Self::tangents(points);
        let (x, y) = points[0];
        let mut builder = PathBuilder::new().move_to(x, y);

        for i in 0..points.len() - 1 {
            let (x0, y0) = points[i];
            let (x1, y1) = points[i + 1];
            let dx = (x1 - x0) / 3.0;
            builder = builder.cubic_to(
                x0 + dx,
                y0 + dx * tangents[i],
                x1 - dx,
                y1 - dx * tangents[i + 1],
                x1,
                y1,
            );
        }

        builder.build()
    }
}

/// Natural cubic spline through every point
#[derive(Debug, Clone, Default)]
pub struct NaturalPath;

impl NaturalPath {
    /// First and second Bézier control coordinates per segment
    fn control_points(coords: &[f64]) -> (Vec<f64>, Vec<f64>) {
        let n = coords.len() - 1;
        let mut a = vec![0.0; n];
        let mut b = vec![0.0; n];
        let mut r = vec![0.0; n];

        b[0] = 2.0;
        r[0] = coords[0] + 2.0 * coords[1];
        for i in 1..n - 1 {
            a[i] = 1.0;
            b[i] = 4.0;
            r[i] = 4.0 * coords[i] + 2.0 * coords[i + 1];
        }
        a[n - 1] = 2.0;
        b[n - 1] = 7.0;
        r[n - 1] = 8.0 * coords[n - 1] + coords[n];

        for i in 1..n {
            let m = a[i] / b[i - 1];
            b[i] -= m;
            r[i] -= m * r[i - 1];
        }

        a[n - 1] = r[n - 1] / b[n - 1];
        for i in (0..n - 1).rev() {
            a[i] = (r[i] - a[i + 1]) / b[i];
        }

        b[n - 1] = (coords[n] + a[n - 1]) / 2.0;
        for i in 0..n - 1 {
            b[i] = 2.0 * coords[i + 1] - a[i + 1];
        }

        (a, b)
    }
}

impl PathGenerator for NaturalPath {
    fn generate(&self, points: &[(f64, f64)]) -> String {
        if points.len() < 3 {
            return LinePath.generate(points);
        }

        let xs: Vec<f64> = points.iter().map(|p| p.0).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.1).collect();
        let (ax, bx) = Self::control_points(&xs);
        let (ay, by) = Self::control_points(&ys);

        let mut builder = PathBuilder::new().move_to(xs[0], ys[0]);
        for i in 0..points.len() - 1 {
            builder = builder.cubic_to(ax[i], ay[i], bx[i], by[i], xs[i + 1], ys[i + 1]);
        }
        builder.build()
    }
}

// ============================================================================
// PATH BUILDER (fluent API)
// ============================================================================

/// SVG path builder with fluent API
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    commands: String,
}

// Writing into a String cannot fail, so the fmt::Result is dropped.
impl PathBuilder {
    pub fn new() -> Self {
        Self {
            commands: String::with_capacity(256),
        }
    }

    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        let _ = write!(self.commands, "M{:.2},{:.2}", x, y);
        self
    }

    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        let _ = write!(self.commands, "L{:.2},{:.2}", x, y);
        self
    }

    pub fn horizontal_to(mut self, x: f64) -> Self {
        let _ = write!(self.commands, "H{:.2}", x);
        self
    }

    pub fn vertical_to(mut self, y: f64) -> Self {
        let _ = write!(self.commands, "V{:.2}", y);
        self
    }

    pub fn cubic_to(mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> Self {
        let _ = write!(
            self.commands,
            "C{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
            x1, y1, x2, y2, x, y
        );
        self
    }

    #[allow(clippy::too_many_arguments)]
    pub fn arc_to(
        mut self,
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> Self {
        let _ = write!(
            self.commands,
            "A{:.2},{:.2},{:.2},{},{},{:.2},{:.2}",
            rx, ry, rotation, large_arc as u8, sweep as u8, x, y
        );
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push('Z');
        self
    }

    pub fn build(self) -> String {
        self.commands
    }
}

// ============================================================================
// AREA PATH GENERATOR
// ============================================================================

/// Close a generated line down to a horizontal baseline
pub fn area_path<G: PathGenerator + ?Sized>(
    generator: &G,
    points: &[(f64, f64)],
    baseline_y: f64,
) -> String {
    let (Some(&(first_x, _)), Some(&(last_x, _))) = (points.first(), points.last()) else {
        return String::new();
    };

    let mut path = generator.generate(points);
    let _ = write!(path, "L{:.2},{:.2}L{:.2},{:.2}Z", last_x, baseline_y, first_x, baseline_y);
    path
}

/// Generate line path (non-closed)
pub fn line_path(points: &[(f64, f64)]) -> String {
    LinePath.generate(points)
}

// ============================================================================
// POLAR GEOMETRY
// ============================================================================

/// Point at `angle` degrees (counter-clockwise from 3 o'clock) on a circle
pub fn polar_point(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    let rad = -angle * PI / 180.0;
    (cx + radius * rad.cos(), cy + radius * rad.sin())
}

/// Closed straight-edged polygon through the points
pub fn polygon_path(points: &[(f64, f64)]) -> String {
    if points.is_empty() {
        return String::new();
    }
    let mut path = line_path(points);
    path.push('Z');
    path
}

/// Annular sector between two angles (degrees). `inner == 0` gives a wedge.
pub fn arc_path(cx: f64, cy: f64, outer: f64, inner: f64, start: f64, end: f64) -> String {
    let sweep = (end - start).clamp(-360.0, 360.0);
    if sweep == 0.0 || outer <= 0.0 {
        return String::new();
    }

    // SVG cannot draw a single arc whose endpoints coincide
    if sweep.abs() >= 360.0 {
        let mid = start + sweep / 2.0;
        let first = arc_path(cx, cy, outer, inner, start, mid);
        let second = arc_path(cx, cy, outer, inner, mid, start + sweep);
        return first + &second;
    }

    let large = sweep.abs() > 180.0;
    // angles grow counter-clockwise, which is SVG's negative sweep direction
    let outward = sweep < 0.0;

    let (ox0, oy0) = polar_point(cx, cy, outer, start);
    let (ox1, oy1) = polar_point(cx, cy, outer, start + sweep);

    let builder = PathBuilder::new()
        .move_to(ox0, oy0)
        .arc_to(outer, outer, 0.0, large, outward, ox1, oy1);

    let builder = if inner > 0.0 {
        let (ix1, iy1) = polar_point(cx, cy, inner, start + sweep);
        let (ix0, iy0) = polar_point(cx, cy, inner, start);
        builder
            .line_to(ix1, iy1)
            .arc_to(inner, inner, 0.0, large, !outward, ix0, iy0)
    } else {
        builder.line_to(cx, cy)
    };

    builder.close().build()
}

// ============================================================================
// FORMATTERS
// ============================================================================

/// Axis tick text: integers without decimals, else up to two places
pub fn format_tick(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{:.0}", value)
    } else {
        let text = format!("{:.2}", value);
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Pixel value of a CSS length like `"14px"`; bare numbers are pixels too
pub fn parse_css_px(length: &str) -> Option<f64> {
    let trimmed = length.trim();
    trimmed
        .strip_suffix("px")
        .unwrap_or(trimmed)
        .trim()
        .parse()
        .ok()
}

// ============================================================================
// TESTS
// ============================================================================
