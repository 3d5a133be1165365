//! # dash-charts
//!
//! SVG chart components built with Leptos.
//! Each chart merges the page's overrides over its defaults, keeps its own
//! series visibility in a [`dash_state::ChartState`], and draws from pure
//! layout functions that can be tested without a DOM.
//!
//! ## Architecture
//!
//! Uses Strategy pattern for:
//! - Scale computation (linear, band, point)
//! - Path generation (line, step, monotone, natural)
//!
//! ## Modules
//!
//! - `chartkit` - Core primitives: scales, paths, polar geometry
//! - `guides` - Title, legend, tooltip, grid and axes shared by every chart
//! - `bar` - Stacked / grouped bar chart
//! - `line` - Line and area chart
//! - `pie` - Pie and doughnut chart
//! - `radar` - Radar (spider) chart

pub mod bar;
pub mod chartkit;
pub mod guides;
pub mod line;
pub mod pie;
pub mod radar;

pub use bar::*;
pub use chartkit::*;
pub use guides::*;
pub use line::*;
pub use pie::*;
pub use radar::*;

// Re-export colors from dash-core for convenience
pub use dash_core::colors;

use dash_core::Margin;

/// Primitive values used when a settings group was replaced by an override
/// that left the sub-field out
pub mod fallback {
    pub const FONT_SIZE: f64 = 14.0;
    pub const TITLE_FONT_SIZE: f64 = 24.0;
    pub const MARGIN: f64 = 5.0;
    pub const STROKE_WIDTH: f64 = 1.0;
    pub const BORDER_RADIUS: f64 = 0.0;
    pub const LABEL_COLOR: &str = crate::colors::WHITE;
}

/// Chart margin configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl ChartMargin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    pub const fn uniform(margin: f64) -> Self {
        Self::new(margin, margin, margin, margin)
    }

    /// Margin from a config group; missing sides use [`fallback::MARGIN`]
    pub fn from_settings(margin: &Margin) -> Self {
        let side = |v: Option<f64>| v.unwrap_or(fallback::MARGIN);
        Self::new(
            side(margin.top),
            side(margin.right),
            side(margin.bottom),
            side(margin.left),
        )
    }

    /// Extra room on the left and bottom for axis ticks and labels
    pub fn with_axes(self, left: f64, bottom: f64) -> Self {
        Self::new(self.top, self.right, self.bottom + bottom, self.left + left)
    }
}

impl Default for ChartMargin {
    fn default() -> Self {
        Self::uniform(fallback::MARGIN)
    }
}

/// Chart dimensions with margin handling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartDimensions {
    pub width: f64,
    pub height: f64,
    pub margin: ChartMargin,
}

impl ChartDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: ChartMargin::default(),
        }
    }

    /// Viewport of `width` whose height follows the aspect ratio
    pub fn with_aspect(width: f64, aspect: f64) -> Self {
        Self::new(width, width / aspect)
    }

    pub fn with_margin(mut self, margin: ChartMargin) -> Self {
        self.margin = margin;
        self
    }

    /// Inner width (excluding margins)
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    /// Inner height (excluding margins)
    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }

    /// SVG transform for inner chart area
    pub fn inner_transform(&self) -> String {
        format!("translate({}, {})", self.margin.left, self.margin.top)
    }

    /// ViewBox string for SVG
    pub fn viewbox(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

impl Default for ChartDimensions {
    fn default() -> Self {
        Self::new(800.0, 500.0)
    }
}

/// Width to height ratio of the drawing area
pub fn aspect_ratio(maintain_aspect_ratio: bool) -> f64 {
    if maintain_aspect_ratio { 2.0 } else { 1.0 }
}

/// Inline style of a chart's outer box
pub fn container_style(responsive: bool, width: f64, height: f64) -> String {
    if responsive {
        "width: 100%; height: 100%;".to_string()
    } else {
        format!("width: {}px; height: {}px;", width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_from_partial_settings() {
        let margin = ChartMargin::from_settings(&Margin {
            top: Some(20.0),
            ..Default::default()
        });
        assert_eq!(margin, ChartMargin::new(20.0, 5.0, 5.0, 5.0));
        assert_eq!(
            margin.with_axes(60.0, 30.0),
            ChartMargin::new(20.0, 5.0, 35.0, 65.0)
        );
    }

    #[test]
    fn test_dimensions() {
        let dims = ChartDimensions::with_aspect(800.0, 2.0).with_margin(ChartMargin::uniform(20.0));
        assert_eq!(dims.height, 400.0);
        assert_eq!(dims.inner_width(), 760.0);
        assert_eq!(dims.inner_height(), 360.0);
        assert_eq!(dims.inner_transform(), "translate(20, 20)");
        assert_eq!(dims.viewbox(), "0 0 800 400");
    }

    #[test]
    fn test_container_sizing() {
        assert_eq!(container_style(true, 800.0, 500.0), "width: 100%; height: 100%;");
        assert_eq!(container_style(false, 800.0, 500.0), "width: 800px; height: 500px;");
        assert_eq!(aspect_ratio(true), 2.0);
        assert_eq!(aspect_ratio(false), 1.0);
    }
}
