//! Line chart configuration

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    merge_extra, AxisBound, ConfigMerge, ConfigOverrides, FontSettings, LegendPosition, Margin,
    Patch, Record, SeriesDescriptor, SeriesVisibility, TooltipSettings,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineChartSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_gridlines: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gridline_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
}

/// Interpolation between consecutive points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCurve {
    Step,
    Linear,
    Natural,
    #[default]
    Monotone,
}

/// One plotted line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSeries {
    pub key: String,
    pub label: String,
    pub color: String,
    #[serde(default)]
    pub show_dots: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dot_color: Option<String>,
    #[serde(default)]
    pub show_dot_labels: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dot_label_color: Option<String>,
    #[serde(default)]
    pub step: bool,
    #[serde(default)]
    pub linear: bool,
    #[serde(default)]
    pub smooth: bool,
    /// Fill the region between the line and the x axis
    #[serde(default)]
    pub fill_area: bool,
}

impl LineSeries {
    pub fn new(key: impl Into<String>, label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            color: color.into(),
            show_dots: false,
            dot_color: None,
            show_dot_labels: false,
            dot_label_color: None,
            step: false,
            linear: false,
            smooth: false,
            fill_area: false,
        }
    }

    pub fn dots(mut self, color: impl Into<String>, labels: bool) -> Self {
        self.show_dots = true;
        self.dot_color = Some(color.into());
        self.show_dot_labels = labels;
        self
    }

    pub fn curve(mut self, curve: LineCurve) -> Self {
        self.step = curve == LineCurve::Step;
        self.linear = curve == LineCurve::Linear;
        self.smooth = curve == LineCurve::Natural;
        self
    }

    pub fn area(mut self) -> Self {
        self.fill_area = true;
        self
    }

    /// Interpolation picked from the flags: step, then linear, then smooth
    pub fn interpolation(&self) -> LineCurve {
        if self.step {
            LineCurve::Step
        } else if self.linear {
            LineCurve::Linear
        } else if self.smooth {
            LineCurve::Natural
        } else {
            LineCurve::Monotone
        }
    }
}

impl SeriesDescriptor for LineSeries {
    fn key(&self) -> &str {
        &self.key
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn color(&self) -> &str {
        &self.color
    }
}

// ============================================================================
// CONFIG
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineChartConfig {
    pub data: Vec<Record>,
    pub lines: Vec<LineSeries>,
    pub chart_settings: LineChartSettings,
    pub x_key: String,
    pub y_axis_label: String,
    pub x_axis_label: String,
    pub y_axis_min: AxisBound,
    pub y_axis_max: AxisBound,
    pub show_tooltip: bool,
    pub tooltip_settings: TooltipSettings,
    pub show_legend: bool,
    pub interactive_legend: bool,
    pub legend_position: LegendPosition,
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub width: f64,
    pub height: f64,
    pub title: String,
    pub font_settings: FontSettings,
    pub margin: Margin,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            lines: Vec::new(),
            chart_settings: LineChartSettings {
                show_gridlines: Some(true),
                gridline_color: Some("#444444".into()),
                stroke_width: Some(2.0),
            },
            x_key: "x".into(),
            y_axis_label: "Y-Axis".into(),
            x_axis_label: "X-Axis".into(),
            y_axis_min: AxisBound::Auto,
            y_axis_max: AxisBound::Auto,
            show_tooltip: true,
            tooltip_settings: TooltipSettings::standard(),
            show_legend: true,
            interactive_legend: true,
            legend_position: LegendPosition::Top,
            responsive: true,
            maintain_aspect_ratio: false,
            width: 800.0,
            height: 500.0,
            title: "Line Chart".into(),
            font_settings: FontSettings {
                title_font_size: Some(24.0),
                axis_label_font_size: Some(18.0),
                axis_tick_font_size: Some(16.0),
                legend_font_size: Some(16.0),
                tooltip_font_size: Some(16.0),
                default_label_color: Some("#ffffff".into()),
                data_label_font_size: Some(14.0),
                ..Default::default()
            },
            margin: Margin::uniform(20.0),
            extra: Map::new(),
        }
    }
}

impl LineChartConfig {
    pub fn visibility(&self) -> SeriesVisibility {
        SeriesVisibility::from_series(&self.lines, self.interactive_legend)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineChartOverrides {
    pub data: Patch<Vec<Record>>,
    pub lines: Patch<Vec<LineSeries>>,
    pub chart_settings: Patch<LineChartSettings>,
    pub x_key: Patch<String>,
    pub y_axis_label: Patch<String>,
    pub x_axis_label: Patch<String>,
    pub y_axis_min: Patch<AxisBound>,
    pub y_axis_max: Patch<AxisBound>,
    pub show_tooltip: Patch<bool>,
    pub tooltip_settings: Patch<TooltipSettings>,
    pub show_legend: Patch<bool>,
    pub interactive_legend: Patch<bool>,
    pub legend_position: Patch<LegendPosition>,
    pub responsive: Patch<bool>,
    pub maintain_aspect_ratio: Patch<bool>,
    pub width: Patch<f64>,
    pub height: Patch<f64>,
    pub title: Patch<String>,
    pub font_settings: Patch<FontSettings>,
    pub margin: Patch<Margin>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ConfigOverrides for LineChartOverrides {
    const CHART: &'static str = "line";

    fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

impl ConfigMerge for LineChartConfig {
    type Overrides = LineChartOverrides;

    fn merge(d: Self, o: LineChartOverrides) -> Self {
        Self {
            data: o.data.apply(d.data),
            lines: o.lines.apply(d.lines),
            chart_settings: o.chart_settings.apply(d.chart_settings),
            x_key: o.x_key.apply(d.x_key),
            y_axis_label: o.y_axis_label.apply(d.y_axis_label),
            x_axis_label: o.x_axis_label.apply(d.x_axis_label),
            y_axis_min: o.y_axis_min.apply(d.y_axis_min),
            y_axis_max: o.y_axis_max.apply(d.y_axis_max),
            show_tooltip: o.show_tooltip.apply(d.show_tooltip),
            tooltip_settings: o.tooltip_settings.apply(d.tooltip_settings),
            show_legend: o.show_legend.apply(d.show_legend),
            interactive_legend: o.interactive_legend.apply(d.interactive_legend),
            legend_position: o.legend_position.apply(d.legend_position),
            responsive: o.responsive.apply(d.responsive),
            maintain_aspect_ratio: o.maintain_aspect_ratio.apply(d.maintain_aspect_ratio),
            width: o.width.apply(d.width),
            height: o.height.apply(d.height),
            title: o.title.apply(d.title),
            font_settings: o.font_settings.apply(d.font_settings),
            margin: o.margin.apply(d.margin),
            extra: merge_extra(d.extra, o.extra),
        }
    }
}
