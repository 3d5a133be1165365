//! Pie / doughnut chart configuration

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    colors, merge_extra, ConfigMerge, ConfigOverrides, FontSettings, LegendPosition, Patch, Record,
    SeriesDescriptor, SeriesVisibility, TooltipSettings,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PieChartSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline_width: Option<f64>,
    /// Non-zero turns the pie into a doughnut
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner_radius: Option<f64>,
}

/// One wedge, derived from a data record
#[derive(Debug, Clone, PartialEq)]
pub struct PieSegment {
    /// Visibility key, unique per record even when names repeat
    pub key: String,
    pub name: String,
    /// `None` when the record has no numeric value field
    pub value: Option<f64>,
    pub color: String,
}

impl SeriesDescriptor for PieSegment {
    fn key(&self) -> &str {
        &self.key
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn color(&self) -> &str {
        &self.color
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieChartConfig {
    pub data: Vec<Record>,
    pub data_key: String,
    pub name_key: String,
    pub chart_settings: PieChartSettings,
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
    pub colors: Vec<String>,
    pub show_labels: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for PieChartConfig {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            data_key: "value".into(),
            name_key: "name".into(),
            chart_settings: PieChartSettings {
                outline: Some(true),
                outline_color: Some("#ffffff".into()),
                outline_width: Some(1.0),
                inner_radius: Some(0.0),
            },
            show_tooltip: true,
            tooltip_settings: TooltipSettings::standard(),
            show_legend: true,
            interactive_legend: true,
            legend_position: LegendPosition::Right,
            responsive: true,
            maintain_aspect_ratio: false,
            width: 800.0,
            height: 500.0,
            title: "Pie Chart".into(),
            font_settings: FontSettings {
                title_font_size: Some(24.0),
                legend_font_size: Some(16.0),
                tooltip_font_size: Some(16.0),
                default_label_color: Some("#ffffff".into()),
                ..Default::default()
            },
            colors: colors::PIE_PALETTE.iter().map(|c| c.to_string()).collect(),
            show_labels: true,
            extra: Map::new(),
        }
    }
}

impl PieChartConfig {
    /// Palette color for the segment at `index`, cycling
    pub fn segment_color(&self, index: usize) -> String {
        if self.colors.is_empty() {
            let palette = colors::PIE_PALETTE;
            return palette[index % palette.len()].to_string();
        }
        self.colors[index % self.colors.len()].clone()
    }

    /// Visibility key of the segment built from record `index`
    pub fn segment_key(index: usize) -> String {
        format!("segment-{}", index)
    }

    /// One segment per record, in data order
    pub fn segments(&self) -> Vec<PieSegment> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, record)| PieSegment {
                key: Self::segment_key(i),
                name: record
                    .label(&self.name_key)
                    .unwrap_or_else(|| format!("Segment {}", i + 1)),
                value: record.number(&self.data_key),
                color: self.segment_color(i),
            })
            .collect()
    }

    pub fn visibility(&self) -> SeriesVisibility {
        SeriesVisibility::from_series(&self.segments(), self.interactive_legend)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PieChartOverrides {
    pub data: Patch<Vec<Record>>,
    pub data_key: Patch<String>,
    pub name_key: Patch<String>,
    pub chart_settings: Patch<PieChartSettings>,
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
    pub colors: Patch<Vec<String>>,
    pub show_labels: Patch<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ConfigOverrides for PieChartOverrides {
    const CHART: &'static str = "pie";

    fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

impl ConfigMerge for PieChartConfig {
    type Overrides = PieChartOverrides;

    fn merge(d: Self, o: PieChartOverrides) -> Self {
        Self {
            data: o.data.apply(d.data),
            data_key: o.data_key.apply(d.data_key),
            name_key: o.name_key.apply(d.name_key),
            chart_settings: o.chart_settings.apply(d.chart_settings),
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
            colors: o.colors.apply(d.colors),
            show_labels: o.show_labels.apply(d.show_labels),
            extra: merge_extra(d.extra, o.extra),
        }
    }
}
