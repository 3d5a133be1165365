//! Bar chart configuration

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    merge_extra, sort_records, AxisBound, ConfigMerge, ConfigOverrides, DataValue, FontSettings,
    LegendPosition, Margin, Patch, Record, SeriesDescriptor, SeriesVisibility, SortAxis, TooltipSettings,
};

/// Chart-wide bar styling
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BarChartSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_gridlines: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gridline_color: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutlineType {
    #[default]
    Solid,
    Dashed,
}

/// One scoring type: a bar per record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarSeries {
    pub key: String,
    pub label: String,
    pub color: String,
    /// Stacked series share a single stack per category
    #[serde(default)]
    pub stacked: bool,
    /// Drawn above non-front series
    #[serde(default)]
    pub stack_in_front: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline_width: Option<f64>,
    #[serde(default)]
    pub outline_type: OutlineType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_color: Option<String>,
}

impl BarSeries {
    pub fn new(key: impl Into<String>, label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            color: color.into(),
            stacked: false,
            stack_in_front: false,
            outline_color: None,
            outline_width: None,
            outline_type: OutlineType::Solid,
            border_radius: None,
            label_color: None,
        }
    }

    pub fn stacked(mut self, in_front: bool) -> Self {
        self.stacked = true;
        self.stack_in_front = in_front;
        self
    }

    pub fn outline(mut self, color: impl Into<String>, width: f64, kind: OutlineType) -> Self {
        self.outline_color = Some(color.into());
        self.outline_width = Some(width);
        self.outline_type = kind;
        self
    }

    pub fn border_radius(mut self, radius: f64) -> Self {
        self.border_radius = Some(radius);
        self
    }

    pub fn label_color(mut self, color: impl Into<String>) -> Self {
        self.label_color = Some(color.into());
        self
    }
}

impl SeriesDescriptor for BarSeries {
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

/// Where value labels sit relative to their bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataLabelPosition {
    #[default]
    Top,
    Inside,
}

/// Vertical two-stop gradient used instead of a solid series color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientFill {
    pub start: String,
    pub end: String,
}

impl GradientFill {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Horizontal reference line at a fixed value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdLine {
    pub y: f64,
    #[serde(default)]
    pub label: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,
}

/// Labeled marker dot at a category / value position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Category value matched against the record's x field
    pub x: DataValue,
    pub y: f64,
    #[serde(default)]
    pub text: String,
    pub color: String,
}

// ============================================================================
// CONFIG
// ============================================================================

/// Fully-resolved bar chart configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChartConfig {
    pub data: Vec<Record>,
    pub scoring_types: Vec<BarSeries>,
    pub chart_settings: BarChartSettings,
    pub x_key: String,
    pub y_key: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub y_axis_min: AxisBound,
    pub y_axis_max: AxisBound,
    pub show_tooltip: bool,
    pub tooltip_settings: TooltipSettings,
    pub show_legend: bool,
    pub interactive_legend: bool,
    pub legend_position: LegendPosition,
    pub annotations: Vec<Annotation>,
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub show_data_labels: bool,
    pub data_label_position: DataLabelPosition,
    pub data_label_rotation: f64,
    pub gradient_fills: BTreeMap<String, GradientFill>,
    pub x_axis_label_rotation: f64,
    pub threshold_lines: Vec<ThresholdLine>,
    pub sort_data_by: SortAxis,
    pub width: f64,
    pub height: f64,
    pub title: String,
    pub font_settings: FontSettings,
    pub margin: Margin,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            scoring_types: Vec::new(),
            chart_settings: BarChartSettings {
                outline: Some(true),
                border_radius: Some(4.0),
                opacity: Some(1.0),
                outline_color: Some("#ffffff".into()),
                outline_width: Some(1.0),
                show_gridlines: Some(true),
                gridline_color: Some("#444444".into()),
            },
            x_key: "team".into(),
            y_key: "scores".into(),
            x_axis_label: "X-Axis".into(),
            y_axis_label: "Y-Axis".into(),
            y_axis_min: AxisBound::Auto,
            y_axis_max: AxisBound::Auto,
            show_tooltip: true,
            tooltip_settings: TooltipSettings::standard(),
            show_legend: true,
            interactive_legend: true,
            legend_position: LegendPosition::Top,
            annotations: Vec::new(),
            responsive: true,
            maintain_aspect_ratio: false,
            show_data_labels: true,
            data_label_position: DataLabelPosition::Top,
            data_label_rotation: 0.0,
            gradient_fills: BTreeMap::new(),
            x_axis_label_rotation: 0.0,
            threshold_lines: Vec::new(),
            sort_data_by: SortAxis::X,
            width: 800.0,
            height: 500.0,
            title: "Bar Graph".into(),
            font_settings: FontSettings {
                title_font_size: Some(24.0),
                axis_label_font_size: Some(18.0),
                axis_tick_font_size: Some(16.0),
                legend_font_size: Some(16.0),
                data_label_font_size: Some(18.0),
                tooltip_font_size: Some(16.0),
                threshold_font_size: Some(16.0),
                annotation_font_size: Some(16.0),
                label_font_size: None,
                default_label_color: Some("#ffffff".into()),
            },
            margin: Margin::uniform(20.0),
            extra: Map::new(),
        }
    }
}

impl BarChartConfig {
    /// Records in draw order
    pub fn sorted_data(&self) -> Vec<Record> {
        sort_records(&self.data, &self.x_key, &self.y_key, self.sort_data_by)
    }

    /// Initial visibility: every scoring type shown
    pub fn visibility(&self) -> SeriesVisibility {
        SeriesVisibility::from_series(&self.scoring_types, self.interactive_legend)
    }

    /// SVG id of the gradient for a series, if one is defined
    pub fn gradient_id(&self, key: &str) -> Option<String> {
        self.gradient_fills
            .contains_key(key)
            .then(|| format!("gradient-{}", key))
    }
}

/// Caller-supplied partial bar configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BarChartOverrides {
    pub data: Patch<Vec<Record>>,
    pub scoring_types: Patch<Vec<BarSeries>>,
    pub chart_settings: Patch<BarChartSettings>,
    pub x_key: Patch<String>,
    pub y_key: Patch<String>,
    pub x_axis_label: Patch<String>,
    pub y_axis_label: Patch<String>,
    pub y_axis_min: Patch<AxisBound>,
    pub y_axis_max: Patch<AxisBound>,
    pub show_tooltip: Patch<bool>,
    pub tooltip_settings: Patch<TooltipSettings>,
    pub show_legend: Patch<bool>,
    pub interactive_legend: Patch<bool>,
    pub legend_position: Patch<LegendPosition>,
    pub annotations: Patch<Vec<Annotation>>,
    pub responsive: Patch<bool>,
    pub maintain_aspect_ratio: Patch<bool>,
    pub show_data_labels: Patch<bool>,
    pub data_label_position: Patch<DataLabelPosition>,
    pub data_label_rotation: Patch<f64>,
    pub gradient_fills: Patch<BTreeMap<String, GradientFill>>,
    pub x_axis_label_rotation: Patch<f64>,
    pub threshold_lines: Patch<Vec<ThresholdLine>>,
    pub sort_data_by: Patch<SortAxis>,
    pub width: Patch<f64>,
    pub height: Patch<f64>,
    pub title: Patch<String>,
    pub font_settings: Patch<FontSettings>,
    pub margin: Patch<Margin>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ConfigOverrides for BarChartOverrides {
    const CHART: &'static str = "bar";

    fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

impl ConfigMerge for BarChartConfig {
    type Overrides = BarChartOverrides;

    fn merge(d: Self, o: BarChartOverrides) -> Self {
        Self {
            data: o.data.apply(d.data),
            scoring_types: o.scoring_types.apply(d.scoring_types),
            chart_settings: o.chart_settings.apply(d.chart_settings),
            x_key: o.x_key.apply(d.x_key),
            y_key: o.y_key.apply(d.y_key),
            x_axis_label: o.x_axis_label.apply(d.x_axis_label),
            y_axis_label: o.y_axis_label.apply(d.y_axis_label),
            y_axis_min: o.y_axis_min.apply(d.y_axis_min),
            y_axis_max: o.y_axis_max.apply(d.y_axis_max),
            show_tooltip: o.show_tooltip.apply(d.show_tooltip),
            tooltip_settings: o.tooltip_settings.apply(d.tooltip_settings),
            show_legend: o.show_legend.apply(d.show_legend),
            interactive_legend: o.interactive_legend.apply(d.interactive_legend),
            legend_position: o.legend_position.apply(d.legend_position),
            annotations: o.annotations.apply(d.annotations),
            responsive: o.responsive.apply(d.responsive),
            maintain_aspect_ratio: o.maintain_aspect_ratio.apply(d.maintain_aspect_ratio),
            show_data_labels: o.show_data_labels.apply(d.show_data_labels),
            data_label_position: o.data_label_position.apply(d.data_label_position),
            data_label_rotation: o.data_label_rotation.apply(d.data_label_rotation),
            gradient_fills: o.gradient_fills.apply(d.gradient_fills),
            x_axis_label_rotation: o.x_axis_label_rotation.apply(d.x_axis_label_rotation),
            threshold_lines: o.threshold_lines.apply(d.threshold_lines),
            sort_data_by: o.sort_data_by.apply(d.sort_data_by),
            width: o.width.apply(d.width),
            height: o.height.apply(d.height),
            title: o.title.apply(d.title),
            font_settings: o.font_settings.apply(d.font_settings),
            margin: o.margin.apply(d.margin),
            extra: merge_extra(d.extra, o.extra),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_overrides_keep_defaults() {
        let merged = BarChartConfig::from_overrides(BarChartOverrides::default());
        assert_eq!(merged, BarChartConfig::default());
    }

    #[test]
    fn test_top_level_override_applied() {
        let merged = BarChartConfig::from_overrides(BarChartOverrides {
            title: Patch::Set("Team Scores".into()),
            y_axis_max: Patch::Set(AxisBound::Value(300.0)),
            sort_data_by: Patch::Set(SortAxis::Y),
            ..Default::default()
        });
        assert_eq!(merged.title, "Team Scores");
        assert_eq!(merged.y_axis_max, AxisBound::Value(300.0));
        assert_eq!(merged.sort_data_by, SortAxis::Y);
        // untouched keys come from defaults
        assert_eq!(merged.x_key, "team");
        assert_eq!(merged.width, 800.0);
    }

    #[test]
    fn test_partial_chart_settings_lose_siblings() {
        let merged = BarChartConfig::from_overrides(BarChartOverrides {
            chart_settings: Patch::Set(BarChartSettings {
                show_gridlines: Some(true),
                gridline_color: Some("#444444".into()),
                ..Default::default()
            }),
            ..Default::default()
        });
        assert_eq!(merged.chart_settings.show_gridlines, Some(true));
        assert_eq!(merged.chart_settings.outline_color, None);
        assert_eq!(merged.chart_settings.border_radius, None);
        assert_eq!(merged.chart_settings.outline_width, None);
    }

    #[test]
    fn test_overrides_from_json_with_unknown_keys() {
        let overrides = BarChartOverrides::from_json_str(
            r##"{
                "xKey": "team",
                "yAxisMin": 0,
                "yAxisMax": "auto",
                "sortDataBy": "y",
                "dataLabelPosition": "inside",
                "fontSettings": {"titleFontSize": 30},
                "scoringTypes": [
                    {"key": "a", "label": "A", "color": "#fff", "outlineType": "dashed"}
                ],
                "somethingElse": {"nested": true}
            }"##,
        )
        .expect("valid overrides");

        assert_eq!(overrides.y_axis_min, Patch::Set(AxisBound::Value(0.0)));
        assert_eq!(overrides.y_axis_max, Patch::Set(AxisBound::Auto));
        assert_eq!(overrides.data_label_position, Patch::Set(DataLabelPosition::Inside));
        assert!(overrides.extra.contains_key("somethingElse"));

        let merged = BarChartConfig::from_overrides(overrides);
        assert_eq!(merged.font_settings.title_font_size, Some(30.0));
        assert_eq!(merged.font_settings.legend_font_size, None);
        assert_eq!(merged.scoring_types[0].outline_type, OutlineType::Dashed);
        assert!(merged.extra.contains_key("somethingElse"));
    }

    #[test]
    fn test_null_keys_replace_defaults() {
        let overrides =
            BarChartOverrides::from_json_str(r#"{"fontSettings": null, "title": null, "thresholdLines": null}"#)
                .expect("valid overrides");
        let merged = BarChartConfig::from_overrides(overrides);

        // present keys win even when null: the group is emptied, not inherited
        assert_eq!(merged.font_settings, FontSettings::default());
        assert_eq!(merged.font_settings.title_font_size, None);
        assert_eq!(merged.title, "");
        assert!(merged.threshold_lines.is_empty());
        // keys left out still come from defaults
        assert_eq!(merged.x_key, "team");
        assert_eq!(merged.chart_settings, BarChartConfig::default().chart_settings);
    }

    #[test]
    fn test_null_and_bool_cells_parse() {
        let overrides = BarChartOverrides::from_json_str(
            r#"{"data": [{"team": 1, "scoreTypeA": null}, {"team": 2, "scoreTypeA": true}]}"#,
        )
        .expect("odd cells do not reject the config");
        let merged = BarChartConfig::from_overrides(overrides);
        assert_eq!(merged.data.len(), 2);
        assert_eq!(merged.data[0].number("scoreTypeA"), None);
        assert_eq!(merged.data[1].number("scoreTypeA"), None);
    }

    #[test]
    fn test_gradient_id() {
        let mut config = BarChartConfig::default();
        config
            .gradient_fills
            .insert("a".into(), GradientFill::new("#000", "#fff"));
        assert_eq!(config.gradient_id("a").as_deref(), Some("gradient-a"));
        assert_eq!(config.gradient_id("b"), None);
    }
}
