//! Radar chart configuration

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    merge_extra, ConfigMerge, ConfigOverrides, FontSettings, LegendPosition, Patch, Record,
    SeriesDescriptor, SeriesVisibility, TooltipSettings,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RadarSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    /// Draw vertex dots; also turns on the translucent polygon fill
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dot: Option<bool>,
}

/// Shape of the concentric polar grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridType {
    #[default]
    Polygon,
    Circle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarSeries {
    pub key: String,
    pub label: String,
    pub color: String,
}

impl RadarSeries {
    pub fn new(key: impl Into<String>, label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            color: color.into(),
        }
    }
}

impl SeriesDescriptor for RadarSeries {
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarChartConfig {
    pub data: Vec<Record>,
    pub radars: Vec<RadarSeries>,
    pub radar_settings: RadarSettings,
    pub angle_key: String,
    pub radius_key: String,
    pub show_radius_axis: bool,
    pub custom_labels: BTreeMap<String, String>,
    pub show_grid: bool,
    pub grid_type: GridType,
    pub fill_grid: bool,
    pub show_legend: bool,
    pub interactive_legend: bool,
    pub legend_position: LegendPosition,
    pub show_tooltip: bool,
    pub tooltip_settings: TooltipSettings,
    pub responsive: bool,
    pub width: f64,
    pub height: f64,
    pub title: String,
    pub font_settings: FontSettings,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for RadarChartConfig {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            radars: Vec::new(),
            radar_settings: RadarSettings {
                stroke_width: Some(2.0),
                dot: Some(true),
            },
            angle_key: "subject".into(),
            radius_key: "value".into(),
            show_radius_axis: true,
            custom_labels: BTreeMap::new(),
            show_grid: true,
            grid_type: GridType::Polygon,
            fill_grid: false,
            show_legend: true,
            interactive_legend: true,
            legend_position: LegendPosition::Bottom,
            show_tooltip: true,
            tooltip_settings: TooltipSettings {
                border_radius: Some("8px".into()),
                font_size: None,
                ..TooltipSettings::standard()
            },
            responsive: true,
            width: 800.0,
            height: 500.0,
            title: "Radar Chart".into(),
            font_settings: FontSettings {
                title_font_size: Some(24.0),
                label_font_size: Some(16.0),
                legend_font_size: Some(16.0),
                default_label_color: Some("#ffffff".into()),
                ..Default::default()
            },
            extra: Map::new(),
        }
    }
}

impl RadarChartConfig {
    pub fn visibility(&self) -> SeriesVisibility {
        SeriesVisibility::from_series(&self.radars, self.interactive_legend)
    }

    /// Text shown for an angle-axis tick; custom label when one is mapped
    pub fn angle_label(&self, tick: &str) -> String {
        self.custom_labels
            .get(tick)
            .cloned()
            .unwrap_or_else(|| tick.to_string())
    }

    /// Angle-axis categories in data order
    pub fn categories(&self) -> Vec<String> {
        self.data
            .iter()
            .map(|record| record.label(&self.angle_key).unwrap_or_default())
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RadarChartOverrides {
    pub data: Patch<Vec<Record>>,
    pub radars: Patch<Vec<RadarSeries>>,
    pub radar_settings: Patch<RadarSettings>,
    pub angle_key: Patch<String>,
    pub radius_key: Patch<String>,
    pub show_radius_axis: Patch<bool>,
    pub custom_labels: Patch<BTreeMap<String, String>>,
    pub show_grid: Patch<bool>,
    pub grid_type: Patch<GridType>,
    pub fill_grid: Patch<bool>,
    pub show_legend: Patch<bool>,
    pub interactive_legend: Patch<bool>,
    pub legend_position: Patch<LegendPosition>,
    pub show_tooltip: Patch<bool>,
    pub tooltip_settings: Patch<TooltipSettings>,
    pub responsive: Patch<bool>,
    pub width: Patch<f64>,
    pub height: Patch<f64>,
    pub title: Patch<String>,
    pub font_settings: Patch<FontSettings>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ConfigOverrides for RadarChartOverrides {
    const CHART: &'static str = "radar";

    fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

impl ConfigMerge for RadarChartConfig {
    type Overrides = RadarChartOverrides;

    fn merge(d: Self, o: RadarChartOverrides) -> Self {
        Self {
            data: o.data.apply(d.data),
            radars: o.radars.apply(d.radars),
            radar_settings: o.radar_settings.apply(d.radar_settings),
            angle_key: o.angle_key.apply(d.angle_key),
            radius_key: o.radius_key.apply(d.radius_key),
            show_radius_axis: o.show_radius_axis.apply(d.show_radius_axis),
            custom_labels: o.custom_labels.apply(d.custom_labels),
            show_grid: o.show_grid.apply(d.show_grid),
            grid_type: o.grid_type.apply(d.grid_type),
            fill_grid: o.fill_grid.apply(d.fill_grid),
            show_legend: o.show_legend.apply(d.show_legend),
            interactive_legend: o.interactive_legend.apply(d.interactive_legend),
            legend_position: o.legend_position.apply(d.legend_position),
            show_tooltip: o.show_tooltip.apply(d.show_tooltip),
            tooltip_settings: o.tooltip_settings.apply(d.tooltip_settings),
            responsive: o.responsive.apply(d.responsive),
            width: o.width.apply(d.width),
            height: o.height.apply(d.height),
            title: o.title.apply(d.title),
            font_settings: o.font_settings.apply(d.font_settings),
            extra: merge_extra(d.extra, o.extra),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_label_falls_back_to_tick() {
        let mut config = RadarChartConfig::default();
        config.custom_labels.insert("Math".into(), "Mathematics".into());
        assert_eq!(config.angle_label("Math"), "Mathematics");
        assert_eq!(config.angle_label("Art"), "Art");
    }

    #[test]
    fn test_grid_type_from_json() {
        let overrides =
            RadarChartOverrides::from_json_str(r#"{"gridType": "circle", "fillGrid": true}"#)
                .expect("overrides");
        let merged = RadarChartConfig::from_overrides(overrides);
        assert_eq!(merged.grid_type, GridType::Circle);
        assert!(merged.fill_grid);
        assert!(merged.show_grid);
    }

    #[test]
    fn test_merge_replaces_settings_group() {
        let merged = RadarChartConfig::from_overrides(RadarChartOverrides {
            radar_settings: Patch::Set(RadarSettings {
                dot: Some(false),
                ..Default::default()
            }),
            legend_position: Patch::Set(LegendPosition::Right),
            title: Patch::Null,
            ..Default::default()
        });
        assert_eq!(merged.radar_settings.dot, Some(false));
        assert_eq!(merged.radar_settings.stroke_width, None);
        assert_eq!(merged.legend_position, LegendPosition::Right);
        assert_eq!(merged.title, "");
        assert_eq!(merged.angle_key, "subject");
        assert_eq!(merged.grid_type, GridType::Polygon);
    }

    #[test]
    fn test_categories_follow_angle_key() {
        let config = RadarChartConfig {
            data: vec![
                Record::new().with("subject", "Math").with("A", 120),
                Record::new().with("subject", "Physics").with("A", 85),
            ],
            ..Default::default()
        };
        assert_eq!(config.categories(), vec!["Math", "Physics"]);
    }
}
