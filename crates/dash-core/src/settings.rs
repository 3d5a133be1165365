//! Settings groups shared by every chart kind
//!
//! A settings group is a nested configuration object. Its sub-fields are all
//! optional: the built-in defaults fill every one of them, but an override
//! group replaces the default group wholesale, so whatever the override leaves
//! out stays `None` and the renderer falls back to its own primitive default.

use serde::{Deserialize, Serialize};

/// Font sizes and label color used across titles, axes, legends and labels
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FontSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_label_font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_tick_font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend_font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_label_font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip_font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold_font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation_font_size: Option<f64>,
    /// Radar angle/radius tick labels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_label_color: Option<String>,
}

/// Tooltip box styling. Sizes are CSS lengths ("10px").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TooltipSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor_color: Option<String>,
}

impl TooltipSettings {
    /// The tooltip group every chart kind starts from
    pub fn standard() -> Self {
        Self {
            background_color: Some("#333333".into()),
            border_radius: Some("10px".into()),
            font_size: Some("14px".into()),
            text_color: Some("#ffffff".into()),
            cursor_color: Some("rgba(255, 255, 255, 0.1)".into()),
        }
    }
}

/// Outer chart margins in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
}

impl Margin {
    pub const fn uniform(margin: f64) -> Self {
        Self {
            top: Some(margin),
            right: Some(margin),
            bottom: Some(margin),
            left: Some(margin),
        }
    }
}

// ============================================================================
// AXIS BOUNDS
// ============================================================================

/// One end of a value axis domain: `"auto"` or a fixed number
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawBound", into = "RawBound")]
pub enum AxisBound {
    #[default]
    Auto,
    Value(f64),
}

impl AxisBound {
    /// Resolve against the bound computed from data
    pub fn resolve(&self, auto: f64) -> f64 {
        match self {
            Self::Auto => auto,
            Self::Value(v) => *v,
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }
}

impl From<f64> for AxisBound {
    fn from(v: f64) -> Self {
        Self::Value(v)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawBound {
    Number(f64),
    Keyword(String),
}

impl TryFrom<RawBound> for AxisBound {
    type Error = String;

    fn try_from(raw: RawBound) -> Result<Self, Self::Error> {
        match raw {
            RawBound::Number(v) => Ok(Self::Value(v)),
            RawBound::Keyword(k) if k == "auto" => Ok(Self::Auto),
            RawBound::Keyword(k) => Err(format!("expected a number or \"auto\", got {:?}", k)),
        }
    }
}

impl From<AxisBound> for RawBound {
    fn from(bound: AxisBound) -> Self {
        match bound {
            AxisBound::Auto => Self::Keyword("auto".into()),
            AxisBound::Value(v) => Self::Number(v),
        }
    }
}

// ============================================================================
// LEGEND
// ============================================================================

/// Where the legend sits relative to the plot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    #[default]
    Top,
    Middle,
    Bottom,
    Right,
}

impl LegendPosition {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Top => "legend-top",
            Self::Middle => "legend-middle",
            Self::Bottom => "legend-bottom",
            Self::Right => "legend-right",
        }
    }

    /// Legend is laid out beside the plot rather than above/below it
    pub fn is_vertical(&self) -> bool {
        matches!(self, Self::Middle | Self::Right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_bound_from_json() {
        let auto: AxisBound = serde_json::from_str(r#""auto""#).expect("auto");
        let fixed: AxisBound = serde_json::from_str("300").expect("number");
        assert_eq!(auto, AxisBound::Auto);
        assert_eq!(fixed, AxisBound::Value(300.0));
        assert!(serde_json::from_str::<AxisBound>(r#""dataMax""#).is_err());
    }

    #[test]
    fn test_axis_bound_resolve() {
        assert_eq!(AxisBound::Auto.resolve(42.0), 42.0);
        assert_eq!(AxisBound::Value(0.0).resolve(42.0), 0.0);
    }

    #[test]
    fn test_partial_group_keeps_missing_fields_empty() {
        let font: FontSettings =
            serde_json::from_str(r#"{"titleFontSize": 30}"#).expect("font settings");
        assert_eq!(font.title_font_size, Some(30.0));
        assert_eq!(font.legend_font_size, None);
        assert_eq!(font.default_label_color, None);
    }
}
