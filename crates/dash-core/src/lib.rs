//! # dash-core
//!
//! Chart configuration model for the dashboard.
//!
//! Every chart kind has a fully-resolved `*Config` with built-in defaults and
//! a partial `*Overrides` supplied by the page. [`ConfigMerge::merge`] lays the
//! overrides over the defaults one top-level key at a time. Nested settings
//! groups are replaced whole, never merged field by field.

pub mod bar;
pub mod error;
pub mod line;
pub mod pie;
pub mod presets;
pub mod radar;
pub mod record;
pub mod settings;
pub mod visibility;

pub use bar::*;
pub use error::*;
pub use line::*;
pub use pie::*;
pub use radar::*;
pub use record::*;
pub use settings::*;
pub use visibility::*;

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

// ============================================================================
// OVERRIDE FIELD
// ============================================================================

/// One top-level override key: left out, given as `null`, or set.
///
/// A key that is present always replaces the default, even when its value is
/// `null`; the merged field then takes its empty value.
#[derive(Debug, Clone, PartialEq)]
pub enum Patch<T> {
    Absent,
    Null,
    Set(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> Patch<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// The value, when one was given
    pub fn as_set(&self) -> Option<&T> {
        match self {
            Self::Set(v) => Some(v),
            _ => None,
        }
    }
}

impl<T: Default> Patch<T> {
    /// Resolve against the default value for this key
    pub fn apply(self, default: T) -> T {
        match self {
            Self::Absent => default,
            Self::Null => T::default(),
            Self::Set(v) => v,
        }
    }
}

impl<T> From<T> for Patch<T> {
    fn from(value: T) -> Self {
        Self::Set(value)
    }
}

// Missing keys never reach this impl; `#[serde(default)]` fills `Absent`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(|v| v.map_or(Self::Null, Self::Set))
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Set(v) => v.serialize(serializer),
            _ => serializer.serialize_none(),
        }
    }
}

// ============================================================================
// STRATEGY PATTERN: Config Merge
// ============================================================================

/// Partial configuration as supplied by the embedding page
pub trait ConfigOverrides: DeserializeOwned + Default {
    /// Chart kind, used in error messages and logs
    const CHART: &'static str;

    /// Top-level keys the chart does not recognize
    fn extra(&self) -> &Map<String, Value>;

    /// Parse overrides from an already-decoded JSON value
    fn from_json_value(value: Value) -> ConfigResult<Self> {
        if !value.is_object() {
            return Err(ConfigError::NotAnObject {
                chart: Self::CHART,
                found: json_kind(&value),
            });
        }

        let overrides: Self = serde_json::from_value(value).map_err(|source| ConfigError::Json {
            chart: Self::CHART,
            source,
        })?;

        if !overrides.extra().is_empty() {
            tracing::debug!(
                chart = Self::CHART,
                keys = ?overrides.extra().keys().collect::<Vec<_>>(),
                "Passing unrecognized config keys through"
            );
        }

        Ok(overrides)
    }

    /// Parse overrides from JSON text
    fn from_json_str(input: &str) -> ConfigResult<Self> {
        let value: Value = serde_json::from_str(input).map_err(|source| ConfigError::Json {
            chart: Self::CHART,
            source,
        })?;
        Self::from_json_value(value)
    }
}

/// Shallow, per-top-level-key merge of overrides onto defaults
pub trait ConfigMerge: Default {
    type Overrides: ConfigOverrides;

    /// `merged.k` is `overrides.k` whenever the key is present (a `null`
    /// value gives the field's empty value), else `defaults.k`
    fn merge(defaults: Self, overrides: Self::Overrides) -> Self;

    /// Merge over the built-in defaults
    fn from_overrides(overrides: Self::Overrides) -> Self {
        Self::merge(Self::default(), overrides)
    }
}

/// Unknown keys: override entries win, default entries are kept otherwise
pub fn merge_extra(mut defaults: Map<String, Value>, overrides: Map<String, Value>) -> Map<String, Value> {
    for (key, value) in overrides {
        defaults.insert(key, value);
    }
    defaults
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ============================================================================
// COLOR CONSTANTS
// ============================================================================

pub mod colors {
    pub const WHITE: &str = "#ffffff";
    pub const BG_PANEL: &str = "#1b1b24";
    pub const TEXT_MUTED: &str = "#888888";
    pub const GRID: &str = "#444444";
    pub const TOOLTIP_BORDER: &str = "#cccccc";
    /// Legend rows of hidden series
    pub const INACTIVE: &str = "#cccccc";

    /// Segment palette pie charts cycle through
    pub const PIE_PALETTE: [&str; 4] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042"];

    pub fn white_alpha(alpha: f64) -> String {
        format!("rgba(255, 255, 255, {:.2})", alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_extra_override_wins() {
        let defaults = json!({"a": 1, "b": 2}).as_object().cloned().unwrap_or_default();
        let overrides = json!({"b": 3, "c": 4}).as_object().cloned().unwrap_or_default();
        let merged = merge_extra(defaults, overrides);
        assert_eq!(Value::Object(merged), json!({"a": 1, "b": 3, "c": 4}));
    }

    #[test]
    fn test_non_object_overrides_rejected() {
        let err = BarChartOverrides::from_json_str("[1, 2]").expect_err("array is not a config");
        assert!(matches!(
            err,
            ConfigError::NotAnObject { chart: "bar", found: "an array" }
        ));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = LineChartOverrides::from_json_str("{\"xKey\": ").expect_err("truncated");
        assert!(matches!(err, ConfigError::Json { chart: "line", .. }));
    }

    #[test]
    fn test_patch_apply() {
        assert_eq!(Patch::Absent.apply("default".to_string()), "default");
        assert_eq!(Patch::Null.apply("default".to_string()), "");
        assert_eq!(Patch::Set("set".to_string()).apply("default".to_string()), "set");
        assert_eq!(Patch::from(3.0).as_set(), Some(&3.0));
    }

    #[test]
    fn test_patch_keeps_null_apart_from_missing() {
        let overrides = BarChartOverrides::from_json_str(r#"{"title": null, "width": 640}"#)
            .expect("valid overrides");
        assert_eq!(overrides.title, Patch::Null);
        assert_eq!(overrides.width, Patch::Set(640.0));
        assert!(overrides.height.is_absent());
        assert!(overrides.extra.is_empty());
    }

    #[test]
    fn test_colors_white_alpha() {
        assert_eq!(colors::white_alpha(0.5), "rgba(255, 255, 255, 0.50)");
    }
}
