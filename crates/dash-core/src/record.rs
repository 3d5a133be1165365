//! Data records and typed field lookup
//!
//! Chart data arrives as a list of loosely-shaped records (one per category).
//! Every field read goes through [`Record::get`] / [`Record::number`], so a
//! missing or mistyped field is an explicit `None` instead of a silent `NaN`.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single field value inside a record.
///
/// Only numbers and text take part in drawing. Anything else parses so that
/// one odd cell never rejects the whole configuration, and reads as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    Number(f64),
    Text(String),
    Bool(bool),
    Null,
    /// Arrays and objects
    Other(Value),
}

impl DataValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{}", v),
            Self::Text(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Null => Ok(()),
            Self::Other(v) => write!(f, "{}", v),
        }
    }
}

impl From<f64> for DataValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for DataValue {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<&str> for DataValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for DataValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// One data row: field name to value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(BTreeMap<String, DataValue>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<DataValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<DataValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&DataValue> {
        self.0.get(key)
    }

    /// Numeric value of a field. Missing and text fields are absent.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(DataValue::as_f64)
    }

    /// Display text of a field (numbers are formatted). `null` is absent.
    pub fn label(&self, key: &str) -> Option<String> {
        self.get(key)
            .filter(|v| !v.is_null())
            .map(ToString::to_string)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<DataValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

// ============================================================================
// ORDERING
// ============================================================================

/// Which axis key the bar chart orders its records by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortAxis {
    #[default]
    X,
    Y,
}

impl SortAxis {
    /// Field name this axis sorts on
    pub fn field<'a>(&self, x_key: &'a str, y_key: &'a str) -> &'a str {
        match self {
            Self::X => x_key,
            Self::Y => y_key,
        }
    }
}

/// Stable ascending sort by the numeric value of the axis field.
///
/// Records without a numeric value for the field go after all numeric ones
/// and keep their input order among themselves.
pub fn sort_records(data: &[Record], x_key: &str, y_key: &str, axis: SortAxis) -> Vec<Record> {
    let field = axis.field(x_key, y_key);
    let mut sorted = data.to_vec();
    // slice::sort_by is stable
    sorted.sort_by(|a, b| compare_absent_last(a.number(field), b.number(field)));
    sorted
}

fn compare_absent_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
