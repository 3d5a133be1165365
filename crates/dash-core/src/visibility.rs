//! Series visibility set driven by legend clicks

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Identifier of a series (bar/line/radar) or segment (pie wedge)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesKey(pub String);

impl SeriesKey {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SeriesKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::borrow::Borrow<str> for SeriesKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SeriesKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SeriesKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ============================================================================
// STRATEGY PATTERN: Series Descriptor
// ============================================================================

/// Anything that shows up as one legend entry
pub trait SeriesDescriptor {
    fn key(&self) -> &str;
    fn label(&self) -> &str;
    fn color(&self) -> &str;
}

/// Legend swatch shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendMarker {
    #[default]
    Square,
    Line,
    Circle,
}

impl LegendMarker {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Square => "marker-square",
            Self::Line => "marker-line",
            Self::Circle => "marker-circle",
        }
    }
}

/// One legend row. Hidden series stay listed, flagged inactive.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub key: SeriesKey,
    pub label: String,
    pub color: String,
    pub marker: LegendMarker,
    pub inactive: bool,
}

// ============================================================================
// VISIBILITY SET
// ============================================================================

/// Which declared series are currently drawn.
///
/// Starts with every declared key visible. Only [`SeriesVisibility::toggle`]
/// changes it, and only while the legend is interactive.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesVisibility {
    declared: Vec<SeriesKey>,
    visible: HashSet<SeriesKey>,
    interactive: bool,
}

impl SeriesVisibility {
    pub fn new<I, K>(keys: I, interactive: bool) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<SeriesKey>,
    {
        let declared: Vec<SeriesKey> = keys.into_iter().map(Into::into).collect();
        let visible = declared.iter().cloned().collect();
        Self {
            declared,
            visible,
            interactive,
        }
    }

    /// Visibility over a list of series descriptors
    pub fn from_series<S: SeriesDescriptor>(series: &[S], interactive: bool) -> Self {
        Self::new(series.iter().map(|s| s.key()), interactive)
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn is_visible(&self, key: &str) -> bool {
        self.visible.contains(key)
    }

    /// Flip one key. Returns whether anything changed.
    pub fn toggle(&mut self, key: &str) -> bool {
        if !self.interactive {
            return false;
        }

        if !self.visible.remove(key) {
            self.visible.insert(SeriesKey::new(key));
        }
        true
    }

    /// Show every declared series again
    pub fn reset(&mut self) {
        self.visible = self.declared.iter().cloned().collect();
    }

    /// Declared keys in declaration order
    pub fn declared(&self) -> &[SeriesKey] {
        &self.declared
    }

    /// Visible declared keys in declaration order
    pub fn visible_keys(&self) -> Vec<&SeriesKey> {
        self.declared
            .iter()
            .filter(|k| self.visible.contains(*k))
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.declared.iter().filter(|k| self.visible.contains(*k)).count()
    }

    /// Raw visible set, including keys toggled on that were never declared
    pub fn visible_set(&self) -> &HashSet<SeriesKey> {
        &self.visible
    }

    /// Legend rows for every series, inactive when hidden
    pub fn legend_entries<S: SeriesDescriptor>(
        &self,
        series: &[S],
        marker: LegendMarker,
    ) -> Vec<LegendEntry> {
        series
            .iter()
            .map(|s| LegendEntry {
                key: SeriesKey::new(s.key()),
                label: s.label().to_string(),
                color: s.color().to_string(),
                marker,
                inactive: !self.is_visible(s.key()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(v: &SeriesVisibility) -> Vec<&str> {
        v.visible_keys().into_iter().map(SeriesKey::as_str).collect()
    }

    #[test]
    fn test_initially_all_visible() {
        let v = SeriesVisibility::new(["a", "b", "c"], true);
        assert_eq!(keys(&v), vec!["a", "b", "c"]);
        assert_eq!(v.visible_count(), 3);
    }

    #[test]
    fn test_toggle_removes_then_restores() {
        let mut v = SeriesVisibility::new(["a", "b", "c"], true);
        assert!(v.toggle("b"));
        assert_eq!(keys(&v), vec!["a", "c"]);
        assert!(!v.is_visible("b"));

        assert!(v.toggle("b"));
        // declaration order, not toggle order
        assert_eq!(keys(&v), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_toggle_ignored_when_not_interactive() {
        let mut v = SeriesVisibility::new(["a", "b"], false);
        assert!(!v.toggle("a"));
        assert!(!v.toggle("zzz"));
        assert_eq!(keys(&v), vec!["a", "b"]);
    }

    #[test]
    fn test_toggle_undeclared_key_adds_it() {
        let mut v = SeriesVisibility::new(["a"], true);
        v.toggle("ghost");
        assert!(v.is_visible("ghost"));
        assert_eq!(keys(&v), vec!["a"]);
        assert_eq!(v.visible_set().len(), 2);
    }

    #[test]
    fn test_reset() {
        let mut v = SeriesVisibility::new(["a", "b"], true);
        v.toggle("a");
        v.toggle("b");
        assert_eq!(v.visible_count(), 0);
        v.reset();
        assert_eq!(keys(&v), vec!["a", "b"]);
    }
}
