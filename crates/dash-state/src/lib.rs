//! # dash-state
//!
//! Reactive state owned by a single chart instance.
//! Uses Leptos signals so a legend click re-renders only the series it hides
//! or shows.

use dash_core::{LegendEntry, LegendMarker, SeriesDescriptor, SeriesVisibility};
use leptos::prelude::*;

// ============================================================================
// CHART STATE
// ============================================================================

/// Per-instance chart state. Every chart owns its own; nothing is shared
/// between charts on a page.
#[derive(Debug, Clone, Copy)]
pub struct ChartState {
    /// Which series / segments are currently drawn
    pub visibility: RwSignal<SeriesVisibility>,
    /// Index of the category or segment under the pointer
    pub hovered: RwSignal<Option<usize>>,
}

impl ChartState {
    pub fn new(visibility: SeriesVisibility) -> Self {
        Self {
            visibility: RwSignal::new(visibility),
            hovered: RwSignal::new(None),
        }
    }

    // ========================================================================
    // Visibility
    // ========================================================================

    /// Legend click: flip one series. No-op for non-interactive legends,
    /// which also leaves subscribers un-notified.
    pub fn toggle(&self, key: &str) {
        let mut changed = false;
        self.visibility.maybe_update(|v| {
            changed = v.toggle(key);
            changed
        });

        if changed {
            tracing::debug!(series = key, visible = self.is_visible(key), "Toggled series");
        } else {
            tracing::trace!(series = key, "Legend is not interactive");
        }
    }

    pub fn is_visible(&self, key: &str) -> bool {
        self.visibility.with(|v| v.is_visible(key))
    }

    /// Show every declared series again
    pub fn reset(&self) {
        self.visibility.update(SeriesVisibility::reset);
    }

    pub fn is_interactive(&self) -> bool {
        self.visibility.with(SeriesVisibility::is_interactive)
    }

    /// Legend rows reflecting the current visibility
    pub fn legend_entries<S: SeriesDescriptor>(
        &self,
        series: &[S],
        marker: LegendMarker,
    ) -> Vec<LegendEntry> {
        self.visibility.with(|v| v.legend_entries(series, marker))
    }

    // ========================================================================
    // Hover
    // ========================================================================

    pub fn hover(&self, index: usize) {
        if self.hovered.get_untracked() != Some(index) {
            tracing::trace!(index, "Hover");
            self.hovered.set(Some(index));
        }
    }

    pub fn clear_hover(&self) {
        if self.hovered.get_untracked().is_some() {
            self.hovered.set(None);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use dash_core::BarSeries;

    fn series() -> Vec<BarSeries> {
        vec![
            BarSeries::new("scoreTypeA", "Type A", "#1abc9c"),
            BarSeries::new("scoreTypeB", "Type B", "#3498db"),
        ]
    }

    #[test]
    fn test_toggle_updates_signal() {
        let owner = Owner::new();
        owner.with(|| {
            let state = ChartState::new(SeriesVisibility::from_series(&series(), true));
            state.toggle("scoreTypeB");
            assert!(state.is_visible("scoreTypeA"));
            assert!(!state.is_visible("scoreTypeB"));

            let entries = state.legend_entries(&series(), LegendMarker::Square);
            assert!(entries[1].inactive);

            state.reset();
            assert!(state.is_visible("scoreTypeB"));
        });
    }

    #[test]
    fn test_non_interactive_toggle_ignored() {
        let owner = Owner::new();
        owner.with(|| {
            let state = ChartState::new(SeriesVisibility::from_series(&series(), false));
            state.toggle("scoreTypeA");
            assert!(state.is_visible("scoreTypeA"));
            assert!(!state.is_interactive());
        });
    }

    #[test]
    fn test_toggle_notifies_only_on_change() {
        let owner = Owner::new();
        owner.with(|| {
            for (interactive, expected_runs, expected_count) in [(false, 1, 2), (true, 2, 1)] {
                let state = ChartState::new(SeriesVisibility::from_series(&series(), interactive));
                let runs = Arc::new(AtomicUsize::new(0));
                let visible = {
                    let runs = Arc::clone(&runs);
                    Memo::new(move |_| {
                        runs.fetch_add(1, Ordering::SeqCst);
                        state.visibility.with(SeriesVisibility::visible_count)
                    })
                };

                assert_eq!(visible.get_untracked(), 2);
                state.toggle("scoreTypeA");
                assert_eq!(visible.get_untracked(), expected_count);
                assert_eq!(runs.load(Ordering::SeqCst), expected_runs);
            }
        });
    }

    #[test]
    fn test_hover_tracks_index() {
        let owner = Owner::new();
        owner.with(|| {
            let state = ChartState::new(SeriesVisibility::new(["a"], true));
            state.hover(2);
            assert_eq!(state.hovered.get_untracked(), Some(2));
            state.clear_hover();
            assert_eq!(state.hovered.get_untracked(), None);
        });
    }
}
