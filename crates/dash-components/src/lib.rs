//! # dash-components
//!
//! Page-level Leptos components: the dashboard grid that hosts one instance
//! of each example chart.

pub mod dashboard;

pub use dashboard::*;
