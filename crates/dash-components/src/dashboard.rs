//! Main dashboard layout component

use dash_charts::{BarChart, LineChart, PieChart, RadarChart};
use dash_core::presets;
use leptos::prelude::*;

/// Page of example charts laid out in a grid
#[component]
pub fn Dashboard() -> impl IntoView {
    tracing::debug!("Mounting dashboard");

    view! {
        <div class="dashboard">
            <h1 class="page-title">"Dashboard"</h1>

            <main class="graph-container">
                <GraphItem>
                    <BarChart config=presets::bar_graph_config() />
                </GraphItem>
                <GraphItem>
                    <LineChart config=presets::area_graph_config() />
                </GraphItem>
                <GraphItem>
                    <PieChart config=presets::pie_graph_config() />
                </GraphItem>
                <GraphItem>
                    <LineChart config=presets::line_graph_config() />
                </GraphItem>
                <GraphItem>
                    <RadarChart config=presets::radar_graph_config() />
                </GraphItem>
            </main>

            <footer class="dash-footer">
                <span class="dash-version">{concat!("v", env!("CARGO_PKG_VERSION"))}</span>
            </footer>
        </div>
    }
}

/// One grid cell holding a chart
#[component]
fn GraphItem(children: Children) -> impl IntoView {
    view! {
        <div class="graph-item panel">
            <div class="panel-content">{children()}</div>
        </div>
    }
}
