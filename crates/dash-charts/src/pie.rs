//! Pie and doughnut chart

use std::sync::Arc;

use crate::{
    aspect_ratio,
    chartkit::{arc_path, format_tick, polar_point},
    colors, container_style, fallback,
    guides::{ChartLegend, ChartTitle, ChartTooltip, TooltipRow, TooltipStyle},
    ChartDimensions,
};
use dash_core::{
    ConfigMerge, LegendMarker, LegendPosition, PieChartConfig, PieChartOverrides,
    PieChartSettings, SeriesVisibility,
};
use dash_state::ChartState;
use leptos::prelude::*;

pub const PIE_OUTER_RADIUS: f64 = 80.0;
/// Distance from the rim to a segment label
const LABEL_OFFSET: f64 = 20.0;

/// Wedge outline
#[derive(Debug, Clone, PartialEq)]
pub struct PieStroke {
    pub color: String,
    pub width: f64,
}

impl PieStroke {
    /// `None` when outlines are switched off
    pub fn resolve(settings: &PieChartSettings) -> Option<Self> {
        (settings.outline != Some(false)).then(|| Self {
            color: settings
                .outline_color
                .clone()
                .unwrap_or_else(|| colors::WHITE.to_string()),
            width: settings.outline_width.unwrap_or(fallback::STROKE_WIDTH),
        })
    }
}

/// Label text, its anchor point and the leader line from the rim
#[derive(Debug, Clone, PartialEq)]
pub struct SliceLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub anchor: &'static str,
    pub line: [(f64, f64); 2],
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    /// Index into the segments (data records)
    pub segment: usize,
    pub name: String,
    pub value: f64,
    pub color: String,
    /// Degrees, counter-clockwise from 3 o'clock
    pub start: f64,
    pub end: f64,
    pub path: String,
    pub label: SliceLabel,
}

impl PieSlice {
    pub fn mid_angle(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// Wedges for the visible segments with a positive value, sized by their
/// share of the visible total
pub fn pie_slices(
    config: &PieChartConfig,
    visibility: &SeriesVisibility,
    center: (f64, f64),
    outer: f64,
    inner: f64,
) -> Vec<PieSlice> {
    let (cx, cy) = center;
    let shown: Vec<(usize, String, f64, String)> = config
        .segments()
        .into_iter()
        .enumerate()
        .filter(|(_, s)| visibility.is_visible(&s.key))
        .filter_map(|(i, s)| {
            let value = s.value.filter(|v| v.is_finite() && *v > 0.0)?;
            Some((i, s.name, value, s.color))
        })
        .collect();

    let total: f64 = shown.iter().map(|s| s.2).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = 0.0;
    shown
        .into_iter()
        .map(|(segment, name, value, color)| {
            let start = angle;
            let end = start + value / total * 360.0;
            angle = end;

            let mid = (start + end) / 2.0;
            let rim = polar_point(cx, cy, outer, mid);
            let (x, y) = polar_point(cx, cy, outer + LABEL_OFFSET, mid);
            let anchor = if (x - cx).abs() < 1e-6 {
                "middle"
            } else if x > cx {
                "start"
            } else {
                "end"
            };

            PieSlice {
                segment,
                path: arc_path(cx, cy, outer, inner, start, end),
                label: SliceLabel {
                    text: format!("{}: {}", name, format_tick(value)),
                    x,
                    y,
                    anchor,
                    line: [rim, (x, y)],
                },
                name,
                value,
                color,
                start,
                end,
            }
        })
        .collect()
}

/// Pie chart component. A non-zero inner radius draws a doughnut.
#[component]
pub fn PieChart(#[prop(optional)] config: Option<PieChartOverrides>) -> impl IntoView {
    let config = Arc::new(PieChartConfig::from_overrides(config.unwrap_or_default()));
    tracing::debug!(chart = "pie", segments = config.data.len(), "Mounting chart");

    let state = ChartState::new(config.visibility());

    let dims = ChartDimensions::with_aspect(config.width, aspect_ratio(config.maintain_aspect_ratio));
    let center = (
        dims.margin.left + dims.inner_width() / 2.0,
        dims.margin.top + dims.inner_height() / 2.0,
    );
    let inner = config
        .chart_settings
        .inner_radius
        .unwrap_or(0.0)
        .clamp(0.0, PIE_OUTER_RADIUS);

    let slices = {
        let config = Arc::clone(&config);
        Memo::new(move |_| {
            state
                .visibility
                .with(|v| pie_slices(&config, v, center, PIE_OUTER_RADIUS, inner))
        })
    };

    let stroke = PieStroke::resolve(&config.chart_settings);
    let fonts = config.font_settings.clone();
    let tooltip_style = TooltipStyle::resolve(&config.tooltip_settings, fonts.tooltip_font_size);
    let label_size = fonts.data_label_font_size.unwrap_or(fallback::FONT_SIZE);
    let label_color = fonts.default_label_color.clone();
    let show_labels = config.show_labels;
    let show_tooltip = config.show_tooltip;
    let bounds = (dims.width, dims.height);

    let legend = config.show_legend.then(|| {
        let segments = config.segments();
        let entries = Signal::derive(move || state.legend_entries(&segments, LegendMarker::Square));
        view! {
            <ChartLegend
                entries=entries
                state=state
                position=config.legend_position
                font_size=fonts.legend_font_size
            />
        }
    });
    let (legend_before, legend_after) = if config.legend_position == LegendPosition::Top {
        (legend, None)
    } else {
        (None, legend)
    };

    view! {
        <div class="chart pie-chart" style=container_style(config.responsive, config.width, config.height)>
            <ChartTitle title=config.title.clone() font_size=fonts.title_font_size />
            <div class=format!("chart-body {}", config.legend_position.css_class())>
                {legend_before}
                <svg
                    class="chart-svg"
                    viewBox=dims.viewbox()
                    preserveAspectRatio="xMidYMid meet"
                    style="width: 100%; height: 100%; overflow: visible;"
                >
                    <g class="pie" on:mouseleave=move |_| state.clear_hover()>
                        {move || slices.with(|all| {
                            all.iter().map(|slice| {
                                let segment = slice.segment;
                                let (stroke_color, stroke_width) = match &stroke {
                                    Some(s) => (s.color.clone(), s.width),
                                    None => ("none".to_string(), 0.0),
                                };
                                view! {
                                    <path
                                        class="pie-slice"
                                        d=slice.path.clone()
                                        fill=slice.color.clone()
                                        stroke=stroke_color
                                        stroke-width=stroke_width
                                        on:mouseenter=move |_| state.hover(segment)
                                    />
                                }
                            }).collect_view()
                        })}

                        {move || show_labels.then(|| slices.with(|all| {
                            all.iter().map(|slice| {
                                let label = slice.label.clone();
                                let [(x1, y1), (x2, y2)] = label.line;
                                view! {
                                    <g class="pie-label">
                                        <line
                                            x1=x1 y1=y1
                                            x2=x2 y2=y2
                                            stroke=slice.color.clone()
                                        />
                                        <text
                                            x=label.x
                                            y=label.y
                                            text-anchor=label.anchor
                                            dominant-baseline="central"
                                            fill=label_color.clone().unwrap_or_else(|| slice.color.clone())
                                            font-size=label_size
                                        >
                                            {label.text}
                                        </text>
                                    </g>
                                }
                            }).collect_view()
                        }))}

                        {move || {
                            let segment = state.hovered.get()?;
                            let slice = slices.with(|all| all.iter().find(|s| s.segment == segment).cloned())?;
                            let anchor = polar_point(center.0, center.1, PIE_OUTER_RADIUS / 2.0, slice.mid_angle());
                            show_tooltip.then(|| view! {
                                <ChartTooltip
                                    anchor=anchor
                                    bounds=bounds
                                    title=String::new()
                                    rows=vec![TooltipRow {
                                        label: slice.name,
                                        value: format_tick(slice.value),
                                        color: slice.color,
                                    }]
                                    style=tooltip_style.clone()
                                />
                            })
                        }}
                    </g>
                </svg>
                {legend_after}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dash_core::{presets, Record};

    fn example() -> PieChartConfig {
        PieChartConfig::from_overrides(presets::pie_graph_config())
    }

    #[test]
    fn test_slices_split_full_circle() {
        let config = example();
        let slices = pie_slices(&config, &config.visibility(), (200.0, 100.0), 80.0, 50.0);

        assert_eq!(slices.len(), 4);
        // 400 / 1200 of the circle
        assert!((slices[0].end - 120.0).abs() < 1e-9);
        assert!((slices[3].end - 360.0).abs() < 1e-9);
        assert!(slices.windows(2).all(|w| w[0].end == w[1].start));
        assert_eq!(slices[0].label.text, "Group A: 400");
        assert_eq!(slices[2].color, "#FFBB28");
    }

    #[test]
    fn test_hidden_segment_leaves_total() {
        let config = example();
        let mut visibility = config.visibility();
        visibility.toggle(&PieChartConfig::segment_key(0));
        let slices = pie_slices(&config, &visibility, (200.0, 100.0), 80.0, 0.0);

        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].name, "Group B");
        assert_eq!(slices[0].segment, 1);
        // 300 / 800
        assert!((slices[0].end - 135.0).abs() < 1e-9);
        // colors stay with their records
        assert_eq!(slices[0].color, "#00C49F");
    }

    #[test]
    fn test_colors_cycle() {
        let config = PieChartConfig {
            data: (0..5).map(|i| Record::new().with("name", format!("s{}", i)).with("value", 1)).collect(),
            colors: vec!["#111".into(), "#222".into()],
            ..Default::default()
        };
        let slices = pie_slices(&config, &config.visibility(), (0.0, 0.0), 80.0, 0.0);
        let colors: Vec<&str> = slices.iter().map(|s| s.color.as_str()).collect();
        assert_eq!(colors, vec!["#111", "#222", "#111", "#222", "#111"]);
    }

    #[test]
    fn test_label_sits_outside_rim() {
        let config = PieChartConfig {
            data: vec![
                Record::new().with("name", "a").with("value", 1),
                Record::new().with("name", "b").with("value", 1),
            ],
            ..Default::default()
        };
        let slices = pie_slices(&config, &config.visibility(), (0.0, 0.0), 80.0, 0.0);

        // first half's middle is straight up
        let label = &slices[0].label;
        assert!(label.x.abs() < 1e-9);
        assert!((label.y + 100.0).abs() < 1e-9);
        assert_eq!(label.anchor, "middle");
        assert!((label.line[0].1 + 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_and_missing_values_skipped() {
        let config = PieChartConfig {
            data: vec![
                Record::new().with("name", "a").with("value", 0),
                Record::new().with("name", "b"),
                Record::new().with("name", "c").with("value", 5),
            ],
            ..Default::default()
        };
        let slices = pie_slices(&config, &config.visibility(), (0.0, 0.0), 80.0, 0.0);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].end, 360.0);

        let empty = PieChartConfig::default();
        assert!(pie_slices(&empty, &empty.visibility(), (0.0, 0.0), 80.0, 0.0).is_empty());
    }

    #[test]
    fn test_stroke_resolution() {
        let config = example();
        let stroke = PieStroke::resolve(&config.chart_settings);
        assert_eq!(stroke, Some(PieStroke { color: "#ffffff".into(), width: 2.0 }));

        let off = PieChartSettings {
            outline: Some(false),
            ..Default::default()
        };
        assert_eq!(PieStroke::resolve(&off), None);

        let bare = PieStroke::resolve(&PieChartSettings::default());
        assert_eq!(bare, Some(PieStroke { color: "#ffffff".into(), width: 1.0 }));
    }
}
