//! Radar (spider) chart
//!
//! One spoke per record, one closed polygon per visible series. Spokes start
//! at 12 o'clock and go clockwise.

use std::sync::Arc;

use crate::{
    chartkit::{arc_path, auto_domain, format_tick, polar_point, polygon_path, LinearScale, Scale},
    colors, container_style, fallback,
    guides::{ChartLegend, ChartTitle, ChartTooltip, TooltipRow, TooltipStyle},
    ChartDimensions,
};
use dash_core::{
    ConfigMerge, GridType, LegendMarker, LegendPosition, RadarChartConfig, RadarChartOverrides,
    RadarSeries, SeriesVisibility,
};
use dash_state::ChartState;
use leptos::prelude::*;

/// Share of the half-extent used by the outer ring
const OUTER_RADIUS_RATIO: f64 = 0.8;
/// Angle of the radius axis, degrees
const RADIUS_AXIS_ANGLE: f64 = 30.0;
const ANGLE_LABEL_OFFSET: f64 = 15.0;
const DOT_RADIUS: f64 = 3.0;

/// Stroke and fill of the polar grid
#[derive(Debug, Clone, PartialEq)]
pub struct GridStyle {
    pub stroke: String,
    pub fill: String,
    pub fill_opacity: f64,
}

impl GridStyle {
    pub fn resolve(fill_grid: bool) -> Self {
        if fill_grid {
            Self {
                stroke: colors::white_alpha(0.5),
                fill: colors::white_alpha(0.2),
                fill_opacity: 0.6,
            }
        } else {
            Self {
                stroke: colors::WHITE.to_string(),
                fill: "none".to_string(),
                fill_opacity: 0.0,
            }
        }
    }
}

/// Polygon fill opacity: a faint fill only when vertex dots are drawn
pub fn series_fill_opacity(dot: bool) -> f64 {
    if dot { 0.1 } else { 0.0 }
}

// ============================================================================
// LAYOUT
// ============================================================================

/// One spoke of the angle axis
#[derive(Debug, Clone, PartialEq)]
pub struct RadarSpoke {
    pub label: String,
    pub angle: f64,
    pub end: (f64, f64),
    pub label_at: (f64, f64),
    pub anchor: &'static str,
}

/// One concentric grid ring
#[derive(Debug, Clone, PartialEq)]
pub struct RadarRing {
    pub value: f64,
    pub radius: f64,
    /// Straight-edged outline through the spokes
    pub polygon: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarVertex {
    pub record: usize,
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarTrace {
    pub series: usize,
    pub vertices: Vec<RadarVertex>,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarLayout {
    pub center: (f64, f64),
    pub radius: f64,
    pub spokes: Vec<RadarSpoke>,
    pub rings: Vec<RadarRing>,
    /// Tick positions along the radius axis
    pub radius_ticks: Vec<((f64, f64), String)>,
    pub traces: Vec<RadarTrace>,
}

impl RadarLayout {
    pub fn compute(
        config: &RadarChartConfig,
        visibility: &SeriesVisibility,
        width: f64,
        height: f64,
    ) -> Self {
        let center = (width / 2.0, height / 2.0);
        let (cx, cy) = center;
        let radius = width.min(height) / 2.0 * OUTER_RADIUS_RATIO;
        let n = config.data.len();
        let angle_of = |i: usize| 90.0 - 360.0 * i as f64 / n.max(1) as f64;

        let visible: Vec<(usize, &RadarSeries)> = config
            .radars
            .iter()
            .enumerate()
            .filter(|(_, s)| visibility.is_visible(&s.key))
            .collect();

        let (_, max) = auto_domain(
            visible
                .iter()
                .flat_map(|(_, s)| config.data.iter().filter_map(move |r| r.number(&s.key))),
        );
        let r_scale = LinearScale::new().domain(0.0, max).range(0.0, radius);

        let spokes = config
            .categories()
            .iter()
            .enumerate()
            .map(|(i, tick)| {
                let angle = angle_of(i);
                let label_at = polar_point(cx, cy, radius + ANGLE_LABEL_OFFSET, angle);
                let anchor = if (label_at.0 - cx).abs() < 1e-6 {
                    "middle"
                } else if label_at.0 > cx {
                    "start"
                } else {
                    "end"
                };
                RadarSpoke {
                    label: config.angle_label(tick),
                    angle,
                    end: polar_point(cx, cy, radius, angle),
                    label_at,
                    anchor,
                }
            })
            .collect::<Vec<_>>();

        let ticks: Vec<f64> = r_scale.nice_ticks(5).into_iter().filter(|t| *t > 0.0).collect();

        let rings = ticks
            .iter()
            .map(|&value| {
                let r = r_scale.scale(value);
                let corners: Vec<(f64, f64)> =
                    spokes.iter().map(|s| polar_point(cx, cy, r, s.angle)).collect();
                RadarRing {
                    value,
                    radius: r,
                    polygon: polygon_path(&corners),
                }
            })
            .collect();

        let radius_ticks = ticks
            .iter()
            .map(|&t| {
                (
                    polar_point(cx, cy, r_scale.scale(t), RADIUS_AXIS_ANGLE),
                    format_tick(t),
                )
            })
            .collect();

        let traces = visible
            .iter()
            .map(|&(si, series)| {
                let vertices: Vec<RadarVertex> = config
                    .data
                    .iter()
                    .enumerate()
                    .filter_map(|(ri, record)| {
                        let value = record.number(&series.key)?;
                        let (x, y) = polar_point(cx, cy, r_scale.scale(value.max(0.0)), angle_of(ri));
                        Some(RadarVertex { record: ri, value, x, y })
                    })
                    .collect();
                let corners: Vec<(f64, f64)> = vertices.iter().map(|v| (v.x, v.y)).collect();
                RadarTrace {
                    series: si,
                    path: polygon_path(&corners),
                    vertices,
                }
            })
            .collect();

        Self {
            center,
            radius,
            spokes,
            rings,
            radius_ticks,
            traces,
        }
    }

    /// Wedge around a spoke that picks it for the tooltip
    pub fn hover_sector(&self, index: usize) -> Option<String> {
        let spoke = self.spokes.get(index)?;
        let half = 180.0 / self.spokes.len() as f64;
        let (cx, cy) = self.center;
        Some(arc_path(cx, cy, self.radius, 0.0, spoke.angle - half, spoke.angle + half))
    }

    pub fn tooltip_rows(&self, record: usize, series: &[RadarSeries]) -> Vec<TooltipRow> {
        self.traces
            .iter()
            .filter_map(|t| {
                let vertex = t.vertices.iter().find(|v| v.record == record)?;
                let s = series.get(t.series)?;
                Some(TooltipRow {
                    label: s.label.clone(),
                    value: format_tick(vertex.value),
                    color: s.color.clone(),
                })
            })
            .collect()
    }
}

// ============================================================================
// COMPONENT
// ============================================================================

/// Radar chart component
#[component]
pub fn RadarChart(#[prop(optional)] config: Option<RadarChartOverrides>) -> impl IntoView {
    let config = Arc::new(RadarChartConfig::from_overrides(config.unwrap_or_default()));
    tracing::debug!(
        chart = "radar",
        series = config.radars.len(),
        spokes = config.data.len(),
        "Mounting chart"
    );

    let state = ChartState::new(config.visibility());
    let dims = ChartDimensions::new(config.width, config.height);
    let (width, height) = (dims.width, dims.height);

    let layout = {
        let config = Arc::clone(&config);
        Memo::new(move |_| state.visibility.with(|v| RadarLayout::compute(&config, v, width, height)))
    };

    let grid_style = GridStyle::resolve(config.fill_grid);
    let show_grid = config.show_grid;
    let grid_type = config.grid_type;
    let show_radius_axis = config.show_radius_axis;
    let dot = config.radar_settings.dot == Some(true);
    let fill_opacity = series_fill_opacity(dot);
    let stroke_width = config.radar_settings.stroke_width.unwrap_or(fallback::STROKE_WIDTH);
    let series = Arc::new(config.radars.clone());

    let fonts = config.font_settings.clone();
    let tick_size = fonts.label_font_size.unwrap_or(fallback::FONT_SIZE);
    let tick_color = fonts
        .default_label_color
        .clone()
        .unwrap_or_else(|| fallback::LABEL_COLOR.to_string());
    let tooltip_style = TooltipStyle::resolve(&config.tooltip_settings, fonts.tooltip_font_size);
    let cursor_color = tooltip_style.cursor_color.clone();
    let show_tooltip = config.show_tooltip;

    let legend = config.show_legend.then(|| {
        let radars = config.radars.clone();
        let entries = Signal::derive(move || state.legend_entries(&radars, LegendMarker::Square));
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
        <div class="chart radar-chart" style=container_style(config.responsive, config.width, config.height)>
            <ChartTitle title=config.title.clone() font_size=fonts.title_font_size />
            <div class=format!("chart-body {}", config.legend_position.css_class())>
                {legend_before}
                <svg
                    class="chart-svg"
                    viewBox=dims.viewbox()
                    preserveAspectRatio="xMidYMid meet"
                    style="width: 100%; height: 100%; overflow: visible;"
                >
                    <g class="radar" on:mouseleave=move |_| state.clear_hover()>
                        // Polar grid
                        {move || show_grid.then(|| layout.with(|l| {
                            let (cx, cy) = l.center;
                            let rings = l.rings.iter().map(|ring| match grid_type {
                                GridType::Polygon => view! {
                                    <path
                                        d=ring.polygon.clone()
                                        stroke=grid_style.stroke.clone()
                                        fill=grid_style.fill.clone()
                                        fill-opacity=grid_style.fill_opacity
                                    />
                                }.into_any(),
                                GridType::Circle => view! {
                                    <circle
                                        cx=cx
                                        cy=cy
                                        r=ring.radius
                                        stroke=grid_style.stroke.clone()
                                        fill=grid_style.fill.clone()
                                        fill-opacity=grid_style.fill_opacity
                                    />
                                }.into_any(),
                            }).collect_view();
                            let spokes = l.spokes.iter().map(|s| view! {
                                <line
                                    x1=cx y1=cy
                                    x2=s.end.0 y2=s.end.1
                                    stroke=grid_style.stroke.clone()
                                />
                            }).collect_view();
                            view! { <g class="polar-grid">{rings}{spokes}</g> }
                        }))}

                        // Hovered spoke
                        {move || {
                            let index = state.hovered.get()?;
                            let sector = layout.with(|l| l.hover_sector(index))?;
                            Some(view! { <path d=sector fill=cursor_color.clone() /> })
                        }}

                        // Angle labels
                        {move || layout.with(|l| {
                            l.spokes.iter().map(|s| view! {
                                <text
                                    class="angle-label"
                                    x=s.label_at.0
                                    y=s.label_at.1
                                    text-anchor=s.anchor
                                    dominant-baseline="central"
                                    fill=tick_color.clone()
                                    font-size=tick_size
                                >
                                    {s.label.clone()}
                                </text>
                            }).collect_view()
                        })}

                        // Radius axis
                        {move || show_radius_axis.then(|| layout.with(|l| {
                            let (cx, cy) = l.center;
                            let (ex, ey) = polar_point(cx, cy, l.radius, RADIUS_AXIS_ANGLE);
                            let ticks = l.radius_ticks.iter().map(|((x, y), text)| view! {
                                <text x=*x y=*y fill=colors::TEXT_MUTED font-size=tick_size>
                                    {text.clone()}
                                </text>
                            }).collect_view();
                            view! {
                                <g class="radius-axis">
                                    <line x1=cx y1=cy x2=ex y2=ey stroke=colors::TEXT_MUTED />
                                    {ticks}
                                </g>
                            }
                        }))}

                        // Series
                        {
                            let series = Arc::clone(&series);
                            move || layout.with(|l| {
                                l.traces.iter().map(|t| {
                                    let color = series.get(t.series).map(|s| s.color.clone()).unwrap_or_default();
                                    let dots = dot.then(|| t.vertices.iter().map(|v| view! {
                                        <circle cx=v.x cy=v.y r=DOT_RADIUS fill=color.clone() />
                                    }).collect_view());
                                    view! {
                                        <g class="radar-series">
                                            <path
                                                d=t.path.clone()
                                                stroke=color.clone()
                                                stroke-width=stroke_width
                                                fill=color.clone()
                                                fill-opacity=fill_opacity
                                            />
                                            {dots}
                                        </g>
                                    }
                                }).collect_view()
                            })
                        }

                        // Hover targets
                        {move || show_tooltip.then(|| layout.with(|l| {
                            (0..l.spokes.len()).filter_map(|i| {
                                let d = l.hover_sector(i)?;
                                Some(view! {
                                    <path
                                        class="hover-target"
                                        d=d
                                        fill="transparent"
                                        on:mouseenter=move |_| state.hover(i)
                                    />
                                })
                            }).collect_view()
                        }))}

                        {move || {
                            let index = state.hovered.get()?;
                            let (spoke, rows) = layout.with(|l| {
                                l.spokes.get(index).cloned().map(|s| (s, l.tooltip_rows(index, &series)))
                            })?;
                            show_tooltip.then(|| view! {
                                <ChartTooltip
                                    anchor=spoke.end
                                    bounds=(width, height)
                                    title=spoke.label
                                    rows=rows
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

    fn example() -> RadarChartConfig {
        RadarChartConfig::from_overrides(presets::radar_graph_config())
    }

    #[test]
    fn test_grid_style() {
        let filled = GridStyle::resolve(true);
        assert_eq!(filled.stroke, "rgba(255, 255, 255, 0.50)");
        assert_eq!(filled.fill_opacity, 0.6);

        let plain = GridStyle::resolve(false);
        assert_eq!(plain.stroke, "#ffffff");
        assert_eq!(plain.fill, "none");
        assert_eq!(plain.fill_opacity, 0.0);
    }

    #[test]
    fn test_series_fill_follows_dots() {
        assert_eq!(series_fill_opacity(true), 0.1);
        assert_eq!(series_fill_opacity(false), 0.0);
    }

    #[test]
    fn test_spokes_use_custom_labels() {
        let config = example();
        let layout = RadarLayout::compute(&config, &config.visibility(), 800.0, 500.0);

        assert_eq!(layout.spokes.len(), 6);
        assert_eq!(layout.spokes[0].label, "Mathematics");
        assert_eq!(layout.spokes[4].label, "Physics Studies");
        // first spoke points straight up
        assert_eq!(layout.spokes[0].angle, 90.0);
        assert!((layout.spokes[0].end.0 - 400.0).abs() < 1e-9);
        assert!((layout.spokes[0].end.1 - 50.0).abs() < 1e-9);
        assert_eq!(layout.spokes[0].anchor, "middle");
        assert_eq!(layout.spokes[1].anchor, "start");
    }

    #[test]
    fn test_unmapped_label_falls_back_to_tick() {
        let config = RadarChartConfig {
            data: vec![Record::new().with("subject", "Art").with("A", 1)],
            ..Default::default()
        };
        let layout = RadarLayout::compute(&config, &config.visibility(), 400.0, 400.0);
        assert_eq!(layout.spokes[0].label, "Art");
    }

    #[test]
    fn test_rings_follow_visible_data() {
        let config = example();
        let layout = RadarLayout::compute(&config, &config.visibility(), 800.0, 500.0);

        // max 130 widens to 150
        let values: Vec<f64> = layout.rings.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![50.0, 100.0, 150.0]);
        assert!((layout.rings[2].radius - 200.0).abs() < 1e-9);
        assert_eq!(layout.radius_ticks.len(), 3);

        let mut visibility = config.visibility();
        visibility.toggle("B");
        let only_a = RadarLayout::compute(&config, &visibility, 800.0, 500.0);
        assert_eq!(only_a.traces.len(), 1);
        assert_eq!(only_a.rings.last().map(|r| r.value), Some(150.0));
    }

    #[test]
    fn test_vertices_and_tooltip() {
        let config = example();
        let layout = RadarLayout::compute(&config, &config.visibility(), 800.0, 500.0);

        let a = &layout.traces[0];
        assert_eq!(a.vertices.len(), 6);
        assert!(a.path.ends_with('Z'));
        // Math 120 of 150 on a 200px radius, straight up
        assert!((a.vertices[0].y - (250.0 - 160.0)).abs() < 1e-9);

        let rows = layout.tooltip_rows(1, &config.radars);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].value, "98");
        assert_eq!(rows[1].value, "130");
    }

    #[test]
    fn test_hover_sector_per_spoke() {
        let config = example();
        let layout = RadarLayout::compute(&config, &config.visibility(), 800.0, 500.0);
        assert!(layout.hover_sector(0).is_some_and(|d| d.starts_with('M')));
        assert_eq!(layout.hover_sector(6), None);
    }
}
