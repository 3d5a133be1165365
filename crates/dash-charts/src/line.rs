//! Line and area chart
//!
//! Each visible series is one path through its records. Records missing the
//! series' value break the line into separate segments.

use std::sync::Arc;

use crate::{
    aspect_ratio,
    chartkit::{
        area_path, auto_domain, format_tick, LinearScale, LinePath, MonotonePath, NaturalPath,
        PathGenerator, PointScale, Scale, StepPath,
    },
    colors, container_style, fallback,
    guides::{
        category_axis_height, AxisStyle, CartesianGrid, CategoryAxis, ChartLegend, ChartTitle,
        ChartTooltip, TooltipRow, TooltipStyle, ValueAxis, VALUE_AXIS_WIDTH,
    },
    ChartDimensions, ChartMargin,
};
use dash_core::{
    ConfigMerge, LegendMarker, LegendPosition, LineChartConfig, LineChartOverrides,
    LineChartSettings, LineCurve, LineSeries, SeriesVisibility,
};
use dash_state::ChartState;
use leptos::prelude::*;

const DOT_RADIUS: f64 = 4.0;
const DOT_LABEL_OFFSET: f64 = 10.0;
const AREA_OPACITY: f64 = 0.3;

/// Path generator for an interpolation kind
pub fn curve_generator(curve: LineCurve) -> Box<dyn PathGenerator> {
    match curve {
        LineCurve::Step => Box::new(StepPath),
        LineCurve::Linear => Box::new(LinePath),
        LineCurve::Natural => Box::new(NaturalPath),
        LineCurve::Monotone => Box::new(MonotonePath),
    }
}

// ============================================================================
// STYLE
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct DotStyle {
    pub color: String,
    pub radius: f64,
    pub stroke_width: f64,
}

/// Paint for one line
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub stroke: String,
    pub stroke_width: f64,
    pub curve: LineCurve,
    pub dot: Option<DotStyle>,
    /// Set when value labels are drawn above the dots
    pub dot_label_color: Option<String>,
    pub fill_area: bool,
}

impl LineStyle {
    pub fn resolve(series: &LineSeries, settings: &LineChartSettings) -> Self {
        Self {
            stroke: series.color.clone(),
            stroke_width: settings.stroke_width.unwrap_or(fallback::STROKE_WIDTH),
            curve: series.interpolation(),
            dot: series.show_dots.then(|| DotStyle {
                color: series.dot_color.clone().unwrap_or_else(|| series.color.clone()),
                radius: DOT_RADIUS,
                stroke_width: 1.0,
            }),
            dot_label_color: series.show_dot_labels.then(|| {
                series
                    .dot_label_color
                    .clone()
                    .unwrap_or_else(|| colors::WHITE.to_string())
            }),
            fill_area: series.fill_area,
        }
    }
}

// ============================================================================
// LAYOUT
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct LinePoint {
    pub record: usize,
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

/// One drawn series
#[derive(Debug, Clone, PartialEq)]
pub struct LineTrace {
    pub series: usize,
    pub points: Vec<LinePoint>,
    pub path: String,
    /// Closed fill down to the baseline, for area series
    pub area: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout {
    pub width: f64,
    pub height: f64,
    /// (pixel x, text) per record
    pub x_ticks: Vec<(f64, String)>,
    pub y_ticks: Vec<(f64, String)>,
    pub traces: Vec<LineTrace>,
}

impl LineLayout {
    pub fn compute(
        config: &LineChartConfig,
        visibility: &SeriesVisibility,
        width: f64,
        height: f64,
    ) -> Self {
        let visible: Vec<(usize, &LineSeries)> = config
            .lines
            .iter()
            .enumerate()
            .filter(|(_, s)| visibility.is_visible(&s.key))
            .collect();

        let auto = auto_domain(
            visible
                .iter()
                .flat_map(|(_, s)| config.data.iter().filter_map(move |r| r.number(&s.key))),
        );
        let y_min = config.y_axis_min.resolve(auto.0);
        let y_max = config.y_axis_max.resolve(auto.1);
        let y_scale = LinearScale::new().domain(y_min, y_max).range(height, 0.0);
        let baseline = y_scale
            .scale(0.0_f64.clamp(y_min.min(y_max), y_max.max(y_min)))
            .clamp(0.0, height);

        let x_scale = PointScale::new(config.data.len()).range(0.0, width);

        let traces = visible
            .iter()
            .map(|&(si, series)| {
                let generator = curve_generator(series.interpolation());

                let mut segments: Vec<Vec<LinePoint>> = vec![Vec::new()];
                for (ri, record) in config.data.iter().enumerate() {
                    match record.number(&series.key) {
                        Some(value) => {
                            if let Some(segment) = segments.last_mut() {
                                segment.push(LinePoint {
                                    record: ri,
                                    value,
                                    x: x_scale.scale(ri),
                                    y: y_scale.scale(value),
                                });
                            }
                        }
                        None if segments.last().is_some_and(|s| !s.is_empty()) => {
                            segments.push(Vec::new())
                        }
                        None => {}
                    }
                }
                segments.retain(|s| !s.is_empty());

                let coords: Vec<Vec<(f64, f64)>> = segments
                    .iter()
                    .map(|s| s.iter().map(|p| (p.x, p.y)).collect())
                    .collect();
                let path = coords.iter().map(|c| generator.generate(c)).collect::<String>();
                let area = series.fill_area.then(|| {
                    coords
                        .iter()
                        .map(|c| area_path(generator.as_ref(), c, baseline))
                        .collect::<String>()
                });

                LineTrace {
                    series: si,
                    points: segments.into_iter().flatten().collect(),
                    path,
                    area,
                }
            })
            .collect();

        let x_ticks = config
            .data
            .iter()
            .enumerate()
            .map(|(i, r)| (x_scale.scale(i), r.label(&config.x_key).unwrap_or_default()))
            .collect();

        let y_ticks = y_scale
            .nice_ticks(5)
            .into_iter()
            .map(|t| (y_scale.scale(t), format_tick(t)))
            .collect();

        Self {
            width,
            height,
            x_ticks,
            y_ticks,
            traces,
        }
    }

    /// Horizontal extent `(x, width)` of the hover column around a record
    pub fn column(&self, record: usize) -> Option<(f64, f64)> {
        let x = self.x_ticks.get(record)?.0;
        let left = match record.checked_sub(1).and_then(|i| self.x_ticks.get(i)) {
            Some(&(prev, _)) => (prev + x) / 2.0,
            None => 0.0,
        };
        let right = match self.x_ticks.get(record + 1) {
            Some(&(next, _)) => (x + next) / 2.0,
            None => self.width,
        };
        Some((left, right - left))
    }

    pub fn tooltip_rows(&self, record: usize, series: &[LineSeries]) -> Vec<TooltipRow> {
        self.traces
            .iter()
            .filter_map(|t| {
                let point = t.points.iter().find(|p| p.record == record)?;
                let s = series.get(t.series)?;
                Some(TooltipRow {
                    label: s.label.clone(),
                    value: format_tick(point.value),
                    color: s.color.clone(),
                })
            })
            .collect()
    }
}

// ============================================================================
// COMPONENT
// ============================================================================

/// Line chart component. Series with `fill_area` draw as areas.
#[component]
pub fn LineChart(#[prop(optional)] config: Option<LineChartOverrides>) -> impl IntoView {
    let config = Arc::new(LineChartConfig::from_overrides(config.unwrap_or_default()));
    tracing::debug!(
        chart = "line",
        series = config.lines.len(),
        records = config.data.len(),
        "Mounting chart"
    );

    let state = ChartState::new(config.visibility());

    let dims = ChartDimensions::with_aspect(config.width, aspect_ratio(config.maintain_aspect_ratio))
        .with_margin(
            ChartMargin::from_settings(&config.margin)
                .with_axes(VALUE_AXIS_WIDTH, category_axis_height(0.0)),
        );
    let plot_w = dims.inner_width();
    let plot_h = dims.inner_height();

    let layout = {
        let config = Arc::clone(&config);
        Memo::new(move |_| state.visibility.with(|v| LineLayout::compute(&config, v, plot_w, plot_h)))
    };

    let styles: Arc<Vec<LineStyle>> = Arc::new(
        config
            .lines
            .iter()
            .map(|s| LineStyle::resolve(s, &config.chart_settings))
            .collect(),
    );

    let fonts = config.font_settings.clone();
    let axis_style = AxisStyle::from_fonts(&fonts);
    let tooltip_style = TooltipStyle::resolve(&config.tooltip_settings, fonts.tooltip_font_size);
    let cursor_color = tooltip_style.cursor_color.clone();
    let label_size = fonts.data_label_font_size.unwrap_or(fallback::FONT_SIZE);
    let show_grid = config.chart_settings.show_gridlines == Some(true);
    let grid_color = config
        .chart_settings
        .gridline_color
        .clone()
        .unwrap_or_else(|| colors::GRID.to_string());
    let show_tooltip = config.show_tooltip;
    let tooltip_series = Arc::new(config.lines.clone());
    let x_label = config.x_axis_label.clone();
    let y_label = config.y_axis_label.clone();

    let legend = config.show_legend.then(|| {
        let series = config.lines.clone();
        let entries = Signal::derive(move || state.legend_entries(&series, LegendMarker::Line));
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
        <div class="chart line-chart" style=container_style(config.responsive, config.width, config.height)>
            <ChartTitle title=config.title.clone() font_size=fonts.title_font_size />
            <div class=format!("chart-body {}", config.legend_position.css_class())>
                {legend_before}
                <svg
                    class="chart-svg"
                    viewBox=dims.viewbox()
                    preserveAspectRatio="xMidYMid meet"
                    style="width: 100%; height: 100%; overflow: visible;"
                >
                    <g transform=dims.inner_transform() on:mouseleave=move |_| state.clear_hover()>
                        {move || show_grid.then(|| {
                            let (rows, columns) = layout.with(|l| {
                                (
                                    l.y_ticks.iter().map(|(y, _)| *y).collect::<Vec<_>>(),
                                    l.x_ticks.iter().map(|(x, _)| *x).collect::<Vec<_>>(),
                                )
                            });
                            view! {
                                <CartesianGrid
                                    width=plot_w
                                    height=plot_h
                                    rows=rows
                                    columns=columns
                                    color=grid_color.clone()
                                />
                            }
                        })}

                        // Cursor
                        {move || {
                            let index = state.hovered.get()?;
                            let x = layout.with(|l| l.x_ticks.get(index).map(|t| t.0))?;
                            Some(view! {
                                <line
                                    x1=x y1="0"
                                    x2=x y2=plot_h
                                    stroke=cursor_color.clone()
                                    stroke-width="1"
                                />
                            })
                        }}

                        // Areas under the lines
                        {
                            let styles = Arc::clone(&styles);
                            move || layout.with(|l| {
                                l.traces.iter().filter_map(|t| {
                                    let area = t.area.clone()?;
                                    Some(view! {
                                        <path
                                            class="area"
                                            d=area
                                            fill=styles[t.series].stroke.clone()
                                            fill-opacity=AREA_OPACITY
                                            stroke="none"
                                        />
                                    })
                                }).collect_view()
                            })
                        }

                        // Lines, dots and dot labels
                        {
                            let styles = Arc::clone(&styles);
                            move || layout.with(|l| {
                                l.traces.iter().map(|t| {
                                    let style = styles[t.series].clone();
                                    let dots = style.dot.clone().map(|dot| {
                                        t.points.iter().map(|p| view! {
                                            <circle
                                                cx=p.x
                                                cy=p.y
                                                r=dot.radius
                                                fill=dot.color.clone()
                                                stroke=dot.color.clone()
                                                stroke-width=dot.stroke_width
                                            />
                                        }).collect_view()
                                    });
                                    let labels = style.dot_label_color.clone().map(|color| {
                                        t.points.iter().map(|p| view! {
                                            <text
                                                x=p.x
                                                y={p.y - DOT_LABEL_OFFSET}
                                                text-anchor="middle"
                                                fill=color.clone()
                                                font-size=label_size
                                            >
                                                {format_tick(p.value)}
                                            </text>
                                        }).collect_view()
                                    });

                                    view! {
                                        <g class="line-series">
                                            <path
                                                class="line"
                                                d=t.path.clone()
                                                fill="none"
                                                stroke=style.stroke
                                                stroke-width=style.stroke_width
                                            />
                                            {dots}
                                            {labels}
                                        </g>
                                    }
                                }).collect_view()
                            })
                        }

                        {
                            let axis_style = axis_style.clone();
                            move || {
                                let ticks = layout.with(|l| l.y_ticks.clone());
                                view! {
                                    <ValueAxis
                                        ticks=ticks
                                        height=plot_h
                                        label=y_label.clone()
                                        style=axis_style.clone()
                                    />
                                }
                            }
                        }
                        {move || {
                            let ticks = layout.with(|l| l.x_ticks.clone());
                            view! {
                                <CategoryAxis
                                    ticks=ticks
                                    width=plot_w
                                    offset=plot_h
                                    label=x_label.clone()
                                    style=axis_style.clone()
                                />
                            }
                        }}

                        // Hover targets
                        {move || show_tooltip.then(|| layout.with(|l| {
                            (0..l.x_ticks.len()).filter_map(|i| {
                                let (x, width) = l.column(i)?;
                                Some(view! {
                                    <rect
                                        class="hover-target"
                                        x=x
                                        y="0"
                                        width=width
                                        height=plot_h
                                        fill="transparent"
                                        on:mouseenter=move |_| state.hover(i)
                                    />
                                })
                            }).collect_view()
                        }))}

                        {move || {
                            let index = state.hovered.get()?;
                            let ((x, title), rows) = layout.with(|l| {
                                l.x_ticks.get(index).cloned().map(|t| (t, l.tooltip_rows(index, &tooltip_series)))
                            })?;
                            show_tooltip.then(|| view! {
                                <ChartTooltip
                                    anchor=(x, plot_h / 3.0)
                                    bounds=(plot_w, plot_h)
                                    title=title
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
