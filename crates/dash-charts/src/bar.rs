//! Bar chart with stacking, gradients, threshold lines and annotations
//!
//! Stacked series share one bar per category; every unstacked series gets
//! its own bar beside the stack.

use std::sync::Arc;

use crate::{
    aspect_ratio,
    chartkit::{auto_domain, format_tick, BandScale, LinearScale, Scale},
    colors, container_style, fallback,
    guides::{
        category_axis_height, AxisStyle, CartesianGrid, CategoryAxis, ChartLegend, ChartTitle,
        ChartTooltip, TooltipRow, TooltipStyle, ValueAxis, VALUE_AXIS_WIDTH,
    },
    ChartDimensions, ChartMargin,
};
use dash_core::{
    BarChartConfig, BarChartOverrides, BarChartSettings, BarSeries, ConfigMerge,
    DataLabelPosition, DataValue, FontSettings, LegendMarker, LegendPosition, OutlineType,
    SeriesVisibility,
};
use dash_state::ChartState;
use leptos::prelude::*;

/// Gap between side-by-side bars in one category
const BAR_GAP: f64 = 4.0;
const ANNOTATION_RADIUS: f64 = 5.0;

// ============================================================================
// STYLE
// ============================================================================

/// Paint for one series' bars
#[derive(Debug, Clone, PartialEq)]
pub struct BarStyle {
    pub fill: String,
    /// `None` draws no outline
    pub stroke: Option<String>,
    pub stroke_width: f64,
    pub dash_array: &'static str,
    pub radius: f64,
    pub label_color: String,
}

impl BarStyle {
    /// Series values win over chart-wide settings, which win over fallbacks.
    /// `gradient` is the id of the series' gradient definition, if any.
    pub fn resolve(
        series: &BarSeries,
        settings: &BarChartSettings,
        gradient: Option<String>,
        fonts: &FontSettings,
    ) -> Self {
        let fill = match gradient {
            Some(id) => format!("url(#{})", id),
            None => series.color.clone(),
        };

        let stroke = if settings.outline == Some(false) {
            None
        } else {
            series
                .outline_color
                .clone()
                .or_else(|| settings.outline_color.clone())
        };

        Self {
            fill,
            stroke,
            stroke_width: series
                .outline_width
                .or(settings.outline_width)
                .unwrap_or(fallback::STROKE_WIDTH),
            dash_array: match series.outline_type {
                OutlineType::Dashed => "5 5",
                OutlineType::Solid => "none",
            },
            radius: series
                .border_radius
                .or(settings.border_radius)
                .unwrap_or(fallback::BORDER_RADIUS),
            label_color: series
                .label_color
                .clone()
                .or_else(|| fonts.default_label_color.clone())
                .unwrap_or_else(|| fallback::LABEL_COLOR.to_string()),
        }
    }
}

/// Where a bar's value label is drawn
#[derive(Debug, Clone, PartialEq)]
pub struct DataLabelPlacement {
    pub x: f64,
    pub y: f64,
    pub dy: f64,
    pub baseline: &'static str,
    pub transform: String,
}

impl DataLabelPlacement {
    pub fn resolve(bar: &BarRect, position: DataLabelPosition, rotation: f64) -> Self {
        let cx = bar.x + bar.width / 2.0;
        let cy = bar.y + bar.height / 2.0;

        let (y, dy, baseline) = match position {
            DataLabelPosition::Inside => (cy, 0.0, "middle"),
            DataLabelPosition::Top => (bar.y - 10.0, -6.0, "bottom"),
        };

        Self {
            x: cx,
            y,
            dy,
            baseline,
            transform: format!("rotate({}, {}, {})", rotation, cx, cy),
        }
    }
}

// ============================================================================
// LAYOUT
// ============================================================================

/// One drawn bar, in plot coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    /// Index into the declared series
    pub series: usize,
    /// Index into the sorted records
    pub record: usize,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Draw order; front-stacked series are raised by 100
    pub z: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBand {
    pub label: String,
    pub x: f64,
    pub width: f64,
}

impl CategoryBand {
    pub fn center(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdMark {
    pub y: f64,
    pub label: String,
    pub color: String,
    pub thickness: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationMark {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub color: String,
}

/// Everything the bar chart draws for one visibility state
#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub width: f64,
    pub height: f64,
    pub bands: Vec<CategoryBand>,
    /// Sorted by `z`
    pub bars: Vec<BarRect>,
    pub y_ticks: Vec<(f64, String)>,
    pub thresholds: Vec<ThresholdMark>,
    pub annotations: Vec<AnnotationMark>,
}

impl BarLayout {
    pub fn compute(
        config: &BarChartConfig,
        visibility: &SeriesVisibility,
        width: f64,
        height: f64,
    ) -> Self {
        let records = config.sorted_data();
        let visible: Vec<(usize, &BarSeries)> = config
            .scoring_types
            .iter()
            .enumerate()
            .filter(|(_, s)| visibility.is_visible(&s.key))
            .collect();

        // stacked series share the slot of the first one; others get their own
        let mut slots = 0;
        let mut stack_slot = None;
        let slot_of: Vec<usize> = visible
            .iter()
            .map(|(_, s)| {
                if s.stacked {
                    *stack_slot.get_or_insert_with(|| {
                        slots += 1;
                        slots - 1
                    })
                } else {
                    slots += 1;
                    slots - 1
                }
            })
            .collect();

        // (series, record, start, end) in data units
        let mut spans = Vec::new();
        for (ri, record) in records.iter().enumerate() {
            let (mut up, mut down) = (0.0, 0.0);
            for &(si, series) in &visible {
                let Some(value) = record.number(&series.key) else {
                    continue;
                };
                let (start, end) = if !series.stacked {
                    (0.0, value)
                } else if value >= 0.0 {
                    up += value;
                    (up - value, up)
                } else {
                    down += value;
                    (down - value, down)
                };
                spans.push((si, ri, value, start, end));
            }
        }

        let auto = auto_domain(spans.iter().flat_map(|&(_, _, _, s, e)| [s, e]));
        let y_min = config.y_axis_min.resolve(auto.0);
        let y_max = config.y_axis_max.resolve(auto.1);
        let y_scale = LinearScale::new().domain(y_min, y_max).range(height, 0.0);
        let in_domain = |v: f64| v >= y_min.min(y_max) && v <= y_max.max(y_min);

        let x_scale = BandScale::new(records.len())
            .range(0.0, width)
            .padding(0.1, 0.1);
        let bandwidth = x_scale.bandwidth();
        let slot_width = bandwidth / slots.max(1) as f64;
        let gap = if slots > 1 { BAR_GAP } else { 0.0 };

        let mut bars: Vec<BarRect> = spans
            .into_iter()
            .map(|(si, ri, value, start, end)| {
                let slot = visible
                    .iter()
                    .position(|&(i, _)| i == si)
                    .map_or(0, |p| slot_of[p]);
                let top = y_scale.scale(start.max(end)).clamp(0.0, height);
                let bottom = y_scale.scale(start.min(end)).clamp(0.0, height);
                let in_front = config.scoring_types[si].stack_in_front;

                BarRect {
                    series: si,
                    record: ri,
                    value,
                    x: x_scale.scale(ri) + slot as f64 * slot_width + gap / 2.0,
                    y: top,
                    width: (slot_width - gap).max(1.0),
                    height: bottom - top,
                    z: if in_front { si + 100 } else { si },
                }
            })
            .collect();
        bars.sort_by_key(|b| b.z);

        let bands = records
            .iter()
            .enumerate()
            .map(|(i, r)| CategoryBand {
                label: r.label(&config.x_key).unwrap_or_default(),
                x: x_scale.scale(i),
                width: bandwidth,
            })
            .collect::<Vec<_>>();

        let y_ticks = y_scale
            .nice_ticks(5)
            .into_iter()
            .map(|t| (y_scale.scale(t), format_tick(t)))
            .collect();

        let thresholds = config
            .threshold_lines
            .iter()
            .filter(|t| in_domain(t.y))
            .map(|t| ThresholdMark {
                y: y_scale.scale(t.y),
                label: t.label.clone(),
                color: t.color.clone(),
                thickness: t.thickness.unwrap_or(1.0),
            })
            .collect();

        let annotations = config
            .annotations
            .iter()
            .filter(|a| in_domain(a.y))
            .filter_map(|a| {
                let index = records
                    .iter()
                    .position(|r| r.get(&config.x_key).is_some_and(|v| same_category(v, &a.x)))?;
                Some(AnnotationMark {
                    x: bands[index].center(),
                    y: y_scale.scale(a.y),
                    text: a.text.clone(),
                    color: a.color.clone(),
                })
            })
            .collect();

        Self {
            width,
            height,
            bands,
            bars,
            y_ticks,
            thresholds,
            annotations,
        }
    }

    /// Tooltip lines for one category, in series declaration order
    pub fn tooltip_rows(&self, record: usize, series: &[BarSeries]) -> Vec<TooltipRow> {
        let mut bars: Vec<&BarRect> = self.bars.iter().filter(|b| b.record == record).collect();
        bars.sort_by_key(|b| b.series);
        bars.into_iter()
            .filter_map(|b| {
                let s = series.get(b.series)?;
                Some(TooltipRow {
                    label: s.label.clone(),
                    value: format_tick(b.value),
                    color: s.color.clone(),
                })
            })
            .collect()
    }
}

fn same_category(a: &DataValue, b: &DataValue) -> bool {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => a.as_str().is_some() && a.as_str() == b.as_str(),
    }
}

// ============================================================================
// COMPONENT
// ============================================================================

/// Bar chart component
#[component]
pub fn BarChart(#[prop(optional)] config: Option<BarChartOverrides>) -> impl IntoView {
    let config = Arc::new(BarChartConfig::from_overrides(config.unwrap_or_default()));
    tracing::debug!(
        chart = "bar",
        series = config.scoring_types.len(),
        records = config.data.len(),
        "Mounting chart"
    );

    let state = ChartState::new(config.visibility());

    let dims = ChartDimensions::with_aspect(config.width, aspect_ratio(config.maintain_aspect_ratio))
        .with_margin(
            ChartMargin::from_settings(&config.margin)
                .with_axes(VALUE_AXIS_WIDTH, category_axis_height(config.x_axis_label_rotation)),
        );
    let plot_w = dims.inner_width();
    let plot_h = dims.inner_height();

    let layout = {
        let config = Arc::clone(&config);
        Memo::new(move |_| state.visibility.with(|v| BarLayout::compute(&config, v, plot_w, plot_h)))
    };

    let styles: Arc<Vec<BarStyle>> = Arc::new(
        config
            .scoring_types
            .iter()
            .map(|s| {
                BarStyle::resolve(
                    s,
                    &config.chart_settings,
                    config.gradient_id(&s.key),
                    &config.font_settings,
                )
            })
            .collect(),
    );

    let fonts = config.font_settings.clone();
    let axis_style = AxisStyle::from_fonts(&fonts);
    let tooltip_style = TooltipStyle::resolve(&config.tooltip_settings, fonts.tooltip_font_size);
    let cursor_color = tooltip_style.cursor_color.clone();
    let label_size = fonts.data_label_font_size.unwrap_or(fallback::FONT_SIZE);
    let threshold_size = fonts.threshold_font_size.unwrap_or(fallback::FONT_SIZE);
    let annotation_size = fonts.annotation_font_size.unwrap_or(fallback::FONT_SIZE);
    let show_grid = config.chart_settings.show_gridlines == Some(true);
    let grid_color = config
        .chart_settings
        .gridline_color
        .clone()
        .unwrap_or_else(|| colors::GRID.to_string());
    let show_labels = config.show_data_labels;
    let label_position = config.data_label_position;
    let label_rotation = config.data_label_rotation;
    let x_rotation = config.x_axis_label_rotation;
    let show_tooltip = config.show_tooltip;

    let legend = config.show_legend.then(|| {
        let series = config.scoring_types.clone();
        let entries = Signal::derive(move || state.legend_entries(&series, LegendMarker::Square));
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

    let gradients = config
        .gradient_fills
        .iter()
        .map(|(key, fill)| {
            view! {
                <linearGradient id=config.gradient_id(key).unwrap_or_default() x1="0" y1="0" x2="0" y2="1">
                    <stop offset="5%" stop-color=fill.start.clone() stop-opacity="0.8" />
                    <stop offset="95%" stop-color=fill.end.clone() stop-opacity="0.8" />
                </linearGradient>
            }
        })
        .collect_view();

    let tooltip_series = Arc::new(config.scoring_types.clone());
    let x_label = config.x_axis_label.clone();
    let y_label = config.y_axis_label.clone();

    view! {
        <div class="chart bar-chart" style=container_style(config.responsive, config.width, config.height)>
            <ChartTitle title=config.title.clone() font_size=fonts.title_font_size />
            <div class=format!("chart-body {}", config.legend_position.css_class())>
                {legend_before}
                <svg
                    class="chart-svg"
                    viewBox=dims.viewbox()
                    preserveAspectRatio="xMidYMid meet"
                    style="width: 100%; height: 100%; overflow: visible;"
                >
                    <defs>{gradients}</defs>

                    <g transform=dims.inner_transform() on:mouseleave=move |_| state.clear_hover()>
                        // Grid lines
                        {move || show_grid.then(|| {
                            let rows = layout.with(|l| l.y_ticks.iter().map(|(y, _)| *y).collect::<Vec<_>>());
                            view! {
                                <CartesianGrid width=plot_w height=plot_h rows=rows color=grid_color.clone() />
                            }
                        })}

                        // Hovered category
                        {move || {
                            state.hovered.get().and_then(|i| layout.with(|l| l.bands.get(i).cloned())).map(|band| {
                                view! {
                                    <rect
                                        x=band.x
                                        y="0"
                                        width=band.width
                                        height=plot_h
                                        fill=cursor_color.clone()
                                    />
                                }
                            })
                        }}

                        // Bars
                        {
                            let styles = Arc::clone(&styles);
                            move || layout.with(|l| {
                                l.bars.iter().map(|bar| {
                                    let style = styles[bar.series].clone();
                                    view! {
                                        <rect
                                            class="bar"
                                            x=bar.x
                                            y=bar.y
                                            width=bar.width
                                            height=bar.height
                                            rx=style.radius
                                            ry=style.radius
                                            fill=style.fill
                                            fill-opacity="1"
                                            stroke=style.stroke.unwrap_or_else(|| "none".to_string())
                                            stroke-width=style.stroke_width
                                            stroke-dasharray=style.dash_array
                                        />
                                    }
                                }).collect_view()
                            })
                        }

                        // Data labels
                        {
                            let styles = Arc::clone(&styles);
                            move || show_labels.then(|| layout.with(|l| {
                                l.bars.iter().map(|bar| {
                                    let place = DataLabelPlacement::resolve(bar, label_position, label_rotation);
                                    view! {
                                        <text
                                            class="bar-label"
                                            x=place.x
                                            y=place.y
                                            dy=place.dy
                                            text-anchor="middle"
                                            alignment-baseline=place.baseline
                                            transform=place.transform
                                            fill=styles[bar.series].label_color.clone()
                                            font-size=label_size
                                        >
                                            {format_tick(bar.value)}
                                        </text>
                                    }
                                }).collect_view()
                            }))
                        }

                        // Threshold lines
                        {move || layout.with(|l| {
                            l.thresholds.iter().map(|t| {
                                view! {
                                    <g class="threshold">
                                        <line
                                            x1="0" y1=t.y
                                            x2=plot_w y2=t.y
                                            stroke=t.color.clone()
                                            stroke-width=t.thickness
                                        />
                                        <text
                                            x={plot_w / 2.0}
                                            y={t.y - 6.0}
                                            text-anchor="middle"
                                            fill=colors::WHITE
                                            font-size=threshold_size
                                        >
                                            {t.label.clone()}
                                        </text>
                                    </g>
                                }
                            }).collect_view()
                        })}

                        // Annotations
                        {move || layout.with(|l| {
                            l.annotations.iter().map(|a| {
                                view! {
                                    <g class="annotation">
                                        <circle
                                            cx=a.x
                                            cy=a.y
                                            r=ANNOTATION_RADIUS
                                            fill=colors::WHITE
                                            stroke=a.color.clone()
                                        />
                                        <text
                                            x=a.x
                                            y={a.y - ANNOTATION_RADIUS - 6.0}
                                            text-anchor="middle"
                                            fill=colors::WHITE
                                            font-size=annotation_size
                                        >
                                            {a.text.clone()}
                                        </text>
                                    </g>
                                }
                            }).collect_view()
                        })}

                        // Axes
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
                            let ticks = layout.with(|l| {
                                l.bands.iter().map(|b| (b.center(), b.label.clone())).collect::<Vec<_>>()
                            });
                            view! {
                                <CategoryAxis
                                    ticks=ticks
                                    width=plot_w
                                    offset=plot_h
                                    rotation=x_rotation
                                    label=x_label.clone()
                                    style=axis_style.clone()
                                />
                            }
                        }}

                        // Hover targets
                        {move || show_tooltip.then(|| layout.with(|l| {
                            l.bands.iter().enumerate().map(|(i, band)| {
                                view! {
                                    <rect
                                        class="hover-target"
                                        x=band.x
                                        y="0"
                                        width=band.width
                                        height=plot_h
                                        fill="transparent"
                                        on:mouseenter=move |_| state.hover(i)
                                    />
                                }
                            }).collect_view()
                        }))}

                        // Tooltip
                        {move || {
                            let index = state.hovered.get()?;
                            let (band, rows) = layout.with(|l| {
                                l.bands.get(index).cloned().map(|b| (b, l.tooltip_rows(index, &tooltip_series)))
                            })?;
                            let anchor = (band.center(), plot_h / 3.0);
                            show_tooltip.then(|| view! {
                                <ChartTooltip
                                    anchor=anchor
                                    bounds=(plot_w, plot_h)
                                    title=band.label
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
    use dash_core::{presets, AxisBound, Record};

    fn example() -> BarChartConfig {
        BarChartConfig::from_overrides(presets::bar_graph_config())
    }

    #[test]
    fn test_style_uses_gradient_and_series_outline() {
        let config = example();
        let series = &config.scoring_types[1];
        let style = BarStyle::resolve(
            series,
            &config.chart_settings,
            config.gradient_id(&series.key),
            &config.font_settings,
        );
        assert_eq!(style.fill, "url(#gradient-scoreTypeB)");
        assert_eq!(style.stroke.as_deref(), Some("#ff0000"));
        assert_eq!(style.stroke_width, 2.0);
        assert_eq!(style.dash_array, "5 5");
        assert_eq!(style.radius, 5.0);
    }

    #[test]
    fn test_style_falls_back_to_chart_settings() {
        let series = BarSeries::new("a", "A", "#123456");
        let config = BarChartConfig::default();
        let style = BarStyle::resolve(&series, &config.chart_settings, None, &config.font_settings);
        assert_eq!(style.fill, "#123456");
        assert_eq!(style.stroke.as_deref(), Some("#ffffff"));
        assert_eq!(style.stroke_width, 1.0);
        assert_eq!(style.dash_array, "none");
        assert_eq!(style.radius, 4.0);
        assert_eq!(style.label_color, "#ffffff");

        let no_outline = BarChartSettings {
            outline: Some(false),
            ..config.chart_settings.clone()
        };
        let style = BarStyle::resolve(&series, &no_outline, None, &config.font_settings);
        assert_eq!(style.stroke, None);
    }

    #[test]
    fn test_style_after_settings_group_replaced() {
        // the example's chartSettings only sets gridlines
        let series = BarSeries::new("a", "A", "#123456");
        let config = example();
        let style = BarStyle::resolve(&series, &config.chart_settings, None, &FontSettings::default());
        assert_eq!(style.stroke, None);
        assert_eq!(style.radius, fallback::BORDER_RADIUS);
        assert_eq!(style.label_color, fallback::LABEL_COLOR);
    }

    #[test]
    fn test_example_stacks_in_one_slot() {
        let config = example();
        let layout = BarLayout::compute(&config, &config.visibility(), 400.0, 300.0);

        assert_eq!(layout.bands.len(), 4);
        assert_eq!(layout.bars.len(), 12);
        let bandwidth = layout.bands[0].width;
        assert!(layout.bars.iter().all(|b| (b.width - bandwidth).abs() < 1e-9));

        // team 1: A 0..90, B 90..150, C 150..235 on a 0..300 axis, 1px per unit
        let team1: Vec<&BarRect> = layout.bars.iter().filter(|b| b.record == 0).collect();
        assert_eq!(team1[0].series, 0);
        assert!((team1[0].y - 210.0).abs() < 1e-9);
        assert!((team1[0].height - 90.0).abs() < 1e-9);
        assert!((team1[1].y - 150.0).abs() < 1e-9);
        assert!((team1[2].y - 65.0).abs() < 1e-9);
    }

    #[test]
    fn test_front_series_draw_last() {
        let config = example();
        let layout = BarLayout::compute(&config, &config.visibility(), 400.0, 300.0);
        let order: Vec<usize> = layout.bars.iter().map(|b| b.series).collect();
        assert_eq!(&order[..4], &[0, 0, 0, 0]);
        assert!(layout.bars.windows(2).all(|w| w[0].z <= w[1].z));
    }

    #[test]
    fn test_hidden_series_leaves_stack() {
        let config = example();
        let mut visibility = config.visibility();
        visibility.toggle("scoreTypeB");
        let layout = BarLayout::compute(&config, &visibility, 400.0, 300.0);

        assert_eq!(layout.bars.len(), 8);
        assert!(layout.bars.iter().all(|b| b.series != 1));
        // team 1's C now sits directly on A: 90..175
        let c = layout
            .bars
            .iter()
            .find(|b| b.record == 0 && b.series == 2)
            .map(|b| b.y);
        assert!(c.is_some_and(|y| (y - 125.0).abs() < 1e-9));
    }

    #[test]
    fn test_unstacked_series_get_own_slots() {
        let config = BarChartConfig {
            data: vec![Record::new().with("team", 1).with("a", 10).with("b", 20)],
            scoring_types: vec![BarSeries::new("a", "A", "#f00"), BarSeries::new("b", "B", "#0f0")],
            ..Default::default()
        };
        let layout = BarLayout::compute(&config, &config.visibility(), 400.0, 300.0);
        assert_eq!(layout.bars.len(), 2);
        assert!(layout.bars[1].x > layout.bars[0].x + layout.bars[0].width);
    }

    #[test]
    fn test_thresholds_and_annotations_outside_domain_are_dropped() {
        let config = example();
        let layout = BarLayout::compute(&config, &config.visibility(), 400.0, 300.0);

        assert_eq!(layout.thresholds.len(), 1);
        assert!((layout.thresholds[0].y - 130.0).abs() < 1e-9);
        assert_eq!(layout.thresholds[0].thickness, 3.0);

        // "Lowest Score" sits at -70, below the fixed 0..300 axis
        assert_eq!(layout.annotations.len(), 1);
        assert_eq!(layout.annotations[0].text, "Highest Score");
        assert_eq!(layout.annotations[0].x, layout.bands[1].center());
    }

    #[test]
    fn test_auto_domain_follows_visible_data() {
        let config = BarChartConfig {
            y_axis_max: AxisBound::Auto,
            ..example()
        };
        let all = BarLayout::compute(&config, &config.visibility(), 400.0, 300.0);
        assert_eq!(all.y_ticks.last().map(|t| t.1.as_str()), Some("300"));

        let mut visibility = config.visibility();
        visibility.toggle("scoreTypeB");
        visibility.toggle("scoreTypeC");
        let only_a = BarLayout::compute(&config, &visibility, 400.0, 300.0);
        assert_eq!(only_a.y_ticks.last().map(|t| t.1.as_str()), Some("100"));
    }

    #[test]
    fn test_data_label_placement() {
        let bar = BarRect {
            series: 0,
            record: 0,
            value: 90.0,
            x: 10.0,
            y: 100.0,
            width: 20.0,
            height: 50.0,
            z: 0,
        };
        let inside = DataLabelPlacement::resolve(&bar, DataLabelPosition::Inside, 0.0);
        assert_eq!((inside.x, inside.y, inside.dy), (20.0, 125.0, 0.0));
        assert_eq!(inside.baseline, "middle");

        let top = DataLabelPlacement::resolve(&bar, DataLabelPosition::Top, 45.0);
        assert_eq!((top.y, top.dy), (90.0, -6.0));
        assert_eq!(top.baseline, "bottom");
        assert_eq!(top.transform, "rotate(45, 20, 125)");
    }

    #[test]
    fn test_tooltip_rows_skip_hidden_series() {
        let config = example();
        let mut visibility = config.visibility();
        visibility.toggle("scoreTypeA");
        let layout = BarLayout::compute(&config, &visibility, 400.0, 300.0);

        let rows = layout.tooltip_rows(0, &config.scoring_types);
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Type B", "Type C"]);
        assert_eq!(rows[0].value, "60");
    }
}
