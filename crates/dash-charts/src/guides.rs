//! Guides shared by every chart: title, legend, tooltip, grid and axes

use crate::{chartkit::parse_css_px, colors, fallback};
use dash_core::{FontSettings, LegendEntry, LegendMarker, LegendPosition, TooltipSettings};
use dash_state::ChartState;
use leptos::prelude::*;

/// Room reserved left of the plot for value ticks and the axis label
pub const VALUE_AXIS_WIDTH: f64 = 60.0;

/// Room reserved below the plot for category ticks and the axis label
pub fn category_axis_height(rotation: f64) -> f64 {
    30.0 + rotation.to_radians().sin().abs() * 30.0
}

// ============================================================================
// TITLE
// ============================================================================

/// Centered heading above the chart; nothing when the title is empty
#[component]
pub fn ChartTitle(title: String, font_size: Option<f64>) -> impl IntoView {
    let size = font_size.unwrap_or(fallback::TITLE_FONT_SIZE);

    (!title.is_empty()).then(|| {
        view! {
            <h2
                class="chart-title"
                style=format!(
                    "font-size: {}px; text-align: center; margin-bottom: 20px; color: {};",
                    size,
                    colors::WHITE,
                )
            >
                {title}
            </h2>
        }
    })
}

// ============================================================================
// LEGEND
// ============================================================================

/// Legend rows. Clicking a row (or Enter / Space on it) toggles its series.
#[component]
pub fn ChartLegend(
    #[prop(into)] entries: Signal<Vec<LegendEntry>>,
    state: ChartState,
    position: LegendPosition,
    font_size: Option<f64>,
) -> impl IntoView {
    let size = font_size.unwrap_or(fallback::FONT_SIZE);
    let interactive = state.is_interactive();

    view! {
        <ul
            class=format!("chart-legend {}", position.css_class())
            style=format!("font-size: {}px; color: {};", size, colors::WHITE)
        >
            {move || {
                entries.get().into_iter().map(|entry| {
                    let click_key = entry.key.to_string();
                    let key_key = click_key.clone();
                    let class = if entry.inactive {
                        "legend-item inactive"
                    } else {
                        "legend-item"
                    };
                    let text_color = if entry.inactive { colors::INACTIVE } else { colors::WHITE };
                    let swatch_color = if entry.inactive {
                        colors::INACTIVE.to_string()
                    } else {
                        entry.color.clone()
                    };

                    view! {
                        <li
                            class=class
                            role=interactive.then_some("button")
                            tabindex=interactive.then_some("0")
                            aria-pressed=interactive.then(|| (!entry.inactive).to_string())
                            on:click=move |_| state.toggle(&click_key)
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if matches!(ev.key().as_str(), "Enter" | " ") {
                                    ev.prevent_default();
                                    state.toggle(&key_key);
                                }
                            }
                        >
                            <LegendSwatch
                                marker=entry.marker
                                color=swatch_color
                                size=size
                            />
                            <span class="legend-label" style=format!("color: {};", text_color)>
                                {entry.label}
                            </span>
                        </li>
                    }
                }).collect_view()
            }}
        </ul>
    }
}

#[component]
fn LegendSwatch(marker: LegendMarker, color: String, size: f64) -> impl IntoView {
    let shape = match marker {
        LegendMarker::Square => view! {
            <rect x="2" y="2" width="28" height="28" fill=color />
        }
        .into_any(),
        LegendMarker::Line => view! {
            <path d="M0,16H32" stroke=color stroke-width="4" fill="none" />
        }
        .into_any(),
        LegendMarker::Circle => view! {
            <circle cx="16" cy="16" r="14" fill=color />
        }
        .into_any(),
    };

    view! {
        <svg
            class=format!("legend-swatch {}", marker.css_class())
            width=size
            height=size
            viewBox="0 0 32 32"
        >
            {shape}
        </svg>
    }
}

// ============================================================================
// TOOLTIP
// ============================================================================

/// Tooltip settings with every gap filled
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipStyle {
    pub background: String,
    pub border_radius: f64,
    pub font_size: f64,
    pub text_color: String,
    pub cursor_color: String,
}

impl TooltipStyle {
    pub fn resolve(settings: &TooltipSettings, fallback_font: Option<f64>) -> Self {
        Self {
            background: settings
                .background_color
                .clone()
                .unwrap_or_else(|| colors::BG_PANEL.to_string()),
            border_radius: settings
                .border_radius
                .as_deref()
                .and_then(parse_css_px)
                .unwrap_or(fallback::BORDER_RADIUS),
            font_size: settings
                .font_size
                .as_deref()
                .and_then(parse_css_px)
                .or(fallback_font)
                .unwrap_or(fallback::FONT_SIZE),
            text_color: settings
                .text_color
                .clone()
                .unwrap_or_else(|| colors::WHITE.to_string()),
            cursor_color: settings
                .cursor_color
                .clone()
                .unwrap_or_else(|| colors::white_alpha(0.1)),
        }
    }
}

/// One `label : value` line in a tooltip
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipRow {
    pub label: String,
    pub value: String,
    pub color: String,
}

impl TooltipRow {
    fn text(&self) -> String {
        format!("{} : {}", self.label, self.value)
    }
}

/// Placed tooltip rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub line_height: f64,
    pub padding: f64,
}

/// Box for `lines` lines of at most `longest` characters next to `anchor`,
/// flipped to the left when it would leave `bounds`
pub fn tooltip_box(
    anchor: (f64, f64),
    lines: usize,
    longest: usize,
    font_size: f64,
    bounds: (f64, f64),
) -> TooltipBox {
    let padding = 10.0;
    let line_height = font_size * 1.4;
    let width = longest as f64 * font_size * 0.6 + padding * 2.0;
    let height = lines as f64 * line_height + padding * 2.0;

    let (ax, ay) = anchor;
    let x = if ax + 10.0 + width > bounds.0 {
        (ax - 10.0 - width).max(0.0)
    } else {
        ax + 10.0
    };
    let y = (ay - height / 2.0).min(bounds.1 - height).max(0.0);

    TooltipBox {
        x,
        y,
        width,
        height,
        line_height,
        padding,
    }
}

/// Hover box drawn inside the SVG
#[component]
pub fn ChartTooltip(
    anchor: (f64, f64),
    bounds: (f64, f64),
    #[prop(into)] title: String,
    rows: Vec<TooltipRow>,
    style: TooltipStyle,
) -> impl IntoView {
    let longest = rows
        .iter()
        .map(|r| r.text().chars().count())
        .chain(std::iter::once(title.chars().count()))
        .max()
        .unwrap_or(0);
    let has_title = !title.is_empty();
    let lines = rows.len() + usize::from(has_title);
    let b = tooltip_box(anchor, lines, longest, style.font_size, bounds);
    let first_baseline = b.y + b.padding + style.font_size;
    let row_offset = if has_title { 1.0 } else { 0.0 };

    view! {
        <g class="chart-tooltip" pointer-events="none">
            <rect
                x=b.x
                y=b.y
                width=b.width
                height=b.height
                rx=style.border_radius
                fill=style.background.clone()
                stroke=colors::TOOLTIP_BORDER
                stroke-width="1"
                style="filter: drop-shadow(0 0 10px rgba(255, 255, 255, 0.2));"
            />
            {has_title.then(|| view! {
                <text
                    x={b.x + b.padding}
                    y=first_baseline
                    fill=style.text_color.clone()
                    font-size=style.font_size
                >
                    {title.clone()}
                </text>
            })}
            {rows.into_iter().enumerate().map(|(i, row)| {
                let y = first_baseline + (i as f64 + row_offset) * b.line_height;
                view! {
                    <text
                        x={b.x + b.padding}
                        y=y
                        fill=row.color.clone()
                        font-size=style.font_size
                    >
                        {row.text()}
                    </text>
                }
            }).collect_view()}
        </g>
    }
}

// ============================================================================
// GRID & AXES
// ============================================================================

/// Grid lines at precomputed positions
#[component]
pub fn CartesianGrid(
    width: f64,
    height: f64,
    rows: Vec<f64>,
    #[prop(optional)] columns: Vec<f64>,
    #[prop(into)] color: String,
) -> impl IntoView {
    let row_color = color.clone();

    view! {
        <g class="chart-grid">
            // Horizontal lines
            {rows.into_iter().map(|y| {
                view! {
                    <line
                        x1="0" y1=y
                        x2=width y2=y
                        stroke=row_color.clone()
                        stroke-width="1"
                    />
                }
            }).collect_view()}

            // Vertical lines
            {columns.into_iter().map(|x| {
                view! {
                    <line
                        x1=x y1="0"
                        x2=x y2=height
                        stroke=color.clone()
                        stroke-width="1"
                    />
                }
            }).collect_view()}
        </g>
    }
}

/// Font sizes and color for axis ticks and titles
#[derive(Debug, Clone, PartialEq)]
pub struct AxisStyle {
    pub tick_font_size: f64,
    pub label_font_size: f64,
    pub color: String,
}

impl AxisStyle {
    pub fn from_fonts(fonts: &FontSettings) -> Self {
        Self {
            tick_font_size: fonts.axis_tick_font_size.unwrap_or(fallback::FONT_SIZE),
            label_font_size: fonts.axis_label_font_size.unwrap_or(fallback::FONT_SIZE),
            color: fonts
                .default_label_color
                .clone()
                .unwrap_or_else(|| fallback::LABEL_COLOR.to_string()),
        }
    }
}

/// Vertical value axis along the plot's left edge
#[component]
pub fn ValueAxis(
    /// (pixel y, text)
    ticks: Vec<(f64, String)>,
    height: f64,
    #[prop(into)] label: String,
    style: AxisStyle,
) -> impl IntoView {
    let label_x = -VALUE_AXIS_WIDTH + style.label_font_size;
    let label_y = height / 2.0;

    view! {
        <g class="value-axis">
            <line x1="0" y1="0" x2="0" y2=height stroke=colors::TEXT_MUTED stroke-width="1" />
            {ticks.into_iter().map(|(y, text)| {
                view! {
                    <g transform=format!("translate(0, {})", y)>
                        <line x1="-6" x2="0" stroke=colors::TEXT_MUTED />
                        <text
                            x="-9"
                            dy="0.32em"
                            text-anchor="end"
                            fill=style.color.clone()
                            font-size=style.tick_font_size
                        >
                            {text}
                        </text>
                    </g>
                }
            }).collect_view()}
            <text
                transform=format!("translate({}, {}) rotate(-90)", label_x, label_y)
                text-anchor="middle"
                fill=style.color.clone()
                font-size=style.label_font_size
            >
                {label}
            </text>
        </g>
    }
}

/// Horizontal category axis along the plot's bottom edge
#[component]
pub fn CategoryAxis(
    /// (pixel x, text)
    ticks: Vec<(f64, String)>,
    width: f64,
    /// Plot height: the axis line's y
    offset: f64,
    #[prop(optional)] rotation: f64,
    #[prop(into)] label: String,
    style: AxisStyle,
) -> impl IntoView {
    let anchor = if rotation != 0.0 { "end" } else { "middle" };
    let tick_y = offset + 8.0 + style.tick_font_size;
    let label_y = offset + category_axis_height(rotation) + style.label_font_size / 2.0;

    view! {
        <g class="category-axis">
            <line x1="0" y1=offset x2=width y2=offset stroke=colors::TEXT_MUTED stroke-width="1" />
            {ticks.into_iter().map(|(x, text)| {
                view! {
                    <g>
                        <line x1=x y1=offset x2=x y2={offset + 6.0} stroke=colors::TEXT_MUTED />
                        <text
                            x=x
                            y=tick_y
                            text-anchor=anchor
                            transform=format!("rotate({}, {}, {})", rotation, x, tick_y)
                            fill=style.color.clone()
                            font-size=style.tick_font_size
                        >
                            {text}
                        </text>
                    </g>
                }
            }).collect_view()}
            <text
                x={width / 2.0}
                y=label_y
                text-anchor="middle"
                fill=style.color.clone()
                font-size=style.label_font_size
            >
                {label}
            </text>
        </g>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tooltip_style_from_partial_settings() {
        // the bar example's group has no text color
        let settings = TooltipSettings {
            background_color: Some("#333333".into()),
            border_radius: Some("8px".into()),
            font_size: Some("14px".into()),
            text_color: None,
            cursor_color: None,
        };
        let style = TooltipStyle::resolve(&settings, Some(16.0));
        assert_eq!(style.border_radius, 8.0);
        assert_eq!(style.font_size, 14.0);
        assert_eq!(style.text_color, "#ffffff");
        assert_eq!(style.cursor_color, "rgba(255, 255, 255, 0.10)");
    }

    #[test]
    fn test_tooltip_font_falls_back_to_chart_font() {
        let style = TooltipStyle::resolve(&TooltipSettings::default(), Some(16.0));
        assert_eq!(style.font_size, 16.0);
        assert_eq!(style.background, colors::BG_PANEL);

        let style = TooltipStyle::resolve(&TooltipSettings::default(), None);
        assert_eq!(style.font_size, fallback::FONT_SIZE);
    }

    #[test]
    fn test_tooltip_box_flips_at_right_edge() {
        let inside = tooltip_box((100.0, 100.0), 2, 10, 10.0, (800.0, 400.0));
        assert_eq!(inside.x, 110.0);
        assert_eq!(inside.width, 80.0);
        assert_eq!(inside.height, 48.0);
        assert_eq!(inside.y, 76.0);

        let flipped = tooltip_box((780.0, 10.0), 2, 10, 10.0, (800.0, 400.0));
        assert_eq!(flipped.x, 690.0);
        assert_eq!(flipped.y, 0.0);
    }

    #[test]
    fn test_axis_style_fallbacks() {
        let style = AxisStyle::from_fonts(&FontSettings {
            axis_tick_font_size: Some(16.0),
            ..Default::default()
        });
        assert_eq!(style.tick_font_size, 16.0);
        assert_eq!(style.label_font_size, fallback::FONT_SIZE);
        assert_eq!(style.color, "#ffffff");
    }

    #[test]
    fn test_category_axis_height_grows_with_rotation() {
        assert_eq!(category_axis_height(0.0), 30.0);
        assert!((category_axis_height(-30.0) - 45.0).abs() < 1e-9);
    }
}
