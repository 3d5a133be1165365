//! Example configurations shown on the dashboard page

use std::collections::BTreeMap;

use crate::{
    Annotation, AxisBound, BarChartOverrides, BarChartSettings, BarSeries, DataLabelPosition,
    FontSettings, GradientFill, GridType, LegendPosition, LineChartOverrides, LineChartSettings,
    LineCurve, LineSeries, Margin, OutlineType, Patch, PieChartOverrides, PieChartSettings,
    RadarChartOverrides, RadarSeries, RadarSettings, Record, SortAxis, ThresholdLine,
    TooltipSettings,
};

fn tooltip(text_color: bool) -> TooltipSettings {
    TooltipSettings {
        background_color: Some("#333333".into()),
        border_radius: Some("8px".into()),
        font_size: Some("14px".into()),
        text_color: text_color.then(|| "#ffffff".to_string()),
        cursor_color: Some("rgba(255, 255, 255, 0.1)".into()),
    }
}

/// Team scores: three stacked scoring types with gradients and a target line
pub fn bar_graph_config() -> BarChartOverrides {
    let teams = [(1, 90, 60, 85), (2, 70, 75, 80), (3, 95, 90, 70), (4, 88, 40, 92)];

    BarChartOverrides {
        data: Patch::Set(
            teams
                .iter()
                .map(|&(team, a, b, c)| {
                    Record::new()
                        .with("team", team)
                        .with("scoreTypeA", a)
                        .with("scoreTypeB", b)
                        .with("scoreTypeC", c)
                })
                .collect(),
        ),
        scoring_types: Patch::Set(vec![
            BarSeries::new("scoreTypeA", "Type A", "#1abc9c")
                .stacked(false)
                .outline("#ffffff", 1.0, OutlineType::Solid)
                .border_radius(5.0)
                .label_color("#ffffff"),
            BarSeries::new("scoreTypeB", "Type B", "#3498db")
                .stacked(true)
                .outline("#ff0000", 2.0, OutlineType::Dashed)
                .border_radius(5.0)
                .label_color("#ffffff"),
            BarSeries::new("scoreTypeC", "Type C", "#e74c3c")
                .stacked(true)
                .outline("#ffffff", 1.0, OutlineType::Solid)
                .border_radius(5.0)
                .label_color("#ffffff"),
        ]),
        // only two sub-fields: outline/radius/width defaults are dropped
        chart_settings: Patch::Set(BarChartSettings {
            show_gridlines: Some(true),
            gridline_color: Some("#444444".into()),
            ..Default::default()
        }),
        x_key: Patch::Set("team".into()),
        y_key: Patch::Set("score".into()),
        x_axis_label: Patch::Set("Team".into()),
        y_axis_label: Patch::Set("Score".into()),
        y_axis_min: Patch::Set(AxisBound::Value(0.0)),
        y_axis_max: Patch::Set(AxisBound::Value(300.0)),
        show_tooltip: Patch::Set(true),
        tooltip_settings: Patch::Set(tooltip(false)),
        show_legend: Patch::Set(true),
        interactive_legend: Patch::Set(true),
        legend_position: Patch::Set(LegendPosition::Top),
        annotations: Patch::Set(vec![
            Annotation {
                x: 2.into(),
                y: 70.0,
                text: "Highest Score".into(),
                color: "#e74c3c".into(),
            },
            Annotation {
                x: 3.into(),
                y: -70.0,
                text: "Lowest Score".into(),
                color: "#3498db".into(),
            },
        ]),
        responsive: Patch::Set(true),
        maintain_aspect_ratio: Patch::Set(true),
        show_data_labels: Patch::Set(true),
        data_label_position: Patch::Set(DataLabelPosition::Inside),
        data_label_rotation: Patch::Set(0.0),
        gradient_fills: Patch::Set(BTreeMap::from([
            ("scoreTypeA".to_string(), GradientFill::new("#1abc9c", "#16a085")),
            ("scoreTypeB".to_string(), GradientFill::new("#3498db", "#2980b9")),
            ("scoreTypeC".to_string(), GradientFill::new("#e74c3c", "#c0392b")),
        ])),
        x_axis_label_rotation: Patch::Set(-30.0),
        threshold_lines: Patch::Set(vec![ThresholdLine {
            y: 170.0,
            label: "Target Score".into(),
            color: "#00ff00".into(),
            thickness: Some(3.0),
        }]),
        sort_data_by: Patch::Set(SortAxis::Y),
        width: Patch::Set(800.0),
        height: Patch::Set(500.0),
        title: Patch::Set("Team Scores Overview".into()),
        font_settings: Patch::Set(FontSettings {
            title_font_size: Some(24.0),
            axis_label_font_size: Some(18.0),
            axis_tick_font_size: Some(16.0),
            legend_font_size: Some(16.0),
            data_label_font_size: Some(14.0),
            tooltip_font_size: Some(14.0),
            threshold_font_size: Some(14.0),
            annotation_font_size: Some(14.0),
            label_font_size: None,
            default_label_color: Some("#ffffff".into()),
        }),
        margin: Patch::Set(Margin::uniform(20.0)),
        ..Default::default()
    }
}

fn line_font_settings() -> FontSettings {
    FontSettings {
        title_font_size: Some(24.0),
        axis_label_font_size: Some(18.0),
        axis_tick_font_size: Some(16.0),
        legend_font_size: Some(16.0),
        tooltip_font_size: Some(14.0),
        data_label_font_size: Some(14.0),
        default_label_color: Some("#ffffff".into()),
        ..Default::default()
    }
}

/// Three lines, one per interpolation style
pub fn line_graph_config() -> LineChartOverrides {
    let rows = [(1, 50, 30, 200), (2, 20, 100, 230), (3, 150, 100, 50), (4, 200, 280, 100), (5, 40, 200, 130)];

    LineChartOverrides {
        data: Patch::Set(
            rows.iter()
                .map(|&(x, a, b, c)| {
                    Record::new()
                        .with("x", x)
                        .with("lineA", a)
                        .with("lineB", b)
                        .with("lineC", c)
                })
                .collect(),
        ),
        lines: Patch::Set(vec![
            LineSeries::new("lineA", "Line A", "#8884d8")
                .dots("#5854d8", true)
                .curve(LineCurve::Linear),
            LineSeries::new("lineB", "Line B", "#82ca9d")
                .dots("#52ca6d", true)
                .curve(LineCurve::Step),
            LineSeries::new("lineC", "Line C", "#ffc658")
                .dots("#ffc328", true)
                .curve(LineCurve::Natural),
        ]),
        chart_settings: Patch::Set(LineChartSettings {
            show_gridlines: Some(true),
            gridline_color: Some("#444444".into()),
            stroke_width: Some(4.0),
        }),
        x_key: Patch::Set("x".into()),
        y_axis_label: Patch::Set("Value".into()),
        x_axis_label: Patch::Set("X-Axis".into()),
        y_axis_min: Patch::Set(AxisBound::Value(0.0)),
        y_axis_max: Patch::Set(AxisBound::Value(300.0)),
        show_tooltip: Patch::Set(true),
        tooltip_settings: Patch::Set(tooltip(true)),
        show_legend: Patch::Set(true),
        legend_position: Patch::Set(LegendPosition::Top),
        responsive: Patch::Set(true),
        maintain_aspect_ratio: Patch::Set(true),
        width: Patch::Set(800.0),
        height: Patch::Set(500.0),
        title: Patch::Set("Line Chart Example".into()),
        font_settings: Patch::Set(line_font_settings()),
        margin: Patch::Set(Margin::uniform(20.0)),
        ..Default::default()
    }
}

/// Monthly traffic drawn as filled, monotone areas
pub fn area_graph_config() -> LineChartOverrides {
    let months = [
        ("Jan", 4000, 2400),
        ("Feb", 3000, 1398),
        ("Mar", 2000, 3800),
        ("Apr", 2780, 3908),
        ("May", 1890, 4800),
        ("Jun", 2390, 3800),
    ];

    LineChartOverrides {
        data: Patch::Set(
            months
                .iter()
                .map(|&(month, visits, signups)| {
                    Record::new()
                        .with("month", month)
                        .with("visits", visits)
                        .with("signups", signups)
                })
                .collect(),
        ),
        lines: Patch::Set(vec![
            LineSeries::new("visits", "Visits", "#8884d8").area(),
            LineSeries::new("signups", "Sign-ups", "#82ca9d").area(),
        ]),
        chart_settings: Patch::Set(LineChartSettings {
            show_gridlines: Some(true),
            gridline_color: Some("#444444".into()),
            stroke_width: Some(2.0),
        }),
        x_key: Patch::Set("month".into()),
        x_axis_label: Patch::Set("Month".into()),
        y_axis_label: Patch::Set("Count".into()),
        tooltip_settings: Patch::Set(tooltip(true)),
        maintain_aspect_ratio: Patch::Set(true),
        title: Patch::Set("Area Chart Example".into()),
        font_settings: Patch::Set(line_font_settings()),
        margin: Patch::Set(Margin::uniform(20.0)),
        ..Default::default()
    }
}

/// Doughnut with four groups
pub fn pie_graph_config() -> PieChartOverrides {
    let groups = [("Group A", 400), ("Group B", 300), ("Group C", 300), ("Group D", 200)];

    PieChartOverrides {
        data: Patch::Set(
            groups
                .iter()
                .map(|&(name, value)| Record::new().with("name", name).with("value", value))
                .collect(),
        ),
        data_key: Patch::Set("value".into()),
        name_key: Patch::Set("name".into()),
        chart_settings: Patch::Set(PieChartSettings {
            outline_color: Some("#ffffff".into()),
            outline_width: Some(2.0),
            inner_radius: Some(50.0),
            ..Default::default()
        }),
        show_tooltip: Patch::Set(true),
        tooltip_settings: Patch::Set(tooltip(true)),
        show_legend: Patch::Set(true),
        responsive: Patch::Set(true),
        maintain_aspect_ratio: Patch::Set(true),
        width: Patch::Set(400.0),
        height: Patch::Set(400.0),
        title: Patch::Set("Doughnut Chart Example".into()),
        font_settings: Patch::Set(FontSettings {
            title_font_size: Some(24.0),
            legend_font_size: Some(16.0),
            tooltip_font_size: Some(14.0),
            default_label_color: Some("#ffffff".into()),
            ..Default::default()
        }),
        colors: Patch::Set(
            ["#0088FE", "#00C49F", "#FFBB28", "#FF8042"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
        ),
        show_labels: Patch::Set(true),
        ..Default::default()
    }
}

/// Two students compared across six subjects
pub fn radar_graph_config() -> RadarChartOverrides {
    let subjects = [
        ("Math", 120, 110, "Mathematics"),
        ("Chinese", 98, 130, "Chinese Language"),
        ("English", 86, 130, "English Language"),
        ("Geography", 99, 100, "Geography Studies"),
        ("Physics", 85, 90, "Physics Studies"),
        ("History", 65, 85, "History Studies"),
    ];

    RadarChartOverrides {
        data: Patch::Set(
            subjects
                .iter()
                .map(|&(subject, a, b, _)| {
                    Record::new()
                        .with("subject", subject)
                        .with("A", a)
                        .with("B", b)
                        .with("fullMark", 150)
                })
                .collect(),
        ),
        radars: Patch::Set(vec![
            RadarSeries::new("A", "Student A", "#8884d8"),
            RadarSeries::new("B", "Student B", "#82ca9d"),
        ]),
        radar_settings: Patch::Set(RadarSettings {
            stroke_width: Some(2.0),
            dot: Some(true),
        }),
        angle_key: Patch::Set("subject".into()),
        show_radius_axis: Patch::Set(false),
        custom_labels: Patch::Set(
            subjects
                .iter()
                .map(|&(subject, _, _, label)| (subject.to_string(), label.to_string()))
                .collect(),
        ),
        show_grid: Patch::Set(true),
        grid_type: Patch::Set(GridType::Polygon),
        fill_grid: Patch::Set(true),
        show_legend: Patch::Set(true),
        responsive: Patch::Set(true),
        width: Patch::Set(800.0),
        height: Patch::Set(500.0),
        title: Patch::Set("Radar Chart Example".into()),
        font_settings: Patch::Set(FontSettings {
            title_font_size: Some(24.0),
            label_font_size: Some(16.0),
            legend_font_size: Some(16.0),
            default_label_color: Some("#ffffff".into()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BarChartConfig, ConfigMerge, LegendMarker, LineChartConfig, RadarChartConfig, SeriesKey};

    #[test]
    fn test_bar_example_toggle_hides_one_type() {
        let config = BarChartConfig::from_overrides(bar_graph_config());
        let mut visibility = config.visibility();
        assert_eq!(visibility.visible_count(), 3);

        assert!(visibility.toggle("scoreTypeB"));

        let visible: Vec<&str> = visibility
            .visible_keys()
            .into_iter()
            .map(SeriesKey::as_str)
            .collect();
        assert_eq!(visible, vec!["scoreTypeA", "scoreTypeC"]);

        let legend = visibility.legend_entries(&config.scoring_types, LegendMarker::Square);
        assert_eq!(legend.len(), 3);
        let inactive: Vec<&str> = legend
            .iter()
            .filter(|e| e.inactive)
            .map(|e| e.key.as_str())
            .collect();
        assert_eq!(inactive, vec!["scoreTypeB"]);
    }

    #[test]
    fn test_bar_example_drops_default_outline_settings() {
        let config = BarChartConfig::from_overrides(bar_graph_config());
        assert_eq!(config.chart_settings.gridline_color.as_deref(), Some("#444444"));
        assert_eq!(config.chart_settings.outline_color, None);
        assert_eq!(config.chart_settings.border_radius, None);
    }

    #[test]
    fn test_bar_example_sorts_by_missing_y_key_in_input_order() {
        // yKey "score" names no field, so sorting by y keeps input order
        let config = BarChartConfig::from_overrides(bar_graph_config());
        let teams: Vec<Option<f64>> = config.sorted_data().iter().map(|r| r.number("team")).collect();
        assert_eq!(teams, vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0)]);
    }

    #[test]
    fn test_line_example_curves() {
        let config = LineChartConfig::from_overrides(line_graph_config());
        let curves: Vec<LineCurve> = config.lines.iter().map(LineSeries::interpolation).collect();
        assert_eq!(curves, vec![LineCurve::Linear, LineCurve::Step, LineCurve::Natural]);
        assert_eq!(config.chart_settings.stroke_width, Some(4.0));
    }

    #[test]
    fn test_radar_example_labels() {
        let config = RadarChartConfig::from_overrides(radar_graph_config());
        assert_eq!(config.angle_label("Physics"), "Physics Studies");
        assert_eq!(config.categories().len(), 6);
        assert!(!config.show_radius_axis);
    }
}
