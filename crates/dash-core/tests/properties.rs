use dash_core::{
    sort_records, AxisBound, BarChartConfig, BarChartOverrides, BarChartSettings, ConfigMerge,
    FontSettings, LegendPosition, LineChartConfig, LineChartOverrides, LineChartSettings, Patch,
    PieChartConfig, PieChartOverrides, PieChartSettings, RadarChartConfig, RadarChartOverrides,
    RadarSettings, Record, SeriesVisibility, SortAxis,
};
use proptest::prelude::*;

fn key_set() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-z]{1,6}", 1..8).prop_map(|s| s.into_iter().collect())
}

/// A key left out, given as `null`, or set
fn patch<T: Clone + std::fmt::Debug>(value: impl Strategy<Value = T>) -> impl Strategy<Value = Patch<T>> {
    prop_oneof![
        Just(Patch::Absent),
        Just(Patch::Null),
        value.prop_map(Patch::Set),
    ]
}

fn legend_position() -> impl Strategy<Value = LegendPosition> {
    prop_oneof![
        Just(LegendPosition::Top),
        Just(LegendPosition::Middle),
        Just(LegendPosition::Bottom),
        Just(LegendPosition::Right),
    ]
}

fn title_patch() -> impl Strategy<Value = Patch<String>> {
    patch("[A-Za-z ]{0,20}")
}

/// What a merged field should hold for a given override key
fn expected<T: Clone + Default>(patch: &Patch<T>, default: &T) -> T {
    match patch {
        Patch::Absent => default.clone(),
        Patch::Null => T::default(),
        Patch::Set(v) => v.clone(),
    }
}

/// Font group override carrying a single sub-field
fn legend_font(size: Option<f64>) -> Patch<FontSettings> {
    match size {
        Some(size) => Patch::Set(FontSettings {
            legend_font_size: Some(size),
            ..Default::default()
        }),
        None => Patch::Null,
    }
}

proptest! {
    #[test]
    fn bar_merge_picks_override_or_default(
        title in title_patch(),
        width in patch(1.0f64..2000.0),
        y_max in patch((0.0f64..1000.0).prop_map(AxisBound::Value)),
        interactive in patch(any::<bool>()),
        position in patch(legend_position()),
    ) {
        let defaults = BarChartConfig::default();
        let merged = BarChartConfig::merge(defaults.clone(), BarChartOverrides {
            title: title.clone(),
            width: width.clone(),
            y_axis_max: y_max.clone(),
            interactive_legend: interactive.clone(),
            legend_position: position.clone(),
            ..Default::default()
        });

        prop_assert_eq!(merged.title, expected(&title, &defaults.title));
        prop_assert_eq!(merged.width, expected(&width, &defaults.width));
        prop_assert_eq!(merged.y_axis_max, expected(&y_max, &defaults.y_axis_max));
        prop_assert_eq!(merged.interactive_legend, expected(&interactive, &defaults.interactive_legend));
        prop_assert_eq!(merged.legend_position, expected(&position, &defaults.legend_position));
        prop_assert_eq!(merged.x_key, defaults.x_key);
    }

    #[test]
    fn line_merge_picks_override_or_default(
        title in title_patch(),
        height in patch(1.0f64..2000.0),
        x_key in patch("[a-z]{1,8}"),
        show_legend in patch(any::<bool>()),
        position in patch(legend_position()),
    ) {
        let defaults = LineChartConfig::default();
        let merged = LineChartConfig::merge(defaults.clone(), LineChartOverrides {
            title: title.clone(),
            height: height.clone(),
            x_key: x_key.clone(),
            show_legend: show_legend.clone(),
            legend_position: position.clone(),
            ..Default::default()
        });

        prop_assert_eq!(merged.title, expected(&title, &defaults.title));
        prop_assert_eq!(merged.height, expected(&height, &defaults.height));
        prop_assert_eq!(merged.x_key, expected(&x_key, &defaults.x_key));
        prop_assert_eq!(merged.show_legend, expected(&show_legend, &defaults.show_legend));
        prop_assert_eq!(merged.legend_position, expected(&position, &defaults.legend_position));
        prop_assert_eq!(merged.chart_settings, defaults.chart_settings);
    }

    #[test]
    fn pie_merge_picks_override_or_default(
        title in title_patch(),
        data_key in patch("[a-z]{1,8}"),
        colors in patch(prop::collection::vec("#[0-9a-f]{6}", 0..6)),
        show_labels in patch(any::<bool>()),
        position in patch(legend_position()),
    ) {
        let defaults = PieChartConfig::default();
        let merged = PieChartConfig::merge(defaults.clone(), PieChartOverrides {
            title: title.clone(),
            data_key: data_key.clone(),
            colors: colors.clone(),
            show_labels: show_labels.clone(),
            legend_position: position.clone(),
            ..Default::default()
        });

        prop_assert_eq!(merged.title, expected(&title, &defaults.title));
        prop_assert_eq!(merged.data_key, expected(&data_key, &defaults.data_key));
        prop_assert_eq!(merged.colors, expected(&colors, &defaults.colors));
        prop_assert_eq!(merged.show_labels, expected(&show_labels, &defaults.show_labels));
        prop_assert_eq!(merged.legend_position, expected(&position, &defaults.legend_position));
        prop_assert_eq!(merged.name_key, defaults.name_key);
    }

    #[test]
    fn radar_merge_picks_override_or_default(
        title in title_patch(),
        angle_key in patch("[a-z]{1,8}"),
        fill_grid in patch(any::<bool>()),
        show_radius_axis in patch(any::<bool>()),
        width in patch(1.0f64..2000.0),
    ) {
        let defaults = RadarChartConfig::default();
        let merged = RadarChartConfig::merge(defaults.clone(), RadarChartOverrides {
            title: title.clone(),
            angle_key: angle_key.clone(),
            fill_grid: fill_grid.clone(),
            show_radius_axis: show_radius_axis.clone(),
            width: width.clone(),
            ..Default::default()
        });

        prop_assert_eq!(merged.title, expected(&title, &defaults.title));
        prop_assert_eq!(merged.angle_key, expected(&angle_key, &defaults.angle_key));
        prop_assert_eq!(merged.fill_grid, expected(&fill_grid, &defaults.fill_grid));
        prop_assert_eq!(merged.show_radius_axis, expected(&show_radius_axis, &defaults.show_radius_axis));
        prop_assert_eq!(merged.width, expected(&width, &defaults.width));
        prop_assert_eq!(merged.radius_key, defaults.radius_key);
    }

    #[test]
    fn bar_settings_group_is_replaced_wholesale(
        color in "#[0-9a-f]{6}",
        size in proptest::option::of(1.0f64..64.0),
    ) {
        let merged = BarChartConfig::from_overrides(BarChartOverrides {
            chart_settings: Patch::Set(BarChartSettings {
                gridline_color: Some(color.clone()),
                ..Default::default()
            }),
            font_settings: legend_font(size),
            ..Default::default()
        });
        prop_assert_eq!(merged.chart_settings.gridline_color, Some(color));
        prop_assert_eq!(merged.chart_settings.outline_color, None);
        prop_assert_eq!(merged.chart_settings.border_radius, None);
        prop_assert_eq!(merged.chart_settings.opacity, None);
        prop_assert_eq!(merged.font_settings.legend_font_size, size);
        prop_assert_eq!(merged.font_settings.title_font_size, None);
        prop_assert_eq!(merged.font_settings.default_label_color, None);
    }

    #[test]
    fn line_settings_group_is_replaced_wholesale(
        width in 0.5f64..10.0,
        size in proptest::option::of(1.0f64..64.0),
    ) {
        let merged = LineChartConfig::from_overrides(LineChartOverrides {
            chart_settings: Patch::Set(LineChartSettings {
                stroke_width: Some(width),
                ..Default::default()
            }),
            font_settings: legend_font(size),
            ..Default::default()
        });
        prop_assert_eq!(merged.chart_settings.stroke_width, Some(width));
        prop_assert_eq!(merged.chart_settings.show_gridlines, None);
        prop_assert_eq!(merged.chart_settings.gridline_color, None);
        prop_assert_eq!(merged.font_settings.legend_font_size, size);
        prop_assert_eq!(merged.font_settings.axis_tick_font_size, None);
    }

    #[test]
    fn pie_settings_group_is_replaced_wholesale(
        inner in 0.0f64..80.0,
        size in proptest::option::of(1.0f64..64.0),
    ) {
        let merged = PieChartConfig::from_overrides(PieChartOverrides {
            chart_settings: Patch::Set(PieChartSettings {
                inner_radius: Some(inner),
                ..Default::default()
            }),
            font_settings: legend_font(size),
            ..Default::default()
        });
        prop_assert_eq!(merged.chart_settings.inner_radius, Some(inner));
        prop_assert_eq!(merged.chart_settings.outline, None);
        prop_assert_eq!(merged.chart_settings.outline_color, None);
        prop_assert_eq!(merged.chart_settings.outline_width, None);
        prop_assert_eq!(merged.font_settings.legend_font_size, size);
        prop_assert_eq!(merged.font_settings.title_font_size, None);
    }

    #[test]
    fn radar_settings_group_is_replaced_wholesale(
        dot in any::<bool>(),
        size in proptest::option::of(1.0f64..64.0),
    ) {
        let merged = RadarChartConfig::from_overrides(RadarChartOverrides {
            radar_settings: Patch::Set(RadarSettings {
                dot: Some(dot),
                ..Default::default()
            }),
            font_settings: legend_font(size),
            ..Default::default()
        });
        prop_assert_eq!(merged.radar_settings.dot, Some(dot));
        prop_assert_eq!(merged.radar_settings.stroke_width, None);
        prop_assert_eq!(merged.font_settings.legend_font_size, size);
        prop_assert_eq!(merged.font_settings.label_font_size, None);
    }

    #[test]
    fn initial_visibility_is_every_declared_key(keys in key_set()) {
        let visibility = SeriesVisibility::new(keys.clone(), true);
        let visible: Vec<String> = visibility
            .visible_keys()
            .into_iter()
            .map(|k| k.to_string())
            .collect();
        prop_assert_eq!(visible, keys);
    }

    #[test]
    fn toggle_twice_restores(keys in key_set(), pick in any::<prop::sample::Index>()) {
        let mut visibility = SeriesVisibility::new(keys.clone(), true);
        let original = visibility.clone();
        let key = pick.get(&keys);

        visibility.toggle(key);
        prop_assert!(!visibility.is_visible(key));
        visibility.toggle(key);
        prop_assert_eq!(visibility, original);
    }

    #[test]
    fn non_interactive_toggle_is_noop(keys in key_set(), pick in any::<prop::sample::Index>()) {
        let mut visibility = SeriesVisibility::new(keys.clone(), false);
        let original = visibility.clone();

        prop_assert!(!visibility.toggle(pick.get::<String>(&keys)));
        prop_assert_eq!(visibility, original);
    }

    #[test]
    fn sort_is_ordered_and_stable(values in prop::collection::vec(proptest::option::of(0i32..5), 0..30)) {
        let data: Vec<Record> = values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let record = Record::new().with("idx", i as i32);
                match v {
                    Some(v) => record.with("team", *v),
                    None => record,
                }
            })
            .collect();

        let sorted = sort_records(&data, "team", "score", SortAxis::X);
        prop_assert_eq!(sorted.len(), data.len());

        for pair in sorted.windows(2) {
            let (a, b) = (pair[0].number("team"), pair[1].number("team"));
            let ia = pair[0].number("idx").unwrap_or_default();
            let ib = pair[1].number("idx").unwrap_or_default();
            match (a, b) {
                (Some(a), Some(b)) => {
                    prop_assert!(a <= b);
                    if a == b {
                        prop_assert!(ia < ib);
                    }
                }
                // absent keys only ever trail present ones
                (None, Some(_)) => prop_assert!(false, "absent key sorted before present"),
                (Some(_), None) => {}
                (None, None) => prop_assert!(ia < ib),
            }
        }
    }
}
