// File: crates/chart-core/tests/normalize.rs
// Purpose: Normalizer behavior: dashboard scenarios, color assignment, style table and empty handling.

use chart_core::style::{Hint, STACK_GROUP};
use chart_core::{
    normalize, ChartDescriptor, ChartKind, DatasetValues, Fill, KindTag, LegendPosition, Normalized, Padding, Point,
    SeriesSpec, PALETTE, SECONDARY_PALETTE,
};

fn ready(n: Normalized) -> chart_core::RenderConfig {
    match n {
        Normalized::Ready(cfg) => cfg,
        Normalized::Empty => panic!("expected a render config, got Empty"),
    }
}

#[test]
fn bar_scenario() {
    let d = ChartDescriptor::new(ChartKind::Bar, ["A", "B"]).with_series(SeriesSpec::new("Sales", [10.0, 20.0]));
    let cfg = ready(d.normalize());
    assert_eq!(cfg.datasets.len(), 1);
    let ds = &cfg.datasets[0];
    assert_eq!(ds.label, "Sales");
    assert_eq!(ds.values, DatasetValues::Scalars(vec![Some(10.0), Some(20.0)]));
    assert!(!ds.style.stacked);
    assert_eq!(ds.style.border_width, Hint::Set(0.0));
    assert!(!cfg.scales.is_hidden());
}

#[test]
fn pie_scenario() {
    let d = ChartDescriptor::new(ChartKind::Pie, ["A", "B", "C"]).with_series(SeriesSpec::new("Share", [1.0, 2.0, 3.0]));
    let cfg = ready(d.normalize());
    let Fill::PerCategory(fills) = &cfg.datasets[0].fill else { panic!("slice fill must be per category") };
    assert_eq!(fills.len(), 3);
    for (j, c) in fills.iter().enumerate() {
        assert_eq!(*c, PALETTE.color(j));
    }
    assert!(cfg.scales.is_hidden());
    assert!(!cfg.scales.x.display && !cfg.scales.y.display);
    assert_eq!(cfg.scales.aspect_ratio, Some(1.0));
    assert_eq!(cfg.legend.position, LegendPosition::Right);
    assert_eq!(cfg.layout, Padding::horizontal(10.0));
    assert!(cfg.decimation.is_none());
}

#[test]
fn stacked_bar_scenario() {
    let d = ChartDescriptor::new(ChartKind::StackedBar, ["Q1", "Q2"])
        .with_series(SeriesSpec::new("X", [5.0, 6.0]))
        .with_series(SeriesSpec::new("Y", [7.0, 8.0]));
    let cfg = ready(d.normalize());
    assert_eq!(cfg.datasets.len(), 2);
    assert!(cfg.scales.x.stacked);
    assert!(cfg.scales.y.stacked);
    for ds in &cfg.datasets {
        assert!(ds.style.stacked);
        assert_eq!(ds.style.stack_group, Some(STACK_GROUP));
    }
}

#[test]
fn short_series_keeps_length_and_reads_missing_as_absent() {
    let d = ChartDescriptor::new(ChartKind::Line, ["a", "b", "c", "d"]).with_series(SeriesSpec::new("s", [1.0, 2.0]));
    let cfg = ready(d.normalize());
    let ds = &cfg.datasets[0];
    assert_eq!(ds.values.len(), 2);
    assert_eq!(ds.values.scalar(1), Some(2.0));
    assert_eq!(ds.values.scalar(3), None);
}

#[test]
fn absent_descriptor_and_empty_categories_are_empty() {
    assert_eq!(normalize(None), Normalized::Empty);
    let d = ChartDescriptor::new(ChartKind::Bar, Vec::<String>::new()).with_series(SeriesSpec::new("s", [1.0]));
    assert!(d.normalize().is_empty());
}

#[test]
fn series_without_any_value_is_empty() {
    let mut s = SeriesSpec::new("s", Vec::<f64>::new());
    s.values = vec![None, None];
    let d = ChartDescriptor::new(ChartKind::Bar, ["a", "b"]).with_series(s);
    assert!(d.normalize().is_empty());
    let no_series = ChartDescriptor::new(ChartKind::Bar, ["a", "b"]);
    assert!(no_series.normalize().is_empty());
}

#[test]
fn cartesian_colors_follow_series_index() {
    let mut d = ChartDescriptor::new(ChartKind::Line, ["a", "b"]);
    for i in 0..7 {
        d = d.with_series(SeriesSpec::new(format!("s{i}"), [i as f64, 1.0]));
    }
    let cfg = ready(d.normalize());
    for (i, ds) in cfg.datasets.iter().enumerate() {
        assert_eq!(ds.color(), PALETTE.color(i));
        assert_eq!(ds.fill, Fill::Solid(PALETTE.color(i)));
    }
    // Wraps after five.
    assert_eq!(cfg.datasets[5].color(), cfg.datasets[0].color());
}

#[test]
fn slice_borders_use_secondary_palette_by_series() {
    let d = ChartDescriptor::new(ChartKind::Doughnut, ["a", "b"])
        .with_series(SeriesSpec::new("one", [1.0, 2.0]))
        .with_series(SeriesSpec::new("two", [3.0, 4.0]))
        .with_series(SeriesSpec::new("three", [5.0, 6.0]))
        .with_series(SeriesSpec::new("four", [7.0, 8.0]));
    let cfg = ready(d.normalize());
    for (i, ds) in cfg.datasets.iter().enumerate() {
        assert_eq!(ds.border_color, SECONDARY_PALETTE.color(i));
        assert_eq!(ds.fill.color_at(1), PALETTE.color(1));
    }
}

#[test]
fn normalize_is_deterministic() {
    let d = ChartDescriptor::new(ChartKind::Area, ["a", "b", "c"])
        .with_title("Users")
        .with_series(SeriesSpec::new("u", [3.0, 1.0, 2.0]));
    assert_eq!(d.normalize(), d.normalize());
    let a = serde_json::to_string(&d.normalize()).unwrap();
    let b = serde_json::to_string(&d.normalize()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn style_table_per_kind() {
    let line = ChartDescriptor::new(ChartKind::Line, ["a"]).with_series(SeriesSpec::new("s", [1.0]));
    let cfg = ready(line.normalize());
    let st = cfg.datasets[0].style;
    assert_eq!(st.show_points, Hint::Set(true));
    assert_eq!(st.point.radius, 1.0);
    assert_eq!(st.point.hover_radius, 5.0);
    assert_eq!(st.fill, Hint::Set(false));
    assert_eq!(st.tension, Some(0.4));

    let area = ChartDescriptor { kind: ChartKind::Area.into(), ..line.clone() };
    let st = ready(area.normalize()).datasets[0].style;
    assert_eq!(st.fill, Hint::Set(true));
    assert_eq!(st.show_points, Hint::Set(false));

    let scatter = ChartDescriptor { kind: ChartKind::Scatter.into(), ..line.clone() };
    let st = ready(scatter.normalize()).datasets[0].style;
    assert_eq!(st.point.radius, 3.0);
    assert_eq!(st.border_width, Hint::Default);
}

#[test]
fn point_kinds_lift_scalars_to_points() {
    let mut s = SeriesSpec::points("p", [Point::with_radius(1.0, 2.0, 8.0)]);
    s.values.push(Some(chart_core::DataValue::Scalar(5.0)));
    let d = ChartDescriptor::new(ChartKind::Bubble, ["a", "b"]).with_series(s);
    let cfg = ready(d.normalize());
    let pts = cfg.datasets[0].values.as_points().expect("points");
    assert_eq!(pts[0], Some(Point::with_radius(1.0, 2.0, 8.0)));
    assert_eq!(pts[1], Some(Point::new(1.0, 5.0)));
}

#[test]
fn unsupported_kind_still_normalizes_with_fallback_style() {
    let d = ChartDescriptor::new(KindTag::parse("heatmap"), ["a"]).with_series(SeriesSpec::new("s", [1.0]));
    let cfg = ready(d.normalize());
    assert_eq!(cfg.datasets[0].style.border_width, Hint::Default);
    assert!(!cfg.scales.is_hidden());
}

#[test]
fn cartesian_configs_carry_min_max_decimation() {
    let d = ChartDescriptor::new(ChartKind::Line, ["a"]).with_series(SeriesSpec::new("s", [1.0]));
    let cfg = ready(d.normalize());
    let dec = cfg.decimation.expect("decimation");
    assert!(dec.enabled);
    assert_eq!(dec.samples, 500);
    assert_eq!(cfg.legend.position, LegendPosition::Bottom);
}
