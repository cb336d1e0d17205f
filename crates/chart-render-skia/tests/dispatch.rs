// File: crates/chart-render-skia/tests/dispatch.rs
// Purpose: Kind dispatch, placeholders and the post-attach gradient refinement.

use chart_core::{normalize, ChartDescriptor, ChartKind, KindTag, Normalized, SeriesSpec, Trends, PALETTE};
use chart_render_skia::{
    render, render_forecast, ChartSurface, DrawStrategy, Painter, PlaceholderReason, RenderError, RenderOptions, View, NO_DATA_MESSAGE,
};

fn opts() -> RenderOptions {
    RenderOptions { draw_labels: false, ..RenderOptions::default() }
}

fn sample(kind: ChartKind) -> ChartDescriptor {
    ChartDescriptor::new(kind, ["A", "B", "C"])
        .with_title("Sample")
        .with_series(SeriesSpec::new("One", [3.0, 5.0, 2.0]))
        .with_series(SeriesSpec::new("Two", [1.0, 4.0, 6.0]))
}

#[test]
fn unknown_kind_renders_labeled_placeholder() {
    let d = ChartDescriptor::new(KindTag::parse("unknown-kind"), ["a"]).with_series(SeriesSpec::new("s", [1.0]));
    let view = render(&d.kind, &d.normalize());
    let msg = view.message().expect("placeholder");
    assert!(msg.contains("unknown-kind"));
    assert_eq!(msg, "Unsupported chart type: unknown-kind");
    let p = view.as_placeholder().expect("placeholder");
    assert_eq!(p.reason, PlaceholderReason::Unsupported("unknown-kind".to_string()));
}

#[test]
fn empty_data_renders_no_data_placeholder() {
    let view = render(&ChartKind::Bar.into(), &normalize(None));
    assert_eq!(view.message(), Some(NO_DATA_MESSAGE));
    // Empty wins even when the kind is also unknown.
    let view = render(&KindTag::parse("mystery"), &Normalized::Empty);
    assert_eq!(view.message(), Some("No chart data available"));
}

#[test]
fn every_known_kind_dispatches_to_its_strategy() {
    for kind in ChartKind::ALL {
        let d = sample(kind);
        let View::Chart(drawable) = render(&d.kind, &d.normalize()) else { panic!("{kind} should draw a chart") };
        assert_eq!(drawable.kind(), kind);
        assert_eq!(drawable.strategy(), DrawStrategy::for_kind(kind));
        assert!(!drawable.is_attached());
    }
    assert_eq!(DrawStrategy::for_kind(ChartKind::Area).id(), "line");
}

#[test]
fn gradient_only_after_attach_and_only_for_fill_kinds() {
    for kind in ChartKind::ALL {
        let d = sample(kind);
        let View::Chart(mut drawable) = render(&d.kind, &d.normalize()) else { panic!("chart expected") };
        assert!(drawable.gradients().is_empty());

        let surface = ChartSurface::new(opts()).expect("surface");
        drawable.attach(&surface);
        let grads = drawable.gradients();
        assert_eq!(grads.len(), 2);
        if kind.uses_gradient_fill() {
            for (i, g) in grads.iter().enumerate() {
                let g = g.expect("gradient");
                assert_eq!(g.top, g.bottom, "{kind}: both stops share one color");
                assert_eq!(g.top, PALETTE.color(i));
                let plot = drawable.layout().expect("layout").plot;
                assert_eq!((g.y0, g.y1), (plot.top as f32, plot.bottom as f32));
                assert!(g.shader().is_some());
            }
        } else {
            assert!(grads.iter().all(Option::is_none), "{kind} must keep flat fills");
        }
        // The normalized config is untouched by attach.
        assert_eq!(Some(drawable.config()), d.normalize().config());
    }
}

#[test]
fn drawing_before_attach_is_an_error() {
    let d = sample(ChartKind::Line);
    let View::Chart(drawable) = render(&d.kind, &d.normalize()) else { panic!("chart expected") };
    let mut surface = ChartSurface::new(opts()).expect("surface");
    let err = drawable.draw(&surface.frame()).expect_err("not attached");
    assert!(matches!(err, RenderError::NotAttached));
}

#[test]
fn slice_layout_is_square_enough_and_beside_legend() {
    let d = sample(ChartKind::Pie);
    let View::Chart(mut drawable) = render(&d.kind, &d.normalize()) else { panic!("chart expected") };
    let surface = ChartSurface::new(opts()).expect("surface");
    drawable.attach(&surface);
    let layout = drawable.layout().expect("layout");
    let legend = layout.legend.expect("legend");
    assert!(legend.left >= layout.plot.right);
    assert!(layout.title.is_some());
}

#[test]
fn tooltip_content_comes_from_config() {
    let d = sample(ChartKind::Bar);
    let View::Chart(drawable) = render(&d.kind, &d.normalize()) else { panic!("chart expected") };
    let t = drawable.tooltip_at(1).expect("tooltip");
    assert_eq!(t.title, "B");
    assert_eq!(t.lines.len(), 2);
    assert_eq!(t.lines[1].text, "Two: 4");
}

#[test]
fn forecast_view_is_a_line_chart_or_its_reason() {
    let ok = Trends::from_value(&serde_json::json!({
        "forecast_info": { "forecast_possible": true },
        "forecast_data": { "x": ["d1", "d2", "d3"], "y": [1, 2, 3], "y_col": "sales" }
    }));
    let View::Chart(drawable) = render_forecast(&ok) else { panic!("forecast chart expected") };
    assert_eq!(drawable.kind(), ChartKind::Line);
    assert_eq!(drawable.config().datasets[0].label, "Forecasted sales");

    let blocked = Trends::from_value(&serde_json::json!({
        "forecast_data": { "x": ["d1", "d2"], "y": [1, 2] },
        "forecast_info": { "forecast_possible": false, "reason": "No date column" }
    }));
    let view = render_forecast(&blocked);
    assert_eq!(view.message(), Some("No date column"));
    assert_eq!(view.as_placeholder().map(|p| p.reason.clone()), Some(PlaceholderReason::ForecastUnavailable));
}
