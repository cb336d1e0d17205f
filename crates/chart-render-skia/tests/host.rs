// File: crates/chart-render-skia/tests/host.rs
// Purpose: ChartHost rebuild and last-write-wins behavior.

use chart_core::{ChartDescriptor, ChartKind, KindTag, SeriesSpec};
use chart_render_skia::{ChartHost, ChartSurface, RenderOptions, View};

fn bars(title: &str) -> ChartDescriptor {
    ChartDescriptor::new(ChartKind::Bar, ["a", "b"]).with_title(title).with_series(SeriesSpec::new("s", [1.0, 2.0]))
}

#[test]
fn starts_with_no_data_placeholder() {
    let mut host = ChartHost::new();
    assert_eq!(host.view().message(), Some("No chart data available"));
    assert_eq!(host.revision(), 0);
}

#[test]
fn last_submission_wins() {
    let mut host = ChartHost::new();
    host.submit(Some(bars("first")));
    host.submit(Some(bars("second")));
    host.submit(Some(bars("third")));
    let View::Chart(d) = host.view() else { panic!("chart expected") };
    assert_eq!(d.config().title.as_deref(), Some("third"));
    assert_eq!(host.superseded(), 2);
    assert_eq!(host.revision(), 1);

    // No change, no rebuild.
    host.view();
    assert_eq!(host.revision(), 1);
}

#[test]
fn kind_change_rebuilds_from_scratch() {
    let mut host = ChartHost::new();
    host.submit(Some(bars("t")));
    let mut surface = ChartSurface::new(RenderOptions { draw_labels: false, ..RenderOptions::default() }).expect("surface");
    host.present(&mut surface).expect("present");
    let View::Chart(d) = host.view() else { panic!("chart expected") };
    assert!(d.is_attached());
    assert!(d.gradients()[0].is_some());

    host.select_kind(ChartKind::Pie);
    let View::Chart(d) = host.view() else { panic!("chart expected") };
    assert_eq!(d.kind(), ChartKind::Pie);
    assert!(!d.is_attached());
    assert!(d.config().scales.is_hidden());
    assert_eq!(host.revision(), 2);

    host.select_kind(ChartKind::Pie);
    host.view();
    assert_eq!(host.revision(), 2);
}

#[test]
fn unsupported_selection_and_cleared_descriptor() {
    let mut host = ChartHost::new();
    host.submit(Some(bars("t")));
    host.select_kind(KindTag::parse("unknown-kind"));
    assert_eq!(host.view().message(), Some("Unsupported chart type: unknown-kind"));

    host.submit(None);
    assert_eq!(host.view().message(), Some("No chart data available"));
}
