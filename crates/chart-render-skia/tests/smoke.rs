// File: crates/chart-render-skia/tests/smoke.rs
// Purpose: Every kind paints without error (labels on and off), PNG/RGBA export shapes, settings loading.

use chart_core::{ChartDescriptor, ChartKind, KindTag, Point, SeriesSpec};
use chart_render_skia::{render_descriptor, ChartSurface, RenderError, RenderOptions, RenderSettings};

fn descriptor(kind: ChartKind) -> ChartDescriptor {
    let d = ChartDescriptor::new(kind, ["Jan", "Feb", "Mar", "Apr"]).with_title(format!("{kind} chart"));
    match kind {
        ChartKind::Scatter | ChartKind::Bubble => d.with_series(SeriesSpec::points(
            "pts",
            [Point::with_radius(1.0, 2.0, 6.0), Point::new(3.0, -1.0), Point::new(4.5, 5.0)],
        )),
        _ => d
            .with_series(SeriesSpec::new("a", [4.0, -2.0, 7.5, 3.0]))
            .with_series(SeriesSpec::new("b", [1.0, 2.0])),
    }
}

#[test]
fn png_starts_with_signature() {
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let (_, mut surface) = render_descriptor(&descriptor(ChartKind::Line), opts).expect("render");
    let bytes = surface.to_png_bytes().expect("png");
    assert!(bytes.len() > 8);
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn all_kinds_paint_with_and_without_labels() {
    for kind in ChartKind::ALL {
        for draw_labels in [false, true] {
            let opts = RenderOptions { draw_labels, hover_index: Some(1), ..RenderOptions::default() };
            let result = render_descriptor(&descriptor(kind), opts);
            assert!(result.is_ok(), "{kind} labels={draw_labels}: {:?}", result.err());
        }
    }
}

#[test]
fn placeholders_paint_too() {
    let unknown = ChartDescriptor::new(KindTag::parse("gauge"), ["a"]).with_series(SeriesSpec::new("s", [1.0]));
    let (view, _) = render_descriptor(&unknown, RenderOptions::default()).expect("render");
    assert_eq!(view.message(), Some("Unsupported chart type: gauge"));

    let empty = ChartDescriptor::new(ChartKind::Pie, Vec::<String>::new());
    let (view, _) = render_descriptor(&empty, RenderOptions::default()).expect("render");
    assert_eq!(view.message(), Some("No chart data available"));
}

#[test]
fn rgba_buffer_has_expected_shape_and_background() {
    let opts = RenderOptions { width: 200, height: 120, draw_labels: false, ..RenderOptions::default() };
    let bg = opts.theme.background;
    let mut surface = ChartSurface::new(opts).expect("surface");
    surface.clear();
    let (px, w, h, stride) = surface.to_rgba8().expect("pixels");
    assert_eq!((w, h, stride), (200, 120, 800));
    assert_eq!(px.len(), 800 * 120);
    assert_eq!(&px[..4], &[bg.r, bg.g, bg.b, 255]);
}

#[test]
fn settings_file_overrides_defaults() {
    let opts = RenderOptions::from_json_str(r#"{ "width": 640, "theme": "light", "hover_index": 2 }"#).expect("settings");
    assert_eq!(opts.width, 640);
    assert_eq!(opts.height, RenderOptions::default().height);
    assert_eq!(opts.theme.name, "light");
    assert_eq!(opts.hover_index, Some(2));

    let unknown_theme = RenderSettings { theme: Some("neon".into()), ..RenderSettings::default() }.into_options();
    assert_eq!(unknown_theme.theme.name, "dark");
    assert_eq!(chart_render_skia::theme::find(" LIGHT "), chart_render_skia::Theme::light());

    assert!(matches!(RenderOptions::from_json_str(r#"{ "colour": 1 }"#), Err(RenderError::Settings(_))));
}

#[test]
fn write_png_creates_parent_dirs() {
    let dir = std::path::PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("smoke_out/nested");
    let path = dir.join("bar.png");
    let (_, mut surface) = render_descriptor(&descriptor(ChartKind::Bar), RenderOptions::default()).expect("render");
    surface.write_png(&path).expect("write");
    assert!(path.exists());
}
