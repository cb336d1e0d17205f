// File: crates/chart-render-skia/src/paint/slice.rs
// Summary: Pie, doughnut and polar-area wedges inside a square plot.

use skia_safe as skia;

use super::{stroke_paint, PaintCtx};

/// Angles are in degrees, clockwise from 3 o'clock; slices start at 12 o'clock.
const START_ANGLE: f32 = -90.0;
/// Doughnut hole as a share of the outer radius.
const DOUGHNUT_CUTOUT: f32 = 0.5;
/// A full-circle sweep degenerates in `arc_to`; stop just short.
const MAX_SWEEP: f32 = 359.99;

pub fn paint_pie(ctx: &PaintCtx<'_>) {
    paint_rings(ctx, 0.0);
}

pub fn paint_doughnut(ctx: &PaintCtx<'_>) {
    paint_rings(ctx, DOUGHNUT_CUTOUT);
}

/// One ring per dataset, dataset 0 outermost. Absent and non-positive values get no wedge.
fn paint_rings(ctx: &PaintCtx<'_>, cutout: f32) {
    let (cx, cy, radius) = circle(ctx);
    let inner = radius * cutout;
    let rings = ctx.config.datasets.len().max(1);
    let ring_width = (radius - inner) / rings as f32;

    for (i, ds) in ctx.config.datasets.iter().enumerate() {
        let values = wedge_values(ctx, i);
        let total: f64 = values.iter().flatten().sum();
        if total <= 0.0 { continue; }
        let outer_r = radius - ring_width * i as f32;
        let inner_r = outer_r - ring_width;
        let mut angle = START_ANGLE;
        for (j, v) in values.iter().enumerate() {
            let Some(v) = *v else { continue };
            let sweep = (v / total * 360.0) as f32;
            let path = wedge(cx, cy, inner_r.max(0.0), outer_r, angle, sweep.min(MAX_SWEEP));
            ctx.canvas.draw_path(&path, &ctx.dataset_fill(i, j));
            stroke_wedge(ctx, ds.border_color, &path);
            angle += sweep;
        }
    }
}

/// Equal angles per category; radius proportional to value over the dataset maximum.
pub fn paint_polar(ctx: &PaintCtx<'_>) {
    let (cx, cy, radius) = circle(ctx);
    let n = ctx.category_count();
    if n == 0 { return; }
    let sweep = 360.0 / n as f32;

    for (i, ds) in ctx.config.datasets.iter().enumerate().rev() {
        let values = wedge_values(ctx, i);
        let max = values.iter().flatten().fold(0.0f64, |m, &v| m.max(v));
        if max <= 0.0 { continue; }
        for (j, v) in values.iter().enumerate() {
            let Some(v) = *v else { continue };
            let r = radius * (v / max) as f32;
            let path = wedge(cx, cy, 0.0, r, START_ANGLE + sweep * j as f32, sweep.min(MAX_SWEEP));
            ctx.canvas.draw_path(&path, &ctx.dataset_fill(i, j));
            stroke_wedge(ctx, ds.border_color, &path);
        }
    }
}

fn circle(ctx: &PaintCtx<'_>) -> (f32, f32, f32) {
    let sq = ctx.plot.square();
    let (cx, cy) = sq.center();
    (cx, cy, sq.width() as f32 * 0.5)
}

/// Values that get a wedge, by category; everything else is `None`.
fn wedge_values(ctx: &PaintCtx<'_>, dataset: usize) -> Vec<Option<f64>> {
    let ds = &ctx.config.datasets[dataset];
    (0..ctx.category_count()).map(|j| ds.values.scalar(j).filter(|v| *v > 0.0)).collect()
}

fn stroke_wedge(ctx: &PaintCtx<'_>, color: chart_core::Rgba, path: &skia::Path) {
    let width = ctx.defaults.arc_border_width;
    if width > 0.0 {
        ctx.canvas.draw_path(path, &stroke_paint(color, width));
    }
}

fn wedge(cx: f32, cy: f32, inner: f32, outer: f32, start: f32, sweep: f32) -> skia::Path {
    let mut path = skia::Path::new();
    let outer_oval = skia::Rect::from_ltrb(cx - outer, cy - outer, cx + outer, cy + outer);
    if inner <= 0.0 {
        path.move_to(skia::Point::new(cx, cy));
        path.arc_to(outer_oval, start, sweep, false);
    } else {
        let inner_oval = skia::Rect::from_ltrb(cx - inner, cy - inner, cx + inner, cy + inner);
        path.arc_to(outer_oval, start, sweep, true);
        path.arc_to(inner_oval, start + sweep, -sweep, false);
    }
    path.close();
    path
}
