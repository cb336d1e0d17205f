// File: crates/chart-render-skia/src/paint/points.rs
// Summary: Scatter and bubble charts on linear x/y scales.

use chart_core::{ChartKind, Point};

use super::cartesian::{draw_value_grid, value_scale};
use super::{fill_paint, stroke_paint, PaintCtx};

pub fn paint_scatter(ctx: &PaintCtx<'_>) {
    paint_points(ctx, ChartKind::Scatter);
}

pub fn paint_bubble(ctx: &PaintCtx<'_>) {
    paint_points(ctx, ChartKind::Bubble);
}

fn paint_points(ctx: &PaintCtx<'_>, kind: ChartKind) {
    let cfg = ctx.config;
    let Some(((x0, x1), (y0, y1))) = point_extent(ctx) else { return };
    let p = ctx.plot;
    let (xs, x_ticks) = value_scale(x0, x1, p.left as f32, p.right as f32);
    let (ys, y_ticks) = value_scale(y0, y1, p.bottom as f32, p.top as f32);
    draw_value_grid(ctx, &cfg.scales.x, &xs, &x_ticks, false);
    draw_value_grid(ctx, &cfg.scales.y, &ys, &y_ticks, true);

    for ds in cfg.datasets.iter().rev() {
        let Some(points) = ds.values.as_points() else { continue };
        let border = ds.style.border_width.or(ctx.defaults.point_border_width);
        for (j, pt) in points.iter().enumerate() {
            let Some(pt) = pt else { continue };
            let radius = match kind {
                ChartKind::Bubble => pt.r.map_or(ctx.defaults.bubble_radius, |r| r as f32),
                _ => ds.style.point.radius,
            };
            if radius <= 0.0 { continue; }
            let center = (xs.to_px(pt.x), ys.to_px(pt.y));
            let color = ds.fill.color_at(j);
            let fill = fill_paint(if kind == ChartKind::Bubble { color.with_alpha(0.6) } else { color });
            ctx.canvas.draw_circle(center, radius, &fill);
            if border > 0.0 {
                ctx.canvas.draw_circle(center, radius, &stroke_paint(ds.border_color, border));
            }
        }
    }
}

/// `((xmin, xmax), (ymin, ymax))` over every present point.
fn point_extent(ctx: &PaintCtx<'_>) -> Option<((f64, f64), (f64, f64))> {
    let all: Vec<Point> = ctx
        .config
        .datasets
        .iter()
        .filter_map(|ds| ds.values.as_points())
        .flat_map(|pts| pts.iter().flatten().copied())
        .collect();
    let first = all.first()?;
    let init = ((first.x, first.x), (first.y, first.y));
    Some(all.iter().fold(init, |((xl, xh), (yl, yh)), p| ((xl.min(p.x), xh.max(p.x)), (yl.min(p.y), yh.max(p.y)))))
}
