// File: crates/chart-render-skia/src/paint/bar.rs
// Summary: Grouped vertical bars, horizontal bars and stacked bars on a category band scale.

use chart_core::LinearScale;
use skia_safe as skia;

use super::cartesian::{draw_category_grid, draw_value_grid, value_extent, value_scale, CategoryAxis};
use super::{stroke_paint, PaintCtx};

/// Share of each category band used by its group of bars.
const CATEGORY_PERCENTAGE: f32 = 0.8;
/// Share of each bar slot actually filled.
const BAR_PERCENTAGE: f32 = 0.9;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Orientation {
    Vertical,
    Horizontal,
}

pub fn paint_grouped(ctx: &PaintCtx<'_>) {
    paint_grouped_oriented(ctx, Orientation::Vertical);
}

pub fn paint_horizontal(ctx: &PaintCtx<'_>) {
    paint_grouped_oriented(ctx, Orientation::Horizontal);
}

fn paint_grouped_oriented(ctx: &PaintCtx<'_>, orientation: Orientation) {
    let cfg = ctx.config;
    let n = ctx.category_count();
    let Some((lo, hi)) = value_extent(ctx, false, true) else { return };
    let (axis, scale) = frame(ctx, orientation, n, lo, hi);

    let groups = cfg.datasets.len().max(1);
    let slot = axis.band() * CATEGORY_PERCENTAGE / groups as f32;
    let thickness = slot * BAR_PERCENTAGE;
    let base = scale.to_px(0.0);

    for (i, ds) in cfg.datasets.iter().enumerate() {
        for j in 0..n {
            let Some(v) = ds.values.scalar(j) else { continue };
            let group_start = axis.pos(j) - axis.band() * CATEGORY_PERCENTAGE * 0.5;
            let center = group_start + slot * (i as f32 + 0.5);
            let rect = bar_rect(orientation, center, thickness, base, scale.to_px(v));
            draw_bar(ctx, i, j, rect);
        }
    }
}

/// Bars of the shared stack group accumulate per category; positives and negatives stack separately.
pub fn paint_stacked(ctx: &PaintCtx<'_>) {
    let cfg = ctx.config;
    let n = ctx.category_count();
    let Some((lo, hi)) = value_extent(ctx, true, true) else { return };
    let (axis, scale) = frame(ctx, Orientation::Vertical, n, lo, hi);

    let thickness = axis.band() * CATEGORY_PERCENTAGE * BAR_PERCENTAGE;
    for j in 0..n {
        let (mut pos, mut neg) = (0.0f64, 0.0f64);
        for (i, ds) in cfg.datasets.iter().enumerate() {
            let Some(v) = ds.values.scalar(j) else { continue };
            let acc = if v >= 0.0 { &mut pos } else { &mut neg };
            let from = *acc;
            *acc += v;
            let rect = bar_rect(Orientation::Vertical, axis.pos(j), thickness, scale.to_px(from), scale.to_px(*acc));
            draw_bar(ctx, i, j, rect);
        }
    }
}

fn frame(
    ctx: &PaintCtx<'_>,
    orientation: Orientation,
    n: usize,
    lo: f64,
    hi: f64,
) -> (CategoryAxis, LinearScale) {
    let p = ctx.plot;
    let cfg = ctx.config;
    match orientation {
        Orientation::Vertical => {
            let (scale, values) = value_scale(lo, hi, p.bottom as f32, p.top as f32);
            let axis = CategoryAxis { count: n, start: p.left as f32, end: p.right as f32, offset: true };
            draw_value_grid(ctx, &cfg.scales.y, &scale, &values, true);
            draw_category_grid(ctx, &cfg.scales.x, &axis, true);
            (axis, scale)
        }
        Orientation::Horizontal => {
            let (scale, values) = value_scale(lo, hi, p.left as f32, p.right as f32);
            let axis = CategoryAxis { count: n, start: p.top as f32, end: p.bottom as f32, offset: true };
            draw_value_grid(ctx, &cfg.scales.x, &scale, &values, false);
            draw_category_grid(ctx, &cfg.scales.y, &axis, false);
            (axis, scale)
        }
    }
}

fn bar_rect(orientation: Orientation, center: f32, thickness: f32, from: f32, to: f32) -> skia::Rect {
    let (a, b) = (center - thickness * 0.5, center + thickness * 0.5);
    let (lo, hi) = (from.min(to), from.max(to));
    match orientation {
        Orientation::Vertical => skia::Rect::from_ltrb(a, lo, b, hi),
        Orientation::Horizontal => skia::Rect::from_ltrb(lo, a, hi, b),
    }
}

fn draw_bar(ctx: &PaintCtx<'_>, dataset: usize, category: usize, rect: skia::Rect) {
    ctx.canvas.draw_rect(rect, &ctx.dataset_fill(dataset, category));
    let ds = &ctx.config.datasets[dataset];
    let width = ds.style.border_width.or(0.0);
    if width > 0.0 {
        ctx.canvas.draw_rect(rect, &stroke_paint(ds.border_color, width));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_bars_extend_below_the_base() {
        let r = bar_rect(Orientation::Vertical, 50.0, 10.0, 100.0, 140.0);
        assert_eq!((r.left, r.top, r.right, r.bottom), (45.0, 100.0, 55.0, 140.0));
    }

    #[test]
    fn horizontal_bars_run_along_x() {
        let r = bar_rect(Orientation::Horizontal, 20.0, 4.0, 10.0, 60.0);
        assert_eq!((r.left, r.top, r.right, r.bottom), (10.0, 18.0, 60.0, 22.0));
    }
}
