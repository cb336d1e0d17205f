// File: crates/chart-render-skia/src/paint/radar.rs
// Summary: Radar: one spoke per category, concentric grid polygons, one outline per dataset.

use chart_core::grid::nice_range;
use skia_safe as skia;

use super::{sk, stroke_paint, PaintCtx};

const GRID_LEVELS: usize = 5;

pub fn paint(ctx: &PaintCtx<'_>) {
    let n = ctx.category_count();
    if n < 3 { return; }
    let sq = ctx.plot.square();
    let (cx, cy) = sq.center();
    let radius = sq.width() as f32 * 0.5;

    let max = ctx
        .config
        .datasets
        .iter()
        .flat_map(|ds| (0..n).filter_map(|j| ds.values.scalar(j)))
        .fold(0.0f64, f64::max);
    if max <= 0.0 { return; }
    let (_, top, _) = nice_range(0.0, max, GRID_LEVELS);

    let spoke = |j: usize, r: f32| -> skia::Point {
        let a = -std::f32::consts::FRAC_PI_2 + std::f32::consts::TAU * j as f32 / n as f32;
        skia::Point::new(cx + r * a.cos(), cy + r * a.sin())
    };

    let grid_color = ctx.config.scales.y.grid.map_or(ctx.defaults.border_color, |g| g.color);
    let grid = stroke_paint(grid_color, 1.0);
    for level in 1..=GRID_LEVELS {
        let r = radius * level as f32 / GRID_LEVELS as f32;
        let mut ring = skia::Path::new();
        ring.move_to(spoke(0, r));
        for j in 1..n { ring.line_to(spoke(j, r)); }
        ring.close();
        ctx.canvas.draw_path(&ring, &grid);
    }
    for j in 0..n {
        ctx.canvas.draw_line(skia::Point::new(cx, cy), spoke(j, radius), &grid);
    }
    if let Some(text) = ctx.text {
        let size = ctx.config.scales.x.ticks.map_or(11.0, |t| t.font_size);
        for (j, label) in ctx.config.categories.iter().enumerate() {
            let at = spoke(j, radius + size);
            text.draw_centered(ctx.canvas, label, at.x, at.y + size * 0.35, size, sk(ctx.theme.axis_label));
        }
    }

    for ds in ctx.config.datasets.iter().rev() {
        let mut outline = skia::Path::new();
        let mut open = false;
        for j in 0..n {
            // Absent values sit at the center.
            let v = ds.values.scalar(j).unwrap_or(0.0).max(0.0);
            let pt = spoke(j, radius * (v / top) as f32);
            if open { outline.line_to(pt); } else { outline.move_to(pt); open = true; }
        }
        outline.close();
        let width = ds.style.border_width.or(ctx.defaults.line_border_width);
        ctx.canvas.draw_path(&outline, &stroke_paint(ds.border_color, width));
    }
}
