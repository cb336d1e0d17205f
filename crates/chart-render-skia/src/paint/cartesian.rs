// File: crates/chart-render-skia/src/paint/cartesian.rs
// Summary: Cartesian frame helpers: category placement, value extents, grid lines and tick labels.

use chart_core::grid::{nice_range, ticks};
use chart_core::scale::AxisConfig;
use chart_core::tooltip::format_number;
use chart_core::LinearScale;

use super::{sk, stroke_paint, PaintCtx};

/// Target number of value ticks.
const VALUE_TICKS: usize = 5;
/// Minimum pixels between category labels before labels get skipped.
const MIN_LABEL_SPACING: f32 = 48.0;

/// Category positions along one pixel span.
/// `offset` places categories at band centers (bars); otherwise edge to edge (lines).
#[derive(Clone, Copy, Debug)]
pub struct CategoryAxis {
    pub count: usize,
    pub start: f32,
    pub end: f32,
    pub offset: bool,
}

impl CategoryAxis {
    pub fn band(&self) -> f32 {
        (self.end - self.start) / self.count.max(1) as f32
    }

    pub fn pos(&self, index: usize) -> f32 {
        if self.offset {
            self.start + self.band() * (index as f32 + 0.5)
        } else if self.count <= 1 {
            (self.start + self.end) * 0.5
        } else {
            self.start + (self.end - self.start) * index as f32 / (self.count - 1) as f32
        }
    }
}

/// Min/max over all present scalar values within the category range.
/// With `stacked`, extents come from per-category positive and negative sums.
pub fn value_extent(ctx: &PaintCtx<'_>, stacked: bool, include_zero: bool) -> Option<(f64, f64)> {
    let n = ctx.category_count();
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    if stacked {
        for j in 0..n {
            let (mut pos, mut neg) = (0.0f64, 0.0f64);
            for ds in &ctx.config.datasets {
                match ds.values.scalar(j) {
                    Some(v) if v >= 0.0 => pos += v,
                    Some(v) => neg += v,
                    None => {}
                }
            }
            lo = lo.min(neg);
            hi = hi.max(pos);
        }
    } else {
        for ds in &ctx.config.datasets {
            for j in 0..n {
                if let Some(v) = ds.values.scalar(j) {
                    lo = lo.min(v);
                    hi = hi.max(v);
                }
            }
        }
    }
    if !lo.is_finite() || !hi.is_finite() { return None; }
    if include_zero {
        lo = lo.min(0.0);
        hi = hi.max(0.0);
    }
    Some((lo, hi))
}

/// Nice-rounded value scale plus its tick values.
pub fn value_scale(lo: f64, hi: f64, px_start: f32, px_end: f32) -> (LinearScale, Vec<f64>) {
    let (nlo, nhi, step) = nice_range(lo, hi, VALUE_TICKS);
    (LinearScale::new(px_start, px_end, nlo, nhi), ticks(nlo, nhi, step))
}

/// Grid lines across the plot at each value tick. `horizontal_lines` is true for a vertical value axis.
pub fn draw_value_grid(ctx: &PaintCtx<'_>, axis: &AxisConfig, scale: &LinearScale, values: &[f64], horizontal_lines: bool) {
    if !axis.display { return; }
    let p = ctx.plot;
    if let Some(grid) = axis.grid {
        let paint = stroke_paint(grid.color, 1.0);
        for &v in values {
            let at = scale.to_px(v);
            if horizontal_lines {
                ctx.canvas.draw_line((p.left as f32, at), (p.right as f32, at), &paint);
            } else {
                ctx.canvas.draw_line((at, p.top as f32), (at, p.bottom as f32), &paint);
            }
        }
    }
    if let (Some(tick), Some(text)) = (axis.ticks, ctx.text) {
        for &v in values {
            let at = scale.to_px(v);
            let label = format_number(v);
            if horizontal_lines {
                text.draw_right(ctx.canvas, &label, p.left as f32 - 6.0, at + tick.font_size * 0.35, tick.font_size, sk(tick.color));
            } else {
                text.draw_centered(ctx.canvas, &label, at, p.bottom as f32 + tick.font_size + 4.0, tick.font_size, sk(tick.color));
            }
        }
    }
}

/// Grid lines and labels for the category axis. `along_x` is false for horizontal bars.
pub fn draw_category_grid(ctx: &PaintCtx<'_>, axis_cfg: &AxisConfig, axis: &CategoryAxis, along_x: bool) {
    if !axis_cfg.display { return; }
    let p = ctx.plot;
    if let Some(grid) = axis_cfg.grid {
        let paint = stroke_paint(grid.color, 1.0);
        for j in 0..axis.count {
            let at = axis.pos(j);
            if along_x {
                ctx.canvas.draw_line((at, p.top as f32), (at, p.bottom as f32), &paint);
            } else {
                ctx.canvas.draw_line((p.left as f32, at), (p.right as f32, at), &paint);
            }
        }
    }
    let (Some(tick), Some(text)) = (axis_cfg.ticks, ctx.text) else { return };
    let span = (axis.end - axis.start).abs();
    let max_labels = ((span / MIN_LABEL_SPACING).floor() as usize).max(1);
    let step = axis.count.div_ceil(max_labels).max(1);
    for (j, label) in ctx.config.categories.iter().enumerate().step_by(step) {
        let at = axis.pos(j);
        if along_x {
            text.draw_centered(ctx.canvas, label, at, p.bottom as f32 + tick.font_size + 4.0, tick.font_size, sk(tick.color));
        } else {
            text.draw_right(ctx.canvas, label, p.left as f32 - 6.0, at + tick.font_size * 0.35, tick.font_size, sk(tick.color));
        }
    }
}
