// File: crates/chart-render-skia/src/paint/line.rs
// Summary: Line/area drawing: spline-smoothed segments, gaps at absent positions, optional fill to origin.

use chart_core::downsample::decimate_min_max;
use chart_core::Hint;
use skia_safe as skia;

use super::cartesian::{draw_category_grid, draw_value_grid, value_extent, value_scale, CategoryAxis};
use super::{fill_paint, stroke_paint, PaintCtx};

type Pt = (f32, f32);

pub fn paint(ctx: &PaintCtx<'_>) {
    let cfg = ctx.config;
    let p = ctx.plot;
    let n = ctx.category_count();
    let area = cfg.datasets.iter().any(|d| d.style.fill.or(false));
    let Some((lo, hi)) = value_extent(ctx, false, area) else { return };

    let (scale, tick_values) = value_scale(lo, hi, p.bottom as f32, p.top as f32);
    let axis = CategoryAxis { count: n, start: p.left as f32, end: p.right as f32, offset: false };
    draw_category_grid(ctx, &cfg.scales.x, &axis, true);
    draw_value_grid(ctx, &cfg.scales.y, &scale, &tick_values, true);

    let origin_y = scale.to_px(0.0f64.clamp(scale.vmin, scale.vmax));

    // Dataset 0 ends up on top.
    for (i, ds) in cfg.datasets.iter().enumerate().rev() {
        let Some(values) = ds.values.as_scalars() else { continue };
        let values = &values[..values.len().min(n)];
        let indexed: Vec<(usize, f64)> = match cfg.decimation {
            Some(dec) if dec.applies_to(values.len()) => decimate_min_max(values, p.width().max(1) as usize),
            _ => values.iter().enumerate().filter_map(|(j, v)| v.map(|v| (j, v))).collect(),
        };

        let tension = ds.style.tension.unwrap_or(0.0);
        for run in contiguous_runs(&indexed, values) {
            let pts: Vec<Pt> = run.iter().map(|&(j, v)| (axis.pos(j), scale.to_px(v))).collect();
            let path = spline_path(&pts, tension);

            if ds.style.fill.or(false) && pts.len() >= 2 {
                let mut area_path = path.clone();
                area_path.line_to((pts[pts.len() - 1].0, origin_y));
                area_path.line_to((pts[0].0, origin_y));
                area_path.close();
                ctx.canvas.draw_path(&area_path, &ctx.dataset_fill(i, 0));
            }

            let width = ds.style.border_width.or(ctx.defaults.line_border_width);
            if width > 0.0 && pts.len() >= 2 {
                ctx.canvas.draw_path(&path, &stroke_paint(ds.border_color, width));
            }

            if ds.style.show_points == Hint::Set(true) && ds.style.point.radius > 0.0 {
                let dot = fill_paint(ds.border_color);
                for &(x, y) in &pts {
                    ctx.canvas.draw_circle((x, y), ds.style.point.radius, &dot);
                }
            }
        }
    }
}

/// Split indexed points wherever the source has an absent position between them.
fn contiguous_runs(indexed: &[(usize, f64)], source: &[Option<f64>]) -> Vec<Vec<(usize, f64)>> {
    let mut runs: Vec<Vec<(usize, f64)>> = Vec::new();
    let mut current: Vec<(usize, f64)> = Vec::new();
    for &(j, v) in indexed {
        if let Some(&(prev, _)) = current.last() {
            if source[prev + 1..j].iter().any(Option::is_none) {
                runs.push(std::mem::take(&mut current));
            }
        }
        current.push((j, v));
    }
    if !current.is_empty() { runs.push(current); }
    runs
}

/// Cubic spline through `pts` with the same control-point rule as Chart.js (`tension` 0 is straight).
fn spline_path(pts: &[Pt], tension: f32) -> skia::Path {
    let mut path = skia::Path::new();
    let Some(&first) = pts.first() else { return path };
    path.move_to(first);
    if tension <= 0.0 || pts.len() < 3 {
        for &pt in &pts[1..] { path.line_to(pt); }
        return path;
    }

    let controls: Vec<(Pt, Pt)> = (0..pts.len())
        .map(|i| {
            let prev = pts[i.saturating_sub(1)];
            let cur = pts[i];
            let next = pts[(i + 1).min(pts.len() - 1)];
            control_points(prev, cur, next, tension)
        })
        .collect();

    for i in 1..pts.len() {
        let (_, out) = controls[i - 1];
        let (inn, _) = controls[i];
        path.cubic_to(out, inn, pts[i]);
    }
    path
}

fn control_points(prev: Pt, cur: Pt, next: Pt, t: f32) -> (Pt, Pt) {
    let d01 = ((cur.0 - prev.0).powi(2) + (cur.1 - prev.1).powi(2)).sqrt();
    let d12 = ((next.0 - cur.0).powi(2) + (next.1 - cur.1).powi(2)).sqrt();
    let sum = d01 + d12;
    if sum <= f32::EPSILON { return (cur, cur); }
    let fa = t * d01 / sum;
    let fb = t * d12 / sum;
    let (dx, dy) = (next.0 - prev.0, next.1 - prev.1);
    ((cur.0 - fa * dx, cur.1 - fa * dy), (cur.0 + fb * dx, cur.1 + fb * dy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_break_at_absent_positions() {
        let src = [Some(1.0), Some(2.0), None, Some(4.0)];
        let idx: Vec<(usize, f64)> = src.iter().enumerate().filter_map(|(j, v)| v.map(|v| (j, v))).collect();
        let runs = contiguous_runs(&idx, &src);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0], vec![(0, 1.0), (1, 2.0)]);
        assert_eq!(runs[1], vec![(3, 4.0)]);
    }

    #[test]
    fn endpoints_keep_their_own_control_points() {
        let (a, b) = control_points((0.0, 0.0), (0.0, 0.0), (10.0, 0.0), 0.4);
        assert_eq!(a, (0.0, 0.0));
        assert!((b.0 - 4.0).abs() < 1e-6);
    }
}
