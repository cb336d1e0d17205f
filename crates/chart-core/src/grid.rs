// File: crates/chart-core/src/grid.rs
// Summary: Grid/tick layout helpers.

/// Round `(min, max)` outward to a 1/2/5 step so roughly `target` ticks fit.
/// Returns `(lo, hi, step)`.
pub fn nice_range(min: f64, max: f64, target: usize) -> (f64, f64, f64) {
    let (mut lo, mut hi) = if min <= max { (min, max) } else { (max, min) };
    if !lo.is_finite() || !hi.is_finite() { return (0.0, 1.0, 0.2); }
    if (hi - lo).abs() < 1e-12 {
        if lo == 0.0 { hi = 1.0; } else { lo -= lo.abs() * 0.5; hi += hi.abs() * 0.5; }
    }
    let raw = (hi - lo) / target.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|m| m * mag)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * mag);
    ((lo / step).floor() * step, (hi / step).ceil() * step, step)
}

/// Tick values from `lo` to `hi` inclusive at `step`.
pub fn ticks(lo: f64, hi: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 || !step.is_finite() { return vec![lo, hi]; }
    let n = ((hi - lo) / step).round() as usize;
    (0..=n).map(|i| lo + step * i as f64).collect()
}
