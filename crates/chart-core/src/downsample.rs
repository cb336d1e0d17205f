// File: crates/chart-core/src/downsample.rs
// Summary: Min-max decimation for long category series (forecast views send up to ~500 points).

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecimationAlgorithm {
    MinMax,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DecimationConfig {
    pub enabled: bool,
    pub algorithm: DecimationAlgorithm,
    /// Decimate only when a series has more positions than this.
    pub samples: usize,
}

impl Default for DecimationConfig {
    fn default() -> Self {
        Self { enabled: true, algorithm: DecimationAlgorithm::MinMax, samples: 500 }
    }
}

impl DecimationConfig {
    pub fn applies_to(&self, len: usize) -> bool { self.enabled && len > self.samples }
}

/// Min-max decimation over indexed values. Returns `(index, value)` pairs, keeping for
/// each bucket its first, min, max and last present points in index order.
/// Absent positions are skipped; the output never invents values.
pub fn decimate_min_max(values: &[Option<f64>], buckets: usize) -> Vec<(usize, f64)> {
    let present: Vec<(usize, f64)> = values.iter().enumerate().filter_map(|(i, v)| v.map(|v| (i, v))).collect();
    if buckets == 0 || present.len() <= buckets.saturating_mul(4) {
        return present;
    }

    let n = values.len();
    let bucket_size = n as f64 / buckets as f64;
    let mut out = Vec::with_capacity(buckets * 4);
    let mut start = 0usize;

    for b in 0..buckets {
        let end = (((b + 1) as f64) * bucket_size).ceil().min(n as f64) as usize;
        let mut picks: Vec<(usize, f64)> = Vec::with_capacity(4);
        let mut min: Option<(usize, f64)> = None;
        let mut max: Option<(usize, f64)> = None;
        let mut first: Option<(usize, f64)> = None;
        let mut last: Option<(usize, f64)> = None;

        for (i, v) in values.iter().enumerate().take(end).skip(start) {
            let Some(v) = *v else { continue };
            if first.is_none() { first = Some((i, v)); }
            last = Some((i, v));
            if min.map_or(true, |(_, m)| v < m) { min = Some((i, v)); }
            if max.map_or(true, |(_, m)| v > m) { max = Some((i, v)); }
        }

        for p in [first, min, max, last].into_iter().flatten() {
            if !picks.iter().any(|q| q.0 == p.0) { picks.push(p); }
        }
        picks.sort_by_key(|p| p.0);
        out.extend(picks);
        start = end;
    }
    out
}
