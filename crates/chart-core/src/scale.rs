// File: crates/chart-core/src/scale.rs
// Summary: Axis/scale configuration variants and the linear value-to-pixel transform.

use serde::Serialize;

use crate::color::Rgba;
use crate::kind::ChartKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleVariant {
    /// Visible axes with grid lines and ticks.
    Cartesian,
    /// No axes at all; used by slice kinds.
    Hidden,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GridStyle {
    pub color: Rgba,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TickStyle {
    pub color: Rgba,
    pub font_size: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AxisConfig {
    pub display: bool,
    /// `None` hides grid lines.
    pub grid: Option<GridStyle>,
    /// `None` hides ticks.
    pub ticks: Option<TickStyle>,
    pub border: bool,
    pub stacked: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScaleConfig {
    pub variant: ScaleVariant,
    pub x: AxisConfig,
    pub y: AxisConfig,
    /// Fixed width:height ratio, when the variant demands one.
    pub aspect_ratio: Option<f32>,
}

const TICK: TickStyle = TickStyle { color: Rgba::from_hex_const("#9ca3af"), font_size: 11.0 };
const GRID: GridStyle = GridStyle { color: Rgba::rgba(255, 255, 255, 77) };

const HIDDEN_AXIS: AxisConfig = AxisConfig { display: false, grid: None, ticks: None, border: false, stacked: false };

impl ScaleConfig {
    /// Variant selection is a pure function of `kind`.
    pub fn for_kind(kind: Option<ChartKind>) -> Self {
        match kind {
            Some(k) if k.is_slice() => Self::hidden(),
            Some(k) => Self::cartesian(k == ChartKind::StackedBar),
            None => Self::cartesian(false),
        }
    }

    pub fn cartesian(stacked: bool) -> Self {
        let axis = AxisConfig { display: true, grid: Some(GRID), ticks: Some(TICK), border: false, stacked };
        Self { variant: ScaleVariant::Cartesian, x: axis, y: axis, aspect_ratio: None }
    }

    pub fn hidden() -> Self {
        Self { variant: ScaleVariant::Hidden, x: HIDDEN_AXIS, y: HIDDEN_AXIS, aspect_ratio: Some(1.0) }
    }

    pub fn is_hidden(&self) -> bool { self.variant == ScaleVariant::Hidden }
}

/// Linear mapping from a value range onto a pixel span. `px_start` maps `vmin`.
/// Either direction works: for a y-axis pass `(bottom, top)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub px_start: f32,
    pub px_end: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl LinearScale {
    pub fn new(px_start: f32, px_end: f32, vmin: f64, mut vmax: f64) -> Self {
        if (vmax - vmin).abs() < 1e-12 { vmax = vmin + 1.0; }
        Self { px_start, px_end, vmin, vmax }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = self.vmax - self.vmin;
        self.px_start + ((v - self.vmin) / span) as f32 * (self.px_end - self.px_start)
    }
}
