// File: crates/chart-render-skia/src/gradient.rs
// Summary: Vertical two-stop gradient fills computed against a realized surface's plot area.
// Notes:
// - Both stops currently use the same palette color, so the gradient renders flat.
//   Changing `bottom` is the hook for a real fade.

use chart_core::Rgba;
use skia_safe as skia;

use crate::paint::sk;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientFill {
    pub top: Rgba,
    pub bottom: Rgba,
    /// Pixel rows the gradient spans on the surface.
    pub y0: f32,
    pub y1: f32,
}

impl GradientFill {
    pub fn vertical(color: Rgba, y0: f32, y1: f32) -> Self {
        Self { top: color, bottom: color, y0, y1 }
    }

    pub fn shader(&self) -> Option<skia::Shader> {
        let colors = [sk(self.top), sk(self.bottom)];
        skia::Shader::linear_gradient(
            (skia::Point::new(0.0, self.y0), skia::Point::new(0.0, self.y1)),
            &colors[..],
            None,
            skia::TileMode::Clamp,
            None,
            None,
        )
    }
}
