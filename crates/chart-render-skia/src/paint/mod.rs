// File: crates/chart-render-skia/src/paint/mod.rs
// Summary: Shared paint context and helpers for the kind-specific drawing strategies.

use chart_core::defaults::ChartDefaults;
use chart_core::geometry::RectI32;
use chart_core::{RenderConfig, Rgba};
use skia_safe as skia;

use crate::gradient::GradientFill;
use crate::text::TextShaper;
use crate::theme::Theme;

pub mod bar;
pub mod cartesian;
pub mod legend;
pub mod line;
pub mod points;
pub mod radar;
pub mod slice;
pub mod tooltip;

#[inline]
pub fn sk(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

pub fn fill_paint(color: Rgba) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Fill);
    p.set_color(sk(color));
    p
}

pub fn stroke_paint(color: Rgba, width: f32) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Stroke);
    p.set_stroke_width(width);
    p.set_color(sk(color));
    p
}

/// Everything a strategy needs to paint one chart into its plot rect.
pub struct PaintCtx<'a> {
    pub canvas: &'a skia::Canvas,
    pub text: Option<&'a TextShaper>,
    pub theme: &'a Theme,
    pub config: &'a RenderConfig,
    pub plot: RectI32,
    /// Per-dataset gradient, set by the post-attach refinement.
    pub gradients: &'a [Option<GradientFill>],
    pub defaults: &'static ChartDefaults,
}

impl PaintCtx<'_> {
    /// Fill paint for `dataset` at `category`: the refined gradient when present, else the flat fill.
    pub fn dataset_fill(&self, dataset: usize, category: usize) -> skia::Paint {
        let color = self.config.datasets[dataset].fill.color_at(category);
        let mut paint = fill_paint(color);
        if let Some(shader) = self.gradients.get(dataset).and_then(Option::as_ref).and_then(GradientFill::shader) {
            paint.set_shader(shader);
        }
        paint
    }

    pub fn category_count(&self) -> usize { self.config.categories.len() }
}
