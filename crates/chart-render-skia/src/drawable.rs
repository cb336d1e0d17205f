// File: crates/chart-render-skia/src/drawable.rs
// Summary: A normalized chart bound to its drawing strategy; attached to a surface before drawing.
// Notes:
// - `attach` is the only place gradients are computed, since they depend on the
//   realized plot rect. Normalized configs never carry surface state.

use chart_core::geometry::RectI32;
use chart_core::legend::LegendPosition;
use chart_core::{tooltip_at, ChartKind, RenderConfig, TooltipContent};

use crate::error::RenderError;
use crate::gradient::GradientFill;
use crate::paint::cartesian::CategoryAxis;
use crate::paint::{legend, sk, tooltip, PaintCtx};
use crate::strategy::{DrawStrategy, Painter};
use crate::surface::{ChartSurface, Frame};

/// Height of the title band when a title is present.
const TITLE_BAND: i32 = 28;
/// Margin around slice and radar plots, which ignore axis insets.
const SLICE_MARGIN: i32 = 8;

/// Realized regions of one chart on one surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub title: Option<RectI32>,
    pub plot: RectI32,
    pub legend: Option<RectI32>,
    pub bounds: RectI32,
}

#[derive(Clone, Debug)]
pub struct ChartDrawable {
    kind: ChartKind,
    strategy: DrawStrategy,
    config: RenderConfig,
    layout: Option<Layout>,
    gradients: Vec<Option<GradientFill>>,
    hover_index: Option<usize>,
}

impl ChartDrawable {
    pub fn new(kind: ChartKind, config: RenderConfig) -> Self {
        Self {
            kind,
            strategy: DrawStrategy::for_kind(kind),
            config,
            layout: None,
            gradients: Vec::new(),
            hover_index: None,
        }
    }

    pub fn kind(&self) -> ChartKind { self.kind }
    pub fn strategy(&self) -> DrawStrategy { self.strategy }
    pub fn config(&self) -> &RenderConfig { &self.config }
    pub fn layout(&self) -> Option<&Layout> { self.layout.as_ref() }
    pub fn is_attached(&self) -> bool { self.layout.is_some() }

    /// Per-dataset gradients; empty until attached, all `None` for kinds without gradient fill.
    pub fn gradients(&self) -> &[Option<GradientFill>] { &self.gradients }

    /// Bind to `surface`: compute the layout, then refine bar/stacked-bar/area fills
    /// into vertical gradients spanning the plot.
    pub fn attach(&mut self, surface: &ChartSurface) {
        let options = surface.options();
        let layout = compute_layout(&self.config, self.kind, surface.bounds(), &options.insets);
        let uses_gradient = self.kind.uses_gradient_fill();
        self.gradients = self
            .config
            .datasets
            .iter()
            .map(|ds| {
                uses_gradient
                    .then(|| GradientFill::vertical(ds.fill.color_at(0), layout.plot.top as f32, layout.plot.bottom as f32))
            })
            .collect();
        self.hover_index = options.hover_index;
        self.layout = Some(layout);
        tracing::trace!(kind = %self.kind, strategy = self.strategy.id(), "drawable attached");
    }

    /// Index-mode tooltip content for category `index`.
    pub fn tooltip_at(&self, index: usize) -> Option<TooltipContent> {
        tooltip_at(&self.config, index)
    }

    pub fn draw(&self, frame: &Frame<'_>) -> Result<(), RenderError> {
        let layout = self.layout.ok_or(RenderError::NotAttached)?;
        let ctx = PaintCtx {
            canvas: frame.canvas,
            text: frame.text,
            theme: frame.theme,
            config: &self.config,
            plot: layout.plot,
            gradients: &self.gradients,
            defaults: chart_core::defaults::get(),
        };

        if let (Some(title_rect), Some(title), Some(text)) = (layout.title, self.config.title.as_deref(), frame.text) {
            let size = frame.theme.title_size;
            let baseline = title_rect.top as f32 + (title_rect.height() as f32 + size) * 0.5;
            text.draw_bold(frame.canvas, title, title_rect.left as f32 + 12.0, baseline, size, sk(frame.theme.title));
        }

        self.strategy.paint(&ctx);

        if let Some(area) = layout.legend {
            legend::paint(&ctx, area);
        }
        if let Some(index) = self.hover_index {
            if let Some(content) = self.tooltip_at(index) {
                tooltip::paint(&ctx, &content, self.anchor(&layout, index), layout.bounds);
            }
        }
        Ok(())
    }

    /// Where the tooltip for category `index` is pinned.
    fn anchor(&self, layout: &Layout, index: usize) -> (f32, f32) {
        let p = layout.plot;
        match self.strategy {
            DrawStrategy::Pie | DrawStrategy::Doughnut | DrawStrategy::PolarArea | DrawStrategy::Radar => p.center(),
            DrawStrategy::HorizontalBar => {
                let axis = CategoryAxis { count: self.config.categories.len(), start: p.top as f32, end: p.bottom as f32, offset: true };
                (p.left as f32 + p.width() as f32 * 0.5, axis.pos(index))
            }
            DrawStrategy::Line | DrawStrategy::Scatter | DrawStrategy::Bubble => {
                let axis = CategoryAxis { count: self.config.categories.len(), start: p.left as f32, end: p.right as f32, offset: false };
                (axis.pos(index), p.top as f32 + 8.0)
            }
            DrawStrategy::Bar | DrawStrategy::StackedBar => {
                let axis = CategoryAxis { count: self.config.categories.len(), start: p.left as f32, end: p.right as f32, offset: true };
                (axis.pos(index), p.top as f32 + 8.0)
            }
        }
    }
}

/// Split `bounds` into title band, legend region and plot.
pub fn compute_layout(config: &RenderConfig, kind: ChartKind, bounds: RectI32, insets: &chart_core::Insets) -> Layout {
    let mut rest = bounds;
    let title = config.title.as_ref().map(|_| {
        let band = RectI32::from_ltrb(rest.left, rest.top, rest.right, rest.top + TITLE_BAND);
        rest.top = band.bottom.min(rest.bottom);
        band
    });

    let reserved = legend::reserved(&config.legend, rest);
    let legend_rect = (reserved > 0).then(|| match config.legend.position {
        LegendPosition::Bottom => {
            let r = RectI32::from_ltrb(rest.left + 12, rest.bottom - reserved, rest.right - 12, rest.bottom);
            rest.bottom = r.top.max(rest.top);
            r
        }
        LegendPosition::Top => {
            let r = RectI32::from_ltrb(rest.left + 12, rest.top, rest.right - 12, rest.top + reserved);
            rest.top = r.bottom.min(rest.bottom);
            r
        }
        LegendPosition::Right => {
            let r = RectI32::from_ltrb(rest.right - reserved, rest.top, rest.right, rest.bottom);
            rest.right = r.left.max(rest.left);
            r
        }
        LegendPosition::Left => {
            let r = RectI32::from_ltrb(rest.left, rest.top, rest.left + reserved, rest.bottom);
            rest.left = r.right.min(rest.right);
            r
        }
    });

    let plot = if config.scales.is_hidden() || kind == ChartKind::Radar {
        let m = SLICE_MARGIN as u32;
        rest.inset(&chart_core::Insets::new(m, m, m, m)).pad(&config.layout)
    } else {
        // Title and legend already took their share of the top and bottom insets.
        let top = if title.is_some() { insets.top.saturating_sub(TITLE_BAND as u32).max(8) } else { insets.top };
        let bottom = if legend_rect.is_some() { insets.bottom.saturating_sub(reserved as u32).max(20) } else { insets.bottom };
        rest.inset(&chart_core::Insets::new(insets.left, insets.right, top, bottom)).pad(&config.layout)
    };

    Layout { title, plot, legend: legend_rect, bounds }
}
