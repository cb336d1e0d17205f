// File: crates/chart-render-skia/src/paint/tooltip.rs
// Summary: Index-mode tooltip box drawn next to a hovered category.

use chart_core::TooltipContent;
use skia_safe as skia;

use super::{fill_paint, sk, stroke_paint, PaintCtx};

const FONT_SIZE: f32 = 11.0;
const PAD: f32 = 6.0;
const SWATCH: f32 = 8.0;
const CORNER: f32 = 4.0;
/// Width per character when no shaper is available to measure.
const CHAR_WIDTH: f32 = 6.0;

/// Draw `content` with its top-left corner near `anchor`, kept inside the surface bounds.
pub fn paint(ctx: &PaintCtx<'_>, content: &TooltipContent, anchor: (f32, f32), bounds: chart_core::geometry::RectI32) {
    let cfg = &ctx.config.tooltip;
    let measure = |s: &str| ctx.text.map_or(s.chars().count() as f32 * CHAR_WIDTH, |t| t.measure_width(s, FONT_SIZE));

    let line_h = FONT_SIZE + 4.0;
    let body_w = content.lines.iter().map(|l| SWATCH + 4.0 + measure(&l.text)).fold(0.0f32, f32::max);
    let w = measure(&content.title).max(body_w) + PAD * 2.0;
    let h = line_h * (content.lines.len() + 1) as f32 + PAD * 2.0;

    let mut x = anchor.0 + 8.0;
    if x + w > bounds.right as f32 { x = anchor.0 - 8.0 - w; }
    let x = x.max(bounds.left as f32);
    let y = anchor.1.min(bounds.bottom as f32 - h).max(bounds.top as f32);

    let rect = skia::Rect::from_xywh(x, y, w, h);
    ctx.canvas.draw_round_rect(rect, CORNER, CORNER, &fill_paint(cfg.background));
    ctx.canvas.draw_round_rect(rect, CORNER, CORNER, &stroke_paint(cfg.border_color, 1.0));

    let mut baseline = y + PAD + FONT_SIZE;
    if let Some(text) = ctx.text {
        text.draw_bold(ctx.canvas, &content.title, x + PAD, baseline, FONT_SIZE, sk(cfg.title_color));
    }
    for line in &content.lines {
        baseline += line_h;
        let sw = skia::Rect::from_xywh(x + PAD, baseline - SWATCH, SWATCH, SWATCH);
        ctx.canvas.draw_rect(sw, &fill_paint(line.swatch));
        if let Some(text) = ctx.text {
            text.draw_left(ctx.canvas, &line.text, x + PAD + SWATCH + 4.0, baseline, FONT_SIZE, sk(cfg.body_color));
        }
    }
}
