// File: crates/chart-render-skia/src/paint/legend.rs
// Summary: Legend items and their placement (bottom row for cartesian kinds, right column for slices).

use chart_core::geometry::RectI32;
use chart_core::legend::{LegendAlign, LegendPosition};
use chart_core::{LegendConfig, RenderConfig, Rgba};

use super::{fill_paint, sk, PaintCtx};

#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    pub label: String,
    pub color: Rgba,
}

/// Slice legends list categories (colored by the first dataset's fills); others list datasets.
pub fn items(config: &RenderConfig) -> Vec<LegendItem> {
    if config.scales.is_hidden() {
        let fill = config.datasets.first().map(|d| &d.fill);
        config
            .categories
            .iter()
            .enumerate()
            .map(|(j, c)| LegendItem {
                label: c.clone(),
                color: fill.map_or(chart_core::PALETTE.color(j), |f| f.color_at(j)),
            })
            .collect()
    } else {
        config.datasets.iter().map(|d| LegendItem { label: d.label.clone(), color: d.color() }).collect()
    }
}

/// Space the legend takes from the bounds: band height for `Bottom`/`Top`, panel width otherwise.
pub fn reserved(config: &LegendConfig, bounds: RectI32) -> i32 {
    if !config.display { return 0; }
    match config.position {
        LegendPosition::Bottom | LegendPosition::Top => (config.font_size + config.padding * 2.0).ceil() as i32,
        LegendPosition::Left | LegendPosition::Right => (bounds.width() as f32 * 0.35).round() as i32,
    }
}

pub fn paint(ctx: &PaintCtx<'_>, area: RectI32) {
    let cfg = &ctx.config.legend;
    if !cfg.display { return; }
    let entries = items(ctx.config);
    if entries.is_empty() { return; }
    let swatch = cfg.box_width.min(cfg.font_size) * 0.5;
    let gap = 6.0;
    let width_of = |label: &str| -> f32 {
        let text_w = ctx.text.map_or(0.0, |t| t.measure_width(label, cfg.font_size));
        swatch * 2.0 + gap + text_w
    };

    match cfg.position {
        LegendPosition::Bottom | LegendPosition::Top => {
            let total: f32 = entries.iter().map(|e| width_of(&e.label) + cfg.padding).sum::<f32>() - cfg.padding;
            let mut x = match cfg.align {
                LegendAlign::Start => area.left as f32,
                LegendAlign::Center => area.left as f32 + (area.width() as f32 - total) * 0.5,
                LegendAlign::End => area.right as f32 - total,
            }
            .max(area.left as f32);
            let cy = area.top as f32 + area.height() as f32 * 0.5;
            for e in &entries {
                draw_item(ctx, cfg, e, x, cy, swatch, gap);
                x += width_of(&e.label) + cfg.padding;
            }
        }
        LegendPosition::Left | LegendPosition::Right => {
            let row = cfg.font_size + cfg.padding;
            let total = row * entries.len() as f32 - cfg.padding;
            let mut cy = match cfg.align {
                LegendAlign::Start => area.top as f32,
                LegendAlign::Center => area.top as f32 + (area.height() as f32 - total) * 0.5,
                LegendAlign::End => area.bottom as f32 - total,
            }
            .max(area.top as f32)
                + cfg.font_size * 0.5;
            let x = area.left as f32 + cfg.padding;
            for e in &entries {
                draw_item(ctx, cfg, e, x, cy, swatch, gap);
                cy += row;
            }
        }
    }
}

fn draw_item(ctx: &PaintCtx<'_>, cfg: &LegendConfig, item: &LegendItem, x: f32, cy: f32, swatch: f32, gap: f32) {
    let paint = fill_paint(item.color);
    if cfg.use_point_style {
        ctx.canvas.draw_circle((x + swatch, cy), swatch, &paint);
    } else {
        let r = skia_safe::Rect::from_xywh(x, cy - swatch, swatch * 2.0, swatch * 2.0);
        ctx.canvas.draw_rect(r, &paint);
    }
    if let Some(text) = ctx.text {
        text.draw_left(ctx.canvas, &item.label, x + swatch * 2.0 + gap, cy + cfg.font_size * 0.35, cfg.font_size, sk(cfg.label_color));
    }
}
