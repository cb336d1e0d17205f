// File: crates/chart-render-skia/src/text.rs
// Summary: Skia textlayout shaper for titles, tick labels, legend entries, tooltips and placeholders.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

/// Families tried in order; the dashboard font first, then common system faces.
const FAMILIES: [&str; 7] = ["Inter", "Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];
/// Baseline sits roughly this far below the paragraph top, as a share of font size.
const ASCENT: f32 = 0.8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Anchor {
    Left,
    Center,
    Right,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fonts = FontCollection::new();
        fonts.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts }
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, bold: bool) -> Paragraph {
        let mut style = TextStyle::new();
        style.set_font_size(size.max(1.0));
        style.set_color(color);
        style.set_font_families(&FAMILIES);
        if bold {
            style.set_font_style(skia::FontStyle::bold());
        }

        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        self.layout(text, size, skia::Color::TRANSPARENT, false).longest_line()
    }

    /// `(x, y)` is the left end of the baseline.
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        self.draw(canvas, text, x, y, size, color, false, Anchor::Left);
    }

    pub fn draw_bold(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        self.draw(canvas, text, x, y, size, color, true, Anchor::Left);
    }

    /// Horizontally centered on `cx`.
    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, cx: f32, y: f32, size: f32, color: skia::Color) {
        self.draw(canvas, text, cx, y, size, color, false, Anchor::Center);
    }

    /// Ends at `right`.
    pub fn draw_right(&self, canvas: &skia::Canvas, text: &str, right: f32, y: f32, size: f32, color: skia::Color) {
        self.draw(canvas, text, right, y, size, color, false, Anchor::Right);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, bold: bool, anchor: Anchor) {
        let p = self.layout(text, size, color, bold);
        let left = match anchor {
            Anchor::Left => x,
            Anchor::Center => x - p.longest_line() * 0.5,
            Anchor::Right => x - p.longest_line(),
        };
        p.paint(canvas, skia::Point::new(left, y - size * ASCENT));
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
