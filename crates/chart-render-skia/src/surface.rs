// File: crates/chart-render-skia/src/surface.rs
// Summary: Live drawing surface (Skia CPU raster) that views are presented onto, plus PNG/RGBA export.

use chart_core::geometry::RectI32;
use skia_safe as skia;

use crate::error::RenderError;
use crate::options::RenderOptions;
use crate::paint::sk;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::view::View;

/// Borrowed drawing context for one paint pass.
pub struct Frame<'a> {
    pub canvas: &'a skia::Canvas,
    /// `None` when labels are disabled.
    pub text: Option<&'a TextShaper>,
    pub theme: &'a Theme,
    pub bounds: RectI32,
}

pub struct ChartSurface {
    surface: skia::Surface,
    options: RenderOptions,
    shaper: TextShaper,
}

impl ChartSurface {
    pub fn new(options: RenderOptions) -> Result<Self, RenderError> {
        let surface = skia::surfaces::raster_n32_premul((options.width, options.height))
            .ok_or(RenderError::Surface { width: options.width, height: options.height })?;
        Ok(Self { surface, options, shaper: TextShaper::new() })
    }

    pub fn options(&self) -> &RenderOptions { &self.options }

    pub fn bounds(&self) -> RectI32 {
        RectI32::from_ltwh(0, 0, self.options.width, self.options.height)
    }

    pub fn frame(&mut self) -> Frame<'_> {
        let bounds = RectI32::from_ltwh(0, 0, self.options.width, self.options.height);
        Frame {
            canvas: self.surface.canvas(),
            text: if self.options.draw_labels { Some(&self.shaper) } else { None },
            theme: &self.options.theme,
            bounds,
        }
    }

    pub fn clear(&mut self) {
        let bg = sk(self.options.theme.background);
        self.surface.canvas().clear(bg);
    }

    /// Clear, then draw `view`. Chart views are attached first, which runs the
    /// surface-dependent gradient refinement.
    pub fn present(&mut self, view: &mut View) -> Result<(), RenderError> {
        self.clear();
        match view {
            View::Chart(drawable) => {
                drawable.attach(self);
                drawable.draw(&self.frame())
            }
            View::Placeholder(p) => {
                p.draw(&self.frame());
                Ok(())
            }
        }
    }

    /// Snapshot the surface as PNG bytes.
    pub fn to_png_bytes(&mut self) -> Result<Vec<u8>, RenderError> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn write_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<(), RenderError> {
        let bytes = self.to_png_bytes()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Unpremultiplied RGBA8 pixels: `(pixels, width, height, stride)`.
    pub fn to_rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize), RenderError> {
        let (w, h) = (self.options.width, self.options.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        if !self.surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            return Err(RenderError::ReadPixels);
        }
        Ok((px, w as u32, h as u32, stride))
    }
}
