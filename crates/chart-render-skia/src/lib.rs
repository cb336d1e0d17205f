// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia renderer: kind dispatch, drawing strategies, surfaces and PNG/RGBA export.

pub mod drawable;
pub mod error;
pub mod gradient;
pub mod host;
pub mod options;
pub mod paint;
pub mod strategy;
pub mod surface;
pub mod text;
pub mod theme;
pub mod view;

pub use drawable::{ChartDrawable, Layout};
pub use error::RenderError;
pub use gradient::GradientFill;
pub use host::ChartHost;
pub use options::{RenderOptions, RenderSettings};
pub use strategy::{DrawStrategy, Painter};
pub use surface::{ChartSurface, Frame};
pub use theme::Theme;
pub use view::{render, render_forecast, Placeholder, PlaceholderReason, View, NO_DATA_MESSAGE};

/// Normalize `descriptor`, dispatch on its kind and draw the result onto a fresh surface.
pub fn render_descriptor(
    descriptor: &chart_core::ChartDescriptor,
    options: RenderOptions,
) -> Result<(View, ChartSurface), RenderError> {
    let mut surface = ChartSurface::new(options)?;
    let mut view = render(&descriptor.kind, &descriptor.normalize());
    surface.present(&mut view)?;
    Ok((view, surface))
}
