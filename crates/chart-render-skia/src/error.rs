// File: crates/chart-render-skia/src/error.rs
// Summary: Renderer error type. Chart data problems never surface here; they become placeholder views.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("encode PNG failed")]
    Encode,
    #[error("reading surface pixels failed")]
    ReadPixels,
    #[error("drawable must be attached to a surface before drawing")]
    NotAttached,
    #[error("invalid render settings: {0}")]
    Settings(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
