// File: crates/chart-core/src/types.rs
// Summary: Shared layout types and constants (sizes, insets, padding).

use serde::{Deserialize, Serialize};

/// Default surface width in pixels (one dashboard grid cell).
pub const WIDTH: i32 = 480;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 350;

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(48, 16, 40, 24)
    }
}

/// Extra padding a chart asks for inside its plot area, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Padding {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Padding {
    pub const ZERO: Padding = Padding { left: 0.0, right: 0.0, top: 0.0, bottom: 0.0 };

    pub const fn horizontal(px: f32) -> Self {
        Self { left: px, right: px, top: 0.0, bottom: 0.0 }
    }
}
