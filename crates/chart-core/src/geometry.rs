// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::types::{Insets, Padding};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Shrink by `insets`; never inverts (collapses to zero size instead).
    pub fn inset(&self, insets: &Insets) -> Self {
        let left = self.left + insets.left as i32;
        let top = self.top + insets.top as i32;
        let right = (self.right - insets.right as i32).max(left);
        let bottom = (self.bottom - insets.bottom as i32).max(top);
        Self { left, top, right, bottom }
    }

    pub fn pad(&self, padding: &Padding) -> Self {
        let left = self.left + padding.left.round() as i32;
        let top = self.top + padding.top.round() as i32;
        let right = (self.right - padding.right.round() as i32).max(left);
        let bottom = (self.bottom - padding.bottom.round() as i32).max(top);
        Self { left, top, right, bottom }
    }

    pub fn center(&self) -> (f32, f32) {
        ((self.left + self.right) as f32 * 0.5, (self.top + self.bottom) as f32 * 0.5)
    }

    /// Largest centered square inside this rect.
    pub fn square(&self) -> Self {
        let side = self.width().min(self.height());
        let left = self.left + (self.width() - side) / 2;
        let top = self.top + (self.height() - side) / 2;
        Self::from_ltwh(left, top, side, side)
    }
}
