// File: crates/chart-core/src/legend.rs
// Summary: Legend placement and label styling per scale variant.

use serde::Serialize;

use crate::color::Rgba;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendPosition {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendAlign {
    Start,
    Center,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LegendConfig {
    pub display: bool,
    pub position: LegendPosition,
    pub align: LegendAlign,
    pub label_color: Rgba,
    pub box_width: f32,
    pub use_point_style: bool,
    pub padding: f32,
    pub font_size: f32,
}

impl LegendConfig {
    pub fn cartesian() -> Self {
        Self {
            display: true,
            position: LegendPosition::Bottom,
            align: LegendAlign::End,
            label_color: Rgba::from_hex_const("#a4b0be"),
            box_width: 14.0,
            use_point_style: true,
            padding: 10.0,
            font_size: 10.0,
        }
    }

    /// Slice legends sit beside the chart and list categories.
    pub fn slice() -> Self {
        Self {
            display: true,
            position: LegendPosition::Right,
            align: LegendAlign::Center,
            label_color: Rgba::from_hex_const("#a7aab0"),
            box_width: 6.0,
            use_point_style: true,
            padding: 15.0,
            font_size: 9.0,
        }
    }
}
