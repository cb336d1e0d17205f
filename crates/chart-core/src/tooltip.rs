// File: crates/chart-core/src/tooltip.rs
// Summary: Tooltip configuration and index-mode tooltip content.

use serde::Serialize;

use crate::color::Rgba;
use crate::normalize::{DatasetValues, RenderConfig};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TooltipMode {
    /// One tooltip listing every dataset's value at the hovered category.
    Index,
    /// Only the hovered element.
    Nearest,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TooltipConfig {
    pub mode: TooltipMode,
    pub intersect: bool,
    pub background: Rgba,
    pub title_color: Rgba,
    pub body_color: Rgba,
    pub border_color: Rgba,
}

const BACKGROUND: Rgba = Rgba::rgba(15, 23, 42, 230);
const BODY: Rgba = Rgba::from_hex_const("#d1d5db");
const BORDER: Rgba = Rgba::from_hex_const("#475569");

impl TooltipConfig {
    pub fn cartesian() -> Self {
        Self {
            mode: TooltipMode::Index,
            intersect: false,
            background: BACKGROUND,
            title_color: Rgba::from_hex_const("#9ba2b2"),
            body_color: BODY,
            border_color: BORDER,
        }
    }

    pub fn slice() -> Self {
        Self { title_color: Rgba::rgb(255, 255, 255), ..Self::cartesian() }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TooltipLine {
    pub swatch: Rgba,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TooltipContent {
    pub title: String,
    pub lines: Vec<TooltipLine>,
}

/// Build index-mode tooltip content for category `index`.
/// Datasets with no value at `index` are left out; `None` when nothing remains.
pub fn tooltip_at(config: &RenderConfig, index: usize) -> Option<TooltipContent> {
    let title = config.categories.get(index)?.clone();
    let slice = config.scales.is_hidden();
    let lines: Vec<TooltipLine> = config
        .datasets
        .iter()
        .filter_map(|ds| {
            let text = match &ds.values {
                DatasetValues::Scalars(v) => format_number(v.get(index).copied().flatten()?),
                DatasetValues::Points(p) => {
                    let p = p.get(index).copied().flatten()?;
                    match p.r {
                        Some(r) => format!("({}, {}, {})", format_number(p.x), format_number(p.y), format_number(r)),
                        None => format!("({}, {})", format_number(p.x), format_number(p.y)),
                    }
                }
            };
            let swatch = if slice { ds.fill.color_at(index) } else { ds.border_color };
            Some(TooltipLine { swatch, text: format!("{}: {}", ds.label, text) })
        })
        .collect();
    if lines.is_empty() { None } else { Some(TooltipContent { title, lines }) }
}

/// At most two fraction digits, trailing zeros dropped.
pub fn format_number(v: f64) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
