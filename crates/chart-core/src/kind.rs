// File: crates/chart-core/src/kind.rs
// Summary: Closed set of chart kinds plus a tag type that can also carry unknown kinds.

use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Line,
    Area,
    Bar,
    HorizontalBar,
    StackedBar,
    Pie,
    Doughnut,
    PolarArea,
    Radar,
    Scatter,
    Bubble,
}

impl ChartKind {
    pub const ALL: [ChartKind; 11] = [
        ChartKind::Line,
        ChartKind::Area,
        ChartKind::Bar,
        ChartKind::HorizontalBar,
        ChartKind::StackedBar,
        ChartKind::Pie,
        ChartKind::Doughnut,
        ChartKind::PolarArea,
        ChartKind::Radar,
        ChartKind::Scatter,
        ChartKind::Bubble,
    ];

    /// Canonical wire tag.
    pub const fn tag(self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Area => "area",
            ChartKind::Bar => "bar",
            ChartKind::HorizontalBar => "horizontal-bar",
            ChartKind::StackedBar => "stackedBar",
            ChartKind::Pie => "pie",
            ChartKind::Doughnut => "doughnut",
            ChartKind::PolarArea => "polarArea",
            ChartKind::Radar => "radar",
            ChartKind::Scatter => "scatter",
            ChartKind::Bubble => "bubble",
        }
    }

    /// Match a tag case-insensitively, accepting hyphenated and run-together spellings.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let t = tag.trim().to_ascii_lowercase();
        let kind = match t.as_str() {
            "line" => ChartKind::Line,
            "area" => ChartKind::Area,
            "bar" => ChartKind::Bar,
            "horizontal-bar" | "horizontalbar" => ChartKind::HorizontalBar,
            "stackedbar" | "stacked-bar" => ChartKind::StackedBar,
            "pie" => ChartKind::Pie,
            "doughnut" => ChartKind::Doughnut,
            "polararea" | "polar-area" => ChartKind::PolarArea,
            "radar" => ChartKind::Radar,
            "scatter" => ChartKind::Scatter,
            "bubble" => ChartKind::Bubble,
            _ => return None,
        };
        Some(kind)
    }

    /// Slice kinds visualize categories, not series, as the primary dimension.
    pub const fn is_slice(self) -> bool {
        matches!(self, ChartKind::Pie | ChartKind::Doughnut | ChartKind::PolarArea)
    }

    /// Kinds whose values are coordinate points rather than per-category scalars.
    pub const fn is_point_based(self) -> bool {
        matches!(self, ChartKind::Scatter | ChartKind::Bubble)
    }

    /// Kinds that receive the post-construction gradient fill.
    pub const fn uses_gradient_fill(self) -> bool {
        matches!(self, ChartKind::Bar | ChartKind::StackedBar | ChartKind::Area)
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.tag()) }
}

/// A descriptor's kind as received: a known kind or the literal unsupported tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum KindTag {
    Known(ChartKind),
    Unsupported(String),
}

impl KindTag {
    pub fn parse(tag: &str) -> Self {
        match ChartKind::from_tag(tag) {
            Some(kind) => KindTag::Known(kind),
            None => {
                tracing::debug!(tag, "unrecognized chart kind tag");
                KindTag::Unsupported(tag.to_string())
            }
        }
    }

    pub fn known(&self) -> Option<ChartKind> {
        match self {
            KindTag::Known(k) => Some(*k),
            KindTag::Unsupported(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            KindTag::Known(k) => k.tag(),
            KindTag::Unsupported(s) => s,
        }
    }
}

impl From<ChartKind> for KindTag {
    fn from(kind: ChartKind) -> Self { KindTag::Known(kind) }
}

impl From<&str> for KindTag {
    fn from(tag: &str) -> Self { KindTag::parse(tag) }
}

impl fmt::Display for KindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl Serialize for KindTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
