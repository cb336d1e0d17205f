// File: crates/chart-core/src/normalize.rs
// Summary: Descriptor -> RenderConfig normalization (datasets, colors, scales, legend, tooltip).
// Notes:
// - Pure and surface-independent. Never fails: degenerate input yields `Normalized::Empty`.

use serde::Serialize;

use crate::color::Rgba;
use crate::descriptor::{ChartDescriptor, DataValue, Point, SeriesSpec};
use crate::downsample::DecimationConfig;
use crate::kind::ChartKind;
use crate::legend::LegendConfig;
use crate::palette::{PALETTE, SECONDARY_PALETTE};
use crate::scale::ScaleConfig;
use crate::style::StyleHints;
use crate::tooltip::TooltipConfig;
use crate::types::Padding;

/// A dataset's values, shaped for its kind.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetValues {
    /// One value per category position; `None` is an absent position.
    Scalars(Vec<Option<f64>>),
    /// Coordinate pairs (scatter/bubble).
    Points(Vec<Option<Point>>),
}

impl DatasetValues {
    pub fn len(&self) -> usize {
        match self {
            DatasetValues::Scalars(v) => v.len(),
            DatasetValues::Points(p) => p.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Scalar at `index`; positions past the end are absent, never zero.
    pub fn scalar(&self, index: usize) -> Option<f64> {
        match self {
            DatasetValues::Scalars(v) => v.get(index).copied().flatten(),
            DatasetValues::Points(p) => p.get(index).copied().flatten().map(|p| p.y),
        }
    }

    pub fn as_scalars(&self) -> Option<&[Option<f64>]> {
        match self {
            DatasetValues::Scalars(v) => Some(v),
            DatasetValues::Points(_) => None,
        }
    }

    pub fn as_points(&self) -> Option<&[Option<Point>]> {
        match self {
            DatasetValues::Points(p) => Some(p),
            DatasetValues::Scalars(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Fill {
    Solid(Rgba),
    /// One color per category (slice kinds).
    PerCategory(Vec<Rgba>),
}

impl Fill {
    /// Fill color for category `index`.
    pub fn color_at(&self, index: usize) -> Rgba {
        match self {
            Fill::Solid(c) => *c,
            Fill::PerCategory(colors) => {
                if colors.is_empty() { PALETTE.color(index) } else { colors[index % colors.len()] }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResolvedDataset {
    pub label: String,
    pub values: DatasetValues,
    pub border_color: Rgba,
    pub fill: Fill,
    pub style: StyleHints,
}

impl ResolvedDataset {
    /// The dataset's identifying color (its border color).
    pub fn color(&self) -> Rgba { self.border_color }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderConfig {
    pub title: Option<String>,
    pub categories: Vec<String>,
    pub datasets: Vec<ResolvedDataset>,
    pub scales: ScaleConfig,
    pub legend: LegendConfig,
    pub tooltip: TooltipConfig,
    pub layout: Padding,
    pub decimation: Option<DecimationConfig>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", content = "config", rename_all = "snake_case")]
pub enum Normalized {
    Ready(RenderConfig),
    /// Nothing to draw; distinct from a config with zero datasets.
    Empty,
}

impl Normalized {
    pub fn config(&self) -> Option<&RenderConfig> {
        match self {
            Normalized::Ready(c) => Some(c),
            Normalized::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool { matches!(self, Normalized::Empty) }
}

impl ChartDescriptor {
    /// Shorthand for `normalize(Some(self))`.
    pub fn normalize(&self) -> Normalized {
        normalize(Some(self))
    }
}

/// Normalize a descriptor into a render-ready configuration.
pub fn normalize(descriptor: Option<&ChartDescriptor>) -> Normalized {
    let Some(d) = descriptor else { return Normalized::Empty };
    if d.categories.is_empty() || !d.series.iter().any(SeriesSpec::has_values) {
        return Normalized::Empty;
    }

    let kind = d.kind.known();
    let slice = kind.is_some_and(ChartKind::is_slice);
    let style = kind.map_or(StyleHints::fallback(), StyleHints::for_kind);

    let datasets = d
        .series
        .iter()
        .enumerate()
        .map(|(i, s)| resolve_dataset(i, s, kind, style, d.categories.len()))
        .collect();

    let (legend, tooltip, layout, decimation) = if slice {
        (LegendConfig::slice(), TooltipConfig::slice(), Padding::horizontal(10.0), None)
    } else {
        (LegendConfig::cartesian(), TooltipConfig::cartesian(), Padding::ZERO, Some(DecimationConfig::default()))
    };

    Normalized::Ready(RenderConfig {
        title: d.title.clone(),
        categories: d.categories.clone(),
        datasets,
        scales: ScaleConfig::for_kind(kind),
        legend,
        tooltip,
        layout,
        decimation,
    })
}

fn resolve_dataset(
    index: usize,
    series: &SeriesSpec,
    kind: Option<ChartKind>,
    style: StyleHints,
    category_count: usize,
) -> ResolvedDataset {
    let values = if kind.is_some_and(ChartKind::is_point_based) {
        DatasetValues::Points(
            series
                .values
                .iter()
                .enumerate()
                .map(|(j, v)| {
                    v.map(|v| match v {
                        DataValue::Point(p) => p,
                        DataValue::Scalar(y) => Point::new(j as f64, y),
                    })
                })
                .collect(),
        )
    } else {
        DatasetValues::Scalars(series.values.iter().map(|v| v.map(|v| v.scalar())).collect())
    };

    let (border_color, fill) = if kind.is_some_and(ChartKind::is_slice) {
        let fills = (0..category_count).map(|j| PALETTE.color(j)).collect();
        (SECONDARY_PALETTE.color(index), Fill::PerCategory(fills))
    } else {
        let c = PALETTE.color(index);
        (c, Fill::Solid(c))
    };

    ResolvedDataset { label: series.name.clone(), values, border_color, fill, style }
}
