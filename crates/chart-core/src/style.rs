// File: crates/chart-core/src/style.rs
// Summary: Per-kind dataset style hints (points, fill, stacking, border width, tension).

use serde::Serialize;

use crate::kind::ChartKind;

/// A style setting that is either explicit, left to the renderer default, or meaningless for the kind.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Hint<T> {
    Set(T),
    Default,
    NotApplicable,
}

impl<T: Copy> Hint<T> {
    /// Explicit value, else `fallback` (for both `Default` and `NotApplicable`).
    pub fn or(self, fallback: T) -> T {
        match self {
            Hint::Set(v) => v,
            Hint::Default | Hint::NotApplicable => fallback,
        }
    }
}

/// Point marker sizes in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PointStyle {
    pub radius: f32,
    pub hover_radius: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StyleHints {
    pub show_points: Hint<bool>,
    pub point: PointStyle,
    pub fill: Hint<bool>,
    pub stacked: bool,
    pub stack_group: Option<&'static str>,
    pub border_width: Hint<f32>,
    pub tension: Option<f32>,
}

pub const LINE_TENSION: f32 = 0.4;
pub const STACK_GROUP: &str = "stack-0";

const NO_POINTS: PointStyle = PointStyle { radius: 0.0, hover_radius: 0.0 };
const LINE_POINTS: PointStyle = PointStyle { radius: 1.0, hover_radius: 5.0 };
const SCATTER_POINTS: PointStyle = PointStyle { radius: 3.0, hover_radius: 4.0 };

impl StyleHints {
    /// Style table lookup keyed by kind.
    pub const fn for_kind(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Line => Self {
                show_points: Hint::Set(true),
                point: LINE_POINTS,
                fill: Hint::Set(false),
                stacked: false,
                stack_group: None,
                border_width: Hint::Set(2.0),
                tension: Some(LINE_TENSION),
            },
            ChartKind::Area => Self {
                show_points: Hint::Set(false),
                point: NO_POINTS,
                fill: Hint::Set(true),
                stacked: false,
                stack_group: None,
                border_width: Hint::Set(2.0),
                tension: Some(LINE_TENSION),
            },
            ChartKind::Bar | ChartKind::HorizontalBar => Self {
                show_points: Hint::Set(false),
                point: NO_POINTS,
                fill: Hint::NotApplicable,
                stacked: false,
                stack_group: None,
                border_width: Hint::Set(0.0),
                tension: None,
            },
            ChartKind::StackedBar => Self {
                show_points: Hint::Set(false),
                point: NO_POINTS,
                fill: Hint::NotApplicable,
                stacked: true,
                stack_group: Some(STACK_GROUP),
                border_width: Hint::Set(0.0),
                tension: None,
            },
            ChartKind::Pie | ChartKind::Doughnut | ChartKind::PolarArea => Self {
                show_points: Hint::NotApplicable,
                point: NO_POINTS,
                fill: Hint::NotApplicable,
                stacked: false,
                stack_group: None,
                border_width: Hint::NotApplicable,
                tension: None,
            },
            ChartKind::Radar => Self {
                show_points: Hint::Set(false),
                point: NO_POINTS,
                fill: Hint::Set(false),
                stacked: false,
                stack_group: None,
                border_width: Hint::Default,
                tension: None,
            },
            ChartKind::Scatter | ChartKind::Bubble => Self {
                show_points: Hint::Set(true),
                point: SCATTER_POINTS,
                fill: Hint::Set(false),
                stacked: false,
                stack_group: None,
                border_width: Hint::Default,
                tension: None,
            },
        }
    }

    /// Style for descriptors whose kind is not recognized; everything left to defaults.
    pub const fn fallback() -> Self {
        Self {
            show_points: Hint::Default,
            point: NO_POINTS,
            fill: Hint::Default,
            stacked: false,
            stack_group: None,
            border_width: Hint::Default,
            tension: None,
        }
    }
}
