// File: crates/chart-render-skia/src/strategy.rs
// Summary: Kind to drawing-strategy table and the painter trait strategies implement.

use chart_core::ChartKind;

use crate::paint::{bar, line, points, radar, slice, PaintCtx};

/// Draws one normalized chart into the plot rect of a [`PaintCtx`].
pub trait Painter {
    fn id(&self) -> &'static str;
    fn paint(&self, ctx: &PaintCtx<'_>);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawStrategy {
    /// Lines and filled areas share a strategy; fill comes from the dataset style.
    Line,
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

impl DrawStrategy {
    pub const fn for_kind(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Line | ChartKind::Area => DrawStrategy::Line,
            ChartKind::Bar => DrawStrategy::Bar,
            ChartKind::HorizontalBar => DrawStrategy::HorizontalBar,
            ChartKind::StackedBar => DrawStrategy::StackedBar,
            ChartKind::Pie => DrawStrategy::Pie,
            ChartKind::Doughnut => DrawStrategy::Doughnut,
            ChartKind::PolarArea => DrawStrategy::PolarArea,
            ChartKind::Radar => DrawStrategy::Radar,
            ChartKind::Scatter => DrawStrategy::Scatter,
            ChartKind::Bubble => DrawStrategy::Bubble,
        }
    }
}

impl Painter for DrawStrategy {
    fn id(&self) -> &'static str {
        match self {
            DrawStrategy::Line => "line",
            DrawStrategy::Bar => "bar",
            DrawStrategy::HorizontalBar => "horizontal-bar",
            DrawStrategy::StackedBar => "stacked-bar",
            DrawStrategy::Pie => "pie",
            DrawStrategy::Doughnut => "doughnut",
            DrawStrategy::PolarArea => "polar-area",
            DrawStrategy::Radar => "radar",
            DrawStrategy::Scatter => "scatter",
            DrawStrategy::Bubble => "bubble",
        }
    }

    fn paint(&self, ctx: &PaintCtx<'_>) {
        match self {
            DrawStrategy::Line => line::paint(ctx),
            DrawStrategy::Bar => bar::paint_grouped(ctx),
            DrawStrategy::HorizontalBar => bar::paint_horizontal(ctx),
            DrawStrategy::StackedBar => bar::paint_stacked(ctx),
            DrawStrategy::Pie => slice::paint_pie(ctx),
            DrawStrategy::Doughnut => slice::paint_doughnut(ctx),
            DrawStrategy::PolarArea => slice::paint_polar(ctx),
            DrawStrategy::Radar => radar::paint(ctx),
            DrawStrategy::Scatter => points::paint_scatter(ctx),
            DrawStrategy::Bubble => points::paint_bubble(ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_shares_the_line_strategy() {
        assert_eq!(DrawStrategy::for_kind(ChartKind::Area), DrawStrategy::Line);
        assert_eq!(DrawStrategy::for_kind(ChartKind::Line).id(), "line");
    }

    #[test]
    fn every_kind_has_a_strategy() {
        let mut ids: Vec<&str> = ChartKind::ALL.iter().map(|k| DrawStrategy::for_kind(*k).id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }
}
