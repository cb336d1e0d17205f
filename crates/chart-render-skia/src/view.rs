// File: crates/chart-render-skia/src/view.rs
// Summary: Kind dispatch from a normalized config to a chart drawable or a text placeholder.

use chart_core::{ForecastView, KindTag, Normalized, Trends};

use crate::drawable::ChartDrawable;
use crate::paint::sk;
use crate::surface::Frame;

pub const NO_DATA_MESSAGE: &str = "No chart data available";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaceholderReason {
    NoData,
    /// Carries the tag exactly as received.
    Unsupported(String),
    /// The forecast could not be produced; the message is the backend's reason.
    ForecastUnavailable,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placeholder {
    pub message: String,
    pub reason: PlaceholderReason,
}

impl Placeholder {
    pub fn no_data() -> Self {
        Self { message: NO_DATA_MESSAGE.to_string(), reason: PlaceholderReason::NoData }
    }

    pub fn unsupported(tag: &str) -> Self {
        Self {
            message: format!("Unsupported chart type: {tag}"),
            reason: PlaceholderReason::Unsupported(tag.to_string()),
        }
    }

    pub fn forecast_unavailable(reason: impl Into<String>) -> Self {
        Self { message: reason.into(), reason: PlaceholderReason::ForecastUnavailable }
    }

    /// Message centered on the frame.
    pub fn draw(&self, frame: &Frame<'_>) {
        let Some(text) = frame.text else { return };
        let (cx, cy) = frame.bounds.center();
        let size = 13.0;
        text.draw_centered(frame.canvas, &self.message, cx, cy + size * 0.35, size, sk(frame.theme.placeholder));
    }
}

#[derive(Clone, Debug)]
pub enum View {
    Chart(ChartDrawable),
    Placeholder(Placeholder),
}

impl View {
    pub fn as_chart(&self) -> Option<&ChartDrawable> {
        match self {
            View::Chart(d) => Some(d),
            View::Placeholder(_) => None,
        }
    }

    pub fn as_placeholder(&self) -> Option<&Placeholder> {
        match self {
            View::Placeholder(p) => Some(p),
            View::Chart(_) => None,
        }
    }

    /// Text a placeholder shows; `None` for charts.
    pub fn message(&self) -> Option<&str> {
        self.as_placeholder().map(|p| p.message.as_str())
    }
}

/// Pick the view for `kind`. Empty data wins over an unsupported kind.
pub fn render(kind: &KindTag, normalized: &Normalized) -> View {
    let Some(config) = normalized.config() else {
        return View::Placeholder(Placeholder::no_data());
    };
    match kind {
        KindTag::Known(k) => View::Chart(ChartDrawable::new(*k, config.clone())),
        KindTag::Unsupported(tag) => {
            tracing::warn!(kind = %tag, "unsupported chart type; showing placeholder");
            View::Placeholder(Placeholder::unsupported(tag))
        }
    }
}

/// The trends view: the forecast line chart, or its reason when forecasting was not possible.
pub fn render_forecast(trends: &Trends) -> View {
    match trends.view() {
        ForecastView::Chart(descriptor) => render(&descriptor.kind, &descriptor.normalize()),
        ForecastView::Unavailable(reason) => View::Placeholder(Placeholder::forecast_unavailable(reason)),
    }
}
