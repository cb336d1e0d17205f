// File: crates/chart-core/src/payload.rs
// Summary: Dashboard response payload: chart descriptors plus pass-through fields, and the gated trends forecast.

use serde_json::Value;
use thiserror::Error;

use crate::descriptor::{decode_value, label_text, ChartDescriptor, DataValue, SeriesSpec};
use crate::kind::ChartKind;

/// Charts shown in the dashboard grid.
pub const GRID_CAPACITY: usize = 9;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("payload root must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// A dashboard chart entry: the decoded descriptor plus which raw fields the grid looks at.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartEntry {
    pub descriptor: ChartDescriptor,
    /// `data.labels` is a non-empty array.
    pub listed: bool,
    /// `data.labels` and `data.series` are both present.
    pub has_data: bool,
}

impl ChartEntry {
    fn from_value(c: &Value) -> Self {
        let data = c.get("data");
        let labels = data.and_then(|d| d.get("labels"));
        Self {
            descriptor: ChartDescriptor::from_value(c),
            listed: labels.and_then(Value::as_array).is_some_and(|l| !l.is_empty()),
            has_data: labels.is_some() && data.and_then(|d| d.get("series")).is_some(),
        }
    }

    fn is_titled(&self) -> bool {
        self.descriptor.title.as_deref().is_some_and(|t| !t.is_empty())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardPayload {
    pub charts: Vec<ChartEntry>,
    pub insights: Vec<String>,
    pub industry: Option<String>,
    /// Present when the payload carries `forecast_data` or `forecast_info`.
    pub trends: Option<Trends>,
}

impl DashboardPayload {
    pub fn from_json(text: &str) -> Result<Self, PayloadError> {
        let root: Value = serde_json::from_str(text)?;
        Self::from_value(&root)
    }

    /// KPI and EDA fields are ignored; charts decode one by one and never fail the payload.
    pub fn from_value(root: &Value) -> Result<Self, PayloadError> {
        if !root.is_object() {
            return Err(PayloadError::NotAnObject(json_type(root)));
        }

        let charts: Vec<ChartEntry> = root
            .get("charts")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(ChartEntry::from_value).collect())
            .unwrap_or_default();

        let insights: Vec<String> = root
            .get("insights")
            .and_then(Value::as_array)
            .map(|xs| xs.iter().filter_map(Value::as_str).map(str::to_string).collect())
            .unwrap_or_default();

        let industry = root.get("industry").and_then(Value::as_str).map(str::to_string);
        let trends = (root.get("forecast_data").is_some() || root.get("forecast_info").is_some())
            .then(|| Trends::from_value(root));

        tracing::debug!(charts = charts.len(), insights = insights.len(), "decoded dashboard payload");
        Ok(Self { charts, insights, industry, trends })
    }

    /// Charts shown in the grid: the first 9 with labels, then only the titled ones carrying data.
    pub fn grid_charts(&self) -> Vec<&ChartDescriptor> {
        self.charts
            .iter()
            .filter(|e| e.listed)
            .take(GRID_CAPACITY)
            .filter(|e| e.has_data && e.is_titled())
            .map(|e| &e.descriptor)
            .collect()
    }
}

/// Shown when the trends response gives no reason of its own.
pub const NO_FORECAST_REASON: &str = "No suitable columns for trends.";

/// Whether the backend could forecast, and why (or why not).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ForecastInfo {
    pub forecast_possible: bool,
    pub reason: Option<String>,
    pub x_axis: Option<String>,
    pub y_axis: Option<String>,
    pub data_reduction: Option<String>,
}

impl ForecastInfo {
    pub fn from_value(v: &Value) -> Self {
        let text = |k: &str| v.get(k).and_then(Value::as_str).map(str::to_string);
        Self {
            forecast_possible: v.get("forecast_possible").and_then(Value::as_bool).unwrap_or(false),
            reason: text("reason"),
            x_axis: text("x_axis"),
            y_axis: text("y_axis"),
            data_reduction: text("data_reduction"),
        }
    }
}

/// Forecast series delivered by the trends endpoint.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ForecastData {
    pub labels: Vec<String>,
    /// Name of the forecast column, before the `Forecasted` prefix.
    pub name: String,
    pub values: Vec<Option<DataValue>>,
    pub x_col: Option<String>,
    pub y_col: Option<String>,
    pub total_points: Option<u64>,
    pub sent_points: Option<u64>,
}

impl ForecastData {
    /// `labels` falls back to `x`, `series[0].values` to `y`, and the series name
    /// to `y_col`, then to `"Forecast"`.
    pub fn from_value(v: &Value) -> Self {
        let text = |k: &str| v.get(k).and_then(Value::as_str).map(str::to_string);
        let labels = v
            .get("labels")
            .and_then(Value::as_array)
            .or_else(|| v.get("x").and_then(Value::as_array))
            .map(|xs| xs.iter().map(label_text).collect())
            .unwrap_or_default();

        let first = v.get("series").and_then(Value::as_array).and_then(|s| s.first());
        let values = first
            .and_then(|s| s.get("values"))
            .and_then(Value::as_array)
            .or_else(|| v.get("y").and_then(Value::as_array))
            .map(|ys| ys.iter().map(decode_value).collect())
            .unwrap_or_default();

        let y_col = text("y_col");
        let name = first
            .and_then(|s| s.get("name"))
            .and_then(Value::as_str)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .or_else(|| y_col.clone().filter(|y| !y.is_empty()))
            .unwrap_or_else(|| "Forecast".to_string());

        Self {
            labels,
            name,
            values,
            x_col: text("x_col"),
            y_col,
            total_points: v.get("total_points").and_then(Value::as_u64),
            sent_points: v.get("sent_points").and_then(Value::as_u64),
        }
    }

    /// Forecast rendered as a line chart titled by the forecast column.
    pub fn descriptor(&self) -> ChartDescriptor {
        let title = match &self.y_col {
            Some(y) => format!("Forecast: {y}"),
            None => "Forecast".to_string(),
        };
        ChartDescriptor {
            title: Some(title),
            kind: ChartKind::Line.into(),
            categories: self.labels.clone(),
            series: vec![SeriesSpec { name: format!("Forecasted {}", self.name), values: self.values.clone() }],
        }
    }

    /// True when the backend sent fewer points than it computed.
    pub fn is_reduced(&self) -> bool {
        matches!((self.total_points, self.sent_points), (Some(t), Some(s)) if s < t)
    }
}

/// What the trends view shows.
#[derive(Clone, Debug, PartialEq)]
pub enum ForecastView {
    Chart(ChartDescriptor),
    /// Forecasting was not possible; carries the reason to show instead.
    Unavailable(String),
}

/// Trends response: forecast data gated by its forecast info.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trends {
    pub info: ForecastInfo,
    pub data: Option<ForecastData>,
}

impl Trends {
    pub fn from_json(text: &str) -> Result<Self, PayloadError> {
        let root: Value = serde_json::from_str(text)?;
        if !root.is_object() {
            return Err(PayloadError::NotAnObject(json_type(&root)));
        }
        Ok(Self::from_value(&root))
    }

    /// Reads `forecast_info` and `forecast_data` from `root`; either may be missing.
    pub fn from_value(root: &Value) -> Self {
        Self {
            info: root.get("forecast_info").map(ForecastInfo::from_value).unwrap_or_default(),
            data: root.get("forecast_data").filter(|v| v.is_object()).map(ForecastData::from_value),
        }
    }

    /// A chart only when forecasting was possible and labels arrived; otherwise the reason.
    pub fn view(&self) -> ForecastView {
        match &self.data {
            Some(data) if self.info.forecast_possible && !data.labels.is_empty() => ForecastView::Chart(data.descriptor()),
            _ => {
                let reason = self.info.reason.as_deref().filter(|r| !r.is_empty()).unwrap_or(NO_FORECAST_REASON);
                tracing::debug!(reason, "forecast unavailable");
                ForecastView::Unavailable(reason.to_string())
            }
        }
    }
}

fn json_type(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
