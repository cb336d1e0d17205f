// File: crates/chart-core/src/descriptor.rs
// Summary: Raw chart descriptor model and lenient decoding from loosely-typed JSON.
// Notes:
// - Decoding never fails on shape: missing or malformed fields degrade to empty
//   sequences, and unparseable values become absent positions.

use serde::Serialize;
use serde_json::Value;

use crate::kind::KindTag;

/// Coordinate point used by scatter/bubble charts. `r` is the bubble radius.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r: Option<f64>,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y, r: None } }
    pub const fn with_radius(x: f64, y: f64, r: f64) -> Self { Self { x, y, r: Some(r) } }
}

/// One entry of a series' `values`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DataValue {
    Scalar(f64),
    Point(Point),
}

impl DataValue {
    /// Scalar reading: the scalar itself, or a point's `y`.
    pub fn scalar(&self) -> f64 {
        match *self {
            DataValue::Scalar(v) => v,
            DataValue::Point(p) => p.y,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeriesSpec {
    pub name: String,
    /// `None` marks a position that was present but not numeric (e.g. `null`).
    pub values: Vec<Option<DataValue>>,
}

impl SeriesSpec {
    pub fn new(name: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().map(|v| Some(DataValue::Scalar(v))).collect(),
        }
    }

    pub fn points(name: impl Into<String>, points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            name: name.into(),
            values: points.into_iter().map(|p| Some(DataValue::Point(p))).collect(),
        }
    }

    /// True when at least one position holds a usable value.
    pub fn has_values(&self) -> bool { self.values.iter().any(Option::is_some) }
}

/// Raw, externally-supplied description of one chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartDescriptor {
    pub title: Option<String>,
    pub kind: KindTag,
    pub categories: Vec<String>,
    pub series: Vec<SeriesSpec>,
}

impl ChartDescriptor {
    pub fn new(kind: impl Into<KindTag>, categories: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            title: None,
            kind: kind.into(),
            categories: categories.into_iter().map(Into::into).collect(),
            series: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_series(mut self, series: SeriesSpec) -> Self {
        self.series.push(series);
        self
    }

    /// Decode one chart object shaped `{title, type, data: {labels, series}}`.
    /// `labels`/`series` are also accepted at the top level when `data` is missing.
    pub fn from_value(value: &Value) -> Self {
        let title = value.get("title").and_then(Value::as_str).map(str::to_string);
        let kind = KindTag::parse(value.get("type").and_then(Value::as_str).unwrap_or_default());
        let data = match value.get("data") {
            Some(d) if d.is_object() => d,
            _ => value,
        };

        let categories = data
            .get("labels")
            .and_then(Value::as_array)
            .map(|labels| labels.iter().map(label_text).collect())
            .unwrap_or_default();

        let series = data
            .get("series")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .enumerate()
                    .filter(|(_, s)| s.is_object())
                    .map(|(i, s)| decode_series(i, s))
                    .collect()
            })
            .unwrap_or_default();

        Self { title, kind, categories, series }
    }
}

pub(crate) fn label_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn decode_series(index: usize, s: &Value) -> SeriesSpec {
    let name = s
        .get("name")
        .and_then(|n| match n {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .unwrap_or_else(|| format!("Series {}", index + 1));

    let raw = s.get("values").and_then(Value::as_array).map(Vec::as_slice).unwrap_or_default();
    let values: Vec<Option<DataValue>> = raw.iter().map(decode_value).collect();
    let dropped = values.iter().zip(raw).filter(|(v, r)| v.is_none() && !r.is_null()).count();
    if dropped > 0 {
        tracing::debug!(series = %name, dropped, "non-numeric values treated as absent");
    }
    SeriesSpec { name, values }
}

fn number(v: &Value) -> Option<f64> {
    let n = match v {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

pub(crate) fn decode_value(v: &Value) -> Option<DataValue> {
    match v {
        Value::Object(map) => {
            let x = number(map.get("x")?)?;
            let y = number(map.get("y")?)?;
            let r = map.get("r").and_then(number);
            Some(DataValue::Point(Point { x, y, r }))
        }
        Value::Array(items) if items.len() >= 2 => {
            let x = number(&items[0])?;
            let y = number(&items[1])?;
            let r = items.get(2).and_then(number);
            Some(DataValue::Point(Point { x, y, r }))
        }
        other => number(other).map(DataValue::Scalar),
    }
}
