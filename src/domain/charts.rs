//! Typed chart descriptions consumed by Plotly.js on the client.
//!
//! A [`Figure`] serializes to `{"data": [...], "layout": {...}}`. Optional
//! fields are omitted from the JSON when unset so the client library applies
//! its own defaults.

use serde::Serialize;

/// Axis values. Category axes carry labels, numeric axes carry numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Series {
    Labels(Vec<String>),
    Numbers(Vec<f64>),
}

impl Series {
    pub fn len(&self) -> usize {
        match self {
            Series::Labels(v) => v.len(),
            Series::Numbers(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<String>> for Series {
    fn from(v: Vec<String>) -> Self {
        Series::Labels(v)
    }
}

impl From<Vec<f64>> for Series {
    fn from(v: Vec<f64>) -> Self {
        Series::Numbers(v)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceType {
    Bar,
    Scatter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceMode {
    Markers,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub color: String,
}

/// One data series of a figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub x: Series,
    pub y: Series,
    #[serde(rename = "type")]
    pub kind: TraceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<TraceMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    /// Hover labels, one per point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
}

impl Trace {
    pub fn bar(x: impl Into<Series>, y: impl Into<Series>) -> Self {
        Self::new(TraceType::Bar, x.into(), y.into())
    }

    pub fn scatter(x: impl Into<Series>, y: impl Into<Series>) -> Self {
        Self::new(TraceType::Scatter, x.into(), y.into())
    }

    fn new(kind: TraceType, x: Series, y: Series) -> Self {
        Self {
            x,
            y,
            kind,
            mode: None,
            name: None,
            marker: None,
            text: None,
        }
    }

    pub fn with_mode(mut self, mode: TraceMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.marker = Some(Marker {
            color: color.into(),
        });
        self
    }

    pub fn with_text(mut self, text: Vec<String>) -> Self {
        self.text = Some(text);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: String,
}

impl Axis {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HoverMode {
    Closest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarMode {
    Group,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: String,
    pub xaxis: Axis,
    pub yaxis: Axis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovermode: Option<HoverMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<BarMode>,
}

impl Layout {
    pub fn new(
        title: impl Into<String>,
        xaxis_title: impl Into<String>,
        yaxis_title: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            xaxis: Axis::titled(xaxis_title),
            yaxis: Axis::titled(yaxis_title),
            hovermode: None,
            barmode: None,
        }
    }

    pub fn with_hovermode(mut self, mode: HoverMode) -> Self {
        self.hovermode = Some(mode);
        self
    }

    pub fn with_barmode(mut self, mode: BarMode) -> Self {
        self.barmode = Some(mode);
        self
    }
}

/// A complete chart: data traces plus layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(data: Vec<Trace>, layout: Layout) -> Self {
        Self { data, layout }
    }

    /// Serializes the figure for embedding into a page.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
