//! Engine-neutral chart description and its Chart.js configuration form.

use serde_json::{json, Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Doughnut,
    Bar,
    Line,
}

impl ChartKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Doughnut => "doughnut",
            Self::Bar => "bar",
            Self::Line => "line",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(String),
    PerPoint(Vec<String>),
}

impl Paint {
    fn to_value(&self) -> Value {
        match self {
            Self::Solid(color) => json!(color),
            Self::PerPoint(colors) => json!(colors),
        }
    }
}

/// One series. Optional fields are omitted from the engine config when unset.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub color: Paint,
    pub border_color: Option<String>,
    pub border_width: Option<u32>,
    pub fill: bool,
    pub tension: Option<f64>,
    pub point_radius: Option<u32>,
    /// Draw this series as a different kind than the chart (bar + line overlay).
    pub kind: Option<ChartKind>,
    pub axis: Option<&'static str>,
}

impl Dataset {
    pub fn new(label: impl Into<String>, data: Vec<f64>, color: Paint) -> Self {
        Self {
            label: label.into(),
            data,
            color,
            border_color: None,
            border_width: None,
            fill: false,
            tension: None,
            point_radius: None,
            kind: None,
            axis: None,
        }
    }

    fn to_value(&self) -> Value {
        let mut out = Map::new();
        out.insert("label".into(), json!(self.label));
        out.insert("data".into(), json!(self.data));
        out.insert("backgroundColor".into(), self.color.to_value());
        if let Some(border) = &self.border_color {
            out.insert("borderColor".into(), json!(border));
        }
        if let Some(width) = self.border_width {
            out.insert("borderWidth".into(), json!(width));
        }
        if self.fill {
            out.insert("fill".into(), json!(true));
        }
        if let Some(tension) = self.tension {
            out.insert("tension".into(), json!(tension));
        }
        if let Some(radius) = self.point_radius {
            out.insert("pointRadius".into(), json!(radius));
        }
        if let Some(kind) = self.kind {
            out.insert("type".into(), json!(kind.as_str()));
        }
        if let Some(axis) = self.axis {
            out.insert("yAxisID".into(), json!(axis));
        }
        Value::Object(out)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// One scale (`x`, `y`, `y1`, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub id: &'static str,
    pub stacked: bool,
    pub begin_at_zero: bool,
    pub max: Option<f64>,
    pub position: Option<Side>,
    pub title: Option<String>,
    /// `false` keeps a secondary axis' grid lines off the plot.
    pub grid_on_chart_area: bool,
    /// Appended to every tick label by the engine bridge (e.g. `%`).
    pub tick_suffix: Option<&'static str>,
}

impl Axis {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            stacked: false,
            begin_at_zero: false,
            max: None,
            position: None,
            title: None,
            grid_on_chart_area: true,
            tick_suffix: None,
        }
    }

    fn to_value(&self) -> Value {
        let mut out = Map::new();
        if self.stacked {
            out.insert("stacked".into(), json!(true));
        }
        if self.begin_at_zero {
            out.insert("beginAtZero".into(), json!(true));
        }
        if let Some(max) = self.max {
            out.insert("max".into(), json!(max));
        }
        if let Some(side) = self.position {
            let side = match side {
                Side::Left => "left",
                Side::Right => "right",
            };
            out.insert("position".into(), json!(side));
        }
        if let Some(title) = &self.title {
            out.insert("title".into(), json!({ "display": true, "text": title }));
        }
        if !self.grid_on_chart_area {
            out.insert("grid".into(), json!({ "drawOnChartArea": false }));
        }
        if let Some(suffix) = self.tick_suffix {
            out.insert("ticks".into(), json!({ "suffix": suffix }));
        }
        Value::Object(out)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    Top,
    Bottom,
}

/// A complete chart, built fresh for every render.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub scales: Vec<Axis>,
    pub legend: LegendPosition,
}

impl ChartSpec {
    pub fn dataset(&self, label: &str) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.label == label)
    }

    pub fn axis(&self, id: &str) -> Option<&Axis> {
        self.scales.iter().find(|a| a.id == id)
    }

    /// The configuration object handed to `new Chart(canvas, config)`.
    pub fn to_config(&self) -> Value {
        let legend = match self.legend {
            LegendPosition::Top => "top",
            LegendPosition::Bottom => "bottom",
        };

        let mut options = Map::new();
        options.insert("responsive".into(), json!(true));
        options.insert("maintainAspectRatio".into(), json!(true));
        options.insert(
            "plugins".into(),
            json!({ "legend": { "position": legend } }),
        );
        if !self.scales.is_empty() {
            let scales: Map<String, Value> = self
                .scales
                .iter()
                .map(|axis| (axis.id.to_string(), axis.to_value()))
                .collect();
            options.insert("scales".into(), Value::Object(scales));
        }

        json!({
            "type": self.kind.as_str(),
            "data": {
                "labels": self.labels,
                "datasets": self.datasets.iter().map(Dataset::to_value).collect::<Vec<_>>(),
            },
            "options": Value::Object(options),
        })
    }
}
