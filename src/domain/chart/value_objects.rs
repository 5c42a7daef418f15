use serde::{Deserialize, Serialize};

/// Line colors shared by the canvas renderer and exported payloads
pub mod palette {
    pub const PRICE: &str = "#2196F3";
    pub const MA_50: &str = "#FF5722";
    pub const MA_100: &str = "#9C27B0";
    pub const MA_200: &str = "#607D8B";
    pub const ACTUAL: &str = "#4CAF50";
    pub const PREDICTED: &str = "#FF9800";
}

/// Value Object - one line on a chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    pub label: String,
    pub color: String,
    /// Rendered with a dash pattern (the prediction overlay)
    pub dashed: bool,
    /// Aligned with the payload labels; `None` entries are gaps
    pub data: Vec<Option<f64>>,
}

impl ChartDataset {
    pub fn solid(label: &str, color: &str, data: Vec<Option<f64>>) -> Self {
        Self { label: label.to_string(), color: color.to_string(), dashed: false, data }
    }

    pub fn dashed(label: &str, color: &str, data: Vec<Option<f64>>) -> Self {
        Self { label: label.to_string(), color: color.to_string(), dashed: true, data }
    }
}

/// Value Object - everything a line-chart collaborator needs for one canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPayload {
    pub chart_id: String,
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

impl ChartPayload {
    pub fn new(chart_id: &str, labels: Vec<String>, datasets: Vec<ChartDataset>) -> Self {
        Self { chart_id: chart_id.to_string(), labels, datasets }
    }

    /// Every dataset must span exactly the labelled range
    pub fn is_aligned(&self) -> bool {
        self.datasets.iter().all(|d| d.data.len() == self.labels.len())
    }
}

/// Value Object - one row of the recent-data table, already formatted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub date: String,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub volume: String,
}
