pub use super::value_objects::{Price, Volume};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Domain entity - one trading day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
    pub volume: Volume,
}

impl PricePoint {
    pub fn new(
        date: NaiveDate,
        open: Price,
        high: Price,
        low: Price,
        close: Price,
        volume: Volume,
    ) -> Self {
        Self { date, open, high, low, close, volume }
    }

    /// High bounds both open and close from above, low from below
    pub fn has_consistent_ohlc(&self) -> bool {
        self.high >= self.open
            && self.high >= self.close
            && self.low <= self.open
            && self.low <= self.close
            && self.low.is_positive()
    }
}

/// Domain entity - daily series, strictly increasing by date
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { points: Vec::with_capacity(capacity) }
    }

    /// Append a point; a point dated on or before the current tail is dropped
    pub fn push(&mut self, point: PricePoint) {
        if let Some(last) = self.points.last() {
            if point.date <= last.date {
                return;
            }
        }
        self.points.push(point);
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Closing prices in date order
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close.value()).collect()
    }

    /// ISO-formatted date labels in date order
    pub fn date_labels(&self) -> Vec<String> {
        self.points.iter().map(|p| p.date.format("%Y-%m-%d").to_string()).collect()
    }

    /// The most recent `n` points (all of them when the series is shorter)
    pub fn tail(&self, n: usize) -> &[PricePoint] {
        let start = self.points.len().saturating_sub(n);
        &self.points[start..]
    }
}
