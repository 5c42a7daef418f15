use crate::domain::{
    chart::{ChartPayload, TableRow, services as chart_services},
    errors::AppResult,
    logging::{LogComponent, get_logger},
    market_data::{
        DateRange, MovingAverages, PriceSeries, Symbol, generator,
        prediction::{self, UniformNoise},
    },
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// Rows shown in the recent-data table
pub const TABLE_ROWS: usize = 10;

/// Everything one submission produces, built in full before anything is
/// rendered. Each run replaces the previous snapshot wholesale; the renderer
/// never observes a half-updated one.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSnapshot {
    pub symbol: Symbol,
    pub series: PriceSeries,
    pub table_rows: Vec<TableRow>,
    pub ma_charts: [ChartPayload; 3],
    pub prediction_chart: ChartPayload,
}

impl AnalysisSnapshot {
    /// All four chart payloads in render order
    pub fn chart_payloads(&self) -> impl Iterator<Item = &ChartPayload> {
        self.ma_charts.iter().chain(std::iter::once(&self.prediction_chart))
    }
}

/// Application service running the full pipeline:
/// validate -> generate -> moving averages -> prediction -> payloads.
#[derive(Debug, Clone)]
pub struct AnalysisService {
    range: DateRange,
}

impl Default for AnalysisService {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisService {
    pub fn new() -> Self {
        Self { range: DateRange::default_history() }
    }

    pub fn with_range(range: DateRange) -> Self {
        Self { range }
    }

    /// Production entry point: OS-entropy seed, fresh per submission
    pub fn analyze(&self, raw_symbol: &str) -> AppResult<AnalysisSnapshot> {
        self.analyze_with_rng(raw_symbol, &mut ChaCha8Rng::from_entropy())
    }

    /// Seedable entry point; same RNG state reproduces the same snapshot
    pub fn analyze_with_rng<R: Rng>(
        &self,
        raw_symbol: &str,
        rng: &mut R,
    ) -> AppResult<AnalysisSnapshot> {
        let symbol = Symbol::parse(raw_symbol)?;

        get_logger().info(
            LogComponent::Application("Analysis"),
            &format!("🚀 Running analysis pipeline for {}", symbol.value()),
        );

        let series = generator::generate_series(&symbol, self.range, rng);
        let mas = MovingAverages::compute(&series);

        let window = series.tail(prediction::PREDICTION_WINDOW);
        let actual: Vec<f64> = window.iter().map(|p| p.close.value()).collect();
        let predicted = prediction::predict(&actual, &mut UniformNoise::new(&mut *rng));

        let snapshot = AnalysisSnapshot {
            table_rows: chart_services::build_table_rows(&series, TABLE_ROWS),
            ma_charts: chart_services::build_ma_payloads(&series, &mas),
            prediction_chart: chart_services::build_prediction_payload(window, &actual, &predicted),
            symbol,
            series,
        };

        get_logger().info(
            LogComponent::Application("Analysis"),
            &format!(
                "✅ Snapshot ready: {} points, {} table rows, prediction window {}",
                snapshot.series.len(),
                snapshot.table_rows.len(),
                snapshot.prediction_chart.labels.len()
            ),
        );

        Ok(snapshot)
    }
}
