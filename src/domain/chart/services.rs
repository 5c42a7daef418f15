//! Shapes domain series into render-ready payloads and table rows.
//! Rendering itself lives in the infrastructure layer.

use super::value_objects::{ChartDataset, ChartPayload, TableRow, palette};
use crate::domain::market_data::{MovingAverages, PricePoint, PriceSeries};

/// Canvas ids the UI provides, one per chart
pub const MA50_CHART: &str = "ma50Chart";
pub const MA100_CHART: &str = "ma100Chart";
pub const MA200_CHART: &str = "ma200Chart";
pub const PREDICTION_CHART: &str = "predictionChart";

/// The three MA overlay charts: {price, MA50}, {price, MA50, MA100},
/// {price, MA100, MA200}, all over the full series' date labels.
pub fn build_ma_payloads(series: &PriceSeries, mas: &MovingAverages) -> [ChartPayload; 3] {
    let labels = series.date_labels();
    let prices: Vec<Option<f64>> = series.closes().into_iter().map(Some).collect();

    let price_line = || ChartDataset::solid("Stock Price", palette::PRICE, prices.clone());
    let ma50_line = || ChartDataset::solid("MA50", palette::MA_50, mas.ma_50.clone());
    let ma100_line = || ChartDataset::solid("MA100", palette::MA_100, mas.ma_100.clone());
    let ma200_line = || ChartDataset::solid("MA200", palette::MA_200, mas.ma_200.clone());

    [
        ChartPayload::new(MA50_CHART, labels.clone(), vec![price_line(), ma50_line()]),
        ChartPayload::new(MA100_CHART, labels.clone(), vec![price_line(), ma50_line(), ma100_line()]),
        ChartPayload::new(MA200_CHART, labels, vec![price_line(), ma100_line(), ma200_line()]),
    ]
}

/// The prediction chart: trailing-window actual prices against the mock
/// prediction, the latter drawn dashed.
pub fn build_prediction_payload(
    window: &[PricePoint],
    actual: &[f64],
    predicted: &[f64],
) -> ChartPayload {
    let labels = window.iter().map(|p| p.date.format("%Y-%m-%d").to_string()).collect();
    ChartPayload::new(
        PREDICTION_CHART,
        labels,
        vec![
            ChartDataset::solid("Actual Price", palette::ACTUAL, actual.iter().copied().map(Some).collect()),
            ChartDataset::dashed(
                "Predicted Price",
                palette::PREDICTED,
                predicted.iter().copied().map(Some).collect(),
            ),
        ],
    )
}

/// Format the most recent `n` points for the data table
pub fn build_table_rows(series: &PriceSeries, n: usize) -> Vec<TableRow> {
    series
        .tail(n)
        .iter()
        .map(|p| TableRow {
            date: p.date.format("%Y-%m-%d").to_string(),
            open: format!("${:.2}", p.open.value()),
            high: format!("${:.2}", p.high.value()),
            low: format!("${:.2}", p.low.value()),
            close: format!("${:.2}", p.close.value()),
            volume: format_thousands(p.volume.value()),
        })
        .collect()
}

/// 1234567 -> "1,234,567"
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
