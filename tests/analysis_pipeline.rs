use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use stock_predictor_wasm::application::{AnalysisService, TABLE_ROWS};
use stock_predictor_wasm::domain::errors::AppError;
use stock_predictor_wasm::domain::market_data::prediction::PREDICTION_WINDOW;
use wasm_bindgen_test::*;

#[wasm_bindgen_test(unsupported = test)]
fn aapl_end_to_end_snapshot() {
    let service = AnalysisService::new();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let snapshot = service.analyze_with_rng("AAPL", &mut rng).unwrap();

    assert_eq!(snapshot.symbol.value(), "AAPL");

    // Weekday series spanning the fixed historical window
    let first = snapshot.series.first().unwrap().date;
    let last = snapshot.series.last().unwrap().date;
    assert_eq!(first, NaiveDate::from_ymd_opt(2012, 1, 2).unwrap());
    assert_eq!(last, NaiveDate::from_ymd_opt(2022, 12, 30).unwrap());

    // Table of the most recent rows
    assert_eq!(snapshot.table_rows.len(), TABLE_ROWS);
    assert_eq!(snapshot.table_rows.last().unwrap().date, "2022-12-30");

    // Three MA payloads over the full series, all aligned
    assert_eq!(snapshot.ma_charts.len(), 3);
    for payload in &snapshot.ma_charts {
        assert_eq!(payload.labels.len(), snapshot.series.len());
        assert!(payload.is_aligned());
    }
    assert_eq!(snapshot.ma_charts[0].datasets.len(), 2);
    assert_eq!(snapshot.ma_charts[1].datasets.len(), 3);
    assert_eq!(snapshot.ma_charts[2].datasets.len(), 3);

    // Prediction payload over the trailing window
    let prediction = &snapshot.prediction_chart;
    assert_eq!(prediction.labels.len(), PREDICTION_WINDOW);
    assert!(prediction.is_aligned());
    assert_eq!(prediction.datasets.len(), 2);
    assert_eq!(prediction.datasets[0].data.len(), prediction.datasets[1].data.len());
    assert!(prediction.datasets[1].dashed);
}

#[wasm_bindgen_test(unsupported = test)]
fn short_window_symbols_still_produce_consistent_charts() {
    use stock_predictor_wasm::domain::market_data::DateRange;

    // A three-month range has fewer than 300 weekdays
    let range = DateRange::new(
        NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2021, 3, 31).unwrap(),
    );
    let service = AnalysisService::with_range(range);
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let snapshot = service.analyze_with_rng("SBIN", &mut rng).unwrap();

    assert!(snapshot.prediction_chart.labels.len() < PREDICTION_WINDOW);
    assert_eq!(snapshot.prediction_chart.labels.len(), snapshot.series.len());
    assert!(snapshot.prediction_chart.is_aligned());
}

#[wasm_bindgen_test(unsupported = test)]
fn empty_symbol_yields_exactly_one_validation_error() {
    let service = AnalysisService::new();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let err = service.analyze_with_rng("", &mut rng).unwrap_err();
    assert_eq!(err, AppError::Validation("Please enter a stock symbol".to_string()));

    let err = service.analyze_with_rng("   ", &mut rng).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[wasm_bindgen_test(unsupported = test)]
fn snapshot_serializes_for_javascript_consumers() {
    let service = AnalysisService::new();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let snapshot = service.analyze_with_rng("TCS", &mut rng).unwrap();

    let json = serde_json::to_string(&snapshot).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["ma_charts"].as_array().unwrap().len(), 3);
    assert_eq!(value["ma_charts"][0]["chart_id"], "ma50Chart");
    assert_eq!(value["prediction_chart"]["chart_id"], "predictionChart");
    assert_eq!(value["table_rows"].as_array().unwrap().len(), TABLE_ROWS);
}
