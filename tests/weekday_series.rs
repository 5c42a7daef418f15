use chrono::{Datelike, NaiveDate, Weekday};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use stock_predictor_wasm::domain::market_data::{DateRange, Symbol, generator};
use wasm_bindgen_test::*;

#[wasm_bindgen_test(unsupported = test)]
fn series_covers_exactly_the_weekdays_in_range() {
    let range = DateRange::default_history();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let series = generator::generate_series(&Symbol::from("AAPL"), range, &mut rng);

    let expected: Vec<NaiveDate> = range.weekdays().collect();
    let actual: Vec<NaiveDate> = series.points().iter().map(|p| p.date).collect();
    assert_eq!(actual, expected);

    // 2012-01-01 is a Sunday, 2022-12-31 a Saturday
    assert_eq!(actual.first().copied(), NaiveDate::from_ymd_opt(2012, 1, 2));
    assert_eq!(actual.last().copied(), NaiveDate::from_ymd_opt(2022, 12, 30));
}

#[wasm_bindgen_test(unsupported = test)]
fn dates_are_strictly_increasing_without_weekends() {
    let range = DateRange::default_history();
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let series = generator::generate_series(&Symbol::from("UNKNOWN"), range, &mut rng);

    for pair in series.points().windows(2) {
        assert!(pair[0].date < pair[1].date);
    }
    for point in series.points() {
        assert!(!matches!(point.date.weekday(), Weekday::Sat | Weekday::Sun));
    }
}

#[wasm_bindgen_test(unsupported = test)]
fn price_floor_holds_for_every_point() {
    let range = DateRange::default_history();
    for seed in 0..5 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let series = generator::generate_series(&Symbol::from("TSLA"), range, &mut rng);
        for point in series.points() {
            assert!(point.close.value() >= generator::PRICE_FLOOR);
            assert!(point.close.is_positive());
            assert!(point.has_consistent_ohlc(), "OHLC violated at {}", point.date);
        }
    }
}
