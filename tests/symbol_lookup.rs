use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use stock_predictor_wasm::domain::market_data::{Symbol, generator};
use wasm_bindgen_test::*;

#[wasm_bindgen_test(unsupported = test)]
fn tabulated_symbols_return_their_constants() {
    let cases = [
        ("AAPL", 150.0),
        ("GOOGL", 2800.0),
        ("MSFT", 300.0),
        ("TSLA", 800.0),
        ("AMZN", 3200.0),
        ("META", 200.0),
        ("NVDA", 400.0),
        ("NFLX", 500.0),
        ("RELIANCE", 2500.0),
        ("TCS", 3200.0),
        ("INFY", 1500.0),
        ("HDFCBANK", 1600.0),
        ("ICICIBANK", 800.0),
        ("SBIN", 500.0),
        ("ITC", 250.0),
        ("HINDUNILVR", 2400.0),
        ("ASIANPAINT", 3000.0),
        ("MARUTI", 9000.0),
    ];
    for (ticker, price) in cases {
        assert_eq!(generator::base_price_for(&Symbol::from(ticker)), Some(price), "{}", ticker);
    }
}

#[wasm_bindgen_test(unsupported = test)]
fn lookup_is_case_insensitive_through_symbol_parsing() {
    let symbol = Symbol::parse("aapl").unwrap();
    assert_eq!(generator::base_price_for(&symbol), Some(150.0));
}

#[wasm_bindgen_test(unsupported = test)]
fn unknown_symbols_draw_from_the_documented_interval() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    for _ in 0..500 {
        let base = generator::resolve_base_price(&Symbol::from("NOTREAL"), &mut rng);
        assert!((50.0..1050.0).contains(&base));
    }
}

#[wasm_bindgen_test(unsupported = test)]
fn volume_ranges_follow_the_base_tables() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);

    for _ in 0..500 {
        let v = generator::generate_volume(&Symbol::from("NOTREAL"), &mut rng).value();
        assert!((1_000_000..=3_000_000).contains(&v), "unknown-symbol volume {}", v);

        let v = generator::generate_volume(&Symbol::from("AAPL"), &mut rng).value();
        assert!((25_000_000..=75_000_000).contains(&v), "AAPL volume {}", v);
    }
}
