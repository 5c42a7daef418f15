//! Synthetic market data generator.
//!
//! Fabricates a plausible-looking daily OHLCV history with a random walk:
//! constant upward drift, a weekly sinusoid, and regime-dependent volatility
//! that spikes during two fixed historical windows (spring 2020, autumn 2008).
//! All randomness flows through an injected [`rand::Rng`], so the same seed
//! always produces the same series.

use super::entities::{PricePoint, PriceSeries};
use super::value_objects::{DateRange, Price, Symbol, Volume};
use crate::domain::logging::{LogComponent, get_logger};
use chrono::{Datelike, NaiveDate};
use rand::Rng;

/// Prices never walk below this
pub const PRICE_FLOOR: f64 = 0.01;

const DRIFT: f64 = 0.0002;
const WEEKLY_AMPLITUDE: f64 = 0.005;
const BASE_VOLATILITY: f64 = 0.02;
const CRASH_2020_VOLATILITY: f64 = 0.08;
const CRASH_2008_VOLATILITY: f64 = 0.06;
const DEFAULT_BASE_VOLUME: u64 = 2_000_000;

/// Tabulated base price for well-known tickers
pub fn base_price_for(symbol: &Symbol) -> Option<f64> {
    let price = match symbol.value() {
        "AAPL" => 150.0,
        "GOOGL" => 2800.0,
        "MSFT" => 300.0,
        "TSLA" => 800.0,
        "AMZN" => 3200.0,
        "META" => 200.0,
        "NVDA" => 400.0,
        "NFLX" => 500.0,
        "RELIANCE" => 2500.0,
        "TCS" => 3200.0,
        "INFY" => 1500.0,
        "HDFCBANK" => 1600.0,
        "ICICIBANK" => 800.0,
        "SBIN" => 500.0,
        "ITC" => 250.0,
        "HINDUNILVR" => 2400.0,
        "ASIANPAINT" => 3000.0,
        "MARUTI" => 9000.0,
        _ => return None,
    };
    Some(price)
}

/// Base price for any symbol; unknown tickers draw uniformly from [50, 1050)
pub fn resolve_base_price<R: Rng>(symbol: &Symbol, rng: &mut R) -> f64 {
    base_price_for(symbol).unwrap_or_else(|| rng.gen_range(50.0..1050.0))
}

/// Tabulated daily base volume; everything else trades the default 2M shares
pub fn base_volume_for(symbol: &Symbol) -> u64 {
    match symbol.value() {
        "AAPL" => 50_000_000,
        "GOOGL" => 1_500_000,
        "MSFT" => 30_000_000,
        "RELIANCE" => 5_000_000,
        "TCS" => 3_000_000,
        "INFY" => 8_000_000,
        _ => DEFAULT_BASE_VOLUME,
    }
}

/// Regime-dependent volatility for a calendar date
pub fn volatility_for(date: NaiveDate) -> f64 {
    let year = date.year();
    let day_of_year = date.ordinal();

    if year == 2020 && day_of_year > 60 && day_of_year < 120 {
        CRASH_2020_VOLATILITY
    } else if year == 2008 && day_of_year > 240 {
        CRASH_2008_VOLATILITY
    } else {
        BASE_VOLATILITY
    }
}

/// Daily fractional change: drift + weekly sinusoid + regime-scaled noise
pub fn daily_change<R: Rng>(date: NaiveDate, rng: &mut R) -> f64 {
    let volatility = volatility_for(date);
    let weekly_trend = (date.ordinal() as f64 / 7.0).sin() * WEEKLY_AMPLITUDE;
    let random_component = (rng.r#gen::<f64>() - 0.5) * volatility;

    DRIFT + weekly_trend + random_component
}

/// Scale a base volume by a uniform factor in [0.5, 1.5)
pub fn generate_volume<R: Rng>(symbol: &Symbol, rng: &mut R) -> Volume {
    let base = base_volume_for(symbol) as f64;
    Volume::from((base * (0.5 + rng.r#gen::<f64>())).floor() as u64)
}

/// Generate the full weekday series for `symbol` over `range`.
///
/// High and low are derived from the perturbed open/close pair, so every
/// emitted point satisfies `high >= max(open, close)` and
/// `low <= min(open, close)`.
pub fn generate_series<R: Rng>(symbol: &Symbol, range: DateRange, rng: &mut R) -> PriceSeries {
    get_logger().info(
        LogComponent::Domain("Generator"),
        &format!("📊 Generating mock data for {}", symbol.value()),
    );

    let mut series = PriceSeries::with_capacity(range.weekdays().count());
    let mut current_price = resolve_base_price(symbol, rng);

    for date in range.weekdays() {
        let change = daily_change(date, rng);
        current_price = (current_price * (1.0 + change)).max(PRICE_FLOOR);

        let close = current_price;
        let open = close * (1.0 + (rng.r#gen::<f64>() - 0.5) * 0.02);
        let high = open.max(close) * (1.0 + rng.r#gen::<f64>() * 0.03);
        let low = open.min(close) * (1.0 - rng.r#gen::<f64>() * 0.03);

        series.push(PricePoint::new(
            date,
            Price::from(open),
            Price::from(high),
            Price::from(low),
            Price::from(close),
            generate_volume(symbol, rng),
        ));
    }

    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn known_symbols_use_tabulated_base_price() {
        assert_eq!(base_price_for(&Symbol::from("AAPL")), Some(150.0));
        assert_eq!(base_price_for(&Symbol::from("TCS")), Some(3200.0));
        assert_eq!(base_price_for(&Symbol::from("MARUTI")), Some(9000.0));
        assert_eq!(base_price_for(&Symbol::from("ZZZZ")), None);
    }

    #[test]
    fn unknown_symbols_draw_base_price_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let base = resolve_base_price(&Symbol::from("UNKNOWN"), &mut rng);
            assert!((50.0..1050.0).contains(&base), "base {} out of range", base);
        }
    }

    #[test]
    fn volatility_regimes_match_historical_windows() {
        let covid = NaiveDate::from_ymd_opt(2020, 4, 1).unwrap(); // ordinal 92
        assert_eq!(volatility_for(covid), CRASH_2020_VOLATILITY);

        let gfc = NaiveDate::from_ymd_opt(2008, 10, 1).unwrap(); // ordinal 275
        assert_eq!(volatility_for(gfc), CRASH_2008_VOLATILITY);

        let calm = NaiveDate::from_ymd_opt(2015, 6, 15).unwrap();
        assert_eq!(volatility_for(calm), BASE_VOLATILITY);

        // Window boundaries are exclusive
        let day_60 = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
        assert_eq!(day_60.ordinal(), 60);
        assert_eq!(volatility_for(day_60), BASE_VOLATILITY);
    }

    #[test]
    fn same_seed_reproduces_the_series() {
        let symbol = Symbol::from("AAPL");
        let range = DateRange::default_history();

        let a = generate_series(&symbol, range, &mut ChaCha8Rng::seed_from_u64(42));
        let b = generate_series(&symbol, range, &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(a, b);

        let c = generate_series(&symbol, range, &mut ChaCha8Rng::seed_from_u64(43));
        assert_ne!(a, c);
    }

    #[test]
    fn generated_points_keep_ohlc_consistent() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let series = generate_series(&Symbol::from("TSLA"), DateRange::default_history(), &mut rng);

        assert!(!series.is_empty());
        for point in series.points() {
            assert!(point.has_consistent_ohlc(), "inconsistent OHLC at {}", point.date);
            assert!(point.close.is_positive());
        }
    }
}
