//! Mock prediction transform.
//!
//! Perturbs already-known prices with noise, a deterministic trend sinusoid
//! and a 50-step momentum term. This is a cosmetic overlay for the demo
//! chart, not a fitted model.

use rand::Rng;

/// How many trailing points feed the prediction chart
pub const PREDICTION_WINDOW: usize = 300;

const NOISE_AMPLITUDE: f64 = 0.015;
const TREND_FREQUENCY: f64 = 0.05;
const TREND_AMPLITUDE: f64 = 0.015;
const MOMENTUM_LAG: usize = 50;
const MOMENTUM_SCALE: f64 = 0.1;

/// Injection point for the per-sample noise term, so tests can silence it
pub trait NoiseSource {
    fn sample(&mut self) -> f64;
}

/// Production noise: uniform in [-amplitude, +amplitude)
pub struct UniformNoise<R: Rng> {
    rng: R,
    amplitude: f64,
}

impl<R: Rng> UniformNoise<R> {
    pub fn new(rng: R) -> Self {
        Self { rng, amplitude: NOISE_AMPLITUDE }
    }
}

impl<R: Rng> NoiseSource for UniformNoise<R> {
    fn sample(&mut self) -> f64 {
        (self.rng.r#gen::<f64>() - 0.5) * 2.0 * self.amplitude
    }
}

/// Silent noise source for deterministic tests
pub struct NoNoise;

impl NoiseSource for NoNoise {
    fn sample(&mut self) -> f64 {
        0.0
    }
}

/// The deterministic trend term for index `i`
pub fn trend_term(i: usize) -> f64 {
    (i as f64 * TREND_FREQUENCY).sin() * TREND_AMPLITUDE
}

/// Relative 50-step momentum, zero for the first 50 entries.
///
/// Guarded against a non-positive or non-finite lagged value; the generator's
/// price floor makes that unreachable today, but the transform should not be
/// the place that divides by zero.
pub fn momentum_term(actual: &[f64], i: usize) -> f64 {
    if i <= MOMENTUM_LAG {
        return 0.0;
    }
    let lagged = actual[i - MOMENTUM_LAG];
    if !(lagged.is_finite() && lagged > 0.0) {
        return 0.0;
    }
    (actual[i] - lagged) / lagged * MOMENTUM_SCALE
}

/// Produce the prediction series for a trailing window of actual prices.
///
/// Output has the same length as the input; entry `i` is
/// `actual[i] * (1 + noise + trend(i) + momentum(i))`.
pub fn predict<N: NoiseSource>(actual: &[f64], noise: &mut N) -> Vec<f64> {
    actual
        .iter()
        .enumerate()
        .map(|(i, price)| price * (1.0 + noise.sample() + trend_term(i) + momentum_term(actual, i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn output_length_matches_input() {
        let actual: Vec<f64> = (1..=120).map(|i| i as f64).collect();
        let mut noise = UniformNoise::new(ChaCha8Rng::seed_from_u64(1));
        assert_eq!(predict(&actual, &mut noise).len(), actual.len());
        assert!(predict(&[], &mut noise).is_empty());
    }

    #[test]
    fn early_entries_are_trend_only_without_noise() {
        let actual = vec![100.0; 60];
        let predicted = predict(&actual, &mut NoNoise);

        for i in 0..=50 {
            let expected = 100.0 * (1.0 + trend_term(i));
            assert!(
                (predicted[i] - expected).abs() < 1e-9,
                "index {}: {} != {}",
                i,
                predicted[i],
                expected
            );
        }
    }

    #[test]
    fn momentum_kicks_in_after_the_lag() {
        // Constant series: momentum stays zero even past the lag
        let flat = vec![50.0; 80];
        assert_eq!(momentum_term(&flat, 70), 0.0);

        // Doubling over the lag window: relative change 1.0, scaled by 0.1
        let mut rising = vec![100.0; 80];
        rising[70] = 200.0;
        assert!((momentum_term(&rising, 70) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn zero_lagged_price_does_not_divide() {
        let mut actual = vec![10.0; 80];
        actual[10] = 0.0;
        let term = momentum_term(&actual, 60);
        assert!(term.is_finite());
        assert_eq!(term, 0.0);
    }

    #[test]
    fn uniform_noise_stays_in_bounds() {
        let mut noise = UniformNoise::new(ChaCha8Rng::seed_from_u64(5));
        for _ in 0..500 {
            let sample = noise.sample();
            assert!((-0.015..0.015).contains(&sample), "sample {} out of bounds", sample);
        }
    }
}
