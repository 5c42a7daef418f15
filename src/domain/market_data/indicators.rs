//! Simple moving averages aligned to their source series.

use super::entities::PriceSeries;

/// Aligned MA50/MA100/MA200 bundle computed in one pass over the series
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovingAverages {
    pub ma_50: Vec<Option<f64>>,
    pub ma_100: Vec<Option<f64>>,
    pub ma_200: Vec<Option<f64>>,
}

impl MovingAverages {
    pub fn compute(series: &PriceSeries) -> Self {
        let closes = series.closes();
        Self {
            ma_50: moving_average(&closes, 50),
            ma_100: moving_average(&closes, 100),
            ma_200: moving_average(&closes, 200),
        }
    }
}

/// Simple moving average, same length as the input.
///
/// Entry `i` is `None` for `i < period - 1`, otherwise the arithmetic mean of
/// the trailing window `[i - period + 1, i]`. A period longer than the input
/// yields all `None`. A running window sum keeps this linear in the input.
pub fn moving_average(values: &[f64], period: usize) -> Vec<Option<f64>> {
    if period == 0 {
        return vec![None; values.len()];
    }

    let mut out = Vec::with_capacity(values.len());
    let mut window_sum = 0.0;

    for (i, value) in values.iter().enumerate() {
        window_sum += value;
        if i >= period {
            window_sum -= values[i - period];
        }
        if i + 1 >= period {
            out.push(Some(window_sum / period as f64));
        } else {
            out.push(None);
        }
    }

    out
}
