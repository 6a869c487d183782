//! Rolling-window helpers shared by the indicators.
//!
//! Series helpers return a vector the same length as their input, holding
//! `f64::NAN` wherever the trailing window is not yet complete. Leading NaNs
//! in the input are skipped, so helpers can be chained (e.g. the MACD signal
//! line is an EMA over a MACD line that starts with NaNs).

/// Simple moving average of the last `period` values
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let window = &values[values.len() - period..];
    Some(window.iter().sum::<f64>() / period as f64)
}

/// Trailing simple moving average at every index
pub fn sma_series(values: &[f64], period: usize) -> Vec<f64> {
    rolling(values, period, |window| {
        window.iter().sum::<f64>() / period as f64
    })
}

/// Next EMA value from the previous one
pub fn ema_from_previous(value: f64, previous: f64, period: usize) -> f64 {
    let alpha = 2.0 / (period as f64 + 1.0);
    alpha * value + (1.0 - alpha) * previous
}

/// Exponential moving average seeded with the SMA of its first window
pub fn ema_series(values: &[f64], period: usize) -> Vec<f64> {
    smoothed_series(values, period, |value, previous| {
        ema_from_previous(value, previous, period)
    })
}

/// Last EMA value
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    ema_series(values, period)
        .last()
        .copied()
        .filter(|v| !v.is_nan())
}

/// Wilder's smoothing (RMA), seeded with the SMA of its first window
pub fn wilder_series(values: &[f64], period: usize) -> Vec<f64> {
    smoothed_series(values, period, |value, previous| {
        (previous * (period as f64 - 1.0) + value) / period as f64
    })
}

fn smoothed_series<F>(values: &[f64], period: usize, step: F) -> Vec<f64>
where
    F: Fn(f64, f64) -> f64,
{
    let mut out = vec![f64::NAN; values.len()];
    if period == 0 {
        return out;
    }
    let Some(start) = values.iter().position(|v| !v.is_nan()) else {
        return out;
    };
    let seed_end = start + period;
    if values.len() < seed_end {
        return out;
    }

    let mut previous = values[start..seed_end].iter().sum::<f64>() / period as f64;
    out[seed_end - 1] = previous;
    for i in seed_end..values.len() {
        previous = step(values[i], previous);
        out[i] = previous;
    }
    out
}

/// Apply `f` to every complete trailing window of `period` values.
///
/// Windows containing a NaN produce NaN.
pub fn rolling<F>(values: &[f64], period: usize, f: F) -> Vec<f64>
where
    F: Fn(&[f64]) -> f64,
{
    let mut out = vec![f64::NAN; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }
    for end in period..=values.len() {
        let window = &values[end - period..end];
        if window.iter().any(|v| v.is_nan()) {
            continue;
        }
        out[end - 1] = f(window);
    }
    out
}

pub fn rolling_max(values: &[f64], period: usize) -> Vec<f64> {
    rolling(values, period, |w| {
        w.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    })
}

pub fn rolling_min(values: &[f64], period: usize) -> Vec<f64> {
    rolling(values, period, |w| w.iter().copied().fold(f64::INFINITY, f64::min))
}

/// Mean absolute deviation around the window mean
pub fn mean_deviation(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    values.iter().map(|v| (v - mean).abs()).sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator)
pub fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    variance.sqrt()
}

/// Relative change from the previous value; the first entry is NaN
pub fn pct_change(values: &[f64]) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    for i in 1..values.len() {
        let previous = values[i - 1];
        out[i] = if previous != 0.0 {
            (values[i] - previous) / previous
        } else {
            f64::NAN
        };
    }
    out
}

pub fn true_range(high: f64, low: f64, previous_close: f64) -> f64 {
    let hl = high - low;
    let hc = (high - previous_close).abs();
    let lc = (low - previous_close).abs();
    hl.max(hc).max(lc)
}

/// `Some(v)` for finite values, `None` for NaN or infinities
pub fn defined(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
