//! Rolling-window and recursive smoothing primitives.
//!
//! All functions return one output element per input element so callers can
//! write the result straight into an index-aligned frame column.

/// Smoothing factor for an exponential average of the given span.
pub fn ema_alpha(span: usize) -> f64 {
    2.0 / (span as f64 + 1.0)
}

/// Recursive exponential average seeded with the first value (`adjust=false`).
///
/// `out[0] = values[0]`, `out[i] = out[i-1] + alpha * (values[i] - out[i-1])`.
/// Must run strictly left to right.
pub fn ema(values: &[f64], span: usize) -> Vec<f64> {
    let alpha = ema_alpha(span);
    let mut out = Vec::with_capacity(values.len());
    let mut prev: Option<f64> = None;

    for &value in values {
        let next = match prev {
            None => value,
            Some(p) => p + alpha * (value - p),
        };
        out.push(next);
        prev = Some(next);
    }

    out
}

/// Arithmetic mean over each trailing window of `window` values.
///
/// A window containing `None`, or one that does not yet have `window` values,
/// yields `None`.
///
/// Runs in a single pass with a compensated running sum. A window holding only
/// zeros yields exactly `0.0`, which the RSI relies on to spot loss-free windows.
pub fn rolling_mean(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if window == 0 || values.len() < window {
        return out;
    }

    let mut sum = RunningSum::default();
    let mut missing = 0usize;
    let mut nonzero = 0usize;

    for (i, value) in values.iter().enumerate() {
        match value {
            Some(v) => {
                sum.add(*v);
                nonzero += usize::from(*v != 0.0);
            }
            None => missing += 1,
        }

        if i >= window {
            match values[i - window] {
                Some(v) => {
                    sum.add(-v);
                    nonzero -= usize::from(v != 0.0);
                }
                None => missing -= 1,
            }
        }

        if i + 1 >= window && missing == 0 {
            out[i] = Some(if nonzero == 0 { 0.0 } else { sum.value() / window as f64 });
        }
    }

    out
}

/// Sample standard deviation (n - 1 denominator) over each trailing window.
///
/// Windows of a single value have no sample deviation and yield `None`.
pub fn rolling_sample_std(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    rolling(values, window, sample_std)
}

/// Mean of a non-empty slice.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation of a slice, `None` with fewer than two values.
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    Some((sum_sq / (values.len() - 1) as f64).sqrt())
}

/// Lift a dense series into the optional form used by the rolling helpers.
pub fn defined(values: &[f64]) -> Vec<Option<f64>> {
    values.iter().copied().map(Some).collect()
}

/// Kahan-compensated sum supporting removal by adding the negated value.
#[derive(Debug, Default)]
struct RunningSum {
    sum: f64,
    compensation: f64,
}

impl RunningSum {
    fn add(&mut self, value: f64) {
        let y = value - self.compensation;
        let t = self.sum + y;
        self.compensation = (t - self.sum) - y;
        self.sum = t;
    }

    fn value(&self) -> f64 {
        self.sum
    }
}

fn rolling<F>(values: &[Option<f64>], window: usize, f: F) -> Vec<Option<f64>>
where
    F: Fn(&[f64]) -> Option<f64>,
{
    let mut out = vec![None; values.len()];
    if window == 0 || values.len() < window {
        return out;
    }

    let mut buf = Vec::with_capacity(window);
    for end in (window - 1)..values.len() {
        buf.clear();
        buf.extend(values[end + 1 - window..=end].iter().map_while(|v| *v));
        if buf.len() == window {
            out[end] = f(&buf);
        }
    }

    out
}
