//! Descriptive statistics over plain `f64` slices.

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(data.iter().sum::<f64>() / data.len() as f64)
}

/// Unbiased sample variance (denominator `n - 1`).
///
/// Returns `None` when fewer than two observations are supplied.
pub fn sample_variance(data: &[f64]) -> Option<f64> {
    if data.len() < 2 {
        return None;
    }

    let mean = mean(data)?;
    let sum_sq = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>();
    Some(sum_sq / (data.len() - 1) as f64)
}

/// Sample standard deviation, the square root of [`sample_variance`].
pub fn sample_std_dev(data: &[f64]) -> Option<f64> {
    sample_variance(data).map(f64::sqrt)
}

/// Pearson correlation coefficient of two paired sequences.
///
/// Pairs are formed positionally over the common prefix, so the longer input is
/// truncated to the length of the shorter one.
///
/// # Returns
///
/// A coefficient clamped to `[-1, 1]`, or `None` when fewer than two pairs exist
/// or either side has zero variance.
pub fn pearson_correlation(xs: &[f64], ys: &[f64]) -> Option<f64> {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return None;
    }

    let xs = &xs[..n];
    let ys = &ys[..n];
    let mean_x = mean(xs)?;
    let mean_y = mean(ys)?;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }

    Some((cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}
