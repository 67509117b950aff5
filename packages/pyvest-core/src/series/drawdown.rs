//! Drawdown relative to the running peak.
//!
//! A drawdown is only measured against a strictly positive peak; a zero or
//! negative peak reports `0.0`.

use super::PriceSeries;
use crate::{Error, Result};
use tracing::debug;

fn drawdown_from_peak(value: f64, peak: f64) -> f64 {
    if peak > 0.0 {
        (value - peak) / peak
    } else {
        0.0
    }
}

impl PriceSeries {
    /// Drawdown at time `t`, `(values[t] - peak) / peak` with `peak = max(values[0..=t])`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] unless `t < len`.
    pub fn drawdown_at(&self, t: usize) -> Result<f64> {
        let values = self.values();
        if t >= values.len() {
            return Err(Error::IndexOutOfRange {
                index: t,
                len: values.len(),
            });
        }

        let peak = values[..=t].iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if peak <= 0.0 {
            debug!(series = %self.name(), index = t, peak, "non-positive peak, drawdown reported as 0.0");
        }
        Ok(drawdown_from_peak(values[t], peak))
    }

    /// Drawdown at every observation, same length as the series.
    pub fn drawdowns(&self) -> Vec<f64> {
        let mut peak = f64::NEG_INFINITY;
        self.values()
            .iter()
            .map(|&value| {
                peak = peak.max(value);
                drawdown_from_peak(value, peak)
            })
            .collect()
    }

    /// Most negative drawdown over the whole series.
    ///
    /// Returns `0.0` for an empty series or one that never declines.
    pub fn max_drawdown(&self) -> f64 {
        let values = self.values();
        let Some(&first) = values.first() else {
            return 0.0;
        };

        let mut peak = first;
        let mut max_dd = 0.0_f64;
        for &value in &values[1..] {
            peak = peak.max(value);
            if peak > 0.0 {
                max_dd = max_dd.min((value - peak) / peak);
            }
        }

        max_dd
    }
}
