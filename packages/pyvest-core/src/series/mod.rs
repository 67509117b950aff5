//! Price time series and per-series return statistics.
//!
//! A [`PriceSeries`] owns an ordered sequence of price observations. Returns are
//! computed here; risk metrics and drawdown live in the `risk` and `drawdown`
//! submodules as further `impl PriceSeries` blocks.

mod drawdown;
mod risk;

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trading periods per year used for annualization (US equities convention).
pub const TRADING_DAYS_PER_YEAR: usize = 252;

/// Label given to a series created without an explicit name.
pub const UNNAMED: &str = "unnamed";

/// An ordered sequence of price observations indexed by time.
///
/// The series owns its values; there are no mutators after construction, so a
/// series can be shared freely across threads for reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    /// Descriptive label, no uniqueness constraint
    name: String,
    /// Prices, index 0 is the oldest observation
    values: Vec<f64>,
}

impl PriceSeries {
    /// Create a series named [`UNNAMED`] from the given prices.
    ///
    /// The series takes its own copy of the input, so later changes to the caller's
    /// buffer never reach it.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            name: UNNAMED.to_string(),
            values: values.into(),
        }
    }

    /// Replace the series label.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read-only view of the price observations.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Oldest observation.
    pub fn first(&self) -> Option<f64> {
        self.values.first().copied()
    }

    /// Most recent observation.
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Check that `t` addresses a return, i.e. `1 <= t < len`.
    fn check_return_index(&self, t: usize) -> Result<()> {
        if t == 0 || t >= self.values.len() {
            return Err(Error::IndexOutOfRange {
                index: t,
                len: self.values.len(),
            });
        }
        Ok(())
    }

    /// Linear (arithmetic) return between `t - 1` and `t`.
    ///
    /// A zero price at `t - 1` yields an infinite or NaN result; guarding against
    /// that is the caller's responsibility.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] unless `1 <= t < len`.
    pub fn linear_return(&self, t: usize) -> Result<f64> {
        self.check_return_index(t)?;
        let prev = self.values[t - 1];
        Ok((self.values[t] - prev) / prev)
    }

    /// Logarithmic return `ln(values[t] / values[t - 1])`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] unless `1 <= t < len`, and
    /// [`Error::NonPositivePrice`] when the price ratio is not strictly positive.
    pub fn log_return(&self, t: usize) -> Result<f64> {
        self.check_return_index(t)?;
        let ratio = self.values[t] / self.values[t - 1];
        // NaN fails the comparison too
        if !(ratio > 0.0) {
            return Err(Error::NonPositivePrice { index: t, ratio });
        }
        Ok(ratio.ln())
    }

    /// All linear returns for `t = 1..len`; empty when the series has fewer than
    /// two prices.
    pub fn linear_returns(&self) -> Vec<f64> {
        self.values
            .windows(2)
            .map(|w| (w[1] - w[0]) / w[0])
            .collect()
    }

    /// All log returns for `t = 1..len`.
    ///
    /// # Errors
    ///
    /// Fails on the first non-positive price ratio.
    pub fn log_returns(&self) -> Result<Vec<f64>> {
        (1..self.values.len()).map(|t| self.log_return(t)).collect()
    }

    /// Total return over the whole period, `0.0` with fewer than two prices.
    pub fn total_return(&self) -> f64 {
        match (self.values.first(), self.values.last()) {
            (Some(&first), Some(&last)) if self.values.len() >= 2 => (last - first) / first,
            _ => 0.0,
        }
    }
}

impl fmt::Display for PriceSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.last() {
            Some(last) => write!(f, "{}: {:.2} (latest)", self.name, last),
            None => write!(f, "{}: empty", self.name),
        }
    }
}
