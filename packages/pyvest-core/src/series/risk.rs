//! Annualized risk and return metrics.
//!
//! All metrics work on log returns and annualize with [`TRADING_DAYS_PER_YEAR`].

use super::{PriceSeries, TRADING_DAYS_PER_YEAR};
use crate::stats::{mean, sample_std_dev};
use crate::{Error, Result};
use tracing::warn;

impl PriceSeries {
    fn require_len(&self, required: usize) -> Result<()> {
        if self.len() < required {
            return Err(Error::InsufficientData {
                required,
                actual: self.len(),
            });
        }
        Ok(())
    }

    /// Annualized volatility of log returns.
    ///
    /// Sample standard deviation (denominator `n - 1`) of the daily log returns,
    /// scaled by `sqrt(252)`.
    ///
    /// # Errors
    ///
    /// [`Error::InsufficientData`] with fewer than 3 prices, or
    /// [`Error::NonPositivePrice`] if a log return is undefined.
    pub fn annualized_volatility(&self) -> Result<f64> {
        self.require_len(3)?;

        let returns = self.log_returns()?;
        let daily_vol = sample_std_dev(&returns).ok_or(Error::InsufficientData {
            required: 3,
            actual: self.len(),
        })?;

        Ok(daily_vol * (TRADING_DAYS_PER_YEAR as f64).sqrt())
    }

    /// Mean daily log return times 252 (linear, not compounded).
    ///
    /// # Errors
    ///
    /// [`Error::InsufficientData`] with fewer than 2 prices.
    pub fn annualized_return(&self) -> Result<f64> {
        self.require_len(2)?;

        let returns = self.log_returns()?;
        let daily_mean = mean(&returns).ok_or(Error::InsufficientData {
            required: 2,
            actual: self.len(),
        })?;

        Ok(daily_mean * TRADING_DAYS_PER_YEAR as f64)
    }

    /// Annualized Sharpe ratio, `(annualized_return - risk_free_rate) / volatility`.
    ///
    /// # Arguments
    ///
    /// * `risk_free_rate` - Annual risk-free rate (e.g., 0.04 for 4%)
    ///
    /// # Returns
    ///
    /// `0.0` when volatility is exactly zero. Errors from the volatility and return
    /// calculations propagate unchanged.
    pub fn sharpe_ratio(&self, risk_free_rate: f64) -> Result<f64> {
        let vol = self.annualized_volatility()?;
        if vol == 0.0 {
            warn!(series = %self.name(), "zero volatility, Sharpe ratio reported as 0.0");
            return Ok(0.0);
        }

        let excess_return = self.annualized_return()? - risk_free_rate;
        Ok(excess_return / vol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> PriceSeries {
        PriceSeries::new(vec![100.0, 102.0, 101.0, 105.0, 103.0])
    }

    #[test]
    fn test_annualized_volatility() {
        let vol = sample().annualized_volatility().unwrap();
        assert_relative_eq!(vol, 0.424_887_465_631_951_6, epsilon = 1e-12);
    }

    #[test]
    fn test_annualized_volatility_matches_sample_std() {
        let series = sample();
        let returns = series.log_returns().unwrap();
        let expected = sample_std_dev(&returns).unwrap() * 252.0_f64.sqrt();
        assert_relative_eq!(series.annualized_volatility().unwrap(), expected);
    }

    #[test]
    fn test_annualized_volatility_insufficient_data() {
        let series = PriceSeries::new(vec![100.0, 101.0]);
        assert!(matches!(
            series.annualized_volatility(),
            Err(Error::InsufficientData {
                required: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_annualized_return() {
        let ret = sample().annualized_return().unwrap();
        // Sum of log returns is ln(103 / 100), spread over 4 periods
        let expected = (103.0_f64 / 100.0).ln() / 4.0 * 252.0;
        assert_relative_eq!(ret, expected, epsilon = 1e-12);
        assert_relative_eq!(ret, 1.862_204_541_217_3, epsilon = 1e-9);
    }

    #[test]
    fn test_annualized_return_insufficient_data() {
        let series = PriceSeries::new(vec![100.0]);
        assert!(matches!(
            series.annualized_return(),
            Err(Error::InsufficientData {
                required: 2,
                actual: 1
            })
        ));

        // Two prices are enough for a return but not for volatility
        assert!(PriceSeries::new(vec![100.0, 110.0]).annualized_return().is_ok());
    }

    #[test]
    fn test_sharpe_ratio() {
        let series = sample();
        assert_relative_eq!(
            series.sharpe_ratio(0.0).unwrap(),
            4.382_818_256_235_38,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            series.sharpe_ratio(0.02).unwrap(),
            4.335_746_968_852_841,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_sharpe_ratio_zero_volatility() {
        let flat = PriceSeries::new(vec![50.0, 50.0, 50.0, 50.0]);
        assert_eq!(flat.annualized_volatility().unwrap(), 0.0);
        assert_eq!(flat.sharpe_ratio(0.04).unwrap(), 0.0);
    }

    #[test]
    fn test_sharpe_ratio_propagates_insufficient_data() {
        let series = PriceSeries::new(vec![100.0, 101.0]);
        assert!(matches!(
            series.sharpe_ratio(0.0),
            Err(Error::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_metrics_propagate_domain_error() {
        let series = PriceSeries::new(vec![100.0, 0.0, 50.0]);
        assert!(matches!(
            series.annualized_volatility(),
            Err(Error::NonPositivePrice { index: 1, .. })
        ));
        assert!(matches!(
            series.annualized_return(),
            Err(Error::NonPositivePrice { .. })
        ));
    }
}
