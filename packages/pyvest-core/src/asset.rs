//! Financial asset: identity metadata over an exclusively owned price series.

use crate::series::PriceSeries;
use crate::stats::pearson_correlation;
use crate::types::{AssetReport, Currency};
use crate::{Error, Result};
use chrono::Utc;
use std::fmt;
use tracing::{debug, warn};

/// An asset with its price history.
///
/// The asset owns its [`PriceSeries`] by value. There are no setters, so two assets
/// can never alias one series and every statistic is computed on demand from the
/// current series.
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    ticker: String,
    prices: PriceSeries,
    sector: Option<String>,
    currency: Currency,
}

impl Asset {
    /// Create an asset in [`Currency::Usd`] with no sector.
    ///
    /// The ticker is trimmed and normalized to uppercase.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] if the ticker is empty or whitespace, or the series
    /// has no prices.
    pub fn new(ticker: &str, prices: PriceSeries) -> Result<Self> {
        if ticker.trim().is_empty() {
            return Err(Error::InvalidInput("ticker cannot be empty".to_string()));
        }
        if prices.is_empty() {
            return Err(Error::InvalidInput(format!(
                "price series for {} cannot be empty",
                ticker.trim()
            )));
        }

        let ticker = ticker.trim().to_uppercase();
        debug!(%ticker, observations = prices.len(), "created asset");

        Ok(Self {
            ticker,
            prices,
            sector: None,
            currency: Currency::default(),
        })
    }

    /// Set the sector classification.
    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }

    /// Set the quote currency.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn prices(&self) -> &PriceSeries {
        &self.prices
    }

    pub fn sector(&self) -> Option<&str> {
        self.sector.as_deref()
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Last known price.
    pub fn current_price(&self) -> f64 {
        // Non-empty by construction
        self.prices.values()[self.prices.len() - 1]
    }

    /// Annualized volatility of the owned series.
    pub fn volatility(&self) -> Result<f64> {
        self.prices.annualized_volatility()
    }

    /// Annualized mean log return of the owned series.
    pub fn annualized_return(&self) -> Result<f64> {
        self.prices.annualized_return()
    }

    pub fn total_return(&self) -> f64 {
        self.prices.total_return()
    }

    /// Sharpe ratio of the owned series against `risk_free_rate`.
    pub fn sharpe_ratio(&self, risk_free_rate: f64) -> Result<f64> {
        self.prices.sharpe_ratio(risk_free_rate)
    }

    pub fn max_drawdown(&self) -> f64 {
        self.prices.max_drawdown()
    }

    /// Pearson correlation of this asset's log returns with `other`'s.
    ///
    /// Returns are paired by position from the start of each series. When the series
    /// differ in length the longer one is truncated to the shorter's return count.
    /// Both full series must still yield log returns, including any tail beyond the
    /// paired range.
    ///
    /// # Errors
    ///
    /// - [`Error::InsufficientData`] if fewer than two return pairs are available
    /// - [`Error::NonPositivePrice`] if either series has an undefined log return
    /// - [`Error::UndefinedCorrelation`] if either return sequence is constant
    pub fn correlation_with(&self, other: &Asset) -> Result<f64> {
        let ours = self.prices.log_returns()?;
        let theirs = other.prices.log_returns()?;

        let pairs = ours.len().min(theirs.len());
        if pairs < 2 {
            return Err(Error::InsufficientData {
                required: 3,
                actual: self.prices.len().min(other.prices.len()),
            });
        }
        if ours.len() != theirs.len() {
            warn!(
                left = %self.ticker,
                right = %other.ticker,
                left_returns = ours.len(),
                right_returns = theirs.len(),
                "series lengths differ, correlating the common prefix"
            );
        }

        pearson_correlation(&ours, &theirs).ok_or_else(|| {
            Error::UndefinedCorrelation(format!(
                "log returns of {} or {} have zero variance",
                self.ticker, other.ticker
            ))
        })
    }

    /// Compute every statistic at once.
    ///
    /// # Errors
    ///
    /// Fails like [`Asset::volatility`] when the series is too short for annualized
    /// metrics.
    pub fn report(&self, risk_free_rate: f64) -> Result<AssetReport> {
        Ok(AssetReport {
            ticker: self.ticker.clone(),
            sector: self.sector.clone(),
            currency: self.currency,
            observations: self.prices.len(),
            current_price: self.current_price(),
            total_return: self.total_return(),
            annualized_return: self.annualized_return()?,
            volatility: self.volatility()?,
            risk_free_rate,
            sharpe_ratio: self.sharpe_ratio(risk_free_rate)?,
            max_drawdown: self.max_drawdown(),
            generated_at: Utc::now(),
        })
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ${:.2}", self.ticker, self.current_price())
    }
}
