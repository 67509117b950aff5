//! Core data types shared by the library and the CLI.

use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Currency a price series is quoted in.
///
/// Serialized as the ISO code ("USD", "EUR", "GBP", "JPY").
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Jpy,
}

impl Currency {
    /// Every supported currency.
    pub const ALL: [Currency; 4] = [Currency::Usd, Currency::Eur, Currency::Gbp, Currency::Jpy];

    /// ISO 4217 code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim();
        Currency::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(code))
            .ok_or_else(|| {
                Error::InvalidInput(format!(
                    "unsupported currency '{}', expected one of USD, EUR, GBP, JPY",
                    s
                ))
            })
    }
}

/// Snapshot of every statistic derived for an asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetReport {
    /// Ticker symbol (uppercase)
    pub ticker: String,
    /// Sector classification, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    /// Quote currency
    pub currency: Currency,
    /// Number of price observations
    pub observations: usize,
    /// Last known price
    pub current_price: f64,
    /// Total return over the period as a decimal
    pub total_return: f64,
    /// Mean daily log return times 252
    pub annualized_return: f64,
    /// Annualized volatility of log returns
    pub volatility: f64,
    /// Risk-free rate the Sharpe ratio was computed against
    pub risk_free_rate: f64,
    /// Annualized Sharpe ratio
    pub sharpe_ratio: f64,
    /// Most negative drawdown as a decimal (e.g., -0.2 for a 20% decline)
    pub max_drawdown: f64,
    /// When the report was produced
    pub generated_at: DateTime<Utc>,
}

/// API response wrapper used for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response.
    pub fn err(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(error.into()),
        }
    }
}
