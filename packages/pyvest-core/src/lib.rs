//! Pyvest Core - Price series statistics library.
//!
//! This crate derives risk and return statistics from an in-memory price history:
//!
//! - **Returns**: Linear and logarithmic returns, total return
//! - **Risk metrics**: Annualized volatility, annualized return, Sharpe ratio
//! - **Drawdown**: Pointwise drawdown, drawdown series, max drawdown
//! - **Assets**: Ticker/currency metadata over an owned series, return correlation
//!
//! # Example
//!
//! ```rust
//! use pyvest_core::{Asset, Currency, PriceSeries};
//!
//! let series = PriceSeries::new(vec![100.0, 102.0, 101.0, 105.0, 103.0]).with_name("aapl");
//! let asset = Asset::new("aapl", series)
//!     .unwrap()
//!     .with_currency(Currency::Usd);
//!
//! assert_eq!(asset.ticker(), "AAPL");
//! assert!((asset.total_return() - 0.03).abs() < 1e-12);
//! println!("{} vol={:.4}", asset, asset.volatility().unwrap());
//! ```

pub mod asset;
pub mod config;
pub mod series;
pub mod stats;
pub mod types;

// Re-export commonly used types
pub use asset::Asset;
pub use config::AnalyticsConfig;
pub use series::{PriceSeries, TRADING_DAYS_PER_YEAR};
pub use types::{ApiResponse, AssetReport, Currency};

/// Error types for pyvest-core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Insufficient data: need at least {required} prices, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Index {index} is out of range for series of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Log return undefined at index {index}: price ratio {ratio} is not positive")]
    NonPositivePrice { index: usize, ratio: f64 },

    #[error("Correlation undefined: {0}")]
    UndefinedCorrelation(String),
}

/// Result type for pyvest-core operations.
pub type Result<T> = std::result::Result<T, Error>;
