//! Pyvest CLI - Command line interface for price series statistics.
//!
//! Prints JSON `ApiResponse` envelopes on stdout; logs go to stderr.

use clap::{Args, Parser, Subcommand};
use pyvest_core::{AnalyticsConfig, ApiResponse, Asset, Currency, Error, PriceSeries, Result};
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "pyvest")]
#[command(about = "Pyvest CLI - returns, volatility, Sharpe ratio and drawdown from price series")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute all statistics for one asset
    Stats {
        /// Ticker symbol
        #[arg(short, long)]
        ticker: String,
        #[command(flatten)]
        prices: PriceInput,
        /// Series label
        #[arg(long)]
        name: Option<String>,
        /// Sector classification
        #[arg(long)]
        sector: Option<String>,
        /// Quote currency (USD, EUR, GBP, JPY)
        #[arg(long, default_value = "USD")]
        currency: String,
        /// Annual risk-free rate (defaults to configuration)
        #[arg(long)]
        risk_free: Option<f64>,
    },
    /// Correlate the log returns of two assets
    Correlate {
        /// Left ticker symbol
        #[arg(long)]
        left: String,
        /// Left prices, comma-separated
        #[arg(long, required_unless_present = "left_file")]
        left_prices: Option<String>,
        /// Left prices as a JSON array file
        #[arg(long, conflicts_with = "left_prices")]
        left_file: Option<PathBuf>,
        /// Right ticker symbol
        #[arg(long)]
        right: String,
        /// Right prices, comma-separated
        #[arg(long, required_unless_present = "right_file")]
        right_prices: Option<String>,
        /// Right prices as a JSON array file
        #[arg(long, conflicts_with = "right_prices")]
        right_file: Option<PathBuf>,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct PriceInput {
    /// Prices, comma-separated, oldest first
    #[arg(short, long)]
    prices: Option<String>,
    /// Prices as a JSON array file, oldest first
    #[arg(short, long)]
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let (output, ok) = match cli.command {
        Commands::Stats {
            ticker,
            prices,
            name,
            sector,
            currency,
            risk_free,
        } => respond(handle_stats(
            &ticker,
            read_prices(prices.prices.as_deref(), prices.file.as_ref()),
            name,
            sector,
            &currency,
            risk_free,
        )),
        Commands::Correlate {
            left,
            left_prices,
            left_file,
            right,
            right_prices,
            right_file,
        } => respond(handle_correlate(
            &left,
            read_prices(left_prices.as_deref(), left_file.as_ref()),
            &right,
            read_prices(right_prices.as_deref(), right_file.as_ref()),
        )),
    };

    println!("{}", output);
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn respond<T: Serialize>(result: Result<T>) -> (String, bool) {
    let ok = result.is_ok();
    let rendered = match result {
        Ok(data) => serde_json::to_string_pretty(&ApiResponse::ok(data)),
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            serde_json::to_string_pretty(&ApiResponse::<()>::err(e.to_string()))
        }
    };

    match rendered {
        Ok(json) => (json, ok),
        Err(e) => (fallback_error(&e.to_string()), false),
    }
}

/// Compact error envelope for when pretty rendering itself fails.
fn fallback_error(message: &str) -> String {
    json!({ "ok": false, "error": message }).to_string()
}

fn read_prices(inline: Option<&str>, file: Option<&PathBuf>) -> Result<Vec<f64>> {
    match (inline, file) {
        (Some(list), _) => parse_price_list(list),
        (None, Some(path)) => {
            let content = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        }
        (None, None) => Err(Error::InvalidInput("no prices supplied".to_string())),
    }
}

fn parse_price_list(list: &str) -> Result<Vec<f64>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .map_err(|_| Error::InvalidInput(format!("invalid price '{}'", s)))
        })
        .collect()
}

fn handle_stats(
    ticker: &str,
    prices: Result<Vec<f64>>,
    name: Option<String>,
    sector: Option<String>,
    currency: &str,
    risk_free: Option<f64>,
) -> Result<pyvest_core::AssetReport> {
    let series = PriceSeries::new(prices?);
    let series = match name {
        Some(name) => series.with_name(name),
        None => series,
    };

    let mut asset = Asset::new(ticker, series)?.with_currency(currency.parse::<Currency>()?);
    if let Some(sector) = sector {
        asset = asset.with_sector(sector);
    }

    let risk_free_rate = match risk_free {
        Some(rate) => rate,
        None => AnalyticsConfig::load()?.risk_free_rate,
    };

    asset.report(risk_free_rate)
}

fn handle_correlate(
    left: &str,
    left_prices: Result<Vec<f64>>,
    right: &str,
    right_prices: Result<Vec<f64>>,
) -> Result<serde_json::Value> {
    let left = Asset::new(left, PriceSeries::new(left_prices?))?;
    let right = Asset::new(right, PriceSeries::new(right_prices?))?;
    let correlation = left.correlation_with(&right)?;

    Ok(json!({
        "left": left.ticker(),
        "right": right.ticker(),
        "correlation": correlation,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_error_escapes_message() {
        let rendered = fallback_error(r#"bad "value" \ here"#);
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(parsed["ok"], false);
        assert_eq!(parsed["error"], r#"bad "value" \ here"#);
    }

    #[test]
    fn test_parse_price_list() {
        assert_eq!(parse_price_list("100, 101.5,,102").unwrap(), vec![100.0, 101.5, 102.0]);
        assert!(matches!(
            parse_price_list("100,abc"),
            Err(Error::InvalidInput(_))
        ));
    }
}
