//! CLI interface for fairvalue-signal
//!
//! `fairvalue-signal [OPTIONS] <IMPLIED_VALUE> <REFERENCE_PRICE>`

mod types;

pub use types::{CliError, OutputFormat};

use crate::signal::{PriceInputs, Recommendation};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fairvalue-signal")]
#[command(about = "Compare a fair-value estimate with a reference price and recommend SHORT, LONG or HOLD")]
#[command(version)]
pub struct Cli {
    /// Fair-value estimate (e.g. DCF implied price)
    #[arg(value_name = "IMPLIED_VALUE", allow_hyphen_values = true)]
    pub implied_value: String,

    /// Forecast or market price to compare against
    #[arg(value_name = "REFERENCE_PRICE", allow_hyphen_values = true)]
    pub reference_price: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level, overrides the configured one
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Parse both positional prices
    pub fn inputs(&self) -> Result<PriceInputs, CliError> {
        let implied_value = parse_price("implied value", &self.implied_value)?;
        let reference_price = parse_price("reference price", &self.reference_price)?;
        Ok(PriceInputs::new(implied_value, reference_price))
    }

    /// Render a recommendation in the selected format
    pub fn render(&self, recommendation: &Recommendation) -> Result<String, CliError> {
        self.format.render(recommendation)
    }
}

/// Parse a decimal price, rejecting NaN and infinities
pub fn parse_price(name: &'static str, text: &str) -> Result<f64, CliError> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CliError::InvalidNumber {
            name,
            value: text.to_string(),
        }),
    }
}
