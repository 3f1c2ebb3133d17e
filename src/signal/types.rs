//! Signal types

use serde::Serialize;
use std::fmt;

/// Recommended trading action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    /// Asset is overvalued, bet against it
    Short,
    /// Asset is undervalued, take a bullish position
    Long,
    /// Prices match, do nothing
    Hold,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Short => write!(f, "SHORT"),
            Action::Long => write!(f, "LONG"),
            Action::Hold => write!(f, "HOLD"),
        }
    }
}

/// The two prices being compared
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceInputs {
    /// Fair-value estimate computed elsewhere (e.g. DCF)
    pub implied_value: f64,
    /// Forecast or market price
    pub reference_price: f64,
}

impl PriceInputs {
    pub fn new(implied_value: f64, reference_price: f64) -> Self {
        Self {
            implied_value,
            reference_price,
        }
    }
}

/// A trading recommendation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// Trade direction
    pub action: Action,
    /// Size of the mispricing. Zero for `Hold`, may be negative for `Short`.
    pub magnitude: f64,
    /// Rendered one-line message
    pub message: String,
}

impl Recommendation {
    /// Build a recommendation, rendering the message from action and magnitude
    pub fn new(action: Action, magnitude: f64) -> Self {
        let message = match action {
            Action::Short => format!(
                "Stock is overvalued by ${:.2}. Recommended action: SHORT.",
                magnitude
            ),
            Action::Long => format!(
                "Stock is undervalued by ${:.2}. Recommended action: LONG.",
                magnitude
            ),
            Action::Hold => "Stock is correctly priced. No recommended trading action.".to_string(),
        };

        Self {
            action,
            magnitude,
            message,
        }
    }

    /// Recommendation for matching prices
    pub fn hold() -> Self {
        Self::new(Action::Hold, 0.0)
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
