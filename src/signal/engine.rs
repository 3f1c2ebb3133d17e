//! Recommendation engine
//!
//! Three-way comparison of implied value against reference price:
//! - implied < reference: overvalued, SHORT, gap reduced by a fixed offset
//! - implied > reference: undervalued, LONG, plain gap
//! - otherwise: HOLD

use super::{Action, PriceInputs, Recommendation};
use crate::config::EngineConfig;

/// Evaluates price pairs into recommendations
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationEngine {
    config: EngineConfig,
}

impl RecommendationEngine {
    /// Create a new engine
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Offset subtracted from the SHORT gap
    pub fn short_offset(&self) -> f64 {
        self.config.short_offset
    }

    /// Compare implied value against reference price
    pub fn evaluate(&self, implied_value: f64, reference_price: f64) -> Recommendation {
        let recommendation = if implied_value < reference_price {
            let gap = reference_price - implied_value;
            // Offset is applied without clamping, so small gaps go negative.
            let magnitude = gap - self.config.short_offset;
            if magnitude < 0.0 {
                tracing::info!(
                    gap,
                    offset = self.config.short_offset,
                    magnitude,
                    "Short magnitude is negative"
                );
            }
            Recommendation::new(Action::Short, magnitude)
        } else if implied_value > reference_price {
            Recommendation::new(Action::Long, implied_value - reference_price)
        } else {
            Recommendation::hold()
        };

        tracing::debug!(
            implied_value,
            reference_price,
            action = %recommendation.action,
            magnitude = recommendation.magnitude,
            "Evaluated prices"
        );

        recommendation
    }

    /// Evaluate a parsed input pair
    pub fn evaluate_inputs(&self, inputs: PriceInputs) -> Recommendation {
        self.evaluate(inputs.implied_value, inputs.reference_price)
    }
}

/// Evaluate with the default SHORT offset of 90
pub fn evaluate(implied_value: f64, reference_price: f64) -> Recommendation {
    RecommendationEngine::default().evaluate(implied_value, reference_price)
}
