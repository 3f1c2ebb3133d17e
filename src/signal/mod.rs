//! Signal generation module
//!
//! Turns a fair-value estimate and a reference price into a recommendation

mod engine;
mod types;

pub use engine::{evaluate, RecommendationEngine};
pub use types::{Action, PriceInputs, Recommendation};
