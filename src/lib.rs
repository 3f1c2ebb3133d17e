//! fairvalue-signal: trade recommendation from a fair-value estimate
//!
//! This library provides:
//! - The recommendation engine comparing implied value and reference price
//! - CLI parsing and output rendering
//! - Optional TOML configuration
//! - Structured logging

pub mod cli;
pub mod config;
pub mod signal;
pub mod telemetry;
