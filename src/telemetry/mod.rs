//! Telemetry module
//!
//! Structured logging

mod logging;

pub use logging::init_logging;

use crate::config::TelemetryConfig;

/// Initialize telemetry, with an optional level override from the command line
pub fn init_telemetry(config: &TelemetryConfig, level_override: Option<&str>) -> anyhow::Result<()> {
    let level = level_override.unwrap_or(&config.log_level);
    init_logging(level, config.log_format)
}
