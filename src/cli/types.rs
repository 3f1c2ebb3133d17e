//! CLI types

use crate::signal::Recommendation;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::ValueEnum;
use thiserror::Error;

/// Errors at the command-line boundary
#[derive(Debug, Error)]
pub enum CliError {
    /// Not exactly two positional prices
    #[error("Invalid number of arguments.")]
    ArgumentCount,
    /// A price is not a finite decimal number
    #[error("Invalid numeric value for {name}: '{value}'")]
    InvalidNumber { name: &'static str, value: String },
    /// Any other usage error reported by clap
    #[error("{0}")]
    Usage(String),
    /// JSON rendering failed
    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

impl From<clap::Error> for CliError {
    fn from(err: clap::Error) -> Self {
        let arg = context_string(&err, ContextKind::InvalidArg);
        match err.kind() {
            ErrorKind::MissingRequiredArgument
            | ErrorKind::TooManyValues
            | ErrorKind::WrongNumberOfValues => CliError::ArgumentCount,
            // Extra positionals land here too, including negative numbers
            ErrorKind::UnknownArgument => match arg {
                Some(arg) if arg.starts_with('-') && arg.parse::<f64>().is_err() => {
                    CliError::Usage(format!("Unknown option '{}'", arg))
                }
                _ => CliError::ArgumentCount,
            },
            ErrorKind::InvalidValue => {
                match (arg, context_string(&err, ContextKind::InvalidValue)) {
                    (Some(arg), Some(value)) => {
                        CliError::Usage(format!("Invalid value '{}' for {}", value, arg))
                    }
                    _ => CliError::Usage("Invalid value".to_string()),
                }
            }
            kind => CliError::Usage(kind.as_str().unwrap_or("Invalid usage").to_string()),
        }
    }
}

fn context_string(err: &clap::Error, kind: ContextKind) -> Option<&str> {
    match err.get(kind)? {
        ContextValue::String(value) => Some(value.as_str()),
        _ => None,
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line
    Text,
    /// Serialized recommendation
    Json,
}

impl OutputFormat {
    /// Render a recommendation
    pub fn render(&self, recommendation: &Recommendation) -> Result<String, CliError> {
        match self {
            OutputFormat::Text => Ok(recommendation.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string(recommendation)?),
        }
    }
}
