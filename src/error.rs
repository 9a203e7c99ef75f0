//! Error types for mission control
//!
//! Domain outcomes (a blocked launch, an unknown rocket) are not errors: they
//! are reported as confirmation strings. The variants here cover the plumbing
//! around the domain: tool lookup, argument decoding, configuration and I/O.

use thiserror::Error;

/// Main error type for mission control operations
#[derive(Error, Debug)]
pub enum MissionError {
    /// No tool is registered under the requested name
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Argument payload could not be decoded for a tool
    #[error("Invalid arguments for {tool}: {reason}")]
    InvalidArguments { tool: String, reason: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Tool bridge protocol error
    #[error("Bridge protocol error: {0}")]
    Bridge(String),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl MissionError {
    /// Build an `InvalidArguments` error for `tool`
    pub fn invalid_arguments(tool: impl Into<String>, reason: impl ToString) -> Self {
        MissionError::InvalidArguments {
            tool: tool.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for mission control operations
pub type Result<T> = std::result::Result<T, MissionError>;

/// Convert anyhow::Error to MissionError
impl From<anyhow::Error> for MissionError {
    fn from(err: anyhow::Error) -> Self {
        MissionError::Other(err.to_string())
    }
}
