//! Error types for the engine crate

use bartender_ports::ConfigError;
use thiserror::Error;

/// Errors returned before any trade enters the pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("No trades to sample")]
    EmptyInput,

    #[error("No trade stream supplied")]
    NilStream,

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid pipeline: {0}")]
    InvalidPipeline(String),
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts() {
        let err: EngineError = ConfigError::Missing { field: "threshold" }.into();
        assert_eq!(err.to_string(), "Invalid configuration: threshold is required");
    }
}
