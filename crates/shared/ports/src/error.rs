use thiserror::Error;

/// Errors raised while constructing a sampling policy
///
/// All of these surface before the first trade is processed; a policy that
/// was built successfully never fails mid-stream.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field} must be strictly positive, got {value}")]
    NonPositive { field: &'static str, value: String },

    #[error("{field} is out of range: {reason}")]
    OutOfRange { field: &'static str, reason: String },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
