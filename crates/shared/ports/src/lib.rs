//! Bartender Ports
//!
//! Port definitions (traits) for the bartender bar sampling engine.
//! These define the boundary between the sampling policies and the
//! pipeline that feeds them.

mod error;
mod policy;

pub use error::{ConfigError, ConfigResult};
pub use policy::SamplingPolicy;
