//! Bartender Engine
//!
//! Async driver that turns a trade sequence or a live trade stream into
//! bars using any [`SamplingPolicy`](bartender_ports::SamplingPolicy).
//!
//! # Usage
//!
//! ```ignore
//! use bartender_engine::{generate, TradeFilter};
//! use bartender_sampling::{InformationBars, ThresholdConfig};
//!
//! let policy = InformationBars::volume(&ThresholdConfig::new(1000))?;
//! let bars = generate(trades, Box::new(policy), &[TradeFilter::by_symbol("BTC-USD")]).await?;
//! ```

pub mod error;
pub mod filter;
pub mod pipeline;

pub use error::{EngineError, EngineResult};
pub use filter::{FilterChain, TradeFilter};
pub use pipeline::{Pipeline, PipelineConfig, generate, generate_stream};
