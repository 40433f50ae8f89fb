//! Bartender Sampling Policies
//!
//! The bar-construction state machines. Each policy consumes trades one at
//! a time and decides when the bar it is building is complete:
//!
//! - **Time bars**: fixed, epoch-aligned intervals with zero-volume gap fill
//! - **Tick / Volume / Dollar bars**: emit when the trade count, traded size
//!   or traded notional crosses a threshold
//! - **Imbalance bars**: emit when the signed (tick-rule) total of the
//!   measure reaches the threshold in magnitude
//! - **Run bars**: emit when an uninterrupted one-directional streak of the
//!   measure reaches the threshold
//!
//! ## Architecture
//!
//! ```text
//!   Trade ──► TickRule ──► Classified ──┐
//!     │                                 ▼
//!     │        Measure::amount ──► Trigger (threshold | imbalance | run)
//!     │                                 │ signal >= threshold?
//!     ▼                                 ▼
//!   BarBuilder::apply_trade ──────► BarBuilder::finish ──► Bar
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bartender_sampling::{InformationBars, ThresholdConfig};
//! use bartender_ports::SamplingPolicy;
//!
//! let mut policy = InformationBars::volume_imbalance(&ThresholdConfig::new(500))?;
//! for trade in &trades {
//!     for bar in policy.on_trade(trade) {
//!         println!("{:?}", bar);
//!     }
//! }
//! let last = policy.on_close();
//! ```

pub mod config;
pub mod information;
pub mod measure;
pub mod tick_rule;
pub mod time;
pub mod trigger;

// Re-export main types
pub use config::{SamplerConfig, ThresholdConfig, TimeBarConfig};
pub use information::InformationBars;
pub use measure::Measure;
pub use tick_rule::{Classified, TickDirection, TickRule};
pub use time::TimeBars;
pub use trigger::{Trigger, TriggerKind};
