//! Bartender Core Domain
//!
//! Pure domain types for the bartender bar sampling engine.
//! This crate contains no async, no I/O, and is 100% unit testable.
//!
//! - [`Trade`]: immutable input record
//! - [`Bar`]: finalized OHLCV bar with intrabar statistics
//! - [`BarBuilder`]: the accumulator every sampling policy folds trades into

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{Bar, BarBuilder, Side, Trade};
pub use values::{Notional, Price, Quantity, Symbol, Timestamp};
