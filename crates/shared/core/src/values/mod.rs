//! Scalar aliases shared by trades and bars
//!
//! All amounts are exact decimals so that volume and dollar totals add up
//! without drift.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Trade or bar price
pub type Price = Decimal;

/// Trade size or bar volume
pub type Quantity = Decimal;

/// Price times size
pub type Notional = Decimal;

/// Trade time or bar start, always UTC
pub type Timestamp = DateTime<Utc>;

/// Instrument identifier, e.g. `BTC-USD`
pub type Symbol = String;
