use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::values::{Price, Quantity, Timestamp};

/// A finalized OHLCV bar
///
/// Bars are produced by a [`BarBuilder`](super::BarBuilder) and are plain
/// values once emitted. The intrabar statistics sit next to the usual
/// OHLCV fields so downstream consumers never need the constituent trades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bar {
    /// First trade time, or the aligned interval start for time bars
    pub start: Timestamp,
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
    /// Sum of constituent trade sizes
    pub volume: Quantity,
    /// Volume of buyer-initiated trades
    pub buy_volume: Quantity,
    /// Volume of seller-initiated trades
    pub sell_volume: Quantity,
    /// Number of trades folded into the bar
    pub ticks: u64,
    /// Trades that printed strictly above the previous trade in the bar
    pub upticks: u64,
}

impl Bar {
    /// Synthetic bar for an interval with no trades
    ///
    /// OHLC are all pinned to the previous bar's close.
    pub fn empty(start: Timestamp, close: Price) -> Self {
        Self {
            start,
            open: close,
            high: close,
            low: close,
            close,
            volume: Decimal::ZERO,
            buy_volume: Decimal::ZERO,
            sell_volume: Decimal::ZERO,
            ticks: 0,
            upticks: 0,
        }
    }

    /// True for gap-fill bars that hold no trades
    pub fn is_empty(&self) -> bool {
        self.ticks == 0
    }
}
