use serde::{Deserialize, Serialize};

use super::Side;
use crate::values::{Notional, Price, Quantity, Symbol, Timestamp};

/// A single execution on the tape
///
/// Trades are immutable inputs: every sampling policy reads them and
/// none of them changes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Instrument the trade printed on, if the feed carries one
    #[serde(default)]
    pub symbol: Option<Symbol>,
    pub price: Price,
    /// Trade quantity
    pub size: Quantity,
    pub side: Side,
    pub time: Timestamp,
}

impl Trade {
    /// Create a trade without a symbol
    pub fn new(price: Price, size: Quantity, side: Side, time: Timestamp) -> Self {
        Self {
            symbol: None,
            price,
            size,
            side,
            time,
        }
    }

    /// Attach a symbol
    pub fn with_symbol(mut self, symbol: impl Into<Symbol>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Get the symbol as a string slice, if any
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    /// Returns the notional value of the trade (price * size)
    pub fn notional(&self) -> Notional {
        self.price * self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    #[test]
    fn test_notional() {
        let t = Trade::new(
            dec!(101.5),
            dec!(2),
            Side::Buy,
            Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap(),
        );
        assert_eq!(t.notional(), dec!(203.0));
        assert_eq!(t.symbol(), None);
    }

    #[test]
    fn test_deserialize_without_symbol() {
        let json = r#"{"price":"100.25","size":"3","side":"sell","time":"2025-01-01T10:00:00Z"}"#;
        let t: Trade = serde_json::from_str(json).unwrap();
        assert_eq!(t.price, dec!(100.25));
        assert_eq!(t.side, Side::Sell);
        assert!(t.symbol.is_none());

        let t = t.with_symbol("AAPL");
        assert_eq!(t.symbol(), Some("AAPL"));
    }
}
