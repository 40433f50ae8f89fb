//! Tick rule - classifies each trade against the one before it

use bartender_core::{Price, Trade};
use rust_decimal::Decimal;

/// Direction of a trade relative to the previous trade's price
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickDirection {
    /// No previous price to compare with
    Initial,
    Up,
    Down,
    Unchanged,
}

/// Result of classifying one trade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified {
    pub direction: TickDirection,
    /// Tick-rule sign: +1 on upticks, -1 on downticks, carried forward on
    /// unchanged prices, taken from the aggressor side on the first trade
    pub sign: Decimal,
}

/// Running tick-rule state for one policy instance
///
/// The previous price survives bar emission; only a fresh policy starts
/// without one.
#[derive(Debug, Clone, Default)]
pub struct TickRule {
    prev_price: Option<Price>,
    sign: Decimal,
}

impl TickRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a trade and remember its price
    pub fn classify(&mut self, trade: &Trade) -> Classified {
        let direction = match self.prev_price {
            None => {
                self.sign = trade.side.sign();
                TickDirection::Initial
            }
            Some(prev) if trade.price > prev => {
                self.sign = Decimal::ONE;
                TickDirection::Up
            }
            Some(prev) if trade.price < prev => {
                self.sign = Decimal::NEGATIVE_ONE;
                TickDirection::Down
            }
            Some(_) => TickDirection::Unchanged,
        };

        self.prev_price = Some(trade.price);

        Classified {
            direction,
            sign: self.sign,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bartender_core::Side;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn trade(price: Decimal, side: Side) -> Trade {
        Trade::new(price, dec!(1), side, Utc::now())
    }

    #[test]
    fn test_first_trade_signed_by_side() {
        let mut rule = TickRule::new();
        let c = rule.classify(&trade(dec!(100), Side::Sell));
        assert_eq!(c.direction, TickDirection::Initial);
        assert_eq!(c.sign, dec!(-1));

        // Price is remembered: the same price next is unchanged, not initial
        let again = rule.classify(&trade(dec!(100), Side::Buy));
        assert_eq!(again.direction, TickDirection::Unchanged);
    }

    #[test]
    fn test_unchanged_carries_sign() {
        let mut rule = TickRule::new();
        rule.classify(&trade(dec!(100), Side::Sell));

        let up = rule.classify(&trade(dec!(101), Side::Sell));
        assert_eq!(up.direction, TickDirection::Up);
        assert_eq!(up.sign, dec!(1));

        let flat = rule.classify(&trade(dec!(101), Side::Sell));
        assert_eq!(flat.direction, TickDirection::Unchanged);
        assert_eq!(flat.sign, dec!(1));

        let down = rule.classify(&trade(dec!(100.99), Side::Buy));
        assert_eq!(down.direction, TickDirection::Down);
        assert_eq!(down.sign, dec!(-1));
    }
}
