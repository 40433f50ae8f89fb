use super::{Bar, Side, Trade};
use crate::values::{Price, Quantity, Timestamp};

/// Mutable accumulator for the bar currently being built
///
/// Every sampling policy folds trades through the same builder, so the
/// OHLCV and intrabar bookkeeping lives in exactly one place. A builder is
/// owned by a single policy and consumed by [`BarBuilder::finish`] when the
/// policy decides the bar is complete.
#[derive(Debug, Clone, Default)]
pub struct BarBuilder {
    start: Option<Timestamp>,
    open: Price,
    high: Price,
    low: Price,
    close: Price,
    volume: Quantity,
    buy_volume: Quantity,
    sell_volume: Quantity,
    ticks: u64,
    upticks: u64,
    last_time: Option<Timestamp>,
}

impl BarBuilder {
    /// Builder whose start is taken from the first trade applied
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pre-dated to an aligned boundary (time bars)
    pub fn open_at(start: Timestamp) -> Self {
        Self {
            start: Some(start),
            ..Self::default()
        }
    }

    /// Fold a trade into the bar
    pub fn apply_trade(&mut self, trade: &Trade) {
        let price = trade.price;

        if self.ticks == 0 {
            self.open = price;
            self.high = price;
            self.low = price;
            self.start.get_or_insert(trade.time);
        } else {
            // close is the previous trade's price within this bar
            if price > self.close {
                self.upticks += 1;
            }
            self.high = self.high.max(price);
            self.low = self.low.min(price);
        }

        match trade.side {
            Side::Buy => self.buy_volume += trade.size,
            Side::Sell => self.sell_volume += trade.size,
        }

        self.close = price;
        self.volume += trade.size;
        self.ticks += 1;
        self.last_time = Some(trade.time);
    }

    /// No trades folded yet
    pub fn is_empty(&self) -> bool {
        self.ticks == 0
    }

    /// Time of the most recent trade folded into the bar
    pub fn last_time(&self) -> Option<Timestamp> {
        self.last_time
    }

    /// Close price so far; `None` until a trade is applied
    pub fn close(&self) -> Option<Price> {
        (!self.is_empty()).then_some(self.close)
    }

    /// Freeze the accumulated state into a [`Bar`]
    ///
    /// Returns `None` when no trade was ever applied: an empty builder has
    /// no price to report.
    pub fn finish(self) -> Option<Bar> {
        if self.is_empty() {
            return None;
        }
        let start = self.start?;

        Some(Bar {
            start,
            open: self.open,
            high: self.high,
            low: self.low,
            close: self.close,
            volume: self.volume,
            buy_volume: self.buy_volume,
            sell_volume: self.sell_volume,
            ticks: self.ticks,
            upticks: self.upticks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn t0() -> Timestamp {
        Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap()
    }

    fn trade(price: Decimal, size: Decimal, side: Side, secs: i64) -> Trade {
        Trade::new(price, size, side, t0() + Duration::seconds(secs))
    }

    #[test]
    fn test_empty_builder_finishes_to_none() {
        assert!(BarBuilder::new().finish().is_none());
        assert!(BarBuilder::open_at(t0()).finish().is_none());
    }

    #[test]
    fn test_first_trade_sets_ohlc_and_start() {
        let mut b = BarBuilder::new();
        b.apply_trade(&trade(dec!(100), dec!(1), Side::Buy, 5));

        let bar = b.finish().unwrap();
        assert_eq!(bar.start, t0() + Duration::seconds(5));
        assert_eq!(bar.open, dec!(100));
        assert_eq!(bar.high, dec!(100));
        assert_eq!(bar.low, dec!(100));
        assert_eq!(bar.close, dec!(100));
        assert_eq!(bar.ticks, 1);
        assert_eq!(bar.upticks, 0);
    }

    #[test]
    fn test_open_at_keeps_aligned_start() {
        let mut b = BarBuilder::open_at(t0());
        b.apply_trade(&trade(dec!(100), dec!(1), Side::Buy, 42));
        assert_eq!(b.finish().unwrap().start, t0());
    }

    #[test]
    fn test_upticks_only_on_strict_increase() {
        let mut b = BarBuilder::new();
        for (i, p) in [dec!(100), dec!(101), dec!(101), dec!(99), dec!(100)]
            .into_iter()
            .enumerate()
        {
            b.apply_trade(&trade(p, dec!(1), Side::Buy, i as i64));
        }

        let bar = b.finish().unwrap();
        assert_eq!(bar.ticks, 5);
        assert_eq!(bar.upticks, 2);
        assert_eq!(bar.high, dec!(101));
        assert_eq!(bar.low, dec!(99));
        assert_eq!(bar.close, dec!(100));
    }

    #[test]
    fn test_side_partitioned_volume() {
        let mut b = BarBuilder::new();
        b.apply_trade(&trade(dec!(10), dec!(1.5), Side::Buy, 0));
        b.apply_trade(&trade(dec!(10), dec!(2.25), Side::Sell, 1));
        b.apply_trade(&trade(dec!(10), dec!(0.25), Side::Buy, 2));

        assert_eq!(b.last_time(), Some(t0() + Duration::seconds(2)));

        let bar = b.finish().unwrap();
        assert_eq!(bar.volume, dec!(4.0));
        assert_eq!(bar.buy_volume, dec!(1.75));
        assert_eq!(bar.sell_volume, dec!(2.25));
        assert_eq!(bar.volume, bar.buy_volume + bar.sell_volume);
    }
}
