//! Shared helpers for the sampling integration tests
#![allow(dead_code)]

use bartender_core::{Bar, Side, Timestamp, Trade};
use bartender_ports::SamplingPolicy;
use chrono::{Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// 2025-01-01 10:00:00 UTC
pub fn t0() -> Timestamp {
    Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap()
}

pub fn at(secs: i64) -> Timestamp {
    t0() + Duration::seconds(secs)
}

pub fn buy(price: Decimal, size: Decimal, secs: i64) -> Trade {
    Trade::new(price, size, Side::Buy, at(secs))
}

pub fn sell(price: Decimal, size: Decimal, secs: i64) -> Trade {
    Trade::new(price, size, Side::Sell, at(secs))
}

/// Feed every trade, then close the stream
pub fn run(policy: &mut dyn SamplingPolicy, trades: &[Trade]) -> Vec<Bar> {
    let mut bars = Vec::new();
    for trade in trades {
        bars.extend(policy.on_trade(trade));
    }
    bars.extend(policy.on_close());
    bars
}

/// Random-walk tape with cent price steps, fractional sizes and mixed sides
pub fn random_trades(seed: u64, count: usize) -> Vec<Trade> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut price = dec!(100.00);
    let mut time = t0();

    (0..count)
        .map(|_| {
            price += Decimal::new(rng.gen_range(-5i64..=5), 2);
            let size = Decimal::new(rng.gen_range(1i64..=500), 2);
            let side = if rng.gen_bool(0.5) { Side::Buy } else { Side::Sell };
            time += Duration::seconds(rng.gen_range(0..90));
            Trade::new(price, size, side, time)
        })
        .collect()
}

pub fn total_size(trades: &[Trade]) -> Decimal {
    trades.iter().map(|t| t.size).sum()
}

pub fn total_volume(bars: &[Bar]) -> Decimal {
    bars.iter().map(|b| b.volume).sum()
}
