//! Fixed-interval time bars
//!
//! Buckets are aligned to the Unix epoch in UTC: a trade at `t` belongs to
//! the bucket starting at the largest multiple of the interval not after
//! `t`. Empty buckets between two trades are emitted as zero-volume bars
//! carrying the previous close, so the output has no holes.
//!
//! With `close_on_day_change` set, buckets are additionally clipped at UTC
//! midnight. For intervals that divide a day this changes nothing.
//!
//! Trades are expected in time order but it is not enforced. A trade older
//! than the open bar is folded into that bar; only trades whose bucket
//! precedes the very first bar are dropped.

use bartender_core::{Bar, BarBuilder, Timestamp, Trade};
use bartender_ports::{ConfigResult, SamplingPolicy};
use chrono::{DateTime, NaiveTime, TimeDelta, Utc};

use crate::config::TimeBarConfig;

/// Half-open `[start, end)` span covered by one bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bucket {
    start: Timestamp,
    end: Timestamp,
}

#[derive(Debug, Clone)]
pub struct TimeBars {
    interval: TimeDelta,
    interval_us: i64,
    close_on_day_change: bool,
    /// Start of the first bar ever opened; nothing earlier has a bar to join
    first_start: Option<Timestamp>,
    current: Option<(Bucket, BarBuilder)>,
}

/// Gap fills longer than this are logged at `warn`
const GAP_WARN_BARS: i64 = 100_000;

impl TimeBars {
    pub fn new(config: &TimeBarConfig) -> ConfigResult<Self> {
        let interval = config.validate()?;
        // validate() guarantees a whole, representable number of microseconds
        let interval_us = interval.num_microseconds().unwrap_or(i64::MAX);

        log::debug!(
            "[time] interval={} close_on_day_change={}",
            interval,
            config.close_on_day_change
        );

        Ok(Self {
            interval,
            interval_us,
            close_on_day_change: config.close_on_day_change,
            first_start: None,
            current: None,
        })
    }

    /// Largest epoch multiple of the interval not after `t`
    pub fn aligned_start(&self, t: Timestamp) -> Timestamp {
        let us = t.timestamp_micros();
        let aligned = us - us.rem_euclid(self.interval_us);
        DateTime::from_timestamp_micros(aligned).unwrap_or(t)
    }

    fn bucket_start(&self, t: Timestamp) -> Timestamp {
        let aligned = self.aligned_start(t);
        if self.close_on_day_change {
            aligned.max(midnight(t))
        } else {
            aligned
        }
    }

    fn bucket_end(&self, start: Timestamp) -> Timestamp {
        let end = self
            .aligned_start(start)
            .checked_add_signed(self.interval)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        if self.close_on_day_change {
            end.min(next_midnight(start))
        } else {
            end
        }
    }

    fn bucket(&self, t: Timestamp) -> Bucket {
        let start = self.bucket_start(t);
        Bucket {
            start,
            end: self.bucket_end(start),
        }
    }
}

impl SamplingPolicy for TimeBars {
    fn name(&self) -> &str {
        "time"
    }

    fn on_trade(&mut self, trade: &Trade) -> Vec<Bar> {
        let mut bars = Vec::new();

        if self
            .first_start
            .is_some_and(|first| self.bucket_start(trade.time) < first)
        {
            log::debug!("[time] dropping trade at {} before the first bar", trade.time);
            return bars;
        }

        if let Some((open, mut builder)) = self.current.take() {
            // Out-of-order trades that have not crossed the open bar's end
            // are folded into it
            if trade.time < open.end {
                builder.apply_trade(trade);
                self.current = Some((open, builder));
                return bars;
            }

            let close = builder.close();
            bars.extend(builder.finish());

            // Fill the buckets nobody traded in
            if let Some(close) = close {
                let target = self.bucket_start(trade.time);
                let mut next = open.end;
                let gaps = (target - next)
                    .num_microseconds()
                    .map_or(i64::MAX, |us| us / self.interval_us);
                if gaps > GAP_WARN_BARS {
                    log::warn!(
                        "[time] filling about {} empty bars between {} and {}",
                        gaps,
                        next,
                        target
                    );
                }
                while next < target {
                    bars.push(Bar::empty(next, close));
                    next = self.bucket_end(next);
                }
            }

            log::trace!(
                "[time] closed bar {} with {} gap bars",
                open.start,
                bars.len().saturating_sub(1)
            );
        }

        let bucket = self.bucket(trade.time);
        self.first_start.get_or_insert(bucket.start);
        let mut builder = BarBuilder::open_at(bucket.start);
        builder.apply_trade(trade);
        self.current = Some((bucket, builder));

        bars
    }

    fn on_close(&mut self) -> Option<Bar> {
        let (_, builder) = self.current.take()?;
        builder.finish()
    }
}

fn midnight(t: Timestamp) -> Timestamp {
    t.date_naive().and_time(NaiveTime::MIN).and_utc()
}

fn next_midnight(t: Timestamp) -> Timestamp {
    midnight(t)
        .checked_add_signed(TimeDelta::days(1))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
