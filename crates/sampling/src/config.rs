//! Policy configuration
//!
//! Each policy has exactly one tunable (a threshold or an interval) plus
//! the independent `close_on_day_change` flag. Configs are plain serde
//! values so they can be loaded from JSON/TOML; validation happens when a
//! policy is built, before any trade is processed.

use std::time::Duration;

use bartender_ports::{ConfigError, ConfigResult, SamplingPolicy};
use chrono::TimeDelta;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::information::InformationBars;
use crate::measure::Measure;
use crate::time::TimeBars;
use crate::trigger::TriggerKind;

/// Configuration for tick, volume and dollar bars
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// Trigger level; must be present and strictly positive
    pub threshold: Option<Decimal>,
    /// Force a bar close when the UTC calendar date changes
    #[serde(default)]
    pub close_on_day_change: bool,
}

impl ThresholdConfig {
    pub fn new(threshold: impl Into<Decimal>) -> Self {
        Self {
            threshold: Some(threshold.into()),
            close_on_day_change: false,
        }
    }

    pub fn with_close_on_day_change(mut self, enabled: bool) -> Self {
        self.close_on_day_change = enabled;
        self
    }

    /// Return the threshold if it is usable
    pub fn validate(&self) -> ConfigResult<Decimal> {
        let threshold = self.threshold.ok_or(ConfigError::Missing { field: "threshold" })?;
        if threshold <= Decimal::ZERO {
            return Err(ConfigError::NonPositive {
                field: "threshold",
                value: threshold.to_string(),
            });
        }
        Ok(threshold)
    }
}

/// Configuration for fixed-interval time bars
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBarConfig {
    /// Bar length; must be present, non-zero and a whole number of microseconds
    ///
    /// Every empty interval between two trades becomes its own gap bar, so a
    /// very short interval over a long quiet period emits that many bars at
    /// once.
    pub interval: Option<Duration>,
    /// Clip bars at UTC midnight
    #[serde(default)]
    pub close_on_day_change: bool,
}

impl TimeBarConfig {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: Some(interval),
            close_on_day_change: false,
        }
    }

    pub fn with_close_on_day_change(mut self, enabled: bool) -> Self {
        self.close_on_day_change = enabled;
        self
    }

    /// Return the interval as a chrono delta if it is usable
    pub fn validate(&self) -> ConfigResult<TimeDelta> {
        let interval = self.interval.ok_or(ConfigError::Missing { field: "interval" })?;
        if interval.is_zero() {
            return Err(ConfigError::NonPositive {
                field: "interval",
                value: format!("{:?}", interval),
            });
        }
        if interval.subsec_nanos() % 1_000 != 0 {
            return Err(ConfigError::OutOfRange {
                field: "interval",
                reason: "must be a whole number of microseconds".to_string(),
            });
        }

        let delta = TimeDelta::from_std(interval).map_err(|e| ConfigError::OutOfRange {
            field: "interval",
            reason: e.to_string(),
        })?;
        // Alignment works in epoch microseconds
        if delta.num_microseconds().is_none() {
            return Err(ConfigError::OutOfRange {
                field: "interval",
                reason: "too large to express in microseconds".to_string(),
            });
        }
        Ok(delta)
    }
}

/// Any of the nine sampling policies, selected by name
///
/// ```json
/// { "policy": "volume_imbalance", "threshold": "250" }
/// { "policy": "time", "interval": { "secs": 60, "nanos": 0 } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum SamplerConfig {
    Time(TimeBarConfig),
    Tick(ThresholdConfig),
    TickImbalance(ThresholdConfig),
    TickRun(ThresholdConfig),
    Volume(ThresholdConfig),
    VolumeImbalance(ThresholdConfig),
    VolumeRun(ThresholdConfig),
    Dollar(ThresholdConfig),
    DollarImbalance(ThresholdConfig),
    DollarRun(ThresholdConfig),
}

impl SamplerConfig {
    /// Validate the config and construct the policy
    pub fn build(&self) -> ConfigResult<Box<dyn SamplingPolicy>> {
        let (measure, trigger, config) = match self {
            SamplerConfig::Time(config) => return Ok(Box::new(TimeBars::new(config)?)),
            SamplerConfig::Tick(c) => (Measure::Tick, TriggerKind::Threshold, c),
            SamplerConfig::TickImbalance(c) => (Measure::Tick, TriggerKind::Imbalance, c),
            SamplerConfig::TickRun(c) => (Measure::Tick, TriggerKind::Run, c),
            SamplerConfig::Volume(c) => (Measure::Volume, TriggerKind::Threshold, c),
            SamplerConfig::VolumeImbalance(c) => (Measure::Volume, TriggerKind::Imbalance, c),
            SamplerConfig::VolumeRun(c) => (Measure::Volume, TriggerKind::Run, c),
            SamplerConfig::Dollar(c) => (Measure::Dollar, TriggerKind::Threshold, c),
            SamplerConfig::DollarImbalance(c) => (Measure::Dollar, TriggerKind::Imbalance, c),
            SamplerConfig::DollarRun(c) => (Measure::Dollar, TriggerKind::Run, c),
        };

        Ok(Box::new(InformationBars::new(measure, trigger, config)?))
    }
}
