//! Information-driven bars
//!
//! One state machine covers the tick, volume and dollar families. A policy
//! is the pair (measure, trigger): the measure says what each trade is
//! worth, the trigger says how those amounts accumulate between bars.
//!
//! | measure \ trigger | Threshold | Imbalance         | Run         |
//! |-------------------|-----------|-------------------|-------------|
//! | Tick              | tick      | tick_imbalance    | tick_run    |
//! | Volume            | volume    | volume_imbalance  | volume_run  |
//! | Dollar            | dollar    | dollar_imbalance  | dollar_run  |

use bartender_core::{Bar, BarBuilder, Trade};
use bartender_ports::{ConfigResult, SamplingPolicy};
use rust_decimal::Decimal;

use crate::config::ThresholdConfig;
use crate::measure::Measure;
use crate::tick_rule::{TickDirection, TickRule};
use crate::trigger::{Trigger, TriggerKind};

/// Tick, volume or dollar bars with a threshold, imbalance or run trigger
#[derive(Debug, Clone)]
pub struct InformationBars {
    name: &'static str,
    measure: Measure,
    trigger: Trigger,
    threshold: Decimal,
    close_on_day_change: bool,
    tick_rule: TickRule,
    current: Option<BarBuilder>,
}

impl InformationBars {
    /// Build a policy from its measure, trigger shape and config
    pub fn new(measure: Measure, kind: TriggerKind, config: &ThresholdConfig) -> ConfigResult<Self> {
        let threshold = config.validate()?;
        let name = policy_name(measure, kind);

        log::debug!(
            "[{}] threshold={} close_on_day_change={}",
            name,
            threshold,
            config.close_on_day_change
        );

        Ok(Self {
            name,
            measure,
            trigger: Trigger::new(kind),
            threshold,
            close_on_day_change: config.close_on_day_change,
            tick_rule: TickRule::new(),
            current: None,
        })
    }

    /// Bar every `threshold` trades
    pub fn tick(config: &ThresholdConfig) -> ConfigResult<Self> {
        Self::new(Measure::Tick, TriggerKind::Threshold, config)
    }

    /// Bar when |upticks - downticks| reaches the threshold
    pub fn tick_imbalance(config: &ThresholdConfig) -> ConfigResult<Self> {
        Self::new(Measure::Tick, TriggerKind::Imbalance, config)
    }

    /// Bar when a streak of same-direction ticks reaches the threshold
    pub fn tick_run(config: &ThresholdConfig) -> ConfigResult<Self> {
        Self::new(Measure::Tick, TriggerKind::Run, config)
    }

    /// Bar every `threshold` units of traded size
    pub fn volume(config: &ThresholdConfig) -> ConfigResult<Self> {
        Self::new(Measure::Volume, TriggerKind::Threshold, config)
    }

    pub fn volume_imbalance(config: &ThresholdConfig) -> ConfigResult<Self> {
        Self::new(Measure::Volume, TriggerKind::Imbalance, config)
    }

    pub fn volume_run(config: &ThresholdConfig) -> ConfigResult<Self> {
        Self::new(Measure::Volume, TriggerKind::Run, config)
    }

    /// Bar every `threshold` of traded notional
    pub fn dollar(config: &ThresholdConfig) -> ConfigResult<Self> {
        Self::new(Measure::Dollar, TriggerKind::Threshold, config)
    }

    pub fn dollar_imbalance(config: &ThresholdConfig) -> ConfigResult<Self> {
        Self::new(Measure::Dollar, TriggerKind::Imbalance, config)
    }

    pub fn dollar_run(config: &ThresholdConfig) -> ConfigResult<Self> {
        Self::new(Measure::Dollar, TriggerKind::Run, config)
    }

    /// Trigger state accumulated since the last bar
    pub fn trigger(&self) -> &Trigger {
        &self.trigger
    }

    /// Finalize the open bar and reset the trigger
    fn emit(&mut self) -> Option<Bar> {
        self.trigger.reset();
        let bar = self.current.take()?.finish()?;
        log::trace!(
            "[{}] bar start={} ticks={} volume={}",
            self.name,
            bar.start,
            bar.ticks,
            bar.volume
        );
        Some(bar)
    }

    fn crosses_day(&self, trade: &Trade) -> bool {
        self.close_on_day_change
            && self
                .current
                .as_ref()
                .and_then(BarBuilder::last_time)
                .is_some_and(|last| last.date_naive() != trade.time.date_naive())
    }
}

impl SamplingPolicy for InformationBars {
    fn name(&self) -> &str {
        self.name
    }

    fn on_trade(&mut self, trade: &Trade) -> Vec<Bar> {
        let mut bars = Vec::new();

        if self.crosses_day(trade) {
            bars.extend(self.emit());
        }

        let mut tick = self.tick_rule.classify(trade);
        if tick.direction == TickDirection::Unchanged && !self.measure.carries_sign() {
            tick.sign = Decimal::ZERO;
        }
        self.current
            .get_or_insert_with(BarBuilder::new)
            .apply_trade(trade);
        self.trigger.update(&tick, self.measure.amount(trade));

        if self.trigger.signal() >= self.threshold {
            bars.extend(self.emit());
        }

        bars
    }

    fn on_close(&mut self) -> Option<Bar> {
        self.emit()
    }
}

fn policy_name(measure: Measure, kind: TriggerKind) -> &'static str {
    match (measure, kind) {
        (Measure::Tick, TriggerKind::Threshold) => "tick",
        (Measure::Tick, TriggerKind::Imbalance) => "tick_imbalance",
        (Measure::Tick, TriggerKind::Run) => "tick_run",
        (Measure::Volume, TriggerKind::Threshold) => "volume",
        (Measure::Volume, TriggerKind::Imbalance) => "volume_imbalance",
        (Measure::Volume, TriggerKind::Run) => "volume_run",
        (Measure::Dollar, TriggerKind::Threshold) => "dollar",
        (Measure::Dollar, TriggerKind::Imbalance) => "dollar_imbalance",
        (Measure::Dollar, TriggerKind::Run) => "dollar_run",
    }
}
