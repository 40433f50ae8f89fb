//! Pipeline wiring - one tokio task per stage, bounded channels between them
//!
//! ```text
//! feeder ──► filter chain ──► policy ──► caller
//! ```
//!
//! The filter stage is skipped when no filters are given. Each stage owns
//! its state outright and stops as soon as its upstream closes or its
//! downstream hangs up.

use bartender_core::{Bar, Trade};
use bartender_ports::{ConfigError, ConfigResult, SamplingPolicy};
use serde::{Deserialize, Serialize};
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::error::{EngineError, EngineResult};
use crate::filter::{FilterChain, TradeFilter};

/// Channel sizing for the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Capacity of every stage-to-stage channel
    ///
    /// 1 keeps stages in near lockstep: a stage can run at most one item
    /// ahead of its consumer.
    pub handoff_capacity: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            handoff_capacity: 1,
        }
    }
}

impl PipelineConfig {
    pub fn with_handoff_capacity(capacity: usize) -> Self {
        Self {
            handoff_capacity: capacity,
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.handoff_capacity == 0 {
            return Err(ConfigError::NonPositive {
                field: "handoff_capacity",
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}

/// Drives trades through filters into a sampling policy
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Sample a finite trade sequence and collect every bar, in emission order
    pub async fn generate(
        &self,
        trades: Vec<Trade>,
        policy: Box<dyn SamplingPolicy>,
        filters: &[TradeFilter],
    ) -> EngineResult<Vec<Bar>> {
        if trades.is_empty() {
            return Err(EngineError::EmptyInput);
        }

        let (trade_tx, trade_rx) = mpsc::channel(self.config.handoff_capacity);
        tokio::spawn(run_feeder(trades, trade_tx));

        let mut bar_rx = self.generate_stream(Some(trade_rx), policy, filters)?;
        let mut bars = Vec::new();
        while let Some(bar) = bar_rx.recv().await {
            bars.push(bar);
        }
        Ok(bars)
    }

    /// Sample a live trade stream
    ///
    /// The returned receiver yields bars as they are finalized and closes
    /// once `trades` has closed and the policy's last bar has been
    /// delivered. Must be called from within a tokio runtime.
    pub fn generate_stream(
        &self,
        trades: Option<mpsc::Receiver<Trade>>,
        policy: Box<dyn SamplingPolicy>,
        filters: &[TradeFilter],
    ) -> EngineResult<mpsc::Receiver<Bar>> {
        let trades = trades.ok_or(EngineError::NilStream)?;
        if Handle::try_current().is_err() {
            return Err(EngineError::InvalidPipeline(
                "generate_stream needs a tokio runtime".to_string(),
            ));
        }

        let capacity = self.config.handoff_capacity;
        let chain = FilterChain::from(filters);
        log::info!(
            "Starting {} pipeline ({} filters, handoff capacity {})",
            policy.name(),
            chain.len(),
            capacity
        );

        let trades = if chain.is_empty() {
            trades
        } else {
            let (tx, rx) = mpsc::channel(capacity);
            tokio::spawn(run_filter(chain, trades, tx));
            rx
        };

        let (bar_tx, bar_rx) = mpsc::channel(capacity);
        tokio::spawn(run_policy(policy, trades, bar_tx));
        Ok(bar_rx)
    }
}

/// [`Pipeline::generate`] with the default configuration
pub async fn generate(
    trades: Vec<Trade>,
    policy: Box<dyn SamplingPolicy>,
    filters: &[TradeFilter],
) -> EngineResult<Vec<Bar>> {
    Pipeline::default().generate(trades, policy, filters).await
}

/// [`Pipeline::generate_stream`] with the default configuration
pub fn generate_stream(
    trades: Option<mpsc::Receiver<Trade>>,
    policy: Box<dyn SamplingPolicy>,
    filters: &[TradeFilter],
) -> EngineResult<mpsc::Receiver<Bar>> {
    Pipeline::default().generate_stream(trades, policy, filters)
}

async fn run_feeder(trades: Vec<Trade>, tx: mpsc::Sender<Trade>) {
    let total = trades.len();
    log::debug!("Feeder started ({} trades)", total);

    for (sent, trade) in trades.into_iter().enumerate() {
        if tx.send(trade).await.is_err() {
            log::debug!("Feeder stopped after {} of {} trades: consumer gone", sent, total);
            return;
        }
    }
    log::debug!("Feeder stopped");
}

async fn run_filter(chain: FilterChain, mut rx: mpsc::Receiver<Trade>, tx: mpsc::Sender<Trade>) {
    log::debug!("Filter stage started: {:?}", chain);
    let mut seen = 0u64;
    let mut passed = 0u64;

    while let Some(trade) = rx.recv().await {
        seen += 1;
        if !chain.matches(&trade) {
            continue;
        }
        passed += 1;
        if tx.send(trade).await.is_err() {
            log::debug!("Filter stage: policy stage gone");
            break;
        }
    }
    log::debug!("Filter stage stopped ({} of {} trades passed)", passed, seen);
}

async fn run_policy(
    mut policy: Box<dyn SamplingPolicy>,
    mut rx: mpsc::Receiver<Trade>,
    tx: mpsc::Sender<Bar>,
) {
    let name = policy.name().to_string();
    log::debug!("[{}] Policy stage started", name);
    let mut trades = 0u64;
    let mut bars = 0u64;

    while let Some(trade) = rx.recv().await {
        trades += 1;
        for bar in policy.on_trade(&trade) {
            if tx.send(bar).await.is_err() {
                log::debug!("[{}] Bar receiver dropped after {} bars", name, bars);
                return;
            }
            bars += 1;
        }
    }

    if let Some(bar) = policy.on_close() {
        if tx.send(bar).await.is_err() {
            log::debug!("[{}] Bar receiver dropped before the final bar", name);
            return;
        }
        bars += 1;
    }
    log::debug!("[{}] Policy stage stopped ({} trades, {} bars)", name, trades, bars);
}
