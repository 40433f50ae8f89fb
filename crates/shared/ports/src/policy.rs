use bartender_core::{Bar, Trade};

/// Port for bar sampling policies
///
/// A policy is a synchronous state machine that owns the bar it is
/// building. The engine drives it one trade at a time, in arrival order,
/// from a single task; implementations need no locking.
///
/// Implementations:
/// - Time bars (fixed interval, gap-filled)
/// - Tick / volume / dollar bars, each as threshold, imbalance or run variant
pub trait SamplingPolicy: Send {
    /// Policy name for logging
    fn name(&self) -> &str;

    /// Fold a trade and return every bar it finalized, oldest first
    ///
    /// Most calls return zero or one bar; time bars return several when a
    /// trade jumps over empty intervals.
    fn on_trade(&mut self, trade: &Trade) -> Vec<Bar>;

    /// Called once when the trade stream ends
    ///
    /// Returns the partially built bar, if any trades are pending.
    fn on_close(&mut self) -> Option<Bar>;
}

impl<P: SamplingPolicy + ?Sized> SamplingPolicy for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn on_trade(&mut self, trade: &Trade) -> Vec<Bar> {
        (**self).on_trade(trade)
    }

    fn on_close(&mut self) -> Option<Bar> {
        (**self).on_close()
    }
}
