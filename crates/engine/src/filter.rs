//! Trade filters - predicates applied before a trade reaches the policy

use std::fmt;
use std::sync::Arc;

use bartender_core::{Quantity, Side, Timestamp, Trade};

type Predicate = Arc<dyn Fn(&Trade) -> bool + Send + Sync>;

/// A cloneable trade predicate
///
/// Filters hold no state; the same filter can be shared by any number of
/// pipelines.
#[derive(Clone)]
pub struct TradeFilter {
    label: String,
    predicate: Predicate,
}

impl TradeFilter {
    /// Wrap an arbitrary predicate
    pub fn new<F>(label: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Trade) -> bool + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// Keep trades printed on `symbol`; trades without a symbol are dropped
    pub fn by_symbol(symbol: impl Into<String>) -> Self {
        let symbol = symbol.into();
        let label = format!("symbol={}", symbol);
        Self::new(label, move |t: &Trade| t.symbol() == Some(symbol.as_str()))
    }

    /// Keep trades whose aggressor was `side`
    pub fn by_side(side: Side) -> Self {
        Self::new(format!("side={:?}", side), move |t: &Trade| t.side == side)
    }

    /// Keep trades of at least `size`
    pub fn min_size(size: Quantity) -> Self {
        Self::new(format!("size>={}", size), move |t: &Trade| t.size >= size)
    }

    /// Keep trades with `start <= time < end`
    pub fn between(start: Timestamp, end: Timestamp) -> Self {
        Self::new(format!("time in [{}, {})", start, end), move |t: &Trade| {
            t.time >= start && t.time < end
        })
    }

    pub fn matches(&self, trade: &Trade) -> bool {
        (self.predicate)(trade)
    }
}

impl fmt::Debug for TradeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TradeFilter").field(&self.label).finish()
    }
}

/// Filters composed left to right; a trade passes only if every filter
/// accepts it
#[derive(Debug, Clone, Default)]
pub struct FilterChain {
    filters: Vec<TradeFilter>,
}

impl FilterChain {
    pub fn new(filters: Vec<TradeFilter>) -> Self {
        Self { filters }
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// An empty chain accepts every trade
    pub fn matches(&self, trade: &Trade) -> bool {
        self.filters.iter().all(|f| f.matches(trade))
    }
}

impl From<&[TradeFilter]> for FilterChain {
    fn from(filters: &[TradeFilter]) -> Self {
        Self::new(filters.to_vec())
    }
}
