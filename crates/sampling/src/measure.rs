//! Units a trigger can count in

use bartender_core::Trade;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What a trade contributes to a trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    /// One unit per trade
    Tick,
    /// Trade size
    Volume,
    /// Price times size
    Dollar,
}

impl Measure {
    /// Contribution of a single trade
    pub fn amount(&self, trade: &Trade) -> Decimal {
        match self {
            Measure::Tick => Decimal::ONE,
            Measure::Volume => trade.size,
            Measure::Dollar => trade.notional(),
        }
    }

    /// Whether an unchanged price keeps the previous tick's sign
    ///
    /// Only trade counts follow the tick rule through flat prints; size and
    /// notional at an unchanged price are neutral.
    pub fn carries_sign(&self) -> bool {
        matches!(self, Measure::Tick)
    }
}
