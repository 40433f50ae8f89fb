//! Trigger shapes - what an information bar compares against its threshold

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::tick_rule::{Classified, TickDirection};

/// Trigger shape, as named in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerKind {
    /// Running total of the measure
    Threshold,
    /// Net signed total of the measure
    Imbalance,
    /// Longest uninterrupted directional streak of the measure
    Run,
}

/// Trigger state accumulated since the last emitted bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    Threshold { total: Decimal },
    Imbalance { net: Decimal },
    Run { upward: Decimal, downward: Decimal },
}

impl Trigger {
    pub fn new(kind: TriggerKind) -> Self {
        match kind {
            TriggerKind::Threshold => Trigger::Threshold {
                total: Decimal::ZERO,
            },
            TriggerKind::Imbalance => Trigger::Imbalance { net: Decimal::ZERO },
            TriggerKind::Run => Trigger::Run {
                upward: Decimal::ZERO,
                downward: Decimal::ZERO,
            },
        }
    }

    pub fn kind(&self) -> TriggerKind {
        match self {
            Trigger::Threshold { .. } => TriggerKind::Threshold,
            Trigger::Imbalance { .. } => TriggerKind::Imbalance,
            Trigger::Run { .. } => TriggerKind::Run,
        }
    }

    /// Account for one classified trade worth `amount` of the measure
    pub fn update(&mut self, tick: &Classified, amount: Decimal) {
        match self {
            Trigger::Threshold { total } => *total += amount,
            Trigger::Imbalance { net } => *net += tick.sign * amount,
            Trigger::Run { upward, downward } => match tick.direction {
                TickDirection::Up => {
                    *upward += amount;
                    *downward = Decimal::ZERO;
                }
                TickDirection::Down => {
                    *downward += amount;
                    *upward = Decimal::ZERO;
                }
                TickDirection::Initial | TickDirection::Unchanged => {}
            },
        }
    }

    /// Magnitude compared against the threshold
    pub fn signal(&self) -> Decimal {
        match self {
            Trigger::Threshold { total } => *total,
            Trigger::Imbalance { net } => net.abs(),
            Trigger::Run { upward, downward } => (*upward).max(*downward),
        }
    }

    pub fn reset(&mut self) {
        *self = Trigger::new(self.kind());
    }
}
