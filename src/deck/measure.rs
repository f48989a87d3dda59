use std::fmt::{self, Display};

use clap::ValueEnum;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Input transition measured by a deck.
#[derive(
    Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    #[default]
    Rise,
    Fall,
}

impl Edge {
    /// The `.measure` edge keyword.
    pub fn keyword(&self) -> &'static str {
        match self {
            Edge::Rise => "RISE",
            Edge::Fall => "FALL",
        }
    }

    /// Returns the (trigger, target) fractions of the supply used for the
    /// output slew measurement.
    pub fn slew_thresholds(&self, low: Decimal, high: Decimal) -> (Decimal, Decimal) {
        match self {
            Edge::Rise => (low, high),
            Edge::Fall => (high, low),
        }
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Rise => write!(f, "rise"),
            Edge::Fall => write!(f, "fall"),
        }
    }
}
