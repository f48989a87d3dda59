use std::fmt::{self, Display};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Unit labels appended to dimensioned values in a deck.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Units {
    /// Time unit, e.g. `ps`.
    pub time: String,
    /// Length unit. Carried for completeness; decks do not use it.
    pub space: String,
    /// Capacitance unit, e.g. `fF`.
    pub capacitance: String,
}

impl Units {
    #[inline]
    pub fn time(&self, value: Decimal) -> Quantity<'_> {
        Quantity::new(value, &self.time)
    }

    #[inline]
    pub fn capacitance(&self, value: Decimal) -> Quantity<'_> {
        Quantity::new(value, &self.capacitance)
    }
}

impl Default for Units {
    fn default() -> Self {
        Self {
            time: "ps".to_string(),
            space: "nm".to_string(),
            capacitance: "fF".to_string(),
        }
    }
}

/// A decimal magnitude followed by its unit label, e.g. `50ps`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Quantity<'a> {
    value: Decimal,
    unit: &'a str,
}

impl<'a> Quantity<'a> {
    pub fn new(value: Decimal, unit: &'a str) -> Self {
        Self { value, unit }
    }
}

impl Display for Quantity<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.normalize(), self.unit)
    }
}
