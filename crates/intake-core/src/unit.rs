//! Measurement units for tracked consumption.

use std::fmt::{self, Display};

/// Unit in which a tracker counts consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Unit {
    /// Energy in kilocalories.
    Kilocalories,
    /// Mass in grams.
    Grams,
}

impl Unit {
    /// Returns the short symbol used after amounts (`kcal`, `g`).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Unit::Kilocalories => "kcal",
            Unit::Grams => "g",
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
