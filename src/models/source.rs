//! Income and expense source model
//!
//! A source is a named recurring contribution applied once per period:
//! positive values are income, negative values are expenses.

use super::money::Money;

/// A named recurring income (positive) or expense (negative)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub name: String,
    pub value: Money,
}

impl Source {
    /// Create a new source
    pub fn new(name: impl Into<String>, value: Money) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Whether this source adds to the balance each period
    pub fn is_income(&self) -> bool {
        !self.value.is_negative()
    }

    /// Whether this source takes from the balance each period
    pub fn is_expense(&self) -> bool {
        self.value.is_negative()
    }
}
