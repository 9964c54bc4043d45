//! Money type for representing prices in F CFA.
//!
//! The franc CFA has no minor unit in everyday use, so amounts are whole
//! integers and no decimal handling is needed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;

/// Currency label appended to every displayed amount.
pub const CURRENCY_LABEL: &str = "F CFA";

/// Thousands separator used by French number formatting (narrow no-break space).
pub const GROUP_SEPARATOR: char = '\u{202f}';

/// A monetary amount in whole F CFA.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a new amount.
    pub fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// The zero amount.
    pub fn zero() -> Self {
        Self(0)
    }

    /// Raw amount.
    pub fn amount(&self) -> i64 {
        self.0
    }

    /// Multiply by a quantity, clamping at the numeric bounds.
    pub fn saturating_mul(&self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(i64::from(quantity)))
    }

    /// Add another amount, clamping at the numeric bounds.
    pub fn saturating_add(&self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// Format with grouped digits and no label (e.g. "11 000").
    pub fn display_amount(&self) -> String {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::new();
        if self.0 < 0 {
            grouped.push('-');
        }
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(GROUP_SEPARATOR);
            }
            grouped.push(c);
        }
        grouped
    }

    /// Format as a display string (e.g. "11 000 F CFA").
    pub fn display(&self) -> String {
        format!("{} {}", self.display_amount(), CURRENCY_LABEL)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc.saturating_add(m))
    }
}

impl From<i64> for Money {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
