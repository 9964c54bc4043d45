//! Line item identifiers.
//!
//! Ids are creation timestamps in Unix milliseconds, the same shape the
//! stored snapshots have always used, so older snapshots keep loading.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a line item within a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineItemId(u64);

impl LineItemId {
    /// Create an ID from its raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Generate an ID from the current time that is strictly greater than
    /// `latest`, so items added within the same millisecond stay distinct.
    ///
    /// Returns `None` when `latest` is already `u64::MAX`.
    pub fn generate_after(latest: Option<LineItemId>) -> Option<Self> {
        let now = now_millis();
        match latest {
            Some(LineItemId(last)) if last >= now => last.checked_add(1).map(Self),
            _ => Some(Self(now)),
        }
    }
}

impl fmt::Display for LineItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LineItemId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

fn now_millis() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
}
