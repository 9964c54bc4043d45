//! Structured cart commands emitted by UI controls.

use crate::ids::LineItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A mutation request for the [`CartStore`](crate::cart::CartStore).
///
/// Serialized as `{"action": "...", ...}` so controls can carry them as data
/// attributes instead of generated callback code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CartCommand {
    /// Add one unit of a product.
    Add {
        name: String,
        price: Money,
        #[serde(default)]
        image: String,
    },
    /// Change an item's quantity by `delta`.
    Adjust { item_id: LineItemId, delta: i64 },
    /// Set an item's quantity.
    SetQuantity { item_id: LineItemId, quantity: i64 },
    /// Remove an item.
    Remove { item_id: LineItemId },
    /// Empty the cart.
    Clear,
}

impl CartCommand {
    /// Decrement control for an item.
    pub fn decrement(item_id: LineItemId) -> Self {
        CartCommand::Adjust { item_id, delta: -1 }
    }

    /// Increment control for an item.
    pub fn increment(item_id: LineItemId) -> Self {
        CartCommand::Adjust { item_id, delta: 1 }
    }

    /// Remove control for an item.
    pub fn remove(item_id: LineItemId) -> Self {
        CartCommand::Remove { item_id }
    }

    /// Item targeted by this command, if any.
    pub fn item_id(&self) -> Option<LineItemId> {
        match self {
            CartCommand::Adjust { item_id, .. }
            | CartCommand::SetQuantity { item_id, .. }
            | CartCommand::Remove { item_id } => Some(*item_id),
            CartCommand::Add { .. } | CartCommand::Clear => None,
        }
    }
}
