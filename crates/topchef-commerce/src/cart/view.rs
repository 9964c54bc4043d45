//! Render-ready projection of the cart.

use crate::cart::{Cart, CartCommand, LineItem};
use crate::ids::LineItemId;
use crate::money::Money;
use serde::Serialize;

/// Placeholder shown instead of the item list when the cart is empty.
pub const EMPTY_CART_MESSAGE: &str = "Votre panier est vide";

/// Everything a renderer needs to draw the cart panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartView {
    /// One entry per line item, in cart order.
    pub items: Vec<LineItemView>,
    /// Grand total.
    pub total: Money,
    /// Grand total formatted for display.
    pub total_display: String,
    /// Sum of quantities.
    pub count: u64,
}

impl CartView {
    /// Project a cart.
    pub fn build(cart: &Cart) -> Self {
        let total = cart.total();
        Self {
            items: cart.items().iter().map(LineItemView::from).collect(),
            total,
            total_display: total.display(),
            count: cart.item_count(),
        }
    }

    /// Whether the placeholder should be shown.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Value for the cart badge, hidden when nothing is in the cart.
    pub fn badge(&self) -> Option<u64> {
        (self.count > 0).then_some(self.count)
    }
}

/// One row of the cart panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItemView {
    pub id: LineItemId,
    pub name: String,
    pub image: Option<String>,
    pub quantity: u32,
    /// `price * quantity`.
    pub subtotal: Money,
    pub subtotal_display: String,
    /// Decrement, increment and remove controls, in that order.
    pub controls: [CartCommand; 3],
}

impl From<&LineItem> for LineItemView {
    fn from(item: &LineItem) -> Self {
        let subtotal = item.subtotal();
        Self {
            id: item.id,
            name: item.name.clone(),
            image: item.image().map(str::to_string),
            quantity: item.quantity,
            subtotal,
            subtotal_display: subtotal.display(),
            controls: [
                CartCommand::decrement(item.id),
                CartCommand::increment(item.id),
                CartCommand::remove(item.id),
            ],
        }
    }
}
