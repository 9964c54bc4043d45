//! Cart and line item types.

use std::collections::HashSet;

use crate::error::CommerceError;
use crate::ids::LineItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: u32 = 9999;

/// An ordered collection of line items.
///
/// Serializes as a bare JSON array of items, which is the snapshot format.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from stored items.
    ///
    /// Quantities above [`MAX_QUANTITY_PER_ITEM`] are clamped; zero
    /// quantities and duplicate ids are rejected.
    pub fn from_items(mut items: Vec<LineItem>) -> Result<Self, CommerceError> {
        for item in &mut items {
            item.quantity = item.quantity.min(MAX_QUANTITY_PER_ITEM);
        }
        let cart = Self { items };
        cart.validate()?;
        Ok(cart)
    }

    /// Add one unit of a product.
    ///
    /// An existing item with the same name gets its quantity bumped;
    /// otherwise a new item with quantity 1 is appended. Returns the id of
    /// the affected item.
    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        price: Money,
        image: impl Into<String>,
    ) -> LineItemId {
        let name = name.into();

        if let Some(existing) = self.items.iter_mut().find(|i| i.name == name) {
            existing.quantity = existing
                .quantity
                .saturating_add(1)
                .min(MAX_QUANTITY_PER_ITEM);
            return existing.id;
        }

        let item = LineItem {
            id: self.next_id(),
            name,
            price,
            image: image.into(),
            quantity: 1,
        };
        let id = item.id;
        self.items.push(item);
        id
    }

    /// Set the absolute quantity of an item.
    ///
    /// A quantity of zero or less removes the item. Returns `false` if the
    /// id is unknown.
    pub fn set_quantity(&mut self, id: LineItemId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(id);
        }

        let quantity = u32::try_from(quantity)
            .unwrap_or(MAX_QUANTITY_PER_ITEM)
            .min(MAX_QUANTITY_PER_ITEM);

        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove an item. Returns `false` if the id is unknown.
    pub fn remove_item(&mut self, id: LineItemId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() < len_before
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get an item by ID.
    pub fn get_item(&self, id: LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Get number of distinct items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of `price * quantity` over all items.
    pub fn total(&self) -> Money {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    /// Check the invariants a stored cart must satisfy: positive bounded
    /// quantities and unique ids.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let mut seen = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            if item.quantity == 0 || item.quantity > MAX_QUANTITY_PER_ITEM {
                return Err(CommerceError::MalformedSnapshot(format!(
                    "item {} has quantity {}",
                    item.id, item.quantity
                )));
            }
            if !seen.insert(item.id) {
                return Err(CommerceError::MalformedSnapshot(format!(
                    "duplicate item id {}",
                    item.id
                )));
            }
        }
        Ok(())
    }

    /// Next free id: after the newest one, or the lowest unused id once the
    /// id space above the newest is exhausted.
    fn next_id(&self) -> LineItemId {
        let latest = self.items.iter().map(|i| i.id).max();
        if let Some(id) = LineItemId::generate_after(latest) {
            return id;
        }

        let mut candidate = 0;
        while self.get_item(LineItemId::new(candidate)).is_some() {
            candidate += 1;
        }
        LineItemId::new(candidate)
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Unique line item identifier.
    pub id: LineItemId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Image URL; empty when the product has none.
    #[serde(default)]
    pub image: String,
    /// Quantity, always at least 1.
    pub quantity: u32,
}

impl LineItem {
    /// `price * quantity`.
    pub fn subtotal(&self) -> Money {
        self.price.saturating_mul(self.quantity)
    }

    /// Image URL, if any.
    pub fn image(&self) -> Option<&str> {
        if self.image.is_empty() {
            None
        } else {
            Some(&self.image)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_names_each_quantity_one() {
        let mut cart = Cart::new();
        for name in ["Attiéké", "Alloco", "Garba", "Placali"] {
            cart.add_item(name, Money::new(1500), "");
        }

        assert_eq!(cart.item_count(), 4);
        assert_eq!(cart.unique_item_count(), 4);
        assert!(cart.items().iter().all(|i| i.quantity == 1));
    }

    #[test]
    fn test_add_same_name_increases_quantity() {
        let mut cart = Cart::new();
        let first = cart.add_item("Pizza", Money::new(5000), "");
        let second = cart.add_item("Pizza", Money::new(5000), "");

        assert_eq!(first, second);
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn test_ids_unique_within_same_millisecond() {
        let mut cart = Cart::new();
        let a = cart.add_item("A", Money::new(100), "");
        let b = cart.add_item("B", Money::new(100), "");
        let c = cart.add_item("C", Money::new(100), "");

        assert!(a < b && b < c);
    }

    #[test]
    fn test_add_after_max_id_keeps_ids_unique() {
        let mut cart = Cart::from_items(vec![LineItem {
            id: LineItemId::new(u64::MAX),
            name: "Pizza".to_string(),
            price: Money::new(5000),
            image: String::new(),
            quantity: 1,
        }])
        .unwrap();

        let soda = cart.add_item("Soda", Money::new(1000), "");
        let water = cart.add_item("Eau", Money::new(500), "");

        assert_ne!(soda, LineItemId::new(u64::MAX));
        assert_ne!(soda, water);
        assert!(cart.validate().is_ok());

        assert!(cart.remove_item(soda));
        assert_eq!(cart.unique_item_count(), 2);
        assert!(cart.get_item(LineItemId::new(u64::MAX)).is_some());
    }

    #[test]
    fn test_set_quantity_absolute() {
        let mut cart = Cart::new();
        let id = cart.add_item("Pizza", Money::new(5000), "");

        assert!(cart.set_quantity(id, 5));
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.total(), Money::new(25000));
    }

    #[test]
    fn test_set_quantity_zero_or_negative_removes() {
        let mut cart = Cart::new();
        let a = cart.add_item("Pizza", Money::new(5000), "");
        let b = cart.add_item("Soda", Money::new(1000), "");

        assert!(cart.set_quantity(a, 0));
        assert!(cart.get_item(a).is_none());
        assert!(cart.set_quantity(b, -3));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item("Pizza", Money::new(5000), "");
        let before = cart.clone();

        assert!(!cart.set_quantity(LineItemId::new(1), 3));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_set_quantity_clamps_to_limit() {
        let mut cart = Cart::new();
        let id = cart.add_item("Pizza", Money::new(5000), "");

        cart.set_quantity(id, i64::MAX);
        assert_eq!(cart.items()[0].quantity, MAX_QUANTITY_PER_ITEM);
    }

    #[test]
    fn test_remove_last_item_zeroes_total() {
        let mut cart = Cart::new();
        let id = cart.add_item("Pizza", Money::new(5000), "");

        assert!(cart.remove_item(id));
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
        assert!(!cart.remove_item(id));
    }

    #[test]
    fn test_total_matches_sum_of_subtotals() {
        let mut cart = Cart::new();
        cart.add_item("Pizza", Money::new(5000), "");
        cart.add_item("Pizza", Money::new(5000), "");
        cart.add_item("Soda", Money::new(1000), "");

        let expected: i64 = cart
            .items()
            .iter()
            .map(|i| i.price.amount() * i64::from(i.quantity))
            .sum();
        assert_eq!(cart.total().amount(), expected);
        assert_eq!(cart.total(), Money::new(11000));
    }

    #[test]
    fn test_snapshot_shape() {
        let cart = Cart::from_items(vec![LineItem {
            id: LineItemId::new(1718000000000),
            name: "Pizza".to_string(),
            price: Money::new(5000),
            image: "images/pizza.jpg".to_string(),
            quantity: 2,
        }])
        .unwrap();

        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "id": 1718000000000u64,
                "name": "Pizza",
                "price": 5000,
                "image": "images/pizza.jpg",
                "quantity": 2
            }])
        );
    }

    #[test]
    fn test_validate_rejects_zero_quantity_and_duplicate_ids() {
        let item = LineItem {
            id: LineItemId::new(1),
            name: "Pizza".to_string(),
            price: Money::new(5000),
            image: String::new(),
            quantity: 0,
        };
        assert!(Cart::from_items(vec![item.clone()]).is_err());

        let valid = LineItem { quantity: 1, ..item };
        let duplicate = LineItem {
            name: "Soda".to_string(),
            ..valid.clone()
        };
        assert!(Cart::from_items(vec![valid, duplicate]).is_err());
    }

    #[test]
    fn test_from_items_clamps_oversized_quantity() {
        let cart = Cart::from_items(vec![LineItem {
            id: LineItemId::new(1),
            name: "Garba".to_string(),
            price: Money::new(1000),
            image: String::new(),
            quantity: 25_000,
        }])
        .unwrap();

        assert_eq!(cart.items()[0].quantity, MAX_QUANTITY_PER_ITEM);
    }

    #[test]
    fn test_image_accessor() {
        let mut cart = Cart::new();
        cart.add_item("Pizza", Money::new(5000), "");
        cart.add_item("Soda", Money::new(1000), "soda.png");

        assert_eq!(cart.items()[0].image(), None);
        assert_eq!(cart.items()[1].image(), Some("soda.png"));
    }
}
