//! The standalone order form: customer details plus dishes picked from the
//! menu, independent of the cart.

use crate::checkout::{OrderDetails, OrderLine};
use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Separator between dish name and price in menu option values.
const DISH_VALUE_SEPARATOR: &str = " - ";

/// A dish ticked on the order form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishSelection {
    pub name: String,
    pub price: Money,
    pub quantity: u32,
}

impl DishSelection {
    /// Create a selection; a zero quantity counts as one.
    pub fn new(name: impl Into<String>, price: Money, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity: quantity.max(1),
        }
    }

    /// Parse a menu option value such as `"Poulet braisé - 4500"`.
    ///
    /// A missing or zero quantity counts as one, since the dish is selected.
    pub fn parse(value: &str, quantity: Option<u32>) -> Result<Self, CommerceError> {
        let (name, price) = value
            .rsplit_once(DISH_VALUE_SEPARATOR)
            .ok_or_else(|| CommerceError::InvalidDishValue(value.to_string()))?;

        let name = name.trim();
        let price: i64 = price
            .trim()
            .parse()
            .map_err(|_| CommerceError::InvalidDishValue(value.to_string()))?;
        if name.is_empty() || price < 0 {
            return Err(CommerceError::InvalidDishValue(value.to_string()));
        }

        Ok(Self::new(name, Money::new(price), quantity.unwrap_or(1)))
    }

    /// `price * quantity`.
    pub fn subtotal(&self) -> Money {
        self.price.saturating_mul(self.quantity)
    }
}

/// A filled-in order form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OrderForm {
    pub details: OrderDetails,
    pub dishes: Vec<DishSelection>,
}

impl OrderForm {
    pub fn new(details: OrderDetails) -> Self {
        Self {
            details,
            dishes: Vec::new(),
        }
    }

    /// Tick a dish.
    pub fn with_dish(mut self, dish: DishSelection) -> Self {
        self.dishes.push(dish);
        self
    }

    /// Running total shown under the form.
    pub fn total(&self) -> Money {
        self.dishes.iter().map(DishSelection::subtotal).sum()
    }

    /// Lines for the order message.
    pub fn lines(&self) -> Vec<OrderLine> {
        self.dishes.iter().map(OrderLine::from).collect()
    }

    /// Check the form can be sent.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.dishes.is_empty() {
            return Err(CommerceError::NoDishSelected);
        }
        self.details.validate()
    }
}
