//! Customer-supplied order metadata.

use std::fmt;
use std::str::FromStr;

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Country calling code accepted as an optional phone prefix.
const PHONE_PREFIX: &str = "+225";

/// Minimum number of characters after the optional prefix.
const PHONE_MIN_LEN: usize = 8;

/// How the customer receives the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderType {
    /// Delivered to an address.
    #[serde(rename = "livraison")]
    Delivery,
    /// Collected at the restaurant.
    #[default]
    #[serde(rename = "emporter")]
    Pickup,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Delivery => "livraison",
            OrderType::Pickup => "emporter",
        }
    }

    pub fn is_delivery(&self) -> bool {
        matches!(self, OrderType::Delivery)
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "livraison" | "delivery" => Ok(OrderType::Delivery),
            "emporter" | "à emporter" | "pickup" => Ok(OrderType::Pickup),
            other => Err(CommerceError::ValidationError(format!(
                "unknown order type '{}'",
                other
            ))),
        }
    }
}

/// Customer details attached to a full order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OrderDetails {
    pub customer_name: String,
    /// WhatsApp number the restaurant replies to.
    pub customer_phone: String,
    pub order_type: OrderType,
    /// Only meaningful for deliveries.
    pub delivery_address: Option<String>,
    pub special_request: Option<String>,
}

impl OrderDetails {
    /// Create details for a pickup order.
    pub fn new(customer_name: impl Into<String>, customer_phone: impl Into<String>) -> Self {
        Self {
            customer_name: customer_name.into(),
            customer_phone: customer_phone.into(),
            ..Self::default()
        }
    }

    /// Switch to delivery at the given address.
    pub fn with_delivery(mut self, address: impl Into<String>) -> Self {
        self.order_type = OrderType::Delivery;
        self.delivery_address = Some(address.into());
        self
    }

    /// Attach a free-form request for the kitchen.
    pub fn with_special_request(mut self, request: impl Into<String>) -> Self {
        self.special_request = Some(request.into());
        self
    }

    /// Address to print on the order, if it is a delivery with an address.
    pub fn shipping_address(&self) -> Option<&str> {
        if !self.order_type.is_delivery() {
            return None;
        }
        self.delivery_address
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
    }

    /// Special request, if a non-blank one was given.
    pub fn special_request(&self) -> Option<&str> {
        self.special_request
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
    }

    /// Check that the details are complete enough to send.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.customer_name.trim().is_empty() {
            return Err(CommerceError::ValidationError(
                "customer name is required".to_string(),
            ));
        }
        if !validate_phone(&self.customer_phone) {
            return Err(CommerceError::InvalidPhone(self.customer_phone.clone()));
        }
        if self.order_type.is_delivery() && self.shipping_address().is_none() {
            return Err(CommerceError::MissingAddress);
        }
        Ok(())
    }
}

/// Accepts an optional `+225` prefix followed by at least eight digits,
/// spaces or dashes.
pub fn validate_phone(phone: &str) -> bool {
    let rest = phone.strip_prefix(PHONE_PREFIX).unwrap_or(phone);
    rest.chars().count() >= PHONE_MIN_LEN
        && rest
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("0595857542"));
        assert!(validate_phone("+225 05 95 85 75 42"));
        assert!(validate_phone("07-08-09-10"));
        assert!(!validate_phone("+225 0595"));
        assert!(!validate_phone("+33 6 12 34 56 78"));
        assert!(!validate_phone("call me"));
        assert!(!validate_phone(""));
    }

    #[test]
    fn test_order_type_parse() {
        assert_eq!("livraison".parse::<OrderType>().unwrap(), OrderType::Delivery);
        assert_eq!("Pickup".parse::<OrderType>().unwrap(), OrderType::Pickup);
        assert!("drone".parse::<OrderType>().is_err());
    }

    #[test]
    fn test_delivery_requires_address() {
        let mut details = OrderDetails::new("Awa", "0707070707");
        details.order_type = OrderType::Delivery;
        assert!(matches!(details.validate(), Err(CommerceError::MissingAddress)));

        let details = details.with_delivery("Cocody, Riviera 2");
        assert!(details.validate().is_ok());
        assert_eq!(details.shipping_address(), Some("Cocody, Riviera 2"));
    }

    #[test]
    fn test_pickup_hides_address() {
        let mut details = OrderDetails::new("Awa", "0707070707").with_delivery("Plateau");
        details.order_type = OrderType::Pickup;
        assert_eq!(details.shipping_address(), None);
    }

    #[test]
    fn test_missing_name_and_bad_phone() {
        assert!(matches!(
            OrderDetails::new("  ", "0707070707").validate(),
            Err(CommerceError::ValidationError(_))
        ));
        assert!(matches!(
            OrderDetails::new("Awa", "123").validate(),
            Err(CommerceError::InvalidPhone(_))
        ));
    }
}
