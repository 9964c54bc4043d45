//! Order message composition.
//!
//! Both message variants share the same item line:
//! `• {name} x{quantity} - {subtotal}`.

use std::fmt::{self, Write as _};

use crate::cart::LineItem;
use crate::checkout::{DishSelection, OrderDetails};
use crate::error::CommerceError;
use crate::money::Money;

const RESTAURANT_NAME: &str = "Restaurant Top Chef";

/// One ordered product, as it appears in a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub name: String,
    pub quantity: u32,
    pub subtotal: Money,
}

impl From<&LineItem> for OrderLine {
    fn from(item: &LineItem) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity,
            subtotal: item.subtotal(),
        }
    }
}

impl From<&DishSelection> for OrderLine {
    fn from(dish: &DishSelection) -> Self {
        Self {
            name: dish.name.clone(),
            quantity: dish.quantity,
            subtotal: dish.subtotal(),
        }
    }
}

impl fmt::Display for OrderLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "• {} x{} - {}", self.name, self.quantity, self.subtotal)
    }
}

/// A formatted order, ready for an outbound channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderMessage {
    text: String,
    total: Money,
}

impl OrderMessage {
    /// Minimal message sent from the cart panel, with follow-up questions
    /// instead of customer details.
    pub fn checkout(items: &[LineItem]) -> Result<Self, CommerceError> {
        let lines = non_empty_lines(items.iter().map(OrderLine::from))?;
        let total = lines.iter().map(|l| l.subtotal).sum::<Money>();

        let mut text = format!("🍽️ *Commande {}*\n\n", RESTAURANT_NAME);
        push_items(&mut text, &lines);
        writeln!(text, "\n*Total : {}*", total).ok();
        text.push('\n');
        text.push_str("📍 Livraison ou à emporter ?\n");
        text.push_str("💳 Mode de paiement souhaité ?\n");
        text.push_str("⏰ Heure souhaitée ?\n\n");
        text.push_str("Merci ! 😊");

        Ok(Self { text, total })
    }

    /// Full message sent from the order form, with customer details.
    pub fn full_order(
        details: &OrderDetails,
        lines: impl IntoIterator<Item = OrderLine>,
    ) -> Result<Self, CommerceError> {
        let lines = non_empty_lines(lines)?;
        let total = lines.iter().map(|l| l.subtotal).sum::<Money>();

        let mut text = format!("🍽️ *Nouvelle Commande - {}*\n\n", RESTAURANT_NAME);
        writeln!(text, "*Client :* {}", details.customer_name).ok();
        writeln!(text, "*WhatsApp :* {}", details.customer_phone).ok();
        writeln!(text, "*Type :* {}", details.order_type).ok();
        if let Some(address) = details.shipping_address() {
            writeln!(text, "*Adresse :* {}", address).ok();
        }
        text.push('\n');
        push_items(&mut text, &lines);
        writeln!(text, "\n*Total : {}*", total).ok();
        if let Some(request) = details.special_request() {
            writeln!(text, "\n*Demande spéciale :*\n{}", request).ok();
        }
        text.push_str("\nMerci pour votre commande ! 😊");

        Ok(Self { text, total })
    }

    /// Message body.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Grand total printed in the message.
    pub fn total(&self) -> Money {
        self.total
    }
}

impl fmt::Display for OrderMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn non_empty_lines(lines: impl IntoIterator<Item = OrderLine>) -> Result<Vec<OrderLine>, CommerceError> {
    let lines: Vec<OrderLine> = lines.into_iter().collect();
    if lines.is_empty() {
        return Err(CommerceError::EmptyCart);
    }
    Ok(lines)
}

fn push_items(text: &mut String, lines: &[OrderLine]) {
    text.push_str("*Articles commandés :*\n");
    for line in lines {
        writeln!(text, "{}", line).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_item("Pizza", Money::new(5000), "");
        cart.add_item("Pizza", Money::new(5000), "");
        cart.add_item("Soda", Money::new(1000), "");
        cart
    }

    #[test]
    fn test_line_format() {
        let line = OrderLine {
            name: "Pizza".to_string(),
            quantity: 2,
            subtotal: Money::new(10000),
        };
        assert_eq!(line.to_string(), "• Pizza x2 - 10\u{202f}000 F CFA");
    }

    #[test]
    fn test_checkout_message() {
        let message = OrderMessage::checkout(sample_cart().items()).unwrap();

        let expected = "🍽️ *Commande Restaurant Top Chef*\n\n\
            *Articles commandés :*\n\
            • Pizza x2 - 10\u{202f}000 F CFA\n\
            • Soda x1 - 1\u{202f}000 F CFA\n\
            \n*Total : 11\u{202f}000 F CFA*\n\n\
            📍 Livraison ou à emporter ?\n\
            💳 Mode de paiement souhaité ?\n\
            ⏰ Heure souhaitée ?\n\n\
            Merci ! 😊";
        assert_eq!(message.text(), expected);
        assert_eq!(message.total(), Money::new(11000));
    }

    #[test]
    fn test_checkout_empty_cart() {
        assert!(matches!(
            OrderMessage::checkout(&[]),
            Err(CommerceError::EmptyCart)
        ));
    }

    #[test]
    fn test_full_order_delivery_with_request() {
        let details = OrderDetails::new("Awa Koné", "+225 07 07 07 07 07")
            .with_delivery("Cocody, Riviera 2")
            .with_special_request("Sans piment");
        let lines = sample_cart().items().iter().map(OrderLine::from).collect::<Vec<_>>();

        let message = OrderMessage::full_order(&details, lines).unwrap();
        let expected = "🍽️ *Nouvelle Commande - Restaurant Top Chef*\n\n\
            *Client :* Awa Koné\n\
            *WhatsApp :* +225 07 07 07 07 07\n\
            *Type :* livraison\n\
            *Adresse :* Cocody, Riviera 2\n\
            \n*Articles commandés :*\n\
            • Pizza x2 - 10\u{202f}000 F CFA\n\
            • Soda x1 - 1\u{202f}000 F CFA\n\
            \n*Total : 11\u{202f}000 F CFA*\n\
            \n*Demande spéciale :*\nSans piment\n\
            \nMerci pour votre commande ! 😊";
        assert_eq!(message.text(), expected);
    }

    #[test]
    fn test_full_order_pickup_omits_optional_blocks() {
        let details = OrderDetails::new("Awa", "0707070707");
        let dish = DishSelection::new("Garba", Money::new(1000), 3);

        let message = OrderMessage::full_order(&details, [OrderLine::from(&dish)]).unwrap();
        assert!(message.text().contains("*Type :* emporter\n"));
        assert!(!message.text().contains("*Adresse :*"));
        assert!(!message.text().contains("Demande spéciale"));
        assert!(message.text().contains("• Garba x3 - 3\u{202f}000 F CFA\n"));
    }
}
