//! Outbound order channel.

use serde::{Deserialize, Serialize};

use crate::checkout::OrderMessage;
use crate::error::CommerceError;

/// Default click-to-chat endpoint.
pub const DEFAULT_BASE_URL: &str = "https://wa.me";

/// Restaurant's WhatsApp number, in international format without `+`.
pub const DEFAULT_PHONE: &str = "2250595857542";

/// Receives finished order links.
///
/// Dispatch is fire-and-forget: an `Ok` only means the link was handed off,
/// not that anyone read the message.
pub trait OutboundChannel {
    fn dispatch(&mut self, url: &str) -> Result<(), CommerceError>;
}

/// Builds `wa.me` links carrying an order message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhatsAppLink {
    pub base_url: String,
    pub phone: String,
}

impl WhatsAppLink {
    pub fn new(base_url: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            phone: phone.into(),
        }
    }

    /// `{base_url}/{phone}?text={encoded message}`.
    pub fn url_for(&self, message: &OrderMessage) -> String {
        format!(
            "{}/{}?text={}",
            self.base_url.trim_end_matches('/'),
            self.phone.trim_start_matches('+'),
            urlencoding::encode(message.text())
        )
    }
}

impl Default for WhatsAppLink {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_PHONE)
    }
}

/// Channel that keeps every dispatched link in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingChannel {
    sent: Vec<String>,
}

impl RecordingChannel {
    /// Links dispatched so far, oldest first.
    pub fn sent(&self) -> &[String] {
        &self.sent
    }

    /// Most recent link.
    pub fn last(&self) -> Option<&str> {
        self.sent.last().map(String::as_str)
    }
}

impl OutboundChannel for RecordingChannel {
    fn dispatch(&mut self, url: &str) -> Result<(), CommerceError> {
        self.sent.push(url.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;
    use crate::money::Money;

    #[test]
    fn test_url_encodes_message() {
        let mut cart = Cart::new();
        cart.add_item("Soda", Money::new(1000), "");
        let message = OrderMessage::checkout(cart.items()).unwrap();

        let url = WhatsAppLink::default().url_for(&message);
        let (prefix, query) = url.split_once("?text=").unwrap();

        assert_eq!(prefix, "https://wa.me/2250595857542");
        assert!(!query.contains(' '));
        assert!(!query.contains('\n'));
        assert!(query.contains("Soda%20x1"));
        assert_eq!(urlencoding::decode(query).unwrap(), message.text());
    }

    #[test]
    fn test_url_normalizes_base_and_phone() {
        let mut cart = Cart::new();
        cart.add_item("Soda", Money::new(1000), "");
        let message = OrderMessage::checkout(cart.items()).unwrap();

        let link = WhatsAppLink::new("https://wa.me/", "+2250102030405");
        assert!(link
            .url_for(&message)
            .starts_with("https://wa.me/2250102030405?text="));
    }

    #[test]
    fn test_recording_channel() {
        let mut channel = RecordingChannel::default();
        channel.dispatch("https://wa.me/1?text=a").unwrap();
        channel.dispatch("https://wa.me/1?text=b").unwrap();

        assert_eq!(channel.sent().len(), 2);
        assert_eq!(channel.last(), Some("https://wa.me/1?text=b"));
    }
}
