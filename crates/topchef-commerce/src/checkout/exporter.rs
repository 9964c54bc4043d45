//! Order export: compose, dispatch, and clear the cart afterwards.

use tracing::info;

use crate::cart::CartStore;
use crate::checkout::{OrderForm, OrderMessage, OutboundChannel, WhatsAppLink};
use crate::error::CommerceError;

/// Confirmation shown once a cart checkout has been handed off.
pub const THANK_YOU_MESSAGE: &str = "Merci d'avoir commandé !";

/// Confirmation shown once an order form has been handed off.
pub const ORDER_SENT_MESSAGE: &str = "Votre commande a été envoyée sur WhatsApp !";

/// Receipt for a dispatched order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub url: String,
    pub message: OrderMessage,
    /// Transient notice for the page.
    pub confirmation: &'static str,
}

/// Turns carts and order forms into messages on an [`OutboundChannel`].
#[derive(Debug)]
pub struct OrderExporter<C> {
    link: WhatsAppLink,
    channel: C,
}

impl<C: OutboundChannel> OrderExporter<C> {
    pub fn new(link: WhatsAppLink, channel: C) -> Self {
        Self { link, channel }
    }

    /// Send the cart contents and empty the cart.
    ///
    /// The cart is cleared as soon as the channel accepts the link, since
    /// delivery itself cannot be observed. An empty cart fails with
    /// [`CommerceError::EmptyCart`] and nothing is sent.
    pub fn checkout(&mut self, store: &mut CartStore) -> Result<Dispatch, CommerceError> {
        let message = OrderMessage::checkout(store.items())?;
        let url = self.send(&message)?;
        info!(total = message.total().amount(), "cart checkout dispatched");

        store.clear();

        Ok(Dispatch {
            url,
            message,
            confirmation: THANK_YOU_MESSAGE,
        })
    }

    /// Send a filled-in order form. The cart is left alone.
    pub fn submit_order(&mut self, form: &OrderForm) -> Result<Dispatch, CommerceError> {
        form.validate()?;
        let message = OrderMessage::full_order(&form.details, form.lines())?;
        let url = self.send(&message)?;
        info!(
            total = message.total().amount(),
            order_type = %form.details.order_type,
            "order form dispatched"
        );

        Ok(Dispatch {
            url,
            message,
            confirmation: ORDER_SENT_MESSAGE,
        })
    }

    /// Link builder in use.
    pub fn link(&self) -> &WhatsAppLink {
        &self.link
    }

    /// The underlying channel.
    pub fn channel(&self) -> &C {
        &self.channel
    }

    pub fn into_channel(self) -> C {
        self.channel
    }

    fn send(&mut self, message: &OrderMessage) -> Result<String, CommerceError> {
        let url = self.link.url_for(message);
        self.channel.dispatch(&url)?;
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::{DishSelection, OrderDetails, RecordingChannel};
    use crate::money::Money;
    use topchef_cache::Cache;

    struct FailingChannel;

    impl OutboundChannel for FailingChannel {
        fn dispatch(&mut self, _url: &str) -> Result<(), CommerceError> {
            Err(CommerceError::ChannelError("link blocked".to_string()))
        }
    }

    fn exporter() -> OrderExporter<RecordingChannel> {
        OrderExporter::new(WhatsAppLink::default(), RecordingChannel::default())
    }

    #[test]
    fn test_checkout_empty_cart_sends_nothing() {
        let mut store = CartStore::new(Cache::in_memory());
        let mut exporter = exporter();

        assert!(matches!(
            exporter.checkout(&mut store),
            Err(CommerceError::EmptyCart)
        ));
        assert!(exporter.channel().sent().is_empty());
    }

    #[test]
    fn test_checkout_dispatches_and_clears() {
        let mut store = CartStore::new(Cache::in_memory());
        store.add_item("Pizza", Money::new(5000), "");
        store.add_item("Pizza", Money::new(5000), "");
        store.add_item("Soda", Money::new(1000), "");
        let mut exporter = exporter();

        let dispatch = exporter.checkout(&mut store).unwrap();

        assert!(dispatch.message.text().contains("• Pizza x2 - 10\u{202f}000 F CFA\n"));
        assert!(dispatch.message.text().contains("• Soda x1 - 1\u{202f}000 F CFA\n"));
        assert!(dispatch.message.text().contains("*Total : 11\u{202f}000 F CFA*"));
        assert_eq!(dispatch.confirmation, THANK_YOU_MESSAGE);
        assert_eq!(exporter.channel().last(), Some(dispatch.url.as_str()));
        assert!(store.is_empty());
    }

    #[test]
    fn test_checkout_channel_failure_keeps_cart() {
        let mut store = CartStore::new(Cache::in_memory());
        store.add_item("Pizza", Money::new(5000), "");
        let mut exporter = OrderExporter::new(WhatsAppLink::default(), FailingChannel);

        assert!(matches!(
            exporter.checkout(&mut store),
            Err(CommerceError::ChannelError(_))
        ));
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_submit_order_leaves_cart() {
        let mut store = CartStore::new(Cache::in_memory());
        store.add_item("Pizza", Money::new(5000), "");
        let mut exporter = exporter();

        let form = OrderForm::new(OrderDetails::new("Awa", "0707070707"))
            .with_dish(DishSelection::new("Garba", Money::new(1000), 2));
        let dispatch = exporter.submit_order(&form).unwrap();

        assert_eq!(dispatch.confirmation, ORDER_SENT_MESSAGE);
        assert_eq!(dispatch.message.total(), Money::new(2000));
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_submit_invalid_form_sends_nothing() {
        let mut exporter = exporter();
        let form = OrderForm::new(OrderDetails::new("Awa", "0707070707"));

        assert!(matches!(
            exporter.submit_order(&form),
            Err(CommerceError::NoDishSelected)
        ));
        assert!(exporter.into_channel().sent().is_empty());
    }
}
