//! Cart and order domain for the Top Chef restaurant.
//!
//! - **Cart**: the [`CartStore`] owning the ordered line items, its snapshot
//!   persistence, render notifications and structured [`CartCommand`]s
//! - **View**: [`CartView`], a render-ready projection of the cart
//! - **Checkout**: order messages, the order form and the outbound
//!   WhatsApp link channel
//!
//! # Example
//!
//! ```rust
//! use topchef_cache::Cache;
//! use topchef_commerce::prelude::*;
//!
//! let mut store = CartStore::new(Cache::in_memory());
//! store.load();
//!
//! store.add_item("Pizza", Money::new(5000), "");
//! store.add_item("Pizza", Money::new(5000), "");
//! store.add_item("Soda", Money::new(1000), "");
//!
//! assert_eq!(store.count(), 3);
//! assert_eq!(store.total(), Money::new(11000));
//!
//! let mut exporter = OrderExporter::new(WhatsAppLink::default(), RecordingChannel::default());
//! let dispatch = exporter.checkout(&mut store).unwrap();
//! assert!(dispatch.url.starts_with("https://wa.me/2250595857542?text="));
//! assert!(store.is_empty());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod checkout;

pub use error::CommerceError;
pub use ids::LineItemId;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::LineItemId;
    pub use crate::money::Money;

    // Cart
    pub use crate::cart::{
        Cart, CartCommand, CartStore, CartView, LineItem, LineItemView, EMPTY_CART_MESSAGE,
        MAX_QUANTITY_PER_ITEM, SNAPSHOT_KEY,
    };

    // Checkout
    pub use crate::checkout::{
        Dispatch, DishSelection, OrderDetails, OrderExporter, OrderForm, OrderLine,
        OrderMessage, OrderType, OutboundChannel, RecordingChannel, WhatsAppLink,
    };
}
