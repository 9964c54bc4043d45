//! Checkout module.
//!
//! Contains order metadata, the order form, message composition and the
//! outbound channel the finished order is handed to.

mod channel;
mod details;
mod exporter;
mod form;
mod message;

pub use channel::{OutboundChannel, RecordingChannel, WhatsAppLink, DEFAULT_BASE_URL, DEFAULT_PHONE};
pub use details::{validate_phone, OrderDetails, OrderType};
pub use exporter::{Dispatch, OrderExporter, ORDER_SENT_MESSAGE, THANK_YOU_MESSAGE};
pub use form::{DishSelection, OrderForm};
pub use message::{OrderLine, OrderMessage};
