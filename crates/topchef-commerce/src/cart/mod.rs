//! Shopping cart module.
//!
//! Contains the cart model, the owning store, the render view model and the
//! structured commands the UI dispatches.

mod cart;
mod command;
mod store;
mod view;

pub use cart::{Cart, LineItem, MAX_QUANTITY_PER_ITEM};
pub use command::CartCommand;
pub use store::{CartStore, SNAPSHOT_KEY};
pub use view::{CartView, LineItemView, EMPTY_CART_MESSAGE};
