//! The cart store: single owner of cart state.
//!
//! Every mutation goes through [`CartStore`], which writes a snapshot to the
//! cache and notifies render listeners before returning.

use tracing::{debug, warn};

use topchef_cache::{Cache, CacheError};

use crate::cart::{Cart, CartCommand, CartView, LineItem};
use crate::error::CommerceError;
use crate::ids::LineItemId;
use crate::money::Money;

/// Cache key holding the cart snapshot.
pub const SNAPSHOT_KEY: &str = "topchef_cart";

type Listener = Box<dyn FnMut(&CartView)>;

/// Owns the cart, its snapshot slot and its render listeners.
///
/// Created once at startup:
///
/// ```rust
/// use topchef_cache::Cache;
/// use topchef_commerce::cart::CartStore;
///
/// let mut store = CartStore::new(Cache::in_memory());
/// store.on_change(|view| println!("{} item(s)", view.count));
/// store.load();
/// store.render();
/// ```
pub struct CartStore {
    cart: Cart,
    cache: Cache,
    key: String,
    listeners: Vec<Listener>,
}

impl CartStore {
    /// Create an empty store persisting under [`SNAPSHOT_KEY`].
    pub fn new(cache: Cache) -> Self {
        Self {
            cart: Cart::new(),
            cache,
            key: SNAPSHOT_KEY.to_string(),
            listeners: Vec::new(),
        }
    }

    /// Persist under a different key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Register a render listener, called after every mutation and on
    /// [`render`](Self::render).
    pub fn on_change(&mut self, listener: impl FnMut(&CartView) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Replace the in-memory cart with the stored snapshot.
    ///
    /// An absent or malformed snapshot leaves the cart untouched. Returns
    /// whether a snapshot was restored.
    pub fn load(&mut self) -> bool {
        match self.read_snapshot() {
            Ok(Some(cart)) => {
                debug!(items = cart.unique_item_count(), "restored cart snapshot");
                self.cart = cart;
                true
            }
            Ok(None) => false,
            Err(e) => {
                warn!(key = %self.key, error = %e, "ignoring unreadable cart snapshot");
                false
            }
        }
    }

    /// Write the current cart to the snapshot slot.
    pub fn save(&mut self) -> Result<(), CommerceError> {
        self.cache.set(&self.key, &self.cart)?;
        Ok(())
    }

    /// Notify listeners with the current view.
    pub fn render(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let view = self.view();
        for listener in &mut self.listeners {
            listener(&view);
        }
    }

    /// Current view model.
    pub fn view(&self) -> CartView {
        CartView::build(&self.cart)
    }

    /// Add one unit of a product. See [`Cart::add_item`].
    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        price: Money,
        image: impl Into<String>,
    ) -> LineItemId {
        let id = self.cart.add_item(name, price, image);
        debug!(%id, "added item to cart");
        self.commit();
        id
    }

    /// Remove an item; unknown ids are ignored.
    pub fn remove_item(&mut self, id: LineItemId) {
        if self.cart.remove_item(id) {
            debug!(%id, "removed item from cart");
        }
        self.commit();
    }

    /// Set an item's absolute quantity; zero or less removes it.
    pub fn set_quantity(&mut self, id: LineItemId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(id);
            return;
        }
        if self.cart.set_quantity(id, quantity) {
            debug!(%id, quantity, "updated item quantity");
            self.commit();
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.cart.clear();
        debug!("cleared cart");
        self.commit();
    }

    /// Apply a command from a UI control.
    pub fn dispatch(&mut self, command: CartCommand) {
        match command {
            CartCommand::Add { name, price, image } => {
                self.add_item(name, price, image);
            }
            CartCommand::Adjust { item_id, delta } => {
                if let Some(item) = self.cart.get_item(item_id) {
                    let quantity = i64::from(item.quantity).saturating_add(delta);
                    self.set_quantity(item_id, quantity);
                }
            }
            CartCommand::SetQuantity { item_id, quantity } => {
                self.set_quantity(item_id, quantity);
            }
            CartCommand::Remove { item_id } => self.remove_item(item_id),
            CartCommand::Clear => self.clear(),
        }
    }

    /// Grand total.
    pub fn total(&self) -> Money {
        self.cart.total()
    }

    /// Sum of quantities.
    pub fn count(&self) -> u64 {
        self.cart.item_count()
    }

    /// Items in cart order.
    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// Get an item by ID.
    pub fn get_item(&self, id: LineItemId) -> Option<&LineItem> {
        self.cart.get_item(id)
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// The underlying cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Snapshot key in use.
    pub fn key(&self) -> &str {
        &self.key
    }

    fn commit(&mut self) {
        if let Err(e) = self.save() {
            warn!(key = %self.key, error = %e, "failed to persist cart snapshot");
        }
        self.render();
    }

    fn read_snapshot(&self) -> Result<Option<Cart>, CommerceError> {
        let items: Option<Vec<LineItem>> = match self.cache.get(&self.key) {
            Ok(items) => items,
            Err(CacheError::SerializeError(e)) => {
                return Err(CommerceError::MalformedSnapshot(e.to_string()))
            }
            Err(e) => return Err(e.into()),
        };
        items.map(Cart::from_items).transpose()
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("key", &self.key)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
