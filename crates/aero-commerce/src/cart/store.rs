//! Cart state mirrored into a durable key-value store.

use aero_cache::{Cache, KeyValueStore};

use crate::cart::{Cart, CartLineItem, CartPricing, CartProduct, DeliveryMode};
use crate::ids::ProductId;
use crate::money::Money;

/// Key of the cart record. One cart per store.
pub const CART_STORAGE_KEY: &str = "aeropizza_cart";

/// A [`Cart`] that writes itself to a [`KeyValueStore`] after every mutation.
///
/// Storage is best effort: read failures start an empty cart, write failures
/// are logged, and no operation returns an error. An empty cart is stored as
/// the absence of [`CART_STORAGE_KEY`].
///
/// A store built with [`CartStore::server`] has no backend and never reads
/// storage, so server-rendered output always starts from an empty cart.
/// [`CartStore::attach`] binds the backend once running on the client.
///
/// # Example
///
/// ```rust
/// use aero_cache::{KeyValueStore, MemoryStore};
/// use aero_commerce::prelude::*;
///
/// let storage = MemoryStore::new();
/// let mut store = CartStore::client(storage.clone());
/// # let product = CartProduct {
/// #     id: ProductId::new("p1"), name: "Calabresa".into(), description: String::new(),
/// #     price: Money::from_decimal(40.0, Currency::BRL), image: None,
/// #     category: CategoryRef::new("Pizzas"), preparation_time: 20,
/// # };
/// store.add_to_cart(product);
/// assert!(storage.exists(CART_STORAGE_KEY).unwrap());
///
/// store.clear_cart();
/// assert!(!storage.exists(CART_STORAGE_KEY).unwrap());
/// ```
#[derive(Debug)]
pub struct CartStore<S> {
    cart: Cart,
    cache: Option<Cache<S>>,
}

impl<S: KeyValueStore> CartStore<S> {
    /// An empty cart with no storage backend.
    pub fn server() -> Self {
        Self {
            cart: Cart::new(),
            cache: None,
        }
    }

    /// A cart loaded from `store`.
    pub fn client(store: S) -> Self {
        let mut cart_store = Self::server();
        cart_store.attach(store);
        cart_store
    }

    /// Bind a storage backend and load the cart from it.
    ///
    /// The loaded state replaces the in-memory cart and is written straight
    /// back, so an unreadable record is removed.
    pub fn attach(&mut self, store: S) {
        self.cache = Some(Cache::new(store));
        self.cart = self.load();
        self.persist();
    }

    /// Whether a storage backend is bound.
    pub fn is_attached(&self) -> bool {
        self.cache.is_some()
    }

    /// The storage backend, if bound.
    pub fn store(&self) -> Option<&S> {
        self.cache.as_ref().map(Cache::store)
    }

    /// Re-read the cart from storage, discarding in-memory state.
    ///
    /// Without a backend this keeps the current cart.
    pub fn reload(&mut self) -> &[CartLineItem] {
        if self.cache.is_some() {
            self.cart = self.load();
            self.persist();
        }
        self.cart.items()
    }

    /// Add one unit of `product`.
    pub fn add_to_cart(&mut self, product: impl Into<CartProduct>) {
        self.cart.add(product);
        self.persist();
    }

    /// Change a line's quantity by `delta`; lines reaching 0 are removed.
    pub fn update_quantity(&mut self, id: &ProductId, delta: i64) {
        self.cart.update_quantity(id, delta);
        self.persist();
    }

    /// Replace a line's notes.
    pub fn update_notes(&mut self, id: &ProductId, notes: impl Into<String>) {
        self.cart.update_notes(id, notes);
        self.persist();
    }

    pub fn remove_from_cart(&mut self, id: &ProductId) {
        self.cart.remove(id);
        self.persist();
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.persist();
    }

    /// Subtotal plus the delivery fee when `mode` is [`DeliveryMode::Delivery`].
    pub fn total_price(&self, mode: DeliveryMode) -> Money {
        self.cart.total_price(mode)
    }

    /// Sum of quantities.
    pub fn cart_count(&self) -> u64 {
        self.cart.item_count()
    }

    pub fn pricing(&self, mode: DeliveryMode) -> CartPricing {
        self.cart.calculate_pricing(mode)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn items(&self) -> &[CartLineItem] {
        self.cart.items()
    }

    pub fn get(&self, id: &ProductId) -> Option<&CartLineItem> {
        self.cart.get(id)
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    fn load(&self) -> Cart {
        let Some(cache) = &self.cache else {
            return Cart::new();
        };

        match cache.get::<Cart>(CART_STORAGE_KEY) {
            Ok(Some(cart)) => {
                tracing::debug!(key = CART_STORAGE_KEY, items = cart.unique_item_count(), "loaded cart");
                cart
            }
            Ok(None) => {
                tracing::debug!(key = CART_STORAGE_KEY, "no stored cart");
                Cart::new()
            }
            Err(e) => {
                tracing::warn!(key = CART_STORAGE_KEY, error = %e, "failed to load cart, starting empty");
                Cart::new()
            }
        }
    }

    fn persist(&self) {
        let Some(cache) = &self.cache else {
            return;
        };

        if self.cart.is_empty() {
            match cache.delete(CART_STORAGE_KEY) {
                Ok(()) => tracing::debug!(key = CART_STORAGE_KEY, "cart empty, removed record"),
                Err(e) => {
                    tracing::warn!(key = CART_STORAGE_KEY, error = %e, "failed to remove cart record")
                }
            }
        } else {
            match cache.set(CART_STORAGE_KEY, self.cart.items()) {
                Ok(()) => tracing::debug!(
                    key = CART_STORAGE_KEY,
                    items = self.cart.unique_item_count(),
                    "saved cart"
                ),
                Err(e) => tracing::warn!(key = CART_STORAGE_KEY, error = %e, "failed to save cart"),
            }
        }
    }
}
