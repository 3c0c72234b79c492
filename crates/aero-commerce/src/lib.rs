//! Catalog, cart and pricing logic for the AeroPizza ordering site.
//!
//! - **Catalog**: products and categories as served by the menu
//! - **Cart**: line items, totals, and a [`CartStore`](cart::CartStore) that
//!   mirrors the cart into a durable key-value store
//! - **Payment**: the Pix key configuration used at checkout
//!
//! # Example
//!
//! ```rust
//! use aero_cache::MemoryStore;
//! use aero_commerce::prelude::*;
//!
//! let mut store = CartStore::client(MemoryStore::new());
//! store.add_to_cart(CartProduct {
//!     id: ProductId::new("calabresa"),
//!     name: "Calabresa".to_string(),
//!     description: "Calabresa, cebola e mussarela".to_string(),
//!     price: Money::from_decimal(42.0, Currency::BRL),
//!     image: None,
//!     category: CategoryRef::new("Pizzas"),
//!     preparation_time: 25,
//! });
//!
//! assert_eq!(store.cart_count(), 1);
//! assert_eq!(store.total_price(DeliveryMode::Pickup).display(), "R$42.00");
//! assert_eq!(store.total_price(DeliveryMode::Delivery).display(), "R$50.00");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod payment;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Category, Menu, Product};

    // Cart
    pub use crate::cart::{
        Cart, CartLineItem, CartPricing, CartProduct, CartStore, CategoryRef, DeliveryMode,
        LineItemPricing, CART_STORAGE_KEY,
    };

    // Payment
    pub use crate::payment::PixConfig;
}
